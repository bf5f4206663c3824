//! Error types for guide-gen

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal, run-level failures.
///
/// Schema and variable errors abort the whole run since no editor-specific
/// work is meaningful without a valid model. Adapter and write failures are
/// not represented here; they are scoped to one editor and reported in the
/// per-editor outcome list instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] guide_schema::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] guide_fs::Error),
}

//! Error types for the CLI

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Gen(#[from] guide_gen::Error),

    #[error("{failed} of {total} editors failed")]
    PartialFailure { failed: usize, total: usize },
}

//! Error types for guide-emit

pub type Result<T> = std::result::Result<T, AdapterError>;

/// An editor-specific emission failure.
///
/// Adapter errors are scoped to one editor: the generator collects them
/// per target and keeps processing the remaining editors.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("Emission failed for {editor}: {message}")]
    EmitFailed { editor: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdapterError {
    pub fn emit_failed(editor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EmitFailed {
            editor: editor.into(),
            message: message.into(),
        }
    }
}

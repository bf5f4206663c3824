//! Command (prompt template) type

use serde::{Deserialize, Serialize};

/// A named prompt template, exposed as a slash-command-like entity to
/// editors that support the concept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Command {
    /// Command identifier (e.g., "review")
    pub name: String,
    /// One-line description shown in command pickers
    #[serde(default)]
    pub description: String,
    /// Prompt body; may contain `{{{ NAME }}}` placeholders
    pub prompt: String,
}

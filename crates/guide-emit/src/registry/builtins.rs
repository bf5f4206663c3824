//! Built-in editor registrations
//!
//! Single source of truth for the supported editor set. The catalog is
//! closed: adding an editor means adding an adapter module and one entry
//! here.

use super::{EditorCategory, EditorRegistration};
use crate::editors::{
    ClaudeAdapter, ClineAdapter, CopilotAdapter, CursorAdapter, WindsurfAdapter, ZedAdapter,
};
use std::sync::Arc;

/// Number of built-in editors.
pub const BUILTIN_COUNT: usize = 6;

/// Returns all built-in editor registrations.
pub fn builtin_registrations() -> Vec<EditorRegistration> {
    vec![
        EditorRegistration::new(
            "cursor",
            "Cursor",
            EditorCategory::Ide,
            Arc::new(CursorAdapter::new()),
        ),
        EditorRegistration::new(
            "windsurf",
            "Windsurf",
            EditorCategory::Ide,
            Arc::new(WindsurfAdapter::new()),
        ),
        EditorRegistration::new(
            "zed",
            "Zed",
            EditorCategory::Ide,
            Arc::new(ZedAdapter::new()),
        ),
        EditorRegistration::new(
            "claude",
            "Claude Code",
            EditorCategory::CliAgent,
            Arc::new(ClaudeAdapter::new()),
        ),
        EditorRegistration::new(
            "cline",
            "Cline",
            EditorCategory::Autonomous,
            Arc::new(ClineAdapter::new()),
        ),
        EditorRegistration::new(
            "copilot",
            "GitHub Copilot",
            EditorCategory::Copilot,
            Arc::new(CopilotAdapter::new()),
        ),
    ]
}

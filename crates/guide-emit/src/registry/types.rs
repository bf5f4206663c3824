//! Core types for the editor catalog

use crate::adapter::{Capabilities, EditorAdapter};
use std::sync::Arc;

/// Editor category for filtering and display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCategory {
    /// IDE-based editors (Cursor, Windsurf, Zed)
    Ide,
    /// CLI-based agents (Claude Code)
    CliAgent,
    /// Autonomous coding agents (Cline)
    Autonomous,
    /// Copilot-style assistants (GitHub Copilot)
    Copilot,
}

/// One catalog entry: metadata plus the adapter.
#[derive(Clone)]
pub struct EditorRegistration {
    /// Machine identifier (e.g., "cursor")
    pub slug: &'static str,
    /// Display name (e.g., "Cursor")
    pub name: &'static str,
    /// Category for grouping
    pub category: EditorCategory,
    /// Paths whose presence indicates the editor is already set up
    pub file_patterns: Vec<&'static str>,
    /// The adapter that serializes for this editor
    pub adapter: Arc<dyn EditorAdapter>,
}

impl EditorRegistration {
    pub fn new(
        slug: &'static str,
        name: &'static str,
        category: EditorCategory,
        adapter: Arc<dyn EditorAdapter>,
    ) -> Self {
        let file_patterns = adapter.output_roots();
        Self {
            slug,
            name,
            category,
            file_patterns,
            adapter,
        }
    }

    /// The adapter's declared capability set.
    pub fn capabilities(&self) -> Capabilities {
        self.adapter.capabilities()
    }
}

impl std::fmt::Debug for EditorRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorRegistration")
            .field("slug", &self.slug)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("file_patterns", &self.file_patterns)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editors::CursorAdapter;

    #[test]
    fn test_registration_picks_up_adapter_metadata() {
        let reg = EditorRegistration::new(
            "cursor",
            "Cursor",
            EditorCategory::Ide,
            Arc::new(CursorAdapter::new()),
        );

        assert_eq!(reg.slug, "cursor");
        assert_eq!(reg.file_patterns, vec![".cursor"]);
        assert!(reg.capabilities().emits_rules);
        assert!(!reg.capabilities().emits_commands);
    }
}

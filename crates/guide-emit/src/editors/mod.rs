//! Built-in editor adapters
//!
//! One module per supported editor. Each adapter owns the knowledge of that
//! editor's file layout: where rule content lives, how path scope and
//! always-apply are represented, and whether commands or external tools
//! have an equivalent concept.

pub mod claude;
pub mod cline;
pub mod copilot;
pub mod cursor;
pub mod windsurf;
pub mod zed;

pub use claude::ClaudeAdapter;
pub use cline::ClineAdapter;
pub use copilot::CopilotAdapter;
pub use cursor::CursorAdapter;
pub use windsurf::WindsurfAdapter;
pub use zed::ZedAdapter;

#[cfg(test)]
pub(crate) mod test_support {
    use guide_schema::{ResolvedBlock, Scope};

    pub fn global_block(source: &str, text: &str) -> ResolvedBlock {
        ResolvedBlock {
            text: text.to_string(),
            scope: Scope::Global,
            always_apply: source == "root",
            source_name: source.to_string(),
        }
    }

    pub fn scoped_block(source: &str, text: &str, globs: &[&str]) -> ResolvedBlock {
        ResolvedBlock {
            text: text.to_string(),
            scope: Scope::Globs(globs.iter().map(|g| g.to_string()).collect()),
            always_apply: false,
            source_name: source.to_string(),
        }
    }
}

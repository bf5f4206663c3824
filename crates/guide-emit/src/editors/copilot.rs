//! GitHub Copilot adapter
//!
//! Global-scoped blocks aggregate into `.github/copilot-instructions.md`.
//! Path-scoped blocks each become `.github/instructions/<name>.instructions.md`
//! with an `applyTo` frontmatter key; an always-apply scoped block gets
//! `applyTo: "**"` since Copilot has no dedicated flag for it.

use crate::adapter::{Capabilities, EditorAdapter, EmitInput};
use crate::artifact::{FileArtifact, StemAllocator};
use crate::error::Result;
use crate::frontmatter::{Frontmatter, join_globs};

const INSTRUCTIONS_FILE: &str = ".github/copilot-instructions.md";

#[derive(Debug, Default)]
pub struct CopilotAdapter;

impl CopilotAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EditorAdapter for CopilotAdapter {
    fn slug(&self) -> &'static str {
        "copilot"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::rules_only()
    }

    fn output_roots(&self) -> Vec<&'static str> {
        vec![".github/copilot-instructions.md", ".github/instructions"]
    }

    fn emit(&self, input: &EmitInput<'_>) -> Result<Vec<FileArtifact>> {
        let mut artifacts = Vec::new();

        let global_sections: Vec<&str> = input
            .blocks
            .iter()
            .filter(|b| b.scope.is_global())
            .map(|b| b.text.as_str())
            .collect();

        if !global_sections.is_empty() {
            let mut body = global_sections.join("\n\n");
            if !body.ends_with('\n') {
                body.push('\n');
            }
            artifacts.push(FileArtifact::text(INSTRUCTIONS_FILE, body));
        }

        let mut stems = StemAllocator::new();
        for block in input.blocks.iter().filter(|b| !b.scope.is_global()) {
            let apply_to = if block.always_apply {
                "**".to_string()
            } else {
                join_globs(block.scope.globs())
            };

            let path = format!(
                ".github/instructions/{}.instructions.md",
                stems.allocate(&block.source_name)
            );
            let header = Frontmatter::new().quoted("applyTo", &apply_to);
            artifacts.push(FileArtifact::text(path, header.render(&block.text)));
        }

        Ok(artifacts)
    }
}

//! Zed adapter
//!
//! Zed reads a single `.rules` file at the project root and has no
//! path-scoping concept, so every block aggregates into that one file;
//! scoped blocks are prefixed with a plain-text applicability note.

use crate::adapter::{Capabilities, EditorAdapter, EmitInput};
use crate::artifact::FileArtifact;
use crate::error::Result;
use crate::frontmatter::join_globs;

const RULES_FILE: &str = ".rules";

#[derive(Debug, Default)]
pub struct ZedAdapter;

impl ZedAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EditorAdapter for ZedAdapter {
    fn slug(&self) -> &'static str {
        "zed"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::rules_only()
    }

    fn output_roots(&self) -> Vec<&'static str> {
        vec![RULES_FILE]
    }

    fn emit(&self, input: &EmitInput<'_>) -> Result<Vec<FileArtifact>> {
        if input.blocks.is_empty() {
            return Ok(Vec::new());
        }

        let mut sections = Vec::with_capacity(input.blocks.len());
        for block in input.blocks {
            if block.scope.is_global() {
                sections.push(block.text.clone());
            } else {
                sections.push(format!(
                    "Applies to {}:\n\n{}",
                    join_globs(block.scope.globs()),
                    block.text
                ));
            }
        }

        let mut body = sections.join("\n\n");
        if !body.ends_with('\n') {
            body.push('\n');
        }

        Ok(vec![FileArtifact::text(RULES_FILE, body)])
    }
}

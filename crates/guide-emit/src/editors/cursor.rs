//! Cursor adapter
//!
//! Emits one `.cursor/rules/<name>.mdc` fragment per resolved block. Each
//! fragment carries a frontmatter header with `description`, `globs`
//! (comma-separated, empty for global scope), and `alwaysApply`.

use crate::adapter::{Capabilities, EditorAdapter, EmitInput};
use crate::artifact::{FileArtifact, StemAllocator};
use crate::error::Result;
use crate::frontmatter::{Frontmatter, join_globs};

#[derive(Debug, Default)]
pub struct CursorAdapter;

impl CursorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EditorAdapter for CursorAdapter {
    fn slug(&self) -> &'static str {
        "cursor"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::rules_only()
    }

    fn output_roots(&self) -> Vec<&'static str> {
        vec![".cursor"]
    }

    fn emit(&self, input: &EmitInput<'_>) -> Result<Vec<FileArtifact>> {
        let mut artifacts = Vec::with_capacity(input.blocks.len());
        let mut stems = StemAllocator::new();

        for block in input.blocks {
            let path = format!(".cursor/rules/{}.mdc", stems.allocate(&block.source_name));
            let header = Frontmatter::new()
                .quoted("description", &block.source_name)
                .entry("globs", join_globs(block.scope.globs()))
                .flag("alwaysApply", block.always_apply);

            artifacts.push(FileArtifact::text(path, header.render(&block.text)));
        }

        Ok(artifacts)
    }
}

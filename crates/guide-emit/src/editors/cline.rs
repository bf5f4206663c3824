//! Cline adapter
//!
//! Emits one `.clinerules/<name>.md` file per resolved block. Cline reads
//! the whole directory as plain markdown, so scope metadata is carried in
//! an HTML comment header that the editor ignores but humans can read.

use crate::adapter::{Capabilities, EditorAdapter, EmitInput};
use crate::artifact::{FileArtifact, StemAllocator};
use crate::error::Result;
use crate::frontmatter::join_globs;

#[derive(Debug, Default)]
pub struct ClineAdapter;

impl ClineAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EditorAdapter for ClineAdapter {
    fn slug(&self) -> &'static str {
        "cline"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::rules_only()
    }

    fn output_roots(&self) -> Vec<&'static str> {
        vec![".clinerules"]
    }

    fn emit(&self, input: &EmitInput<'_>) -> Result<Vec<FileArtifact>> {
        let mut artifacts = Vec::with_capacity(input.blocks.len());
        let mut stems = StemAllocator::new();

        for block in input.blocks {
            let path = format!(".clinerules/{}.md", stems.allocate(&block.source_name));

            let content = if block.scope.is_global() {
                let mut text = block.text.clone();
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                text
            } else {
                format!(
                    "<!-- scope: {} -->\n\n{}\n",
                    join_globs(block.scope.globs()),
                    block.text.trim_end()
                )
            };

            artifacts.push(FileArtifact::text(path, content));
        }

        Ok(artifacts)
    }
}

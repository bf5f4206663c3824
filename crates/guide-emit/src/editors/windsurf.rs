//! Windsurf adapter
//!
//! Emits `.windsurf/rules/<name>.md` fragments. Windsurf's rule format
//! uses a `trigger` frontmatter key: `always_on` for unconditional rules,
//! `glob` plus a `globs` list for path-scoped ones.

use crate::adapter::{Capabilities, EditorAdapter, EmitInput};
use crate::artifact::{FileArtifact, StemAllocator};
use crate::error::Result;
use crate::frontmatter::{Frontmatter, join_globs};

#[derive(Debug, Default)]
pub struct WindsurfAdapter;

impl WindsurfAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EditorAdapter for WindsurfAdapter {
    fn slug(&self) -> &'static str {
        "windsurf"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::rules_only()
    }

    fn output_roots(&self) -> Vec<&'static str> {
        vec![".windsurf"]
    }

    fn emit(&self, input: &EmitInput<'_>) -> Result<Vec<FileArtifact>> {
        let mut artifacts = Vec::with_capacity(input.blocks.len());
        let mut stems = StemAllocator::new();

        for block in input.blocks {
            let path = format!(".windsurf/rules/{}.md", stems.allocate(&block.source_name));

            let header = if block.always_apply || block.scope.is_global() {
                Frontmatter::new().entry("trigger", "always_on")
            } else {
                Frontmatter::new()
                    .entry("trigger", "glob")
                    .entry("globs", join_globs(block.scope.globs()))
            };

            artifacts.push(FileArtifact::text(path, header.render(&block.text)));
        }

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editors::test_support::{global_block, scoped_block};
    use guide_schema::VariableMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_global_block_is_always_on() {
        let blocks = vec![global_block("root", "# Guidelines")];
        let vars = VariableMap::default();
        let input = EmitInput {
            blocks: &blocks,
            commands: &[],
            external_tools: &[],
            variables: &vars,
        };

        let artifacts = WindsurfAdapter::new().emit(&input).unwrap();
        assert_eq!(artifacts[0].relative_path, ".windsurf/rules/root.md");
        assert_eq!(
            artifacts[0].content_str().unwrap(),
            "---\ntrigger: always_on\n---\n\n# Guidelines\n"
        );
    }

    #[test]
    fn test_scoped_block_uses_glob_trigger() {
        let blocks = vec![scoped_block("ts", "Use strict types", &["**/*.ts"])];
        let vars = VariableMap::default();
        let input = EmitInput {
            blocks: &blocks,
            commands: &[],
            external_tools: &[],
            variables: &vars,
        };

        let artifacts = WindsurfAdapter::new().emit(&input).unwrap();
        let content = artifacts[0].content_str().unwrap();
        assert!(content.contains("trigger: glob"));
        assert!(content.contains("globs: **/*.ts"));
    }
}

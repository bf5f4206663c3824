//! Claude Code adapter
//!
//! The only full-capability adapter: rules aggregate into `CLAUDE.md`
//! (scoped blocks annotated with their globs), commands become
//! `.claude/commands/<name>.md` prompt files, and external tool
//! declarations serialize to `.mcp.json`.

use crate::adapter::{Capabilities, EditorAdapter, EmitInput};
use crate::artifact::{FileArtifact, StemAllocator};
use crate::error::Result;
use crate::frontmatter::{Frontmatter, join_globs};
use serde_json::json;
use std::collections::BTreeMap;

const CLAUDE_MD: &str = "CLAUDE.md";
const MCP_FILE: &str = ".mcp.json";

#[derive(Debug, Default)]
pub struct ClaudeAdapter;

impl ClaudeAdapter {
    pub fn new() -> Self {
        Self
    }

    fn render_claude_md(input: &EmitInput<'_>) -> String {
        let mut out = String::new();

        for (i, block) in input.blocks.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }

            if block.scope.is_global() {
                out.push_str(&block.text);
            } else {
                out.push_str(&format!(
                    "## {} (applies to: {})\n\n{}",
                    block.source_name,
                    join_globs(block.scope.globs()),
                    block.text
                ));
            }
        }

        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

impl EditorAdapter for ClaudeAdapter {
    fn slug(&self) -> &'static str {
        "claude"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::full()
    }

    fn output_roots(&self) -> Vec<&'static str> {
        vec![CLAUDE_MD, ".claude", MCP_FILE]
    }

    fn emit(&self, input: &EmitInput<'_>) -> Result<Vec<FileArtifact>> {
        let mut artifacts = Vec::new();

        if !input.blocks.is_empty() {
            artifacts.push(FileArtifact::text(CLAUDE_MD, Self::render_claude_md(input)));
        }

        let mut stems = StemAllocator::new();
        for command in input.commands {
            let path = format!(".claude/commands/{}.md", stems.allocate(&command.name));
            let mut body = if command.description.is_empty() {
                command.prompt.clone()
            } else {
                Frontmatter::new()
                    .quoted("description", &command.description)
                    .render(&command.prompt)
            };
            if !body.ends_with('\n') {
                body.push('\n');
            }
            artifacts.push(FileArtifact::text(path, body));
        }

        if !input.external_tools.is_empty() {
            let servers: BTreeMap<&str, serde_json::Value> = input
                .external_tools
                .iter()
                .map(|tool| {
                    (
                        tool.name.as_str(),
                        json!({
                            "command": tool.command,
                            "args": tool.args,
                            "env": tool.env,
                        }),
                    )
                })
                .collect();

            let document = json!({ "mcpServers": servers });
            let mut rendered = serde_json::to_string_pretty(&document)?;
            rendered.push('\n');
            artifacts.push(FileArtifact::text(MCP_FILE, rendered));
        }

        Ok(artifacts)
    }
}

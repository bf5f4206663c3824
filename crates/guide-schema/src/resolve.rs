//! Document resolution
//!
//! Flattens a configuration into the ordered list of content blocks the
//! adapters consume. The root `content` field becomes the first block
//! (global scope, always applied); each document follows in declaration
//! order. Order is significant: adapters that concatenate blocks rely on it.

use crate::error::SchemaIssue;
use crate::schema::{Command, Configuration, ExternalTool};
use crate::vars::{VariableMap, substitute};
use std::collections::BTreeSet;

/// Source name used for the block derived from the root `content` field.
pub const ROOT_SOURCE: &str = "root";

/// Applicability scope of a resolved block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Applies everywhere.
    Global,
    /// Applies to paths matching these globs (non-empty).
    Globs(Vec<String>),
}

impl Scope {
    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }

    /// The glob patterns, or an empty slice for global scope.
    pub fn globs(&self) -> &[String] {
        match self {
            Scope::Global => &[],
            Scope::Globs(globs) => globs,
        }
    }
}

/// A content block after variable substitution, tagged with its scope.
///
/// Derived per generation run and never cached across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBlock {
    /// Content after substitution
    pub text: String,
    /// Where the block applies
    pub scope: Scope,
    /// Emit unconditionally regardless of glob matching
    pub always_apply: bool,
    /// Originating document name, or [`ROOT_SOURCE`]
    pub source_name: String,
}

/// Resolve the configuration's content into ordered blocks.
///
/// Duplicate document names are detected here, in the context of one
/// configuration being resolved as a whole, and yield zero blocks. Two
/// documents with overlapping glob scopes are both emitted, in declaration
/// order; no exclusivity is imposed.
pub fn resolve_blocks(
    config: &Configuration,
    vars: &VariableMap,
) -> Result<Vec<ResolvedBlock>, Vec<SchemaIssue>> {
    let mut issues = Vec::new();
    let mut seen = BTreeSet::new();

    for doc in &config.documents {
        if !seen.insert(doc.name.as_str()) {
            let issue = SchemaIssue::DuplicateDocumentName {
                name: doc.name.clone(),
            };
            if !issues.contains(&issue) {
                issues.push(issue);
            }
        }
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    let mut blocks = Vec::with_capacity(config.documents.len() + 1);

    blocks.push(ResolvedBlock {
        text: substitute(&config.content, vars),
        scope: Scope::Global,
        always_apply: true,
        source_name: ROOT_SOURCE.to_string(),
    });

    for doc in &config.documents {
        let scope = if doc.file_globs.is_empty() {
            Scope::Global
        } else {
            Scope::Globs(doc.file_globs.clone())
        };

        blocks.push(ResolvedBlock {
            text: substitute(&doc.content, vars),
            scope,
            always_apply: doc.always_apply,
            source_name: doc.name.clone(),
        });
    }

    Ok(blocks)
}

/// Substitute placeholders in command prompts.
pub fn resolve_commands(commands: &[Command], vars: &VariableMap) -> Vec<Command> {
    commands
        .iter()
        .map(|cmd| Command {
            name: cmd.name.clone(),
            description: cmd.description.clone(),
            prompt: substitute(&cmd.prompt, vars),
        })
        .collect()
}

/// Substitute placeholders in external tool arguments and env values.
pub fn resolve_external_tools(tools: &[ExternalTool], vars: &VariableMap) -> Vec<ExternalTool> {
    tools
        .iter()
        .map(|tool| ExternalTool {
            name: tool.name.clone(),
            command: tool.command.clone(),
            args: tool.args.iter().map(|a| substitute(a, vars)).collect(),
            env: tool
                .env
                .iter()
                .map(|(k, v)| (k.clone(), substitute(v, vars)))
                .collect(),
        })
        .collect()
}

//! EditorAdapter trait and emission input types

use crate::artifact::FileArtifact;
use crate::error::Result;
use guide_schema::{Command, ExternalTool, ResolvedBlock, VariableMap};

/// What an adapter knows how to serialize.
///
/// An adapter that lacks a capability omits that output instead of
/// erroring; the generator records the skip so callers can report partial
/// coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Emits rule/instruction files from resolved content blocks
    pub emits_rules: bool,
    /// Emits slash-command-like prompt templates
    pub emits_commands: bool,
    /// Emits external tool (e.g., MCP server) declarations
    pub emits_external_tools: bool,
}

impl Capabilities {
    /// Rules only; the common case.
    pub fn rules_only() -> Self {
        Self {
            emits_rules: true,
            ..Self::default()
        }
    }

    /// All three categories.
    pub fn full() -> Self {
        Self {
            emits_rules: true,
            emits_commands: true,
            emits_external_tools: true,
        }
    }
}

/// A content category an adapter declined to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedCategory {
    Commands,
    ExternalTools,
}

impl std::fmt::Display for SkippedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkippedCategory::Commands => write!(f, "commands"),
            SkippedCategory::ExternalTools => write!(f, "external tools"),
        }
    }
}

/// The shared immutable model an adapter reads.
///
/// Everything here is resolved: variables are substituted and blocks carry
/// their final scope. Adapters consume this read-only.
#[derive(Debug, Clone, Copy)]
pub struct EmitInput<'a> {
    /// Ordered content blocks; the root block is first
    pub blocks: &'a [ResolvedBlock],
    /// Prompt templates with substituted prompts
    pub commands: &'a [Command],
    /// External tool declarations with substituted args/env
    pub external_tools: &'a [ExternalTool],
    /// The resolved variable map, for adapters that surface variables
    pub variables: &'a VariableMap,
}

/// A target editor's serializer.
///
/// Implementations must be deterministic: identical inputs produce
/// byte-identical artifacts. They must also be pure; file I/O belongs to
/// the generator's write step.
pub trait EditorAdapter: Send + Sync {
    /// Machine identifier (e.g., "cursor")
    fn slug(&self) -> &'static str;

    /// What this adapter can serialize.
    fn capabilities(&self) -> Capabilities;

    /// Top-level paths this adapter writes under, relative to the output
    /// root. Used for the registry's disjointness invariant and for
    /// presence detection.
    fn output_roots(&self) -> Vec<&'static str>;

    /// Serialize the resolved model into this editor's file layout.
    fn emit(&self, input: &EmitInput<'_>) -> Result<Vec<FileArtifact>>;
}

/// Categories present in the input that the adapter will not emit.
pub fn skipped_categories(caps: Capabilities, input: &EmitInput<'_>) -> Vec<SkippedCategory> {
    let mut skipped = Vec::new();
    if !caps.emits_commands && !input.commands.is_empty() {
        skipped.push(SkippedCategory::Commands);
    }
    if !caps.emits_external_tools && !input.external_tools.is_empty() {
        skipped.push(SkippedCategory::ExternalTools);
    }
    skipped
}

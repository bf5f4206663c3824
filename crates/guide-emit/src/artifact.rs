//! Output artifact types

use std::collections::BTreeSet;

/// How the generator applies an artifact to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Write only if the file does not already exist.
    Create,
    /// Replace the file unconditionally.
    Overwrite,
    /// Append to the file, creating it if absent.
    AppendMerge,
}

/// One serialized output file produced by an adapter.
///
/// Paths are relative to the output root, forward-slash separated.
/// Artifacts are created during adapter invocation and never mutated
/// afterwards; the generator owns persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    /// Path relative to the output root (e.g., ".cursor/rules/ts.mdc")
    pub relative_path: String,
    /// Serialized file content
    pub content: Vec<u8>,
    /// Write policy for this artifact
    pub mode: FileMode,
}

impl FileArtifact {
    /// Create a text artifact that overwrites any existing file.
    pub fn text(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into().into_bytes(),
            mode: FileMode::Overwrite,
        }
    }

    /// Set the write mode (builder pattern).
    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    /// View the content as UTF-8 text, if it is valid UTF-8.
    pub fn content_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Turn a block or command name into a safe file name stem.
///
/// Lowercases and replaces anything outside `[a-z0-9._-]` with `-`. The
/// mapping is deterministic so re-generation is stable.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if stem.is_empty() { "unnamed".to_string() } else { stem }
}

/// Hands out collision-free file name stems within one emit call.
///
/// Sanitization can map distinct names to the same stem (`api/v2` and
/// `api-v2` both become `api-v2`); without disambiguation the later
/// artifact would silently overwrite the earlier one. The first claimant
/// keeps the plain stem, later ones get a numeric suffix, so the
/// allocation stays deterministic for a given name order.
#[derive(Debug, Default)]
pub struct StemAllocator {
    taken: BTreeSet<String>,
}

impl StemAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitize `name` into a stem not handed out before.
    pub fn allocate(&mut self, name: &str) -> String {
        let base = file_stem(name);
        let mut candidate = base.clone();
        let mut n = 2;
        while !self.taken.insert(candidate.clone()) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        candidate
    }
}

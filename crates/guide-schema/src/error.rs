//! Error types for guide-schema

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] guide_fs::Error),

    #[error("Failed to parse YAML at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Schema validation failed:\n{}", format_lines(.0))]
    Schema(Vec<SchemaIssue>),

    #[error("Variable resolution failed:\n{}", format_lines(.0))]
    Variable(Vec<VariableIssue>),
}

fn format_lines(issues: &[impl std::fmt::Display]) -> String {
    issues
        .iter()
        .map(|i| format!("  - {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single schema-level validation finding.
///
/// Schema issues are fatal for the run but collected exhaustively: the
/// loader and document resolver report every finding in one pass instead of
/// stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaIssue {
    #[error("schema_version is missing or empty")]
    MissingVersion,

    #[error("invalid schema_version {value:?}: {message}")]
    InvalidVersion { value: String, message: String },

    #[error("unsupported schema_version {version} (supported major versions: 1, 2, 3)")]
    UnsupportedVersion { version: String },

    #[error("document root must be a mapping")]
    NotAMapping,

    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` has the wrong shape: expected {expected}")]
    WrongType { field: String, expected: String },

    #[error("document at index {index} has an empty name")]
    EmptyDocumentName { index: usize },

    #[error("duplicate document name {name:?}")]
    DuplicateDocumentName { name: String },
}

impl SchemaIssue {
    pub fn wrong_type(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::WrongType {
            field: field.into(),
            expected: expected.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// A single variable-level validation finding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariableIssue {
    #[error("undefined variable {name:?} referenced in {location}")]
    Undefined { name: String, location: String },

    #[error("malformed variable override {input:?}: expected NAME=value")]
    MalformedOverride { input: String },

    #[error("invalid variable name {name:?} in override")]
    InvalidOverrideName { name: String },
}

//! Editor adapter catalog for Guidebook.
//!
//! This crate maps the resolved in-memory model onto each supported
//! editor's file layout. The catalog is closed: every supported editor has
//! a concrete adapter here, registered in [`registry::builtin_registrations`].
//!
//! Adapters are pure and deterministic. They never touch the filesystem;
//! they return ordered [`FileArtifact`]s that the generator writes (or
//! diffs in dry-run mode). Identical inputs always produce byte-identical
//! artifacts, which is what makes re-generation idempotent.

pub mod adapter;
pub mod artifact;
pub mod editors;
pub mod error;
pub mod frontmatter;
pub mod registry;

pub use adapter::{Capabilities, EditorAdapter, EmitInput, SkippedCategory};
pub use artifact::{FileArtifact, FileMode};
pub use error::{AdapterError, Result};
pub use registry::{
    BUILTIN_COUNT, EditorCategory, EditorRegistration, EditorRegistry, builtin_registrations,
};

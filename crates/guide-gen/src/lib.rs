//! Generation orchestrator for Guidebook.
//!
//! The [`Generator`] drives the pipeline end to end: load the document,
//! validate and normalize the schema version, resolve variables, resolve
//! documents, invoke the requested editor adapters, and either write the
//! resulting artifacts or compute a dry-run preview.
//!
//! Everything before the write step is pure computation over in-memory
//! structures; validation and preview never touch the filesystem. A fatal
//! schema or variable error aborts before any editor work; an adapter or
//! write failure is scoped to its editor and reported in the per-editor
//! result list.

pub mod diff;
pub mod error;
pub mod generator;
pub mod state;

pub use diff::unified_diff;
pub use error::{Error, Result};
pub use generator::{
    ArtifactPreview, EditorOutcome, EditorStatus, GenerateOptions, GenerateRequest,
    GenerationReport, Generator,
};
pub use state::GenState;

//! Schema model and resolution pipeline for Guidebook.
//!
//! This crate owns the canonical in-memory representation of a guidance
//! document and the pure computation stages that precede emission:
//!
//! 1. **Loading** - parse a YAML document and normalize any supported
//!    schema generation (v1.x, v2.x, v3.x) into one [`Configuration`] shape
//!    ([`loader`], [`version`]).
//! 2. **Variable resolution** - merge override, environment, and default
//!    variable sources by precedence and substitute `{{{ NAME }}}`
//!    placeholders ([`vars`]).
//! 3. **Document resolution** - flatten the root content block and every
//!    scoped document into an ordered list of [`ResolvedBlock`]s
//!    ([`resolve`]).
//!
//! Validation failures are collected exhaustively so a single run surfaces
//! every fix the document author needs.

pub mod error;
pub mod loader;
pub mod resolve;
pub mod schema;
pub mod vars;
pub mod version;

pub use error::{Error, Result, SchemaIssue, VariableIssue};
pub use loader::{load_configuration, normalize};
pub use resolve::{
    ROOT_SOURCE, ResolvedBlock, Scope, resolve_blocks, resolve_commands, resolve_external_tools,
};
pub use schema::{Command, Configuration, Document, ExternalTool, Metadata};
pub use vars::{VariableMap, parse_override, resolve as resolve_variables, scan_missing, substitute};
pub use version::{SUPPORTED_MAJORS, check_version};

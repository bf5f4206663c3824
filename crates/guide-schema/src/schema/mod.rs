//! Canonical configuration types
//!
//! Every supported schema generation of the input document is normalized
//! into the [`Configuration`] shape defined here; downstream stages have no
//! version awareness.

pub mod command;
pub mod config;
pub mod document;
pub mod tool;

pub use command::Command;
pub use config::{Configuration, Metadata};
pub use document::Document;
pub use tool::ExternalTool;

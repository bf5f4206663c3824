//! External tool declaration type

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named process launch specification for an external tool (e.g., an MCP
/// server). Argument and environment values may reference variables.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExternalTool {
    /// Tool identifier (e.g., "filesystem")
    pub name: String,
    /// Executable to launch
    pub command: String,
    /// Arguments passed to the executable
    #[serde(default)]
    pub args: Vec<String>,
    /// Environment variables set for the process
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

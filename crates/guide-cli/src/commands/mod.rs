//! Command implementations

pub mod generate;
pub mod list;
pub mod validate;

use crate::error::Result;
use guide_schema::{Error as ModelError, VariableIssue, parse_override};
use std::collections::BTreeMap;

/// Prefix for environment-derived variable values.
pub const ENV_VAR_PREFIX: &str = "GUIDE_VAR_";

/// Parse every `-V NAME=value` flag, collecting all malformed entries so
/// one run reports every fix needed.
pub fn parse_overrides(raw: &[String]) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    let mut issues: Vec<VariableIssue> = Vec::new();

    for entry in raw {
        match parse_override(entry) {
            Ok(pair) => pairs.push(pair),
            Err(issue) => issues.push(issue),
        }
    }

    if issues.is_empty() {
        Ok(pairs)
    } else {
        Err(guide_gen::Error::Model(ModelError::Variable(issues)).into())
    }
}

/// Collect `GUIDE_VAR_*` process environment variables into the
/// environment source map, with the prefix stripped.
pub fn environment_variables() -> BTreeMap<String, String> {
    std::env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix(ENV_VAR_PREFIX)
                .map(|name| (name.to_string(), value))
        })
        .collect()
}

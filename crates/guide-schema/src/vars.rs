//! Variable resolution and placeholder substitution
//!
//! Variables come from three sources, merged by precedence (highest wins):
//! explicit overrides, an environment-derived map, and the configuration
//! file's defaults. The resolved [`VariableMap`] is an immutable value
//! threaded explicitly through document resolution and each adapter call;
//! there is no process-wide variable state.
//!
//! Placeholders use the triple-brace form `{{{ NAME }}}`. Substitution is a
//! single left-to-right pass: a substituted value is never re-scanned, so
//! expansion loops are impossible by construction.

use crate::error::VariableIssue;
use crate::schema::Configuration;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}\}").expect("placeholder regex is valid")
});

static VAR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name regex is valid"));

/// Fully resolved variable values, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    values: BTreeMap<String, String>,
}

impl VariableMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over name/value pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for VariableMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parse a `NAME=value` override string.
pub fn parse_override(input: &str) -> Result<(String, String), VariableIssue> {
    let Some((name, value)) = input.split_once('=') else {
        return Err(VariableIssue::MalformedOverride {
            input: input.to_string(),
        });
    };

    let name = name.trim();
    if !VAR_NAME.is_match(name) {
        return Err(VariableIssue::InvalidOverrideName {
            name: name.to_string(),
        });
    }

    Ok((name.to_string(), value.to_string()))
}

/// Merge variable sources by precedence: override > environment > default.
pub fn resolve(
    defaults: &BTreeMap<String, String>,
    overrides: &[(String, String)],
    environment: &BTreeMap<String, String>,
) -> VariableMap {
    let mut values = defaults.clone();

    for (name, value) in environment {
        values.insert(name.clone(), value.clone());
    }

    for (name, value) in overrides {
        values.insert(name.clone(), value.clone());
    }

    VariableMap { values }
}

/// Scan every text field of the configuration for placeholders that have no
/// resolved value.
///
/// Runs before substitution and reports all missing variables found, so one
/// run surfaces every fix needed. Each (name, location) pair is reported
/// once.
pub fn scan_missing(config: &Configuration, vars: &VariableMap) -> Vec<VariableIssue> {
    let mut issues = Vec::new();

    for (location, text) in config.text_fields() {
        for capture in PLACEHOLDER.captures_iter(text) {
            let name = &capture[1];
            if !vars.contains(name) {
                let issue = VariableIssue::Undefined {
                    name: name.to_string(),
                    location: location.clone(),
                };
                if !issues.contains(&issue) {
                    issues.push(issue);
                }
            }
        }
    }

    issues
}

/// Replace every defined placeholder in `text` exactly once.
///
/// A placeholder with no resolved value is left untouched; callers are
/// expected to run [`scan_missing`] first, which makes that case a
/// validation failure before any substitution happens.
pub fn substitute(text: &str, vars: &VariableMap) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &regex::Captures<'_>| {
            match vars.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

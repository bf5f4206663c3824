//! YAML loading and schema-version normalization
//!
//! The loader parses a raw YAML document and maps whichever schema
//! generation it carries into the canonical [`Configuration`] shape:
//!
//! - **v1.x** - `schema_version`, `metadata`, `content`, `variables`
//! - **v2.x** - adds `documents` with `file_globs` / `always_apply`
//! - **v3.x** - adds `commands` and `external_tools`
//!
//! Fields introduced by later generations default to empty when loading an
//! older document; the file on disk is never upgraded. Unknown top-level
//! keys are preserved as opaque passthrough data rather than rejected, so
//! additive fields from future minor versions do not break loading.
//!
//! Validation is collect-don't-fail-fast: every finding in the document is
//! reported in one pass.

use crate::error::{Error, Result, SchemaIssue};
use crate::schema::{Command, Configuration, Document, ExternalTool, Metadata};
use crate::version;
use guide_fs::NormalizedPath;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Load and normalize a configuration document from disk.
pub fn load_configuration(path: &NormalizedPath) -> Result<Configuration> {
    let text = guide_fs::io::read_text(path)?;
    let value: Value = serde_yaml::from_str(&text).map_err(|e| Error::Parse {
        path: path.to_native(),
        message: e.to_string(),
    })?;
    normalize(value).map_err(Error::Schema)
}

/// Normalize a raw parsed document into a [`Configuration`].
///
/// Returns every schema issue found, not just the first.
pub fn normalize(value: Value) -> std::result::Result<Configuration, Vec<SchemaIssue>> {
    let Value::Mapping(mut map) = value else {
        return Err(vec![SchemaIssue::NotAMapping]);
    };

    let mut issues = Vec::new();

    let schema_version = match take(&mut map, "schema_version") {
        Some(Value::String(s)) => match version::check_version(&s) {
            Ok(v) => Some(v),
            Err(issue) => {
                issues.push(issue);
                None
            }
        },
        Some(_) => {
            issues.push(SchemaIssue::wrong_type(
                "schema_version",
                "a semantic version string",
            ));
            None
        }
        None => {
            issues.push(SchemaIssue::MissingVersion);
            None
        }
    };

    let content = match take(&mut map, "content") {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => {
            issues.push(SchemaIssue::missing_field("content"));
            String::new()
        }
        Some(_) => {
            issues.push(SchemaIssue::wrong_type("content", "a text block"));
            String::new()
        }
    };

    let metadata = take(&mut map, "metadata")
        .and_then(|v| from_value::<Metadata>(v, "metadata", "a metadata mapping", &mut issues))
        .unwrap_or_default();

    let variables = take(&mut map, "variables")
        .and_then(|v| {
            from_value::<BTreeMap<String, String>>(
                v,
                "variables",
                "a mapping of variable names to default values",
                &mut issues,
            )
        })
        .unwrap_or_default();

    // Generation gating: when the version is unknown the document already
    // failed validation, so read the widest shape to surface any further
    // issues in the same pass.
    let documents_supported = schema_version.as_ref().is_none_or(version::has_documents);
    let commands_supported = schema_version.as_ref().is_none_or(version::has_commands);

    let documents = if documents_supported {
        take(&mut map, "documents")
            .and_then(|v| {
                from_value::<Vec<Document>>(v, "documents", "a list of documents", &mut issues)
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    for (index, doc) in documents.iter().enumerate() {
        if doc.name.trim().is_empty() {
            issues.push(SchemaIssue::EmptyDocumentName { index });
        }
    }

    let commands = if commands_supported {
        take(&mut map, "commands")
            .and_then(|v| {
                from_value::<Vec<Command>>(v, "commands", "a list of commands", &mut issues)
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let external_tools = if commands_supported {
        take(&mut map, "external_tools")
            .and_then(|v| {
                from_value::<Vec<ExternalTool>>(
                    v,
                    "external_tools",
                    "a list of external tool declarations",
                    &mut issues,
                )
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    // Whatever remains is passthrough: unknown keys, or keys this document's
    // generation does not define.
    let extra: BTreeMap<String, Value> = map
        .into_iter()
        .map(|(k, v)| (key_to_string(&k), v))
        .collect();

    if !extra.is_empty() {
        tracing::debug!(keys = ?extra.keys().collect::<Vec<_>>(), "preserved passthrough keys");
    }

    match schema_version {
        Some(schema_version) if issues.is_empty() => Ok(Configuration {
            schema_version,
            metadata,
            content,
            documents,
            variables,
            commands,
            external_tools,
            extra,
        }),
        _ => Err(issues),
    }
}

fn take(map: &mut Mapping, key: &str) -> Option<Value> {
    map.remove(Value::String(key.to_string()))
}

fn from_value<T: serde::de::DeserializeOwned>(
    value: Value,
    field: &str,
    expected: &str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_yaml::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            issues.push(SchemaIssue::wrong_type(field, expected));
            None
        }
    }
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(yaml: &str) -> std::result::Result<Configuration, Vec<SchemaIssue>> {
        normalize(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_normalize_v3_full_document() {
        let config = parse(
            r##"
schema_version: "3.1.0"
metadata:
  title: Acme guidance
  tags: [backend]
content: "# Guidelines"
documents:
  - name: ts
    content: Use strict types
    file_globs: "**/*.ts"
variables:
  ORG: acme
commands:
  - name: review
    prompt: Review the diff
external_tools:
  - name: filesystem
    command: npx
    args: ["-y", "server-filesystem"]
"##,
        )
        .unwrap();

        assert_eq!(config.schema_version.to_string(), "3.1.0");
        assert_eq!(config.metadata.title.as_deref(), Some("Acme guidance"));
        assert_eq!(config.documents.len(), 1);
        assert_eq!(config.documents[0].file_globs, vec!["**/*.ts"]);
        assert_eq!(config.commands.len(), 1);
        assert_eq!(config.external_tools.len(), 1);
        assert_eq!(config.variables.get("ORG").map(String::as_str), Some("acme"));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_normalize_v1_document_defaults_later_fields() {
        let config = parse(
            r#"
schema_version: "1.0.0"
content: "Keep functions small."
variables:
  ORG: acme
"#,
        )
        .unwrap();

        assert!(config.documents.is_empty());
        assert!(config.commands.is_empty());
        assert!(config.external_tools.is_empty());
    }

    #[test]
    fn test_v1_document_treats_v2_keys_as_passthrough() {
        let config = parse(
            r#"
schema_version: "1.2.0"
content: "Guidance"
documents:
  - name: ts
    content: ignored by v1
"#,
        )
        .unwrap();

        assert!(config.documents.is_empty());
        assert!(config.extra.contains_key("documents"));
    }

    #[test]
    fn test_v2_document_has_documents_but_not_commands() {
        let config = parse(
            r#"
schema_version: "2.0.0"
content: "Guidance"
documents:
  - name: ts
    content: Use strict types
commands:
  - name: review
    prompt: ignored by v2
"#,
        )
        .unwrap();

        assert_eq!(config.documents.len(), 1);
        assert!(config.commands.is_empty());
        assert!(config.extra.contains_key("commands"));
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let config = parse(
            r#"
schema_version: "3.0.0"
content: "Guidance"
future_feature:
  nested: true
"#,
        )
        .unwrap();

        assert!(config.extra.contains_key("future_feature"));
    }

    #[test]
    fn test_unsupported_version_fails_closed() {
        let issues = parse("schema_version: \"9.9.9\"\ncontent: Guidance\n").unwrap_err();
        assert_eq!(
            issues,
            vec![SchemaIssue::UnsupportedVersion {
                version: "9.9.9".into()
            }]
        );
    }

    #[test]
    fn test_issues_collected_exhaustively() {
        let issues = parse(
            r#"
schema_version: "9.9.9"
documents: "not a list"
"#,
        )
        .unwrap_err();

        // One run surfaces the bad version, the missing content, and the
        // wrong-shaped documents field together.
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&SchemaIssue::UnsupportedVersion {
            version: "9.9.9".into()
        }));
        assert!(issues.contains(&SchemaIssue::missing_field("content")));
        assert!(
            issues.contains(&SchemaIssue::wrong_type("documents", "a list of documents"))
        );
    }

    #[test]
    fn test_missing_version_reported() {
        let issues = parse("content: Guidance\n").unwrap_err();
        assert!(issues.contains(&SchemaIssue::MissingVersion));
    }

    #[test]
    fn test_empty_document_name_reported() {
        let issues = parse(
            r#"
schema_version: "2.0.0"
content: Guidance
documents:
  - name: ""
    content: body
"#,
        )
        .unwrap_err();
        assert!(issues.contains(&SchemaIssue::EmptyDocumentName { index: 0 }));
    }

    #[test]
    fn test_load_configuration_from_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("guidebook.yml");
        std::fs::write(
            path.to_native(),
            "schema_version: \"1.0.0\"\ncontent: Keep functions small.\n",
        )
        .unwrap();

        let config = load_configuration(&path).unwrap();
        assert_eq!(config.content, "Keep functions small.");
    }

    #[test]
    fn test_load_configuration_reports_parse_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("guidebook.yml");
        std::fs::write(path.to_native(), "content: [unterminated\n").unwrap();

        let err = load_configuration(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_root() {
        let issues = normalize(serde_yaml::from_str("- just\n- a\n- list\n").unwrap()).unwrap_err();
        assert_eq!(issues, vec![SchemaIssue::NotAMapping]);
    }

    #[test]
    fn test_wrong_version_type() {
        let issues = parse("schema_version: 3\ncontent: Guidance\n").unwrap_err();
        assert!(issues.contains(&SchemaIssue::wrong_type(
            "schema_version",
            "a semantic version string"
        )));
    }
}

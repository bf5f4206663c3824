//! Root configuration type

use super::{Command, Document, ExternalTool};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The canonical in-memory representation of a guidance document.
///
/// Constructed once per generation run by [`crate::loader::normalize`] and
/// immutable thereafter. Ordered collections preserve declaration order from
/// the source document; `BTreeMap` keeps map iteration deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Parsed and validated schema version of the source document
    pub schema_version: Version,
    /// Free-text metadata about the document
    pub metadata: Metadata,
    /// The default/global guidance block
    pub content: String,
    /// Scoped sub-documents in declaration order
    pub documents: Vec<Document>,
    /// Variable name to default value
    pub variables: BTreeMap<String, String>,
    /// Prompt templates exposed as slash-command-like entities
    pub commands: Vec<Command>,
    /// External tool launch declarations
    pub external_tools: Vec<ExternalTool>,
    /// Unknown top-level keys, preserved as opaque passthrough data
    ///
    /// Additive fields from future minor versions land here instead of
    /// being rejected.
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Free-text metadata block
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Configuration {
    /// Look up a document by name.
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name == name)
    }

    /// Iterate over every text field that may contain placeholders,
    /// paired with a human-readable location label.
    ///
    /// The order matches the document: root content first, then documents,
    /// commands, and external tools in declaration order.
    pub fn text_fields(&self) -> Vec<(String, &str)> {
        let mut fields = vec![("content".to_string(), self.content.as_str())];

        for doc in &self.documents {
            fields.push((format!("documents[{}].content", doc.name), doc.content.as_str()));
        }

        for cmd in &self.commands {
            fields.push((format!("commands[{}].prompt", cmd.name), cmd.prompt.as_str()));
        }

        for tool in &self.external_tools {
            for (i, arg) in tool.args.iter().enumerate() {
                fields.push((format!("external_tools[{}].args[{}]", tool.name, i), arg.as_str()));
            }
            for (key, value) in &tool.env {
                fields.push((format!("external_tools[{}].env[{}]", tool.name, key), value.as_str()));
            }
        }

        fields
    }
}

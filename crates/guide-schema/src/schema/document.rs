//! Scoped sub-document type

use serde::{Deserialize, Serialize};

/// A named, optionally path-scoped sub-block of guidance content.
///
/// `file_globs` accepts either a single glob string or a list of glob
/// strings in the source YAML; both normalize to a `Vec<String>` here. An
/// empty list means the document applies globally.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    /// Unique name among sibling documents
    pub name: String,
    /// Guidance text; may contain `{{{ NAME }}}` placeholders
    pub content: String,
    /// Glob patterns this document applies to; empty means global
    #[serde(default, deserialize_with = "scalar_or_list")]
    pub file_globs: Vec<String>,
    /// Emit unconditionally regardless of glob matching semantics
    #[serde(default)]
    pub always_apply: bool,
}

/// Accept `file_globs: "**/*.ts"` and `file_globs: ["**/*.ts"]` alike.
fn scalar_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScalarOrList {
        Scalar(String),
        List(Vec<String>),
    }

    Ok(match ScalarOrList::deserialize(deserializer)? {
        ScalarOrList::Scalar(s) => vec![s],
        ScalarOrList::List(list) => list,
    })
}

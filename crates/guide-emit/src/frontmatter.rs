//! Minimal YAML frontmatter rendering
//!
//! Several editors tag rule fragments with a small structured header block.
//! Rendering is done by hand rather than through a YAML serializer so the
//! output is byte-stable: key order is the insertion order, values are
//! emitted exactly as given.

/// Ordered key/value frontmatter block.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw scalar entry (builder pattern).
    pub fn entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Add a double-quoted string entry.
    pub fn quoted(self, key: &str, value: &str) -> Self {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        self.entry(key, format!("\"{escaped}\""))
    }

    /// Add a boolean entry.
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.entry(key, if value { "true" } else { "false" })
    }

    /// Render the `---` fenced header followed by a blank line and the body.
    pub fn render(&self, body: &str) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str("---\n\n");
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// Join glob patterns into the comma-separated form frontmatter headers use.
pub fn join_globs(globs: &[String]) -> String {
    globs.join(",")
}

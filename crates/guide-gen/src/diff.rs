//! Dry-run diff computation

use similar::TextDiff;

/// Compute a unified diff between the current file content and the
/// artifact the generator would write.
///
/// Returns `None` when old and new are identical (nothing would change).
pub fn unified_diff(old: &str, new: &str, path: &str) -> Option<String> {
    if old == new {
        return None;
    }

    let diff = TextDiff::from_lines(old, new);
    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string();

    Some(rendered)
}

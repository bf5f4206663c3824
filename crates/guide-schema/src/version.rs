//! Schema version parsing and the supported-version check
//!
//! Three schema generations exist: v1.x (content + variables only), v2.x
//! (adds scoped documents), and v3.x (adds commands and external tools).
//! All of them normalize to the same [`crate::Configuration`] shape; this
//! module only decides whether a version is supported and which generation
//! it belongs to.

use crate::error::SchemaIssue;
use semver::Version;

/// Major versions the loader understands. Anything else fails closed.
pub const SUPPORTED_MAJORS: [u64; 3] = [1, 2, 3];

/// Parse a `schema_version` string and verify it is supported.
///
/// Returns the parsed version, or the issue to report: empty/missing,
/// unparseable, or outside the supported major set. Unsupported versions
/// are a hard failure, never a silent downgrade.
pub fn check_version(raw: &str) -> Result<Version, SchemaIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SchemaIssue::MissingVersion);
    }

    let version = Version::parse(trimmed).map_err(|e| SchemaIssue::InvalidVersion {
        value: trimmed.to_string(),
        message: e.to_string(),
    })?;

    if !SUPPORTED_MAJORS.contains(&version.major) {
        return Err(SchemaIssue::UnsupportedVersion {
            version: version.to_string(),
        });
    }

    Ok(version)
}

/// Whether this schema generation carries scoped documents.
pub fn has_documents(version: &Version) -> bool {
    version.major >= 2
}

/// Whether this schema generation carries commands and external tools.
pub fn has_commands(version: &Version) -> bool {
    version.major >= 3
}

//! End-to-end pipeline tests over the public crate APIs

use guide_fs::NormalizedPath;
use guide_gen::{EditorStatus, GenState, GenerateRequest, Generator};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FULL_DOC: &str = r##"
schema_version: "3.1.0"
metadata:
  title: Acme guidance
content: "# Guidelines"
documents:
  - name: ts
    content: Use strict types
    file_globs: "**/*.ts"
    always_apply: false
variables:
  ORG: acme
"##;

fn write_doc(dir: &TempDir, yaml: &str) -> NormalizedPath {
    let path = NormalizedPath::new(dir.path()).join("guidebook.yml");
    fs::write(path.to_native(), yaml).unwrap();
    path
}

/// Collect every file under `root` (relative forward-slash paths), skipping
/// the source document itself.
fn collect_files(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    collect_into(root, root, &mut files);
    files.remove("guidebook.yml");
    files
}

fn collect_into(root: &Path, dir: &Path, files: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_into(root, &path, files);
        } else {
            let rel = path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            files.insert(rel, fs::read(&path).unwrap());
        }
    }
}

#[test]
fn test_two_editors_produce_independent_artifact_sets() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(&temp, FULL_DOC);

    let mut request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    request.editors = vec!["cursor".into(), "copilot".into()];

    let report = Generator::new().generate(&request).unwrap();
    assert!(report.success());
    assert_eq!(report.state, GenState::Written);

    let files = collect_files(temp.path());
    let cursor_files: Vec<_> = files.keys().filter(|p| p.starts_with(".cursor/")).collect();
    let copilot_files: Vec<_> = files.keys().filter(|p| p.starts_with(".github/")).collect();

    // Independent, non-overlapping artifact sets.
    assert!(!cursor_files.is_empty());
    assert!(!copilot_files.is_empty());
    assert_eq!(cursor_files.len() + copilot_files.len(), files.len());

    // Both render the root content and the scoped document.
    for prefix in [".cursor/", ".github/"] {
        let combined: String = files
            .iter()
            .filter(|(p, _)| p.starts_with(prefix))
            .map(|(_, c)| String::from_utf8_lossy(c).to_string())
            .collect();
        assert!(combined.contains("# Guidelines"), "{prefix} missing root content");
        assert!(combined.contains("Use strict types"), "{prefix} missing document content");
    }
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(&temp, FULL_DOC);

    let request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    let generator = Generator::new();

    generator.generate(&request).unwrap();
    let first = collect_files(temp.path());

    generator.generate(&request).unwrap();
    let second = collect_files(temp.path());

    assert_eq!(first, second);
}

#[test]
fn test_unsupported_version_produces_zero_artifacts() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(
        &temp,
        "schema_version: \"9.9.9\"\ncontent: \"# Guidelines\"\n",
    );

    let request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    let err = Generator::new().generate(&request).unwrap_err();

    assert!(err.to_string().contains("unsupported schema_version 9.9.9"));
    assert!(collect_files(temp.path()).is_empty());
}

#[test]
fn test_undefined_placeholder_fails_before_any_write() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(
        &temp,
        r#"
schema_version: "2.0.0"
content: "Root is fine"
documents:
  - name: api
    content: "Call {{{ API_HOST }}} first"
"#,
    );

    let request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    let err = Generator::new().generate(&request).unwrap_err();

    assert!(err.to_string().contains("undefined variable \"API_HOST\""));
    assert!(collect_files(temp.path()).is_empty());
}

#[test]
fn test_duplicate_document_names_fail_resolution() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(
        &temp,
        r#"
schema_version: "2.0.0"
content: "Root"
documents:
  - name: ts
    content: first
  - name: ts
    content: second
"#,
    );

    let request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    let err = Generator::new().generate(&request).unwrap_err();

    assert!(err.to_string().contains("duplicate document name \"ts\""));
    assert!(collect_files(temp.path()).is_empty());
}

#[test]
fn test_claude_emits_commands_and_external_tools() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(
        &temp,
        r##"
schema_version: "3.0.0"
content: "# Guidelines"
variables:
  ORG: acme
commands:
  - name: review
    description: Review staged changes
    prompt: "Apply {{{ ORG }}} conventions."
external_tools:
  - name: search
    command: mcp-search
    args: ["--org", "{{{ ORG }}}"]
"##,
    );

    let mut request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    request.editors = vec!["claude".into()];

    let report = Generator::new().generate(&request).unwrap();
    assert!(report.success());
    assert!(report.editors[0].skipped.is_empty());

    let command = fs::read_to_string(temp.path().join(".claude/commands/review.md")).unwrap();
    assert!(command.contains("Apply acme conventions."));

    let mcp: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join(".mcp.json")).unwrap()).unwrap();
    assert_eq!(mcp["mcpServers"]["search"]["args"][1], "acme");
}

#[test]
fn test_environment_source_sits_between_defaults_and_overrides() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(
        &temp,
        r#"
schema_version: "1.0.0"
content: "Org is {{{ ORG }}}, team is {{{ TEAM }}}"
variables:
  ORG: default-org
  TEAM: default-team
"#,
    );

    let mut request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    request.editors = vec!["zed".into()];
    request.environment =
        BTreeMap::from([("ORG".to_string(), "env-org".to_string()), ("TEAM".to_string(), "env-team".to_string())]);
    request.overrides = vec![("ORG".to_string(), "override-org".to_string())];

    Generator::new().generate(&request).unwrap();

    let rules = fs::read_to_string(temp.path().join(".rules")).unwrap();
    assert_eq!(rules, "Org is override-org, team is env-team\n");
}

#[test]
fn test_dry_run_reports_changes_without_writing() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(&temp, FULL_DOC);

    let mut request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    request.editors = vec!["zed".into()];
    request.options.dry_run = true;

    let report = Generator::new().generate(&request).unwrap();
    assert_eq!(report.state, GenState::Emitted);
    assert!(collect_files(temp.path()).is_empty());

    let EditorStatus::Previewed { previews } = &report.editors[0].status else {
        panic!("expected preview");
    };
    assert!(previews[0].diff.as_deref().unwrap().contains("+# Guidelines"));
}

#[test]
fn test_v1_document_generates_from_root_content_only() {
    let temp = TempDir::new().unwrap();
    let source = write_doc(
        &temp,
        "schema_version: \"1.0.0\"\ncontent: \"Keep functions small.\"\n",
    );

    let mut request = GenerateRequest::new(source, NormalizedPath::new(temp.path()));
    request.editors = vec!["cursor".into()];

    let report = Generator::new().generate(&request).unwrap();
    assert!(report.success());

    let files = collect_files(temp.path());
    assert_eq!(files.len(), 1);
    assert!(files.contains_key(".cursor/rules/root.mdc"));
}

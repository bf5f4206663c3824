//! Black-box tests for the `guide` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BASIC_DOC: &str = r##"
schema_version: "2.0.0"
content: "# Guidelines for {{{ ORG }}}"
documents:
  - name: ts
    content: Use strict types
    file_globs: "**/*.ts"
variables:
  ORG: acme
"##;

fn guide() -> Command {
    let mut cmd = Command::cargo_bin("guide").unwrap();
    // Keep the host environment out of variable resolution.
    cmd.env_remove("GUIDE_VAR_ORG");
    cmd
}

fn write_doc(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("guidebook.yml");
    fs::write(&path, yaml).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_validate_accepts_a_valid_document() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp, BASIC_DOC);

    guide()
        .args(["validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("schema v2.0.0"));
}

#[test]
fn test_validate_lists_every_schema_finding() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(
        &temp,
        r#"
schema_version: "2.0.0"
documents:
  - name: ""
    content: ok
  - name: dup
    content: one
  - name: dup
    content: two
"#,
    );

    guide()
        .args(["validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field `content`"))
        .stderr(predicate::str::contains("document at index 0 has an empty name"));
}

#[test]
fn test_validate_reports_all_undefined_variables() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(
        &temp,
        "schema_version: \"1.0.0\"\ncontent: \"{{{ A }}} and {{{ B }}}\"\n",
    );

    guide()
        .args(["validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined variable \"A\""))
        .stderr(predicate::str::contains("undefined variable \"B\""));
}

#[test]
fn test_validate_accepts_overrides_for_missing_variables() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(
        &temp,
        "schema_version: \"1.0.0\"\ncontent: \"Hello {{{ WHO }}}\"\n",
    );

    guide()
        .args(["validate", &path, "-V", "WHO=world"])
        .assert()
        .success();
}

#[test]
fn test_generate_writes_artifacts_for_selected_editor() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp, BASIC_DOC);
    let output = temp.path().to_string_lossy().into_owned();

    guide()
        .args(["generate", &path, "--editor", "cursor", "-o", &output])
        .assert()
        .success()
        .stdout(predicate::str::contains("cursor"));

    let rule = fs::read_to_string(temp.path().join(".cursor/rules/ts.mdc")).unwrap();
    assert!(rule.contains("Use strict types"));

    let root = fs::read_to_string(temp.path().join(".cursor/rules/root.mdc")).unwrap();
    assert!(root.contains("# Guidelines for acme"));
}

#[test]
fn test_generate_dry_run_prints_a_diff_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp, BASIC_DOC);
    let output = temp.path().to_string_lossy().into_owned();

    guide()
        .args([
            "generate", &path, "--editor", "zed", "--dry-run", "-o", &output,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("+# Guidelines for acme"));

    assert!(!temp.path().join(".rules").exists());
}

#[test]
fn test_generate_override_beats_environment_variable() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp, BASIC_DOC);
    let output = temp.path().to_string_lossy().into_owned();

    guide()
        .args([
            "generate", &path, "--editor", "zed", "-o", &output, "-V", "ORG=cli-org",
        ])
        .env("GUIDE_VAR_ORG", "env-org")
        .assert()
        .success();

    let rules = fs::read_to_string(temp.path().join(".rules")).unwrap();
    assert!(rules.contains("cli-org"));
    assert!(!rules.contains("env-org"));
}

#[test]
fn test_generate_reads_variables_from_the_environment() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(
        &temp,
        "schema_version: \"1.0.0\"\ncontent: \"Hello {{{ WHO }}}\"\n",
    );
    let output = temp.path().to_string_lossy().into_owned();

    guide()
        .args(["generate", &path, "--editor", "zed", "-o", &output])
        .env("GUIDE_VAR_WHO", "world")
        .assert()
        .success();

    let rules = fs::read_to_string(temp.path().join(".rules")).unwrap();
    assert!(rules.contains("Hello world"));
}

#[test]
fn test_generate_fails_with_nonzero_exit_for_unknown_editor() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp, BASIC_DOC);
    let output = temp.path().to_string_lossy().into_owned();

    guide()
        .args(["generate", &path, "--editor", "nonexistent", "-o", &output])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unknown editor"));
}

#[test]
fn test_generate_rejects_malformed_variable_overrides() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp, BASIC_DOC);

    guide()
        .args(["generate", &path, "-V", "no-equals-sign"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-equals-sign"));
}

#[test]
fn test_list_editors_shows_the_full_catalog() {
    let temp = TempDir::new().unwrap();

    guide()
        .current_dir(temp.path())
        .arg("list-editors")
        .assert()
        .success()
        .stdout(predicate::str::contains("cursor"))
        .stdout(predicate::str::contains("copilot"))
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("cline"))
        .stdout(predicate::str::contains("windsurf"))
        .stdout(predicate::str::contains("zed"));
}

#[test]
fn test_missing_document_is_a_clean_error() {
    guide()
        .args(["validate", "/nonexistent/guidebook.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_apidoc")));
    cmd.env_remove("APIDOC_FORMAT").env_remove("APIDOC_TITLE").env_remove("RUST_LOG");
    cmd
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let input = std::fs::read_to_string(fixture_path("orders.json")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("orders.expected.md")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn stdin_json_round_trips() {
    let input = std::fs::read_to_string(fixture_path("orders.json")).unwrap();

    let assert = cmd().args(["-f", "json"]).write_stdin(input.clone()).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let got: serde_json::Value = serde_json::from_str(&output).unwrap();
    let want: serde_json::Value = serde_json::from_str(&input).unwrap();
    assert_eq!(got, want);
    assert!(output.starts_with("[\n  {\n    \"path\""));
}

#[test]
fn stdin_invalid_json_fails() {
    cmd()
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn missing_method_fails_before_output() {
    cmd()
        .args(["-f", "html"])
        .write_stdin(r#"[{"path": "/a"}]"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("record 0: missing method"));
}

#[test]
fn empty_array_renders_shell() {
    cmd()
        .args(["-f", "html"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("class=\"endpoint\"").not());
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn custom_title() {
    cmd()
        .args(["-f", "md", "-t", "Orders API"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("# Orders API\n\n");
}

#[test]
fn preview_is_a_fragment() {
    let input = std::fs::read_to_string(fixture_path("orders.json")).unwrap();
    let assert = cmd().args(["-f", "preview"]).write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("<div class=\"api-docs\">"));
    assert!(!output.contains("<html"));
    assert!(output.contains("<span class=\"method delete\">DELETE</span>"));
    assert!(output.contains("<td>✓</td>"));
}

// -- file mode --

#[test]
fn file_mode_writes_export() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-f", "md", "-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("orders.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = std::fs::read_to_string(dir.path().join("api-documentation.md")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("orders.expected.md")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn word_export_has_bom_and_office_markers() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-f", "word", "-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("orders.json"))
        .assert()
        .success();

    let bytes = std::fs::read(dir.path().join("api-documentation.doc")).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let html = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(html.starts_with("<html xmlns:o='urn:schemas-microsoft-com:office:office'"));
    assert!(html.contains("<w:WordDocument>"));
    assert!(html.contains("<td>Yes</td>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn sample_input_is_expanded() {
    let assert = cmd()
        .args(["-f", "md"])
        .arg(fixture_path("sample.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("## POST /api/v1/customers"));
    assert!(output.contains("| `tags` | `array<string>` | ✓ |"));
    assert!(output.contains("| `address` | `object` | ✓ |  | `{\"city\":\"Bangkok\"}` | - |"));
    assert!(output.contains("**Description:** Successful response"));
    assert!(output.contains("- Names must be unique"));
}

#[test]
fn multiple_files_keep_command_line_order() {
    let assert = cmd()
        .args(["-f", "md"])
        .arg(fixture_path("sample.json"))
        .arg(fixture_path("orders.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let customers = output.find("/api/v1/customers").unwrap();
    let orders = output.find("## POST /api/v1/orders").unwrap();
    assert!(customers < orders);
}

#[test]
fn unreadable_input_file_is_skipped() {
    let mut bad = NamedTempFile::with_suffix(".json").unwrap();
    bad.write_all(b"{ broken").unwrap();

    cmd()
        .args(["-f", "md", "-v"])
        .arg(bad.path().to_str().unwrap())
        .arg(fixture_path("orders.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## POST /api/v1/orders"))
        .stderr(predicate::str::contains("skipping"));
}

#[test]
fn delivery_failure_is_reported() {
    let blocker = NamedTempFile::new().unwrap();

    cmd()
        .args(["-f", "json", "-o", blocker.path().to_str().unwrap()])
        .arg(fixture_path("orders.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
}

// -- example data --

#[test]
fn example_renders_order_endpoint() {
    let assert = cmd().args(["--example", "-f", "html"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<span class=\"method post\">POST</span>"));
    assert!(output.contains("<li>Payment must be completed within 30 minutes</li>"));
    assert!(output.contains("<code>array&lt;object&gt;</code>"));
}

// -- format prompt --

#[test]
fn non_terminal_without_format_defaults_to_markdown() {
    cmd()
        .arg("--example")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# API Documentation\n\n## POST"));
}

#[test]
fn format_from_environment() {
    cmd()
        .arg("--example")
        .env("APIDOC_FORMAT", "json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n"));
}

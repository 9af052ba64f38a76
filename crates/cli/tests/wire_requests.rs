//! The raw wire surface through `ikv request`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ikv(base: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ikv").unwrap();
    cmd.arg("--base-path").arg(base.path());
    cmd
}

#[test]
fn wire_create_and_read_note() {
    let base = TempDir::new().unwrap();

    ikv(&base)
        .arg("request")
        .arg(r#"{"command":"create_note","vault":"Notes","title":"Todo","content":"Buy milk"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));

    ikv(&base)
        .arg("request")
        .arg(r#"{"command":"read_note","vault":"Notes","title":"Todo"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn wire_error_is_structured() {
    let base = TempDir::new().unwrap();

    ikv(&base)
        .arg("request")
        .arg(r#"{"command":"read_note","vault":"Notes","title":"Ghost"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"NotFound\""));
}

#[test]
fn wire_markup_commands() {
    let base = TempDir::new().unwrap();

    ikv(&base)
        .arg("request")
        .arg(r##"{"command":"parse_markdown_content","content":"# Title"}"##)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Title</h1>"));

    ikv(&base)
        .arg("request")
        .arg(r##"{"command":"extract_plain_text","content":"# Title\nBody"}"##)
        .assert()
        .success()
        .stdout(predicate::str::contains("Title\\nBody"));
}

#[test]
fn wire_unknown_command_rejected() {
    let base = TempDir::new().unwrap();

    ikv(&base)
        .arg("request")
        .arg(r#"{"command":"self_destruct"}"#)
        .assert()
        .failure();
}

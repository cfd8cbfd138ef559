//! End-to-end tests for the qlext binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn qlext(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qlext").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("QLEXT_VERBOSE")
        .env_remove("QLEXT_CONFIG")
        .env("QLEXT_NO_COLOR", "true");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn lex_prints_json_tokens() {
    let dir = TempDir::new().unwrap();
    let output = qlext(&dir)
        .args(["lex", "--compact", "title:\"a b\""])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = &value[0]["tokens"];
    assert_eq!(tokens.as_array().unwrap().len(), 3);
    assert_eq!(tokens[0]["kind"], "term");
    assert_eq!(tokens[1]["kind"], "fieldSeparator");
    assert_eq!(tokens[2]["kind"], "phrase");
    assert_eq!(tokens[2]["lexeme"], "\"a b\"");
    assert_eq!(tokens[2]["end"], 11);
}

#[test]
fn lex_reads_stdin_lines() {
    let dir = TempDir::new().unwrap();
    qlext(&dir)
        .args(["lex", "--format", "jsonl"])
        .write_stdin("foo\nbar baz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"origin\":\"stdin:1\""))
        .stdout(predicate::str::contains("\"origin\":\"stdin:2\""))
        .stdout(predicate::str::contains("\"lexeme\":\"baz\""));
}

#[test]
fn lex_reads_query_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("queries.txt"), "x:y\n").unwrap();
    qlext(&dir)
        .args(["lex", "-F", "table", "--file", "queries.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("==> queries.txt:1 \"x:y\""))
        .stdout(predicate::str::contains("fieldSeparator"));
}

#[test]
fn lex_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    qlext(&dir)
        .args(["lex", "--file", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn lex_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[output]\nformat = \"table\"\nskip_whitespace = true\n");
    qlext(&dir)
        .arg("--config")
        .arg(&config)
        .args(["lex", "a b"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("==> arg:1"))
        .stdout(predicate::str::contains("whitespace").not());
}

#[test]
fn check_clean_query_succeeds() {
    let dir = TempDir::new().unwrap();
    qlext(&dir)
        .args(["check", "title:\"closed\"", r#""a\"b""#])
        .assert()
        .success()
        .stdout(predicate::str::contains("no unterminated phrases"));
}

#[test]
fn check_unterminated_phrase_fails() {
    let dir = TempDir::new().unwrap();
    qlext(&dir)
        .args(["check", "ok", "foo \"bar"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "arg:2: 1:5: unterminated phrase \"\\\"bar\"",
        ))
        .stdout(predicate::str::contains("    foo \"bar\n        ^\n"))
        .stderr(predicate::str::contains("1 unterminated phrase(s)"));
}

#[test]
fn check_allow_unterminated_succeeds() {
    let dir = TempDir::new().unwrap();
    qlext(&dir)
        .args(["check", "--allow-unterminated", "\"trailing\\"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unterminated phrase"));
}

#[test]
fn check_config_can_disable_failure() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[check]\nfail_on_unterminated = false\n");
    qlext(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", "\"open"])
        .assert()
        .success();
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[output]\nformat = \"xml\"\n");
    qlext(&dir)
        .arg("--config")
        .arg(&config)
        .args(["lex", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config"));
}

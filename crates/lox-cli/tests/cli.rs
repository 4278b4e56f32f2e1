//! End-to-end tests for the `lox` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn lox_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lox"))
}

/// Write `source` to a script in a fresh temp dir.
fn script(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("script.lox");
    fs::write(&path, source).expect("Failed to write script");
    (dir, path)
}

fn lox() -> Command {
    let mut cmd = Command::new(lox_bin());
    cmd.env_remove("LOX_LEGACY_COMMENT_SLASH")
        .env_remove("LOX_LEGACY_IDENTIFIERS")
        .env_remove("LOX_VERBOSE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    lox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version() {
    lox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_scan_file() {
    let (_dir, path) = script("var x = 1.5;\nprint \"hi\";\n");

    lox()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("   1 VAR var"))
        .stdout(predicate::str::contains("   1 NUMBER 1.5 1.5"))
        .stdout(predicate::str::contains("   2 STRING hi hi"))
        .stdout(predicate::str::contains("   3 EOF"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_lexical_errors_exit_65() {
    let (_dir, path) = script("a @ b\n\"open");

    lox()
        .arg(&path)
        .assert()
        .code(65)
        .stdout(predicate::str::contains("IDENTIFIER b"))
        .stderr(predicate::str::contains(
            "[line 1:3] Error: Unexpected character: @",
        ))
        .stderr(predicate::str::contains("[line 2:5] Error: Unterminated string."));
}

#[test]
fn test_missing_file_exit_66() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    lox()
        .arg(dir.path().join("missing.lox"))
        .assert()
        .code(66)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_comment_produces_no_token() {
    let (_dir, path) = script("// comment\n+");

    lox()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("SLASH").not())
        .stdout(predicate::str::contains("   2 PLUS +"));
}

#[test]
fn test_legacy_comment_slash_flag() {
    let (_dir, path) = script("// comment\n+");

    lox()
        .arg("--legacy-comment-slash")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("   1 SLASH // comment"));
}

#[test]
fn test_legacy_identifiers_env() {
    let (_dir, path) = script("a1");

    lox()
        .env("LOX_LEGACY_IDENTIFIERS", "true")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("IDENTIFIER a\n"))
        .stdout(predicate::str::contains("NUMBER 1 1"));
}

#[test]
fn test_repl_from_stdin() {
    lox()
        .write_stdin("print 1;\n\"two\nlines\"\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("PRINT print"))
        .stdout(predicate::str::contains("STRING two\nlines"));
}

#[test]
fn test_repl_reports_open_string_at_end_of_input() {
    lox()
        .write_stdin("print 1;\nprint \"open\nvar x = 2;\n")
        .assert()
        .code(65)
        .stdout(predicate::str::contains("   1 PRINT print").count(2))
        .stderr(predicate::str::contains(
            "[line 2:10] Error: Unterminated string.",
        ));
}

#[test]
fn test_repl_scans_slash_lines() {
    lox()
        .write_stdin("/ 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SLASH /"))
        .stdout(predicate::str::contains("NUMBER 2 2"))
        .stdout(predicate::str::contains("Unknown command").not());
}

#[test]
fn test_invalid_utf8_is_a_lexical_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("bad.lox");
    fs::write(&path, b"var x = \xff;").expect("Failed to write script");

    lox()
        .arg(&path)
        .assert()
        .code(65)
        .stdout(predicate::str::contains("VAR var"))
        .stdout(predicate::str::contains("SEMICOLON ;"))
        .stderr(predicate::str::contains(
            "[line 1:9] Error: Unexpected character: \u{FFFD}",
        ))
        .stderr(predicate::str::contains("failed to read").not());
}

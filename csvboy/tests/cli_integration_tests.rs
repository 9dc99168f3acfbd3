// csvboy/tests/cli_integration_tests.rs
//! Command-line integration tests for the `csvboy` binary.
//!
//! Each test writes an input CSV into a fresh temporary directory, runs the
//! compiled binary through `assert_cmd`, and checks stdout/stderr and the
//! `_sanitized` file it leaves behind. Color is never emitted because the
//! captured streams are not terminals.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds a `csvboy` command with logging turned up so failures are easy to
/// diagnose from the captured stderr.
fn csvboy() -> Command {
    let mut cmd = Command::cargo_bin("csvboy").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn default_mode_strips_bom_and_keeps_valid_text() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "people.csv", "\u{FEFF}name,city\nJosé,Zürich\n")?;
    let expected = dir.path().join("people_sanitized.csv");

    csvboy()
        .arg("--dataPath")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "check out the sanitized file at {}",
            expected.display()
        )));

    assert_eq!(read(&expected), "name,city\nJosé,Zürich\n");
    Ok(())
}

#[test]
fn replace_mode_with_custom_replacement() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "menu.csv", "item,price\ncafé,€3\n")?;

    csvboy()
        .args(["-m", "replace", "-r", "?", "-d"])
        .arg(&input)
        .assert()
        .success();

    assert_eq!(read(&dir.path().join("menu_sanitized.csv")), "item,price\ncaf?,?3\n");
    Ok(())
}

#[test]
fn replace_mode_broadcasts_across_the_row() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "cv.csv", "café,resumé\n")?;

    csvboy().args(["-m", "replace", "-d"]).arg(&input).assert().success();

    assert_eq!(read(&dir.path().join("cv_sanitized.csv")), "caf_,resum_\n");
    Ok(())
}

#[test]
fn ascii_mode_transliterates() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "names.csv", "\"Müller, Jürgen\",café\n")?;

    csvboy().args(["--mode", "ascii", "-d"]).arg(&input).assert().success();

    assert_eq!(read(&dir.path().join("names_sanitized.csv")), "\"Muller, Jurgen\",cafe\n");
    Ok(())
}

#[test]
fn out_path_directs_output() -> Result<()> {
    let dir = TempDir::new()?;
    let out = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "a,b\n")?;

    csvboy()
        .arg("-d")
        .arg(&input)
        .arg("--outPath")
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("data_sanitized.csv").is_file());
    assert!(!dir.path().join("data_sanitized.csv").exists());
    Ok(())
}

#[test]
fn summary_goes_to_stderr() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "caf\u{e9}\n")?;

    csvboy()
        .args(["-m", "ascii", "-d"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("--- Sanitization Summary ---"))
        .stderr(predicate::str::contains("U+00E9 'é' x1 -> \"e\""));
    Ok(())
}

#[test]
fn blank_lines_and_leading_bom_are_reported() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "\u{FEFF}a\n\nb\n")?;

    csvboy()
        .args(["-m", "ascii", "-d"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Rows: 3"))
        .stderr(predicate::str::contains("Byte-order mark removed from: first cell"));

    assert_eq!(read(&dir.path().join("data_sanitized.csv")), "a\n\nb\n");
    Ok(())
}

#[test]
fn config_file_can_come_from_the_environment() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "café\n")?;
    let settings = write_input(&dir, "csvboy.yaml", "mode: replace\nreplacement: \"#\"\n")?;

    csvboy()
        .env("CSVBOY_CONFIG", &settings)
        .arg("-d")
        .arg(&input)
        .assert()
        .success();

    assert_eq!(read(&dir.path().join("data_sanitized.csv")), "caf#\n");
    Ok(())
}

#[test]
fn quiet_suppresses_summary_but_not_result_path() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "café\n")?;

    csvboy()
        .args(["-q", "-d"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("check out the sanitized file at"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "café\n")?;

    csvboy()
        .args(["--dry-run", "-m", "replace", "-d"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("check out").not())
        .stderr(predicate::str::contains("Dry run: no file was written."));

    assert!(!dir.path().join("data_sanitized.csv").exists());
    Ok(())
}

#[test]
fn json_report() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "\u{FEFF}a,ß\nb,ß\n")?;
    let report = dir.path().join("report.json");

    csvboy()
        .args(["-m", "ascii", "--no-summary", "--report"])
        .arg(&report)
        .arg("-d")
        .arg(&input)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&read(&report))?;
    assert_eq!(json["mode"], "ascii");
    assert_eq!(json["rows"], 2);
    assert_eq!(json["cells"], 4);
    assert_eq!(json["bom"]["head"], true);
    assert_eq!(json["bom"]["tail"], false);
    assert_eq!(json["findings"][0]["code_point"], "U+00DF");
    assert_eq!(json["findings"][0]["occurrences"], 2);
    assert_eq!(json["findings"][0]["substitution"], "ss");
    Ok(())
}

#[test]
fn settings_file_is_applied_and_flags_override_it() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "data.csv", "café\n")?;
    let settings = write_input(&dir, "csvboy.yaml", "mode: replace\nreplacement: \"#\"\nline_terminator: crlf\n")?;

    csvboy()
        .arg("--config")
        .arg(&settings)
        .arg("-d")
        .arg(&input)
        .assert()
        .success();
    assert_eq!(read(&dir.path().join("data_sanitized.csv")), "caf#\r\n");

    csvboy()
        .arg("--config")
        .arg(&settings)
        .args(["-r", "*", "-d"])
        .arg(&input)
        .assert()
        .success();
    assert_eq!(read(&dir.path().join("data_sanitized.csv")), "caf*\r\n");
    Ok(())
}

#[test]
fn missing_input_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("absent.csv");

    csvboy()
        .arg("-d")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist or is unreadable"));
    Ok(())
}

#[test]
fn invalid_mode_is_rejected_by_the_parser() {
    csvboy()
        .args(["-d", "whatever.csv", "-m", "latin1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'latin1'"));
}

#[test]
fn missing_data_path_shows_help() {
    csvboy().assert().failure().stderr(predicate::str::contains("Usage"));
}

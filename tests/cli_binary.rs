//! End-to-end tests running the installed `pathsieve` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pathsieve() -> Command {
    Command::cargo_bin("pathsieve").expect("binary builds")
}

fn write_ignore(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".psignore");
    fs::write(&path, contents).expect("write ignore file");
    path
}

#[test]
fn requires_the_ignore_file_option() {
    pathsieve()
        .arg("a.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--ignore-file"));
}

#[test]
fn filters_positional_candidates() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "# scratch files\n*.tmp\n");

    pathsieve()
        .arg("-f")
        .arg(&ignore)
        .args(["b.tmp", "a.txt", "c.tmp"])
        .assert()
        .success()
        .stdout("a.txt\n");
}

#[test]
fn reads_candidates_from_stdin_when_no_positionals() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "*.log\n!keep.log\n");

    pathsieve()
        .arg("-f")
        .arg(&ignore)
        .write_stdin("build.log keep.log readme.md\n")
        .assert()
        .success()
        .stdout("keep.log\nreadme.md\n");
}

#[test]
fn from0_reads_nul_terminated_records() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "*.tmp\n");

    pathsieve()
        .arg("-f")
        .arg(&ignore)
        .arg("--from0")
        .write_stdin("with space.txt\0junk.tmp\0")
        .assert()
        .success()
        .stdout("with space.txt\n");
}

#[test]
fn missing_ignore_file_is_not_an_error() {
    pathsieve()
        .args(["-f", "/does/not/exist/.ignore", "x", "y"])
        .assert()
        .success()
        .stdout("x\ny\n");
}

#[test]
fn malformed_pattern_fails_with_diagnostic() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "broken[\n");

    pathsieve()
        .arg("-f")
        .arg(&ignore)
        .arg("anything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unclosed character class"));
}

#[test]
fn spec_scenario_via_the_binary() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "#comment\n\n*.tmp\nsrc/gen/**\n!src/gen/keep.txt");

    pathsieve()
        .arg("-f")
        .arg(&ignore)
        .args(["a.tmp", "src/gen/out.o", "src/gen/keep.txt", "readme.md"])
        .assert()
        .success()
        .stdout("src/gen/keep.txt\nreadme.md\n");
}

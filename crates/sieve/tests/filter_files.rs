//! End-to-end tests for [`sieve::filter_paths`] against on-disk ignore
//! files.

use std::fs;
use std::io::Write;
use std::path::Path;

use sieve::{filter_paths, load_rules, FilterError};
use tempfile::TempDir;

fn candidates(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|path| (*path).to_owned()).collect()
}

fn write_ignore(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(".pathsieveignore");
    let mut file = fs::File::create(&path).expect("create ignore file");
    file.write_all(contents.as_bytes()).expect("write ignore file");
    path
}

#[test]
fn missing_ignore_file_passes_all_candidates_through() {
    let survivors = filter_paths(
        Path::new("/does/not/exist/.ignore"),
        candidates(&["x", "y"]),
    )
    .expect("missing file is not an error");

    assert_eq!(survivors, ["x", "y"]);
}

#[test]
fn missing_ignore_file_yields_an_empty_rule_set() {
    let rules = load_rules(Path::new("/does/not/exist/.ignore")).expect("no error");
    assert!(rules.is_empty());
}

#[test]
fn empty_ignore_file_changes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "");

    let survivors =
        filter_paths(&ignore, candidates(&["b", "a", "b"])).expect("filter succeeds");

    // Order and duplicates are preserved exactly.
    assert_eq!(survivors, ["b", "a", "b"]);
}

#[test]
fn comment_only_ignore_file_changes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "# nothing\n\n# here\n");

    let survivors = filter_paths(&ignore, candidates(&["x", "y"])).expect("filter succeeds");

    assert_eq!(survivors, ["x", "y"]);
}

#[test]
fn survivors_keep_input_order_and_spelling() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "*.tmp\n");

    let survivors = filter_paths(
        &ignore,
        candidates(&["./docs/a.md", "b.tmp", "docs//c.md"]),
    )
    .expect("filter succeeds");

    // Evaluation normalizes internally; output keeps the original strings.
    assert_eq!(survivors, ["./docs/a.md", "docs//c.md"]);
}

#[test]
fn full_scenario_from_ignore_file() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "#comment\n\n*.tmp\nsrc/gen/**\n!src/gen/keep.txt");

    let survivors = filter_paths(
        &ignore,
        candidates(&["a.tmp", "src/gen/out.o", "src/gen/keep.txt", "readme.md"]),
    )
    .expect("filter succeeds");

    assert_eq!(survivors, ["src/gen/keep.txt", "readme.md"]);
}

#[test]
fn bom_prefixed_ignore_file_parses() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "\u{feff}*.tmp\n");

    let survivors =
        filter_paths(&ignore, candidates(&["a.tmp", "a.txt"])).expect("filter succeeds");

    assert_eq!(survivors, ["a.txt"]);
}

#[test]
fn malformed_pattern_aborts_with_no_partial_output() {
    let dir = TempDir::new().expect("tempdir");
    let ignore = write_ignore(&dir, "*.tmp\nbroken[\n");

    let error = filter_paths(&ignore, candidates(&["a.tmp", "b.txt"])).expect_err("must fail");

    assert!(matches!(error, FilterError::Pattern(_)));
    assert!(error.to_string().contains("broken["));
}

#[test]
fn unreadable_ignore_file_is_a_read_error() {
    // A directory opens but cannot be read line-wise, standing in for an
    // existing-but-unreadable ignore file without fiddling with modes.
    let dir = TempDir::new().expect("tempdir");

    let error = filter_paths(dir.path(), candidates(&["x"])).expect_err("must fail");

    match error {
        FilterError::Read { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("expected read error, got {other:?}"),
    }
}

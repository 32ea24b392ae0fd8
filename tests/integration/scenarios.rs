//! End-to-end compare and update runs against a temporary fixture dir.

use golden_fixtures::{DiffKind, FixtureError, GoldenFixtures};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HINT: &str = "GOLDEN=update cargo test";

fn fixture_dir(temp: &TempDir) -> PathBuf {
    let dir = temp.path().join("golden");
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn mismatch(err: FixtureError) -> golden_fixtures::MismatchReport {
    match err {
        FixtureError::CompareMismatch(report) => report,
        other => panic!("expected compare mismatch, got: {other}"),
    }
}

#[test]
fn empty_set_against_empty_dir_passes() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    GoldenFixtures::new(dir).with_hint(HINT).test().unwrap();
}

#[test]
fn missing_file_is_reported_with_hint() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    let mut gf = GoldenFixtures::new(&dir).with_hint(HINT);
    gf.add("X", &["a.txt"]).unwrap();

    let err = gf.test().unwrap_err();
    let message = err.to_string();
    let report = mismatch(err);
    assert_eq!(report.len(), 1);
    assert_eq!(report.lines[0].kind, DiffKind::Missing);
    assert_eq!(report.lines[0].path, dir.join("a.txt"));
    assert!(message.starts_with("1 errors:\nmissing file: "));
    assert!(message.ends_with("\n\nrun `GOLDEN=update cargo test` to automatically update all files above"));
}

#[test]
fn update_mode_writes_missing_file() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    let mut gf = GoldenFixtures::new(&dir).with_hint(HINT).with_flags("update");
    gf.add("X", &["a.txt"]).unwrap();

    gf.test().unwrap();
    assert_eq!(fs::read(dir.join("a.txt")).unwrap(), b"X");
}

#[test]
fn changed_content_is_reported() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    fs::write(dir.join("a.txt"), "old").unwrap();
    let mut gf = GoldenFixtures::new(&dir).with_hint(HINT);
    gf.add("new", &["a.txt"]).unwrap();

    let report = mismatch(gf.test().unwrap_err());
    assert_eq!(report.len(), 1);
    assert_eq!(report.lines[0].kind, DiffKind::Changed);
    assert!(report.lines[0].rendered_diff.is_none());
}

#[test]
fn unexpected_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    fs::write(dir.join("a.txt"), "X").unwrap();
    fs::write(dir.join("b.txt"), "Y").unwrap();
    let mut gf = GoldenFixtures::new(&dir).with_hint(HINT);
    gf.add("X", &["a.txt"]).unwrap();

    let report = mismatch(gf.test().unwrap_err());
    assert_eq!(report.len(), 1);
    assert_eq!(report.lines[0].kind, DiffKind::Unexpected);
    assert_eq!(report.lines[0].path, dir.join("b.txt"));
}

#[test]
fn ignore_unexpected_passes() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    fs::write(dir.join("a.txt"), "X").unwrap();
    fs::write(dir.join("b.txt"), "Y").unwrap();
    let mut gf = GoldenFixtures::new(&dir)
        .with_hint(HINT)
        .with_ignore_unexpected(true);
    gf.add("X", &["a.txt"]).unwrap();

    gf.test().unwrap();
    // Unexpected files survive an update when ignored.
    gf.set_flags("update");
    gf.test().unwrap();
    assert!(dir.join("b.txt").exists());
}

#[test]
fn mismatches_are_listed_in_path_order() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    fs::write(dir.join("b.txt"), "old").unwrap();
    fs::write(dir.join("c.txt"), "gone").unwrap();
    let mut gf = GoldenFixtures::new(&dir).with_hint(HINT);
    gf.add("new", &["b.txt"]).unwrap();
    gf.add("A", &["a.txt"]).unwrap();

    let report = mismatch(gf.test().unwrap_err());
    let kinds: Vec<DiffKind> = report.lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![DiffKind::Missing, DiffKind::Changed, DiffKind::Unexpected]
    );
    assert!(report.to_string().starts_with("3 errors:\n"));
}

#[test]
fn excluded_disk_files_are_never_unexpected() {
    let temp = TempDir::new().unwrap();
    let dir = fixture_dir(&temp);
    fs::write(dir.join(".DS_Store"), "junk").unwrap();
    fs::create_dir_all(dir.join(".git")).unwrap();

    let gf = GoldenFixtures::new(&dir).with_hint(HINT).with_flags("update");
    gf.test().unwrap();
    assert!(dir.join(".DS_Store").exists());
}

#[test]
fn duplicate_path_is_rejected() {
    let temp = TempDir::new().unwrap();
    let mut gf = GoldenFixtures::new(temp.path());
    gf.add("1", &["a", "b.txt"]).unwrap();
    match gf.add("2", &["a/b.txt"]).unwrap_err() {
        FixtureError::DuplicatePath(path) => assert_eq!(path, "a/b.txt"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn escaping_path_is_rejected() {
    let temp = TempDir::new().unwrap();
    let mut gf = GoldenFixtures::new(temp.path());
    assert!(matches!(
        gf.add("x", &["..", "outside.txt"]),
        Err(FixtureError::InvalidPath { .. })
    ));
}

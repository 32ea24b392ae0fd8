//! Input fixtures, single-file golden fixtures and settings-driven configs.

use golden_fixtures::config::registry;
use golden_fixtures::{Config, ConfigLoader, FixtureError, Fixtures};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn write(temp: &TempDir, rel: &str, content: &str) {
    let path = temp.path().join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn expected(files: &[(&str, &str)]) -> Fixtures {
    let mut fixtures = Fixtures::new();
    for (path, content) in files {
        fixtures.add(*content, &[*path]).unwrap();
    }
    fixtures
}

#[test]
fn input_fixtures_load_flat_and_nested_dirs() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("in/empty")).unwrap();
    write(&temp, "in/flat/a.txt", "file a\n");
    write(&temp, "in/flat/b.txt", "file b\n");
    write(&temp, "in/nested/a.txt", "file a\n");
    write(&temp, "in/nested/b.txt", "file b\n");
    write(&temp, "in/nested/c/d.txt", "file d\n");
    write(&temp, "in/nested/.hidden", "skip me\n");

    let config = Config::fixed("").with_dir(temp.path());

    assert!(config.input_fixtures(&["in", "empty"]).unwrap().is_empty());
    assert!(config.input_fixtures(&["in", "absent"]).unwrap().is_empty());
    assert_eq!(
        config.input_fixtures(&["in", "flat"]).unwrap(),
        expected(&[("a.txt", "file a\n"), ("b.txt", "file b\n")])
    );
    let nested = config.input_fixtures(&["in", "nested"]).unwrap();
    assert_eq!(
        nested,
        expected(&[
            ("a.txt", "file a\n"),
            ("b.txt", "file b\n"),
            ("c/d.txt", "file d\n"),
        ])
    );
    assert!(nested.diff(&nested.clone()).is_empty());
}

#[test]
fn input_fixture_reads_one_file() {
    let temp = TempDir::new().unwrap();
    write(&temp, "in/data.json", "{}");
    let config = Config::fixed("").with_dir(temp.path());

    assert_eq!(config.input_fixture(&["in", "data.json"]).unwrap(), b"{}");
    assert!(matches!(
        config.input_fixture(&["in", "nope.json"]),
        Err(FixtureError::LoadFailure { .. })
    ));
}

#[test]
fn golden_fixture_ignores_siblings() {
    let temp = TempDir::new().unwrap();
    write(&temp, "out/other.txt", "sibling");
    let update = Config::fixed("update").with_dir(temp.path());
    update.golden_fixture("hello", &["out", "greeting.txt"]).unwrap();
    assert_eq!(
        fs::read_to_string(temp.path().join("out/greeting.txt")).unwrap(),
        "hello"
    );
    assert!(temp.path().join("out/other.txt").exists());

    let compare = Config::fixed("").with_dir(temp.path());
    compare.golden_fixture("hello", &["out", "greeting.txt"]).unwrap();
    let err = compare
        .golden_fixture("goodbye", &["out", "greeting.txt"])
        .unwrap_err();
    assert!(err.to_string().contains("changed file: "));
}

#[test]
fn golden_fixture_rejects_empty_path() {
    let config = Config::fixed("");
    assert!(matches!(
        config.golden_fixture("x", &[] as &[&str]),
        Err(FixtureError::InvalidPath { .. })
    ));
}

#[test]
fn flag_config_updates_when_flag_set() {
    let temp = TempDir::new().unwrap();
    registry::set_flag_value("it-golden-update", true);
    let config = Config::flag("it-golden-update").with_dir(temp.path());

    let mut gf = config.golden_fixtures(&["out"]);
    gf.add("v1", &["a.txt"]).unwrap();
    gf.test().unwrap();
    assert_eq!(fs::read(temp.path().join("out/a.txt")).unwrap(), b"v1");
}

#[test]
fn settings_drive_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("golden-fixtures.toml"),
        "dir = \"fx\"\nenv_name = \"IT_SETTINGS_GOLDEN\"\nignore_unexpected = true\n",
    )
    .unwrap();
    let mut vars = HashMap::new();
    vars.insert("GOLDEN_FIXTURES__HINT".to_string(), "make bless".to_string());

    let settings = ConfigLoader::load_with_env(temp.path(), Some(vars)).unwrap();
    let config = Config::from_settings(&settings);
    assert_eq!(config.dir, std::path::PathBuf::from("fx"));
    assert_eq!(config.hint, "make bless");
    assert!(config.ignore_unexpected);
    assert_eq!(config.update.mode_tokens(), "");
}

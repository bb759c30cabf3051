use crate::support::{init_store_with_catalog, slor, CATALOG};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_command_timings() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("discover_store"))
        .stderr(predicate::str::contains("execute_command"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_env_filter_override() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .env("SLOR_LOG", "slor=debug")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

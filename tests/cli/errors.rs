use crate::support::{init_store_with_catalog, slor, CATALOG};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_unknown_format_exit_code_2() {
    slor()
        .args(["--format", "invalid", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    slor()
        .args(["--format", "json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_store_exit_code_3() {
    let dir = tempdir().unwrap();
    slor()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store not found"));
}

#[test]
fn test_malformed_tag_is_usage_error() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["list", "--tag", "envprod"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected key=value"));
}

#[test]
fn test_broken_catalog_file_is_data_error() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), "{not json");

    slor()
        .current_dir(dir.path())
        .args(["--format", "json", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_catalog\""))
        .stderr(predicate::str::contains("catalog.json"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    slor()
        .current_dir(dir.path())
        .args(["--quiet", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

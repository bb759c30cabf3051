use crate::support::{init_store_with_catalog, json_output, slor, CATALOG};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_list_shows_whole_catalog_without_filter() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ ] a Checkout availability (env=prod, team=payments)",
        ))
        .stdout(predicate::str::contains("[ ] d Batch jobs"));
}

#[test]
fn test_list_single_tag_filter() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    let listed = json_output(dir.path(), &["list", "--tag", "env=prod"]);
    let ids: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|slo| slo["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_list_tags_intersect() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    let listed = json_output(
        dir.path(),
        &["list", "--tag", "env=prod", "--tag", "team=payments"],
    );
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], "a");
}

#[test]
fn test_list_filter_with_no_match() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["list", "--tag", "env=dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No SLOs found"));
}

#[test]
fn test_list_records_format() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["--format", "records", "list", "--tag", "team=payments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=list slos=2"))
        .stdout(predicate::str::contains(
            "S a \"Checkout availability\" indicator=availability tags=env=prod,team=payments selected=no",
        ))
        .stdout(predicate::str::contains("S c \"Staging checkout\""));
}

#[test]
fn test_list_marks_combined() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["combine", "toggle", "b"])
        .assert()
        .success();

    slor()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] b Search latency"))
        .stdout(predicate::str::contains("[ ] a Checkout availability"));
}

#[test]
fn test_list_catalog_override() {
    let dir = tempdir().unwrap();
    slor().current_dir(dir.path()).arg("init").assert().success();

    let elsewhere = dir.path().join("other.yaml");
    std::fs::write(&elsewhere, "- id: yaml-slo\n  document:\n    name: From YAML\n").unwrap();

    slor()
        .current_dir(dir.path())
        .args(["--catalog", "other.yaml", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] yaml-slo From YAML"));
}

#[test]
fn test_tags_first_seen_order() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("env=prod\nteam=payments\nteam=search\nenv=staging\n");
}

#[test]
fn test_tags_json() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    let tags = json_output(dir.path(), &["tags"]);
    assert_eq!(tags.as_array().unwrap().len(), 4);
    assert_eq!(tags[0]["key"], "env");
    assert_eq!(tags[0]["value"], "prod");
}

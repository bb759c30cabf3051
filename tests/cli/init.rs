use crate::support::slor;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    slor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: slor"))
        .stdout(predicate::str::contains("combine"))
        .stdout(predicate::str::contains("tags"));
}

#[test]
fn test_version_flag() {
    slor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slor"));
}

#[test]
fn test_no_command_prints_banner() {
    slor()
        .assert()
        .success()
        .stdout(predicate::str::contains("slor --help"));
}

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    slor()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized slor store"));

    assert!(dir.path().join(".slor/config.toml").exists());
    assert!(dir.path().join(".slor/slos").is_dir());
    assert!(dir.path().join(".slor/user_storage.db").exists());
    assert!(dir.path().join(".slor/.gitignore").exists());
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    slor().current_dir(dir.path()).arg("init").assert().success();
    slor().current_dir(dir.path()).arg("init").assert().success();
}

#[test]
fn test_init_explicit_store_records() {
    let dir = tempdir().unwrap();

    slor()
        .current_dir(dir.path())
        .args(["--store", "custom-store", "--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H slor=1 records=1 store="))
        .stdout(predicate::str::contains("mode=init status=ok"));

    assert!(dir.path().join("custom-store/config.toml").exists());
}

#[test]
fn test_discovery_from_subdirectory() {
    let dir = tempdir().unwrap();
    slor().current_dir(dir.path()).arg("init").assert().success();

    let nested = dir.path().join("deep/nested");
    std::fs::create_dir_all(&nested).unwrap();

    slor()
        .current_dir(&nested)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No SLOs found"));
}

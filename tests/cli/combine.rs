use crate::support::{init_store_with_catalog, json_output, slor, write_catalog, CATALOG};
use predicates::prelude::*;
use tempfile::tempdir;

fn combined_ids(dir: &std::path::Path) -> Vec<String> {
    let shown = json_output(dir, &["combine", "show"]);
    shown["selected_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_toggle_saves_and_show_lists() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["combine", "toggle", "a", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 combined SLO(s)"));

    slor()
        .current_dir(dir.path())
        .args(["combine", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Combined SLOs (2):"))
        .stdout(predicate::str::contains("[x] a Checkout availability"))
        .stdout(predicate::str::contains("[x] c Staging checkout"));

    assert_eq!(combined_ids(dir.path()), vec!["a", "c"]);
}

#[test]
fn test_toggle_twice_in_one_call_is_unchanged() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    let result = json_output(dir.path(), &["combine", "toggle", "a", "a"]);
    assert_eq!(result["status"], "unchanged");
    assert_eq!(result["dirty"], false);
    assert!(combined_ids(dir.path()).is_empty());
}

#[test]
fn test_toggle_off_a_saved_selection() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    json_output(dir.path(), &["combine", "toggle", "a", "b"]);
    let result = json_output(dir.path(), &["combine", "toggle", "a"]);
    assert_eq!(result["status"], "saved");
    assert_eq!(combined_ids(dir.path()), vec!["b"]);
}

#[test]
fn test_dry_run_does_not_persist() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    let result = json_output(dir.path(), &["combine", "toggle", "--dry-run", "b"]);
    assert_eq!(result["status"], "dry_run");
    assert_eq!(result["dirty"], true);
    assert_eq!(result["selected_ids"][0], "b");

    slor()
        .current_dir(dir.path())
        .args(["combine", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No SLOs combined"));
}

#[test]
fn test_unknown_id_toggles_nothing() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["--format", "json", "combine", "toggle", "a", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"not_found\""))
        .stderr(predicate::str::contains("missing"));

    assert!(combined_ids(dir.path()).is_empty());
}

#[test]
fn test_clear_deselects_everything() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    json_output(dir.path(), &["combine", "toggle", "a", "b", "d"]);

    slor()
        .current_dir(dir.path())
        .args(["--format", "records", "combine", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=combine.clear status=saved selected=0",
        ));

    assert!(combined_ids(dir.path()).is_empty());
}

#[test]
fn test_clear_empty_selection_is_unchanged() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    slor()
        .current_dir(dir.path())
        .args(["combine", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection unchanged"));
}

#[test]
fn test_removed_catalog_entries_are_pruned() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    json_output(dir.path(), &["combine", "toggle", "a", "b", "c"]);

    // b disappears from the catalog
    write_catalog(
        dir.path(),
        r#"[{"id": "a"}, {"id": "c"}, {"id": "d"}]"#,
    );

    assert_eq!(combined_ids(dir.path()), vec!["a", "c"]);

    // The next save writes the pruned selection back
    json_output(dir.path(), &["combine", "toggle", "d"]);
    write_catalog(dir.path(), CATALOG);
    assert_eq!(combined_ids(dir.path()), vec!["a", "c", "d"]);
}

#[test]
fn test_show_records_lists_combined() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    json_output(dir.path(), &["combine", "toggle", "b"]);

    slor()
        .current_dir(dir.path())
        .args(["--format", "records", "combine", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=combine.show slos=1"))
        .stdout(predicate::str::contains("S b \"Search latency\""));
}

#[test]
fn test_show_reports_last_save() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    let before = json_output(dir.path(), &["combine", "show"]);
    assert!(before["saved_at"].is_null());

    json_output(dir.path(), &["combine", "toggle", "a"]);
    let after = json_output(dir.path(), &["combine", "show"]);
    assert!(after["saved_at"].is_string());
}

#[test]
fn test_failed_save_exits_1() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    let conn = rusqlite::Connection::open(dir.path().join(".slor/user_storage.db")).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_insert BEFORE INSERT ON user_storage
         BEGIN SELECT RAISE(ABORT, 'storage is read-only'); END;
         CREATE TRIGGER reject_update BEFORE UPDATE ON user_storage
         BEGIN SELECT RAISE(ABORT, 'storage is read-only'); END;",
    )
    .unwrap();
    drop(conn);

    slor()
        .current_dir(dir.path())
        .args(["--format", "json", "combine", "toggle", "a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"code\":1"))
        .stderr(predicate::str::contains("\"type\":\"failed_operation\""))
        .stderr(predicate::str::contains("storage is read-only"));

    assert!(combined_ids(dir.path()).is_empty());
}

#[test]
fn test_clear_writes_back_pruned_ids() {
    let dir = tempdir().unwrap();
    init_store_with_catalog(dir.path(), CATALOG);

    json_output(dir.path(), &["combine", "toggle", "b"]);

    // Only the selected SLO leaves the catalog
    write_catalog(dir.path(), r#"[{"id": "a"}, {"id": "c"}, {"id": "d"}]"#);

    let result = json_output(dir.path(), &["combine", "clear"]);
    assert_eq!(result["status"], "saved");

    // b does not come back with the catalog entry
    write_catalog(dir.path(), CATALOG);
    assert!(combined_ids(dir.path()).is_empty());
}

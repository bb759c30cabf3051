use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for slor with no ambient logging or catalog overrides
pub fn slor() -> Command {
    let mut cmd = cargo_bin_cmd!("slor");
    cmd.env_remove("RUST_LOG")
        .env_remove("SLOR_LOG")
        .env_remove("SLOR_CATALOG");
    cmd
}

/// Four SLOs: two prod, one staging, one untagged
pub const CATALOG: &str = r#"[
  {"id": "a", "document": {"name": "Checkout availability", "indicator": "availability",
    "tags": [{"key": "env", "values": ["prod"]}, {"key": "team", "values": ["payments"]}]}},
  {"id": "b", "document": {"name": "Search latency",
    "tags": [{"key": "env", "values": ["prod"]}, {"key": "team", "values": ["search"]}]}},
  {"id": "c", "document": {"name": "Staging checkout",
    "tags": [{"key": "env", "values": ["staging"]}, {"key": "team", "values": ["payments"]}]}},
  {"id": "d", "document": {"name": "Batch jobs"}}
]"#;

/// Initialize a store in `dir` and write `catalog` as its only catalog file
pub fn init_store_with_catalog(dir: &Path, catalog: &str) {
    slor().current_dir(dir).arg("init").assert().success();
    write_catalog(dir, catalog);
}

pub fn write_catalog(dir: &Path, catalog: &str) {
    fs::write(dir.join(".slor/slos/catalog.json"), catalog).unwrap();
}

/// Run a command and parse its stdout as JSON
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = slor()
        .current_dir(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

//! SLO catalog loading
//!
//! The catalog is a directory of JSON or YAML files. Each file holds either
//! a single record or a list of records. Files are read in sorted path
//! order so the catalog order is stable between runs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{Result, SlorError};
use crate::slo::SloRecord;
use crate::trace_time;

const CATALOG_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<SloRecord>),
    One(SloRecord),
}

impl CatalogFile {
    fn into_records(self) -> Vec<SloRecord> {
        match self {
            CatalogFile::Many(records) => records,
            CatalogFile::One(record) => vec![record],
        }
    }
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CATALOG_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Parse one catalog file, choosing the format by extension
pub fn read_catalog_file(path: &Path) -> Result<Vec<SloRecord>> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed: CatalogFile = if is_json {
        serde_json::from_str(&content).map_err(|e| SlorError::invalid_catalog(path, e))?
    } else {
        serde_yaml::from_str(&content).map_err(|e| SlorError::invalid_catalog(path, e))?
    };

    Ok(parsed.into_records())
}

/// Load the catalog from a file or a directory tree.
///
/// A missing directory is an empty catalog. Records whose id was already
/// seen are skipped with a warning; the first occurrence wins.
pub fn load_catalog(path: &Path) -> Result<Vec<SloRecord>> {
    let start = Instant::now();

    let files: Vec<_> = if path.is_file() {
        vec![path.to_path_buf()]
    } else if path.is_dir() {
        let mut files = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| SlorError::Other(e.to_string()))?;
            if entry.file_type().is_file() && is_catalog_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files
    } else {
        tracing::debug!(path = %path.display(), "catalog path missing, using empty catalog");
        Vec::new()
    };

    let mut seen = HashSet::new();
    let mut catalog = Vec::new();

    for file in &files {
        for record in read_catalog_file(file)? {
            if seen.insert(record.id.clone()) {
                catalog.push(record);
            } else {
                tracing::warn!(
                    id = %record.id,
                    file = %file.display(),
                    "duplicate SLO id in catalog, keeping first"
                );
            }
        }
    }

    trace_time!(start, "load_catalog", records = catalog.len());
    Ok(catalog)
}

//! SQLite schema for the user document store

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Result, SlorError};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
-- One JSON document per (collection, document_id)
CREATE TABLE IF NOT EXISTS user_storage (
    collection TEXT NOT NULL,
    document_id TEXT NOT NULL,
    document TEXT NOT NULL,
    updated TEXT NOT NULL,
    PRIMARY KEY (collection, document_id)
);

-- Storage metadata
CREATE TABLE IF NOT EXISTS storage_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Fresh or current schema
    Ok,
    /// An older schema was brought up to date; stored documents are kept
    Migrated { from: i32 },
}

fn stored_version(conn: &Connection) -> Result<Option<i32>> {
    let exists: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'storage_meta'",
        [],
        |r| r.get(0),
    )?;
    if exists == 0 {
        return Ok(None);
    }

    let version: Option<String> = conn
        .query_row(
            "SELECT value FROM storage_meta WHERE key = 'schema_version'",
            [],
            |r| r.get(0),
        )
        .optional()?;

    version
        .map(|v| {
            v.parse::<i32>()
                .map_err(|_| SlorError::invalid_value("user storage schema version", v))
        })
        .transpose()
}

/// Create or upgrade the schema.
///
/// `user_storage` is the only copy of the user's selection, so it is never
/// dropped: an older schema is upgraded in place and a newer one is refused.
pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let mut result = SchemaCreateResult::Ok;

    if let Some(version) = stored_version(conn)? {
        if version > CURRENT_SCHEMA_VERSION {
            return Err(SlorError::InvalidStore {
                reason: format!(
                    "user storage schema version {} is newer than supported version {}",
                    version, CURRENT_SCHEMA_VERSION
                ),
            });
        }
        if version < CURRENT_SCHEMA_VERSION {
            result = SchemaCreateResult::Migrated { from: version };
        }
    }

    // Every earlier version shares the current table layout
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR REPLACE INTO storage_meta (key, value) VALUES ('schema_version', ?1)",
        [CURRENT_SCHEMA_VERSION.to_string()],
    )?;

    Ok(result)
}

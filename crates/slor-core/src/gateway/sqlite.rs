//! SQLite-backed user document store

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};

use super::schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};
use super::{DocumentKey, PersistenceGateway, SelectionDocument};
use crate::error::{Result, SlorError};
use crate::map_db_err;

/// Database filename inside the store root
pub const USER_STORAGE_FILE: &str = "user_storage.db";

/// Per-user document store holding one JSON document per key
#[derive(Debug)]
pub struct UserStorage {
    conn: Connection,
}

impl UserStorage {
    /// Open or create the user storage database at the given store root
    #[tracing::instrument(skip(store_root), fields(path = %store_root.display()))]
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(USER_STORAGE_FILE);
        let conn = Connection::open(&db_path).map_err(|e| {
            SlorError::Database(format!(
                "failed to open user storage at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_db_err!("enable WAL mode", e))?;

        Self::with_connection(conn)
    }

    /// Open a throwaway in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        if let SchemaCreateResult::Migrated { from } = create_schema(&conn)? {
            tracing::info!(
                from,
                to = CURRENT_SCHEMA_VERSION,
                "migrated user storage schema"
            );
        }
        Ok(Self { conn })
    }

    /// When the document was last written, if ever
    pub fn last_saved(&self, key: &DocumentKey) -> Result<Option<DateTime<Utc>>> {
        let updated: Option<String> = self
            .conn
            .query_row(
                "SELECT updated FROM user_storage WHERE collection = ?1 AND document_id = ?2",
                [&key.collection, &key.document_id],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| map_db_err!("read document timestamp", e))?;

        updated
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| SlorError::invalid_value("stored timestamp", e))
            })
            .transpose()
    }
}

impl PersistenceGateway for UserStorage {
    fn load(&self, key: &DocumentKey) -> Result<Option<SelectionDocument>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM user_storage WHERE collection = ?1 AND document_id = ?2",
                [&key.collection, &key.document_id],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| map_db_err!("load document", e))?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &DocumentKey, document: &SelectionDocument) -> Result<()> {
        let json = serde_json::to_string(document)?;
        let updated = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin save transaction", e))?;
        tx.execute(
            "INSERT INTO user_storage (collection, document_id, document, updated)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (collection, document_id)
             DO UPDATE SET document = excluded.document, updated = excluded.updated",
            [&key.collection, &key.document_id, &json, &updated],
        )
        .map_err(|e| map_db_err!("write document", e))?;
        tx.commit()
            .map_err(|e| map_db_err!("commit save transaction", e))?;

        tracing::debug!(
            collection = %key.collection,
            document_id = %key.document_id,
            selected = document.selected_ids.len(),
            "document_saved"
        );
        Ok(())
    }
}

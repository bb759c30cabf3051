//! Persistence boundary for the aggregated selection
//!
//! The selection lives in a per-user document store addressed by a
//! collection name and a document id. The engine only needs two calls:
//! read the current document and overwrite it.

mod memory;
mod schema;
mod sqlite;

pub use memory::MemoryGateway;
pub use sqlite::{UserStorage, USER_STORAGE_FILE};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selection::SelectionSet;

/// Default collection holding the combined-SLO document
pub const DEFAULT_COLLECTION: &str = "slo_collection_v1";

/// Default document id inside [`DEFAULT_COLLECTION`]
pub const DEFAULT_DOCUMENT_ID: &str = "slo_document";

/// Address of a document in the user store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub collection: String,
    pub document_id: String,
}

impl DocumentKey {
    pub fn new(collection: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            document_id: document_id.into(),
        }
    }
}

impl Default for DocumentKey {
    fn default() -> Self {
        Self::new(DEFAULT_COLLECTION, DEFAULT_DOCUMENT_ID)
    }
}

/// Persisted form of the aggregated selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDocument {
    #[serde(default)]
    pub selected_ids: SelectionSet,
}

impl SelectionDocument {
    pub fn new(selected_ids: SelectionSet) -> Self {
        Self { selected_ids }
    }
}

/// Read/write access to the persisted selection.
///
/// Both calls are all-or-nothing. `load` returns `Ok(None)` when the
/// document has never been written.
pub trait PersistenceGateway {
    fn load(&self, key: &DocumentKey) -> Result<Option<SelectionDocument>>;

    fn save(&mut self, key: &DocumentKey, document: &SelectionDocument) -> Result<()>;
}

//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::gateway::{DocumentKey, DEFAULT_COLLECTION, DEFAULT_DOCUMENT_ID};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Default catalog directory, relative to the store root
pub const DEFAULT_CATALOG_DIR: &str = "slos";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Catalog location; relative paths resolve against the store root
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,

    /// Where the combined selection is persisted
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Address of the combined-selection document in user storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_collection")]
    pub collection: String,

    #[serde(default = "default_document_id")]
    pub document_id: String,
}

impl StorageConfig {
    pub fn document_key(&self) -> DocumentKey {
        DocumentKey::new(&self.collection, &self.document_id)
    }
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_catalog_dir() -> String {
    DEFAULT_CATALOG_DIR.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_document_id() -> String {
    DEFAULT_DOCUMENT_ID.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            collection: default_collection(),
            document_id: default_document_id(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            catalog_dir: default_catalog_dir(),
            storage: StorageConfig::default(),
        }
    }
}

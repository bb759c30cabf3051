//! Store configuration for slor
//!
//! Configuration is stored in `.slor/config.toml`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{Result, SlorError};

pub use types::{StorageConfig, StoreConfig, DEFAULT_CATALOG_DIR, STORE_FORMAT_VERSION};

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SlorError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.version > STORE_FORMAT_VERSION {
            bail_invalid!("store format version", self.version);
        }
        if self.storage.collection.trim().is_empty() {
            bail_invalid!("storage.collection", "(empty)");
        }
        if self.storage.document_id.trim().is_empty() {
            bail_invalid!("storage.document_id", "(empty)");
        }
        Ok(())
    }
}

//! Store management for slor
//!
//! The store is the `.slor/` directory holding the configuration, the
//! catalog files and the user storage database.

mod io;
pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::load_catalog;
use crate::config::StoreConfig;
use crate::controller::{CombinationController, Completion, LoadReport};
use crate::error::{Result, SlorError};
use crate::gateway::{DocumentKey, PersistenceGateway, SelectionDocument, UserStorage};
use crate::slo::SloRecord;
pub use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// The slor store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// Per-user document storage
    storage: UserStorage,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(SlorError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        let storage = UserStorage::open(path)?;

        Ok(Store {
            root: path.to_path_buf(),
            config,
            storage,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR))
    }

    /// Initialize a store at an explicit store root path (idempotent).
    pub fn init_at(store_root: &Path) -> Result<Self> {
        if store_root.exists() && !store_root.is_dir() {
            return Err(SlorError::InvalidStore {
                reason: format!("{} exists and is not a directory", store_root.display()),
            });
        }

        fs::create_dir_all(store_root)?;

        // Avoid rewriting an existing config on subsequent init
        let config_path = store_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            let config = StoreConfig::default();
            config.save(&config_path)?;
            config
        };

        let store_root_buf = store_root.to_path_buf();
        let catalog_dir = Self::resolve_catalog_dir(&store_root_buf, &config);
        fs::create_dir_all(&catalog_dir)?;

        io::ensure_store_gitignore(store_root)?;

        let storage = UserStorage::open(store_root)?;

        Ok(Store {
            root: store_root_buf,
            config,
            storage,
        })
    }

    fn resolve_catalog_dir(root: &Path, config: &StoreConfig) -> PathBuf {
        let configured = Path::new(&config.catalog_dir);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            root.join(configured)
        }
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Directory the catalog is read from
    pub fn catalog_dir(&self) -> PathBuf {
        Self::resolve_catalog_dir(&self.root, &self.config)
    }

    /// Where the combined selection lives in user storage
    pub fn document_key(&self) -> DocumentKey {
        self.config.storage.document_key()
    }

    pub fn storage(&self) -> &UserStorage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut UserStorage {
        &mut self.storage
    }

    /// Load the catalog from `override_path` or the configured directory
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<Vec<SloRecord>> {
        match override_path {
            Some(path) => load_catalog(path),
            None => load_catalog(&self.catalog_dir()),
        }
    }

    /// Controller with the catalog set and the persisted selection loaded,
    /// plus what the load did (degraded read, pruned ids)
    pub fn mount_controller(
        &self,
        catalog: Vec<SloRecord>,
    ) -> (CombinationController, LoadReport) {
        let mut controller = CombinationController::new(self.document_key());
        controller.set_catalog(catalog);
        let report = match controller.mount(&self.storage) {
            Completion::Applied(report) => report,
            Completion::Discarded => LoadReport::default(),
        };
        (controller, report)
    }

    /// Overwrite the stored selection with the controller's committed one.
    ///
    /// Used after mounting pruned ids, which leaves the controller clean
    /// while storage still lists them.
    pub fn write_back(&mut self, controller: &CombinationController) -> Result<()> {
        let key = self.document_key();
        let document = SelectionDocument::new(controller.aggregated().clone());
        self.storage.save(&key, &document)
    }
}

use std::path::{Path, PathBuf};

use crate::error::{Result, SlorError};

/// Store directory name
pub const DEFAULT_STORE_DIR: &str = ".slor";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Gitignore filename
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Walk up from `root` until a directory containing `.slor/` is found
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(SlorError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}

use std::fs;
use std::path::Path;

use super::paths::GITIGNORE_FILE;
use crate::error::Result;
use crate::gateway::USER_STORAGE_FILE;

/// Keep the user storage database and its WAL files out of version control
pub(crate) fn ensure_store_gitignore(store_root: &Path) -> Result<()> {
    let path = store_root.join(GITIGNORE_FILE);
    let wal = format!("{}-*", USER_STORAGE_FILE);
    let required = [USER_STORAGE_FILE, wal.as_str()];

    if !path.exists() {
        fs::write(&path, format!("{}\n{}\n", required[0], required[1]))?;
        return Ok(());
    }

    let mut content = fs::read_to_string(&path)?;
    let mut changed = false;

    for entry in required {
        if !content.lines().any(|l| l.trim() == entry) {
            if !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(entry);
            content.push('\n');
            changed = true;
        }
    }

    if changed {
        fs::write(&path, content)?;
    }

    Ok(())
}

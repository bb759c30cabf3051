//! In-process gateway with failure injection

use std::collections::HashMap;

use super::{DocumentKey, PersistenceGateway, SelectionDocument};
use crate::error::{Result, SlorError};

/// Map-backed [`PersistenceGateway`].
///
/// `fail_load` / `fail_save` make the next calls fail until cleared, which
/// is how the controller's degrade and retry paths are exercised.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    documents: HashMap<DocumentKey, SelectionDocument>,
    pub fail_load: bool,
    pub fail_save: bool,
    saves: usize,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway already holding `document` under `key`
    pub fn with_document(key: DocumentKey, document: SelectionDocument) -> Self {
        let mut gateway = Self::default();
        gateway.documents.insert(key, document);
        gateway
    }

    pub fn document(&self, key: &DocumentKey) -> Option<&SelectionDocument> {
        self.documents.get(key)
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self, key: &DocumentKey) -> Result<Option<SelectionDocument>> {
        if self.fail_load {
            return Err(SlorError::db_operation("load document", "store unavailable"));
        }
        Ok(self.documents.get(key).cloned())
    }

    fn save(&mut self, key: &DocumentKey, document: &SelectionDocument) -> Result<()> {
        if self.fail_save {
            return Err(SlorError::db_operation("save document", "store unavailable"));
        }
        self.documents.insert(key.clone(), document.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_is_none() {
        let gateway = MemoryGateway::new();
        assert!(gateway.load(&DocumentKey::default()).unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut gateway = MemoryGateway::new();
        let key = DocumentKey::default();
        let doc = SelectionDocument::new(["x"].into_iter().collect());

        gateway.save(&key, &doc).unwrap();
        assert_eq!(gateway.load(&key).unwrap(), Some(doc));
        assert_eq!(gateway.save_count(), 1);
    }

    #[test]
    fn test_failing_save_leaves_document_untouched() {
        let key = DocumentKey::default();
        let original = SelectionDocument::new(["a"].into_iter().collect());
        let mut gateway = MemoryGateway::with_document(key.clone(), original.clone());
        gateway.fail_save = true;

        let result = gateway.save(&key, &SelectionDocument::default());
        assert!(result.is_err());
        assert_eq!(gateway.document(&key), Some(&original));
        assert_eq!(gateway.save_count(), 0);
    }
}

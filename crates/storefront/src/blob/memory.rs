//! In-memory blob store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{BlobError, BlobStore};

/// A [`BlobStore`] backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        let values = self.values.read().map_err(|_| BlobError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobError> {
        let mut values = self.values.write().map_err(|_| BlobError::Poisoned)?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlobError> {
        let mut values = self.values.write().map_err(|_| BlobError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryBlobStore::new();
        assert!(store.get("cart").expect("get").is_none());

        store.set("cart", "[]").expect("set");
        assert_eq!(store.get("cart").expect("get").as_deref(), Some("[]"));

        store.set("cart", "[1]").expect("overwrite");
        assert_eq!(store.get("cart").expect("get").as_deref(), Some("[1]"));

        store.remove("cart").expect("remove");
        assert!(store.get("cart").expect("get").is_none());

        // Removing an absent key is fine
        store.remove("cart").expect("remove absent");
    }
}

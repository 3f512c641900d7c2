//! Key-value persistence
//!
//! Features:
//! - `KeyValueStore` trait mirroring the LocalStorage get/set surface
//! - `MemoryStore` for native runs and tests
//! - `LocalStorage` wrapper over `window.localStorage` (wasm32 only)

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

/// String key-value store with LocalStorage semantics
///
/// Methods take `&self`; implementations use interior mutability the way the
/// browser's `Storage` object does.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if it was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::KeyValueStore;
    use crate::error::{Result, WordCounterError};

    /// `window.localStorage`
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        /// Open the window's LocalStorage
        pub fn open() -> Result<Self> {
            let storage = web_sys::window()
                .ok_or_else(|| WordCounterError::Storage("no window".to_string()))?
                .local_storage()
                .map_err(|e| WordCounterError::Storage(format!("{:?}", e)))?
                .ok_or_else(|| {
                    WordCounterError::Storage("LocalStorage unavailable".to_string())
                })?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.storage
                .get_item(key)
                .map_err(|e| WordCounterError::Storage(format!("{:?}", e)))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.storage
                .set_item(key, value)
                .map_err(|e| WordCounterError::Storage(format!("{:?}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_item("missing").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }
}

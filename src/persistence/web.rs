//! Browser LocalStorage store (wasm32)

use web_sys::Storage;

use super::{KeyValueStore, StoreError};

/// LocalStorage with every key namespaced under a prefix
pub struct LocalStorageStore {
    storage: Storage,
    prefix: String,
}

impl LocalStorageStore {
    pub fn open(prefix: &str) -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not available".into()))?;

        Ok(Self {
            storage,
            prefix: prefix.to_string(),
        })
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(&self.full_key(key))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(&self.full_key(key), value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(&self.full_key(key))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}

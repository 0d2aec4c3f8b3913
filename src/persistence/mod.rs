//! Session persistence
//!
//! The saved game is two flat values in a key-value store, overwritten
//! wholesale on every change:
//! - `savedWord`: the root word
//! - `savedWords`: the used words as a JSON array
//!
//! Backends:
//! - [`MemoryStore`]: in-process map (tests, `--ephemeral`)
//! - [`FileStore`]: JSON object file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

use std::collections::HashMap;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend could not be reached (e.g. LocalStorage disabled)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed preference store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Write several keys as one update. If any write fails, keys already
    /// written are put back to their previous values.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        let mut previous = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let written = self
                .get(key)
                .and_then(|old| self.set(key, value).map(|()| old));
            match written {
                Ok(old) => previous.push((*key, old)),
                Err(e) => {
                    rollback(self, previous);
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

fn rollback<S: KeyValueStore + ?Sized>(store: &mut S, previous: Vec<(&str, Option<String>)>) {
    for (key, old) in previous.into_iter().rev() {
        let restored = match old {
            Some(value) => store.set(key, &value),
            None => store.remove(key),
        };
        if let Err(e) = restored {
            log::warn!("Could not restore {key} after failed write: {e}");
        }
    }
}

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("savedWord").unwrap(), None);

        store.set("savedWord", "silkworm").unwrap();
        store.set("savedWord", "blizzard").unwrap();
        assert_eq!(store.get("savedWord").unwrap().as_deref(), Some("blizzard"));
        assert_eq!(store.len(), 1);

        store.remove("savedWord").unwrap();
        assert!(store.is_empty());
    }

    /// Memory store that refuses writes to one key
    struct RefusingStore {
        inner: MemoryStore,
        refuse: &'static str,
    }

    impl KeyValueStore for RefusingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.refuse {
                return Err(StoreError::Unavailable(format!("{key} is read-only")));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_set_many_rolls_back_on_failure() {
        let mut store = RefusingStore {
            inner: MemoryStore::new(),
            refuse: "savedWords",
        };
        store.inner.set("savedWord", "silkworm").unwrap();

        let result = store.set_many(&[("savedWord", "blizzard"), ("fresh", "x"), ("savedWords", "[]")]);
        assert!(result.is_err());
        assert_eq!(store.get("savedWord").unwrap().as_deref(), Some("silkworm"));
        assert_eq!(store.get("fresh").unwrap(), None);
    }

    #[test]
    fn test_set_many_writes_all() {
        let mut store = MemoryStore::new();
        store
            .set_many(&[("savedWord", "silkworm"), ("savedWords", "[]")])
            .unwrap();
        assert_eq!(store.len(), 2);
    }
}

//! Game settings
//!
//! Persisted separately from the saved session: a JSON file natively,
//! LocalStorage on the web. Missing fields take their defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LOCALE, MIN_WORD_LENGTH};

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Resources ===
    /// Root word list (None = bundled start words)
    pub word_list_path: Option<PathBuf>,
    /// Word-per-line dictionary used to decide if answers are real
    pub dictionary_path: PathBuf,

    // === Rules ===
    /// Dictionary locale
    pub locale: String,
    /// Shortest accepted answer, in characters
    pub min_word_length: usize,

    // === Persistence ===
    /// Session file (native)
    pub save_path: PathBuf,
    /// Key prefix for LocalStorage (web)
    pub storage_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_list_path: None,
            dictionary_path: PathBuf::from("/usr/share/dict/words"),

            locale: DEFAULT_LOCALE.to_string(),
            min_word_length: MIN_WORD_LENGTH,

            save_path: PathBuf::from("word-scramble-session.json"),
            storage_prefix: "word_scramble_".to_string(),
        }
    }
}

impl Settings {
    /// Default settings file name (native)
    pub const DEFAULT_PATH: &'static str = "word-scramble.json";

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "word_scramble_settings";

    /// Shortest answer length actually enforced (never below the game minimum)
    pub fn effective_min_word_length(&self) -> usize {
        self.min_word_length.max(MIN_WORD_LENGTH)
    }

    /// Parse settings JSON
    pub fn from_json(json: &str) -> Result<Self, crate::StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn try_load_from(path: impl AsRef<std::path::Path>) -> Result<Self, crate::StoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from a JSON file, using defaults if absent or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({}: {e})", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<(), crate::StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use crate::persistence::{KeyValueStore, LocalStorageStore};

        let json = LocalStorageStore::open("").and_then(|store| store.get(Self::STORAGE_KEY));
        let loaded = match json {
            Ok(Some(json)) => Self::from_json(&json),
            Ok(None) => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => Err(e),
        };

        loaded.unwrap_or_else(|e| {
            log::warn!("Using default settings ({e})");
            Self::default()
        })
    }
}

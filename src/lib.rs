//! Word Scramble - build words from the letters of a root word
//!
//! Core modules:
//! - `game`: Session controller, validation rules, random root selection
//! - `words`: Root word list (bundled resource with fallback)
//! - `dictionary`: Word validity oracle backed by a static word list
//! - `persistence`: Key-value stores for the saved session
//! - `settings`: Startup configuration
//! - `terminal`: Line-based front end (native only)
//! - `web`: WebAssembly front end (wasm32 only)

pub mod dictionary;
pub mod game;
pub mod persistence;
pub mod settings;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
#[cfg(target_arch = "wasm32")]
pub mod web;
pub mod words;

pub use dictionary::{Dictionary, WordValidityOracle};
pub use game::{Accepted, GamePhase, GameSession, Rejection, Session, SessionEvent};
pub use persistence::{KeyValueStore, MemoryStore, StoreError};
pub use settings::Settings;
pub use words::WordList;

/// Game configuration constants
pub mod consts {
    /// Root word used when the word list is missing or empty
    pub const FALLBACK_ROOT_WORD: &str = "silkworm";
    /// Answers shorter than this are never real
    pub const MIN_WORD_LENGTH: usize = 3;
    /// Dictionary locale used by the validity check
    pub const DEFAULT_LOCALE: &str = "en";

    /// Store key holding the current root word
    pub const SAVED_WORD_KEY: &str = "savedWord";
    /// Store key holding the used words (JSON array)
    pub const SAVED_WORDS_KEY: &str = "savedWords";
}

/// Lowercase and trim a player-entered word
#[inline]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

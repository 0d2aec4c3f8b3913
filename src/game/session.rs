//! Game session controller
//!
//! Owns the root word, the accepted answers and the injected capabilities
//! (store, dictionary, random source). Front ends call [`GameSession::submit_answer`]
//! and render from [`GameSession::row`] / [`GameSession::drain_events`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::RandomSource;
use super::rules::{is_original, is_possible, is_real};
use crate::consts::{DEFAULT_LOCALE, MIN_WORD_LENGTH, SAVED_WORD_KEY, SAVED_WORDS_KEY};
use crate::dictionary::WordValidityOracle;
use crate::normalize_word;
use crate::persistence::{KeyValueStore, StoreError};
use crate::settings::Settings;
use crate::words::WordList;

/// Whether a root word has been assigned yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No root word (before the first start or restore)
    NoSession,
    /// Root word assigned, answers may be empty
    Active,
}

/// Persisted game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub root_word: String,
    /// Accepted answers (newest first)
    pub used_words: Vec<String>,
}

impl Session {
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
        }
    }
}

/// List view updates for the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Whole list replaced (new game or restore)
    Reloaded,
    /// One row inserted at `index`
    Inserted { index: usize },
}

/// A successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    /// Row the word was inserted at (always 0)
    pub index: usize,
}

/// Why an answer was refused. `Display` is the alert title.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("The word was not possible")]
    Impossible { root: String },

    #[error("The word was the same as the keyword or it has been used already")]
    NotOriginal,

    #[error("The word was too short or not recognised")]
    NotReal,

    /// No root word assigned yet
    #[error("There is no game in progress")]
    NoGame,
}

impl Rejection {
    pub fn title(&self) -> String {
        self.to_string()
    }

    /// Alert body
    pub fn message(&self) -> String {
        match self {
            Rejection::Impossible { root } => format!("You can't spell that word from {root}!"),
            Rejection::NotOriginal => "Be more original!".to_string(),
            Rejection::NotReal => "You can't just make them up, you know!".to_string(),
            Rejection::NoGame => "Start a new game first.".to_string(),
        }
    }
}

/// The game controller
pub struct GameSession {
    words: WordList,
    store: Box<dyn KeyValueStore>,
    oracle: Box<dyn WordValidityOracle>,
    rng: Box<dyn RandomSource>,
    locale: String,
    min_word_length: usize,
    session: Option<Session>,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Create a controller with no root word yet; call [`launch`](Self::launch)
    /// or [`start_game`](Self::start_game) next.
    pub fn new(
        words: WordList,
        store: Box<dyn KeyValueStore>,
        oracle: Box<dyn WordValidityOracle>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            words,
            store,
            oracle,
            rng,
            locale: DEFAULT_LOCALE.to_string(),
            min_word_length: MIN_WORD_LENGTH,
            session: None,
            events: Vec::new(),
        }
    }

    /// Apply locale and length rules from settings
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.locale = settings.locale.clone();
        self.min_word_length = settings.effective_min_word_length();
        self
    }

    /// Restore the saved session, or start a new game if there is none
    pub fn launch(&mut self) {
        if !self.restore() {
            self.start_game();
        }
    }

    /// Pick a new root word and clear all answers
    pub fn start_game(&mut self) {
        let root = self.words.pick(self.rng.as_mut()).to_lowercase();
        log::info!("New game with root word {root}");

        self.session = Some(Session::new(root));
        self.events.push(SessionEvent::Reloaded);
        self.persist();
    }

    /// Validate an answer and record it if accepted
    pub fn submit_answer(&mut self, candidate: &str) -> Result<Accepted, Rejection> {
        let word = normalize_word(candidate);

        let Some(session) = self.session.as_mut() else {
            log::warn!("Answer submitted before a game was started");
            return Err(Rejection::NoGame);
        };

        if !is_possible(&word, &session.root_word) {
            log::debug!("Rejected {word}: not possible from {}", session.root_word);
            return Err(Rejection::Impossible {
                root: session.root_word.to_lowercase(),
            });
        }

        if !is_original(&word, &session.used_words, &session.root_word) {
            log::debug!("Rejected {word}: not original");
            return Err(Rejection::NotOriginal);
        }

        if !is_real(&word, self.oracle.as_ref(), &self.locale, self.min_word_length) {
            log::debug!("Rejected {word}: not a real word");
            return Err(Rejection::NotReal);
        }

        session.used_words.insert(0, word.clone());
        log::info!("Accepted {word} ({} words)", session.used_words.len());

        self.persist();
        self.events.push(SessionEvent::Inserted { index: 0 });

        Ok(Accepted { word, index: 0 })
    }

    /// Write the session to the store. A no-op before the first game.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let Some(session) = &self.session else {
            return Ok(());
        };

        let words = serde_json::to_string(&session.used_words)?;
        self.store
            .set_many(&[
                (SAVED_WORD_KEY, session.root_word.as_str()),
                (SAVED_WORDS_KEY, words.as_str()),
            ])
    }

    /// Load the session from the store. Returns false (leaving state
    /// untouched) if either value is missing or malformed.
    pub fn restore(&mut self) -> bool {
        match self.read_saved() {
            Ok(Some(session)) => {
                log::info!(
                    "Restored game {} with {} words",
                    session.root_word,
                    session.used_words.len()
                );
                self.session = Some(session);
                self.events.push(SessionEvent::Reloaded);
                true
            }
            Ok(None) => {
                log::info!("No saved game found");
                false
            }
            Err(e) => {
                log::warn!("Saved game unreadable: {e}");
                false
            }
        }
    }

    fn read_saved(&self) -> Result<Option<Session>, StoreError> {
        let Some(root) = self.store.get(SAVED_WORD_KEY)? else {
            return Ok(None);
        };
        let Some(words) = self.store.get(SAVED_WORDS_KEY)? else {
            return Ok(None);
        };

        let root = root.trim().to_lowercase();
        if root.is_empty() {
            return Ok(None);
        }
        let used_words: Vec<String> = serde_json::from_str(&words)?;
        let used_words = used_words.iter().map(|w| w.to_lowercase()).collect();

        Ok(Some(Session {
            root_word: root,
            used_words,
        }))
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            log::warn!("Failed to save game: {e}");
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.session.is_some() {
            GamePhase::Active
        } else {
            GamePhase::NoSession
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current root word (the screen title)
    pub fn title(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.root_word.as_str())
    }

    pub fn used_words(&self) -> &[String] {
        self.session
            .as_ref()
            .map(|s| s.used_words.as_slice())
            .unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.used_words().len()
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.used_words().get(index).map(String::as_str)
    }

    /// Take pending list updates
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Give back the store (e.g. to simulate a relaunch)
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }
}

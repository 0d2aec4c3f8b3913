//! WebAssembly front end
//!
//! The page owns rendering and alerts; it drives the game through
//! [`WebGame`] and redraws the list from `words()`.

use wasm_bindgen::prelude::*;

use crate::dictionary::Dictionary;
use crate::game::{GameSession, SeededRandom, SessionEvent, SubmitOutcome};
use crate::persistence::{KeyValueStore, LocalStorageStore, MemoryStore};
use crate::settings::Settings;
use crate::words::WordList;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Word Scramble starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: GameSession,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let settings = Settings::load();

        let store: Box<dyn KeyValueStore> = match LocalStorageStore::open(&settings.storage_prefix) {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{e}; progress will not be saved");
                Box::new(MemoryStore::new())
            }
        };

        let mut game = GameSession::new(
            WordList::bundled(),
            store,
            Box::new(Dictionary::bundled()),
            Box::new(SeededRandom::from_entropy()),
        )
        .with_settings(&settings);
        game.launch();

        WebGame { game }
    }

    /// Current root word
    pub fn title(&self) -> Option<String> {
        self.game.title().map(str::to_string)
    }

    /// Used words, newest first
    pub fn words(&self) -> js_sys::Array {
        self.game
            .used_words()
            .iter()
            .map(|w| JsValue::from_str(w))
            .collect()
    }

    /// Submit an answer; returns a JSON `SubmitOutcome`
    pub fn submit(&mut self, answer: &str) -> String {
        SubmitOutcome::from(self.game.submit_answer(answer))
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Start over with a new root word
    pub fn restart(&mut self) {
        self.game.start_game();
    }

    /// True if the whole list must be redrawn (vs. a single row insert)
    pub fn needs_reload(&mut self) -> bool {
        self.game
            .drain_events()
            .iter()
            .any(|e| *e == SessionEvent::Reloaded)
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

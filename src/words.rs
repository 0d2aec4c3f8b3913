//! Root word list
//!
//! Loaded once at startup and never modified afterwards. Never empty: a list
//! with no usable lines collapses to [`FALLBACK_ROOT_WORD`].

use std::path::Path;

use crate::consts::FALLBACK_ROOT_WORD;
use crate::game::RandomSource;

/// Start words compiled into the binary
const BUNDLED_START_WORDS: &str = include_str!("../assets/start.txt");

/// Candidate root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse newline-delimited text (trimmed, lowercased, blanks skipped)
    pub fn from_text(text: &str) -> Self {
        let words: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        if words.is_empty() {
            log::info!("Word list empty, using fallback root word");
            return Self::fallback();
        }

        Self { words }
    }

    /// The start words shipped with the game
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_START_WORDS)
    }

    /// Single-word list used when nothing else is available
    pub fn fallback() -> Self {
        Self {
            words: vec![FALLBACK_ROOT_WORD.to_string()],
        }
    }

    /// Load a word list file, falling back to the bundled list if unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let list = Self::from_text(&text);
                log::info!("Loaded {} root words from {}", list.len(), path.display());
                list
            }
            Err(e) => {
                log::warn!(
                    "Could not read word list {}: {e}; using bundled words",
                    path.display()
                );
                Self::bundled()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true once constructed
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Choose a root word
    pub fn pick(&self, rng: &mut dyn RandomSource) -> &str {
        let index = rng.pick_index(self.words.len()) % self.words.len();
        &self.words[index]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedPick;

    #[test]
    fn test_from_text_trims_and_lowercases() {
        let list = WordList::from_text("Silkworm\r\n  BLIZZARD \n\n");
        assert_eq!(list.as_slice(), &["silkworm", "blizzard"]);
    }

    #[test]
    fn test_empty_text_falls_back() {
        assert_eq!(WordList::from_text(""), WordList::fallback());
        assert_eq!(WordList::from_text("\n  \n"), WordList::fallback());
        assert_eq!(WordList::fallback().as_slice(), &[FALLBACK_ROOT_WORD]);
    }

    #[test]
    fn test_bundled_not_empty() {
        let list = WordList::bundled();
        assert!(list.len() > 1);
        assert!(list.as_slice().iter().all(|w| w == &w.to_lowercase()));
    }

    #[test]
    fn test_missing_file_uses_bundled() {
        assert_eq!(WordList::load("/no/such/start.txt"), WordList::bundled());
    }

    #[test]
    fn test_pick_is_deterministic() {
        let list = WordList::from_text("alpha\nbeta\ngamma");
        assert_eq!(list.pick(&mut FixedPick(1)), "beta");
        assert_eq!(list.pick(&mut FixedPick(5)), "gamma");
    }
}

//! Word validity oracle
//!
//! The game only needs a yes/no answer for "is this a real word in this
//! language". [`Dictionary`] answers it from a static word list; tests can
//! build one from a handful of words.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

/// English word list compiled into the binary
const BUNDLED_DICTIONARY: &str = include_str!("../assets/dictionary.txt");

/// Something that can decide whether a word is spelled correctly
pub trait WordValidityOracle {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool;
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary {0} contains no words")]
    Empty(String),
}

/// A set of known words for one language
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Build from newline-delimited text. Entries are trimmed and lowercased.
    pub fn from_text(text: &str, locale: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self {
            locale: locale.to_string(),
            words,
        }
    }

    /// The English dictionary shipped with the game
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_DICTIONARY, crate::consts::DEFAULT_LOCALE)
    }

    /// Load a word-per-line dictionary file (e.g. `/usr/share/dict/words`)
    pub fn load(path: impl AsRef<Path>, locale: &str) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dict = Self::from_text(&text, locale);
        if dict.is_empty() {
            return Err(DictionaryError::Empty(path.display().to_string()));
        }
        log::info!("Loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Load `path`, or fall back to the bundled dictionary
    pub fn load_or_bundled(path: impl AsRef<Path>, locale: &str) -> Self {
        match Self::load(path, locale) {
            Ok(dict) => dict,
            Err(e) => {
                log::warn!("{e}; using bundled dictionary");
                Self::bundled()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Compare primary language subtags ("en" matches "en_US" and "en-GB")
    fn supports_locale(&self, locale: &str) -> bool {
        primary_subtag(locale).eq_ignore_ascii_case(primary_subtag(&self.locale))
    }
}

impl WordValidityOracle for Dictionary {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool {
        if !self.supports_locale(locale) {
            log::debug!("Locale {locale} not served by {} dictionary", self.locale);
            return false;
        }
        if word.is_empty() || !word.chars().all(|c| c.is_alphabetic() || c == '\'') {
            return false;
        }
        self.contains(word)
    }
}

fn primary_subtag(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text_normalizes_entries() {
        let dict = Dictionary::from_text("  Silk \n\nWORM\r\n", "en");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("silk"));
        assert!(dict.contains("worm"));
    }

    #[test]
    fn test_locale_matching() {
        let dict = Dictionary::from_text("silk\n", "en");
        assert!(dict.is_valid_word("silk", "en"));
        assert!(dict.is_valid_word("silk", "en_US"));
        assert!(dict.is_valid_word("silk", "EN-gb"));
        assert!(!dict.is_valid_word("silk", "fr"));
    }

    #[test]
    fn test_rejects_non_letters() {
        let dict = Dictionary::from_text("silk\nsilk1\n", "en");
        assert!(!dict.is_valid_word("silk1", "en"));
        assert!(!dict.is_valid_word("", "en"));
    }

    #[test]
    fn test_bundled_has_common_words() {
        let dict = Dictionary::bundled();
        assert!(!dict.is_empty());
        assert!(dict.is_valid_word("silk", "en"));
        assert!(dict.is_valid_word("worm", "en"));
        assert!(!dict.is_valid_word("slkw", "en"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\nbanana").unwrap();
        let dict = Dictionary::load(file.path(), "en").unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_load_missing_falls_back() {
        let dict = Dictionary::load_or_bundled("/definitely/not/here.txt", "en");
        assert!(dict.contains("silk"));
    }

    #[test]
    fn test_load_empty_file_is_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            Dictionary::load(file.path(), "en"),
            Err(DictionaryError::Empty(_))
        ));
    }
}

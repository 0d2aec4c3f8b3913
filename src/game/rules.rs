//! Answer validation rules
//!
//! Three independent predicates, checked in this order by the session:
//! possible (letters drawn from the root) -> original -> real.
//! All of them expect an already normalized (lowercase) candidate.

use crate::dictionary::WordValidityOracle;

/// True if every letter of `word` can be drawn from `root` without reusing a
/// letter more often than it appears in `root`.
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut letters: Vec<char> = root.to_lowercase().chars().collect();

    for letter in word.chars() {
        match letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                letters.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// True if `word` is neither the root word nor an answer already given.
///
/// `used` must already be lowercase. The root is lowercased here, so a root
/// stored with mixed case is still rejected.
pub fn is_original(word: &str, used: &[String], root: &str) -> bool {
    !used.iter().any(|u| u == word) && word != root.to_lowercase()
}

/// True if `word` is long enough and the oracle recognises it.
pub fn is_real(
    word: &str,
    oracle: &dyn WordValidityOracle,
    locale: &str,
    min_len: usize,
) -> bool {
    if word.chars().count() < min_len {
        return false;
    }
    oracle.is_valid_word(word, locale)
}

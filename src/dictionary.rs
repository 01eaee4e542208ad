//! `dictionary`: load and index the word list used to validate board words
//!
//! The dictionary can be built from any sequence of words, from an in-memory string (important
//! for WebAssembly/browser builds, since direct file I/O isn't allowed there), or from a file on
//! native builds.
//!
//! The parsing logic:
//! - Each line in the input holds one word.
//! - Words are trimmed and lowercased; lines that are empty after trimming are skipped.
//! - Every word of three or more characters contributes its first three characters to the
//!   three-letter prefix set, which lets the search abandon a path as soon as its first three
//!   letters cannot start any word.
//!
//! Lengths are counted in `char`s, so a multi-byte letter is one character.
//!
//! A [`Dictionary`] is immutable once built. Callers build it once and pass it by reference to
//! every search and validation call.

use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};
use once_cell::sync::OnceCell;

use crate::errors::DictionaryError;

/// Number of leading characters recorded in the three-letter prefix set.
pub const PREFIX_LEN: usize = 3;

/// An indexed, read-only word list.
#[derive(Debug, Default)]
pub struct Dictionary {
    /// Every valid word, lowercased.
    words: HashSet<String>,
    /// First three characters of every word with at least three characters.
    three_prefixes: HashSet<String>,
    /// Every proper prefix of every word; computed on first use of [`Dictionary::has_prefix`].
    all_prefixes: OnceCell<HashSet<String>>,
}

impl Dictionary {
    /// Build a dictionary from a sequence of words.
    ///
    /// Each entry is trimmed and lowercased before insertion; blank entries are skipped.
    pub fn build<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();
        for raw in words {
            let word = raw.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if let Some(prefix) = leading_chars(&word, PREFIX_LEN) {
                dictionary.three_prefixes.insert(prefix.to_string());
            }
            dictionary.words.insert(word);
        }

        debug!(
            "Indexed {} words with {} three-letter prefixes",
            dictionary.words.len(),
            dictionary.three_prefixes.len()
        );
        dictionary
    }

    /// Parse a dictionary from an in-memory string holding one word per line.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        Self::build(contents.lines())
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return [`DictionaryError::Unreadable`] naming `path` if the file cannot be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| DictionaryError::Unreadable {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse_from_str(&data);
        info!("Loaded {} words from {}", dictionary.len(), path_ref.display());
        Ok(dictionary)
    }

    /// Exact membership. The query is compared as given.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// True if some word of at least three characters starts with `three_chars`.
    #[must_use]
    pub fn has_valid_three_prefix(&self, three_chars: &str) -> bool {
        self.three_prefixes.contains(three_chars)
    }

    /// True if some word is strictly longer than `prefix` and starts with it.
    ///
    /// The full prefix set is built on the first call and reused afterwards.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.all_prefixes
            .get_or_init(|| {
                let mut prefixes = HashSet::new();
                // words are never empty, so "" starts every one of them
                if !self.words.is_empty() {
                    prefixes.insert(String::new());
                }
                for word in &self.words {
                    // every char boundary strictly inside the word ends a proper prefix
                    for (end, _) in word.char_indices().skip(1) {
                        prefixes.insert(word[..end].to_string());
                    }
                }
                debug!("Built full prefix set ({} prefixes)", prefixes.len());
                prefixes
            })
            .contains(prefix)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Check a single word against the dictionary, independent of any board.
///
/// The word is trimmed and lowercased first, so `"Cat "` validates like `"cat"`.
#[must_use]
pub fn is_valid_word(dictionary: &Dictionary, word: &str) -> bool {
    dictionary.contains(&word.trim().to_lowercase())
}

/// The first `n` characters of `word`, or `None` if it is shorter than that.
fn leading_chars(word: &str, n: usize) -> Option<&str> {
    match word.char_indices().nth(n) {
        Some((end, _)) => Some(&word[..end]),
        None if word.chars().count() == n => Some(word),
        None => None,
    }
}

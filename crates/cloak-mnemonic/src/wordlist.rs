//! English dictionary loading and codeword lookup.
//!
//! The 2048-word English list is embedded at compile time via `include_str!`
//! and parsed once on first access using `OnceLock`. The position of a word
//! is the value of its 11-bit codeword, so the list order is part of the
//! wire contract and must never change.

use std::sync::OnceLock;

/// Number of words in the dictionary (2^11).
pub const WORDLIST_SIZE: usize = 2048;

const ENGLISH_RAW: &str = include_str!("wordlists/english.txt");

static ENGLISH_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Returns the parsed English dictionary (2048 lowercase words, sorted).
///
/// The list is parsed lazily on first access and cached for the lifetime
/// of the process.
///
/// # Panics
///
/// Panics if the embedded list does not contain exactly [`WORDLIST_SIZE`] words.
#[must_use]
pub fn english() -> &'static [&'static str] {
    ENGLISH_LOCK.get_or_init(|| {
        let words: Vec<&'static str> = ENGLISH_RAW.lines().collect();
        assert!(
            words.len() == WORDLIST_SIZE,
            "wordlist must contain exactly {WORDLIST_SIZE} words, got {}",
            words.len()
        );
        words.into_boxed_slice()
    })
}

/// The word at a codeword index.
///
/// # Panics
///
/// Panics if `index >= WORDLIST_SIZE`. Codewords are 11-bit by
/// construction, so in-crate callers cannot reach this.
pub fn word_at(index: usize) -> &'static str {
    english()[index]
}

/// The codeword index of a word, or `None` if it is not in the dictionary.
///
/// The list is sorted, so lookup is a binary search.
pub fn index_of(word: &str) -> Option<usize> {
    let words: &[&str] = english();
    words.binary_search(&word).ok()
}

//! Word representation
//!
//! A Word stores an uppercase A-Z word along with per-letter position sets
//! used by the comparator and the candidate filter.

use super::letters::{ALPHABET_SIZE, LetterSet, MAX_POSITIONS, PositionSet, letter_index};
use std::fmt;
use thiserror::Error;

/// An immutable word over the alphabet A-Z
///
/// Length is checked against the configured word length at the table and
/// input boundaries (see [`crate::config::WordLength`]), not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
    positions: [PositionSet; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word has {0} letters, at most {max} are supported", max = MAX_POSITIONS)]
    TooLong(usize),
    #[error("word '{0}' must contain only ASCII letters")]
    NonAscii(String),
    #[error("word '{0}' contains invalid characters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than the supported
    /// maximum, or contains anything but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii(text));
        }
        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(text));
        }
        if text.len() > MAX_POSITIONS {
            return Err(WordError::TooLong(text.len()));
        }

        let mut letters = LetterSet::EMPTY;
        let mut positions = [PositionSet::EMPTY; ALPHABET_SIZE];
        for (i, b) in text.bytes().enumerate() {
            letters.insert(b);
            positions[letter_index(b)].insert(i);
        }

        Ok(Self {
            text,
            letters,
            positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// All positions where a letter appears
    #[inline]
    #[must_use]
    pub const fn positions_of(&self, letter: u8) -> PositionSet {
        self.positions[letter_index(letter)]
    }

    /// Number of occurrences of a letter
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> usize {
        self.positions[letter_index(letter)].len()
    }

    /// Occurrence count of every letter, indexed by `letter_index`
    ///
    /// Used as the mutable multiset in feedback calculation.
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for (count, positions) in counts.iter_mut().zip(&self.positions) {
            *count = positions.len() as u8;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//! Engine configuration
//!
//! The word length is fixed per run; every word entering the engine is
//! checked against it at the boundary.

use crate::core::letters::MAX_POSITIONS;
use crate::core::{EngineError, Word};
use std::time::Duration;

/// Validated word length (1-32, default 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordLength(usize);

impl WordLength {
    /// Classic Wordle length
    pub const DEFAULT: Self = Self(5);

    /// Create a word length
    ///
    /// # Errors
    /// Returns `UnsupportedWordLength` for 0 or anything above 32.
    pub fn new(length: usize) -> Result<Self, EngineError> {
        if length == 0 || length > MAX_POSITIONS {
            return Err(EngineError::UnsupportedWordLength(length));
        }
        Ok(Self(length))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Reject a word that does not have this length
    ///
    /// # Errors
    /// Returns `InvalidWordLength` naming the word.
    pub fn check(self, word: &Word) -> Result<(), EngineError> {
        if word.len() == self.0 {
            Ok(())
        } else {
            Err(EngineError::InvalidWordLength {
                word: word.text().to_string(),
                expected: self.0,
                actual: word.len(),
            })
        }
    }

    /// Parse and length-check a word in one step
    ///
    /// # Errors
    /// Returns `InvalidWord` or `InvalidWordLength`.
    pub fn word(self, text: &str) -> Result<Word, EngineError> {
        let word = Word::new(text)?;
        self.check(&word)?;
        Ok(word)
    }
}

impl Default for WordLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Runtime settings shared by the commands
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub word_length: WordLength,
    /// Scoring workers; `None` uses one per available core
    pub threads: Option<usize>,
    /// Wall-clock bound for ELR scoring
    pub time_limit: Option<Duration>,
}

impl EngineConfig {
    #[must_use]
    pub fn new(word_length: WordLength) -> Self {
        Self {
            word_length,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }
}

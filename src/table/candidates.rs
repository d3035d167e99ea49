//! Candidate table
//!
//! An ordered collection of unique words of one configured length, each with
//! an external relevance weight. The weight is only used for ranking.

use crate::config::WordLength;
use crate::constraints::Filter;
use crate::core::{EngineError, Rejected, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

/// A word and its relevance weight
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: Word,
    pub weight: f64,
}

/// Unique, same-length words in input order
#[derive(Debug, Clone)]
pub struct CandidateSet {
    length: WordLength,
    rows: Vec<Candidate>,
}

impl CandidateSet {
    /// An empty table
    #[must_use]
    pub const fn empty(length: WordLength) -> Self {
        Self {
            length,
            rows: Vec::new(),
        }
    }

    /// Build a table from raw rows, rejecting bad ones individually
    ///
    /// Rows with invalid characters, the wrong length, a non-finite weight, or
    /// a word already seen are returned as rejections; the rest are kept in
    /// order.
    pub fn from_rows<I, S>(length: WordLength, rows: I) -> (Self, Vec<Rejected>)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut kept = Vec::new();
        let mut rejected = Vec::new();

        for (text, weight) in rows {
            let text = text.as_ref();
            match Self::admit(length, text, weight, &seen) {
                Ok(word) => {
                    seen.insert(word.clone());
                    kept.push(Candidate { word, weight });
                }
                Err(error) => rejected.push(Rejected {
                    input: text.to_string(),
                    error,
                }),
            }
        }

        (Self { length, rows: kept }, rejected)
    }

    fn admit(
        length: WordLength,
        text: &str,
        weight: f64,
        seen: &FxHashSet<Word>,
    ) -> Result<Word, EngineError> {
        let word = length.word(text)?;
        if !weight.is_finite() {
            return Err(EngineError::InvalidWeight(weight.to_string()));
        }
        if seen.contains(&word) {
            return Err(EngineError::DuplicateWord(word.text().to_string()));
        }
        Ok(word)
    }

    /// Build a table, failing on the first bad row
    ///
    /// # Errors
    /// Returns the error of the first rejected row.
    pub fn try_from_rows<I, S>(length: WordLength, rows: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let (set, rejected) = Self::from_rows(length, rows);
        match rejected.into_iter().next() {
            Some(first) => Err(first.error),
            None => Ok(set),
        }
    }

    /// Build a table of zero-weight words
    ///
    /// # Errors
    /// Returns the error of the first rejected word.
    pub fn try_from_words<S: AsRef<str>>(
        length: WordLength,
        words: &[S],
    ) -> Result<Self, EngineError> {
        Self::try_from_rows(length, words.iter().map(|w| (w.as_ref(), 0.0)))
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Candidate] {
        &self.rows
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.rows.iter().map(|row| &row.word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.rows.iter().any(|row| &row.word == word)
    }

    /// Look up a row by its text (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Candidate> {
        self.rows
            .iter()
            .find(|row| row.word.text().eq_ignore_ascii_case(text))
    }

    /// Rows that pass the filter, in order
    #[must_use]
    pub fn retain_matching(&self, filter: &Filter) -> Self {
        Self {
            length: self.length,
            rows: self
                .rows
                .iter()
                .filter(|row| filter.matches(&row.word))
                .cloned()
                .collect(),
        }
    }

    /// The first `count` rows
    #[must_use]
    pub fn prefix(&self, count: usize) -> Self {
        Self {
            length: self.length,
            rows: self.rows.iter().take(count).cloned().collect(),
        }
    }

    /// A reproducible random subset of `count` rows, kept in table order
    #[must_use]
    pub fn sample(&self, count: usize, seed: u64) -> Self {
        if count >= self.rows.len() {
            return self.clone();
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked = rand::seq::index::sample(&mut rng, self.rows.len(), count).into_vec();
        picked.sort_unstable();

        Self {
            length: self.length,
            rows: picked.into_iter().map(|i| self.rows[i].clone()).collect(),
        }
    }
}

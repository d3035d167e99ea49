//! Ranking of candidate words for presentation
//!
//! Letter statistics come from the full input table; ranking applies them to
//! whatever (filtered) subset is being suggested.

use super::{Candidate, CandidateSet};
use crate::core::Word;
use crate::core::letters::{ALPHABET_SIZE, letter_index};
use crate::scoring::ElrScores;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column to sort suggestions by (always high to low)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// External relevance weight
    WordFrequency,
    /// Sum of table-wide letter frequencies over the word's distinct letters
    #[default]
    LetterFrequency,
    /// Sum of table-wide letter-at-position frequencies
    LetterPositionFrequency,
    /// Expected List Reduction
    Elr,
}

impl SortKey {
    pub const ALL: [Self; 4] = [
        Self::WordFrequency,
        Self::LetterFrequency,
        Self::LetterPositionFrequency,
        Self::Elr,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WordFrequency => "word-frequency",
            Self::LetterFrequency => "letter-frequency",
            Self::LetterPositionFrequency => "letter-position-frequency",
            Self::Elr => "elr",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown sort key '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Letter and letter-at-position occurrence counts over a table
#[derive(Debug, Clone)]
pub struct LetterStats {
    letter: [u64; ALPHABET_SIZE],
    position: Vec<[u64; ALPHABET_SIZE]>,
}

impl LetterStats {
    #[must_use]
    pub fn from_candidates(candidates: &CandidateSet) -> Self {
        let length = candidates.word_length().get();
        let mut letter = [0u64; ALPHABET_SIZE];
        let mut position = vec![[0u64; ALPHABET_SIZE]; length];

        for word in candidates.words() {
            for (i, &b) in word.bytes().iter().enumerate() {
                letter[letter_index(b)] += 1;
                position[i][letter_index(b)] += 1;
            }
        }

        Self { letter, position }
    }

    /// Number of occurrences of a letter across the table
    #[must_use]
    pub const fn letter_frequency(&self, letter: u8) -> u64 {
        self.letter[letter_index(letter)]
    }

    /// Number of table words with `letter` at `position`
    #[must_use]
    pub fn position_frequency(&self, position: usize, letter: u8) -> u64 {
        self.position
            .get(position)
            .map_or(0, |counts| counts[letter_index(letter)])
    }

    /// Letter frequency summed over the word's distinct letters
    #[must_use]
    pub fn letter_frequency_sum(&self, word: &Word) -> u64 {
        word.letters()
            .iter()
            .map(|letter| self.letter_frequency(letter))
            .sum()
    }

    /// Letter-at-position frequency summed over the word's positions
    #[must_use]
    pub fn position_frequency_sum(&self, word: &Word) -> u64 {
        word.bytes()
            .iter()
            .enumerate()
            .map(|(i, &letter)| self.position_frequency(i, letter))
            .sum()
    }
}

/// One suggestion row with every rankable column
#[derive(Debug, Clone)]
pub struct RankedRow {
    pub word: Word,
    pub weight: f64,
    pub letter_frequency_sum: u64,
    pub position_frequency_sum: u64,
    pub elr: Option<f64>,
}

impl RankedRow {
    fn new(candidate: &Candidate, stats: &LetterStats, scores: Option<&ElrScores>) -> Self {
        Self {
            letter_frequency_sum: stats.letter_frequency_sum(&candidate.word),
            position_frequency_sum: stats.position_frequency_sum(&candidate.word),
            elr: scores.and_then(|s| s.get(&candidate.word)),
            word: candidate.word.clone(),
            weight: candidate.weight,
        }
    }

    fn compare(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::WordFrequency => self.weight.total_cmp(&other.weight),
            SortKey::LetterFrequency => self.letter_frequency_sum.cmp(&other.letter_frequency_sum),
            SortKey::LetterPositionFrequency => {
                self.position_frequency_sum.cmp(&other.position_frequency_sum)
            }
            // Unscored rows sort last
            SortKey::Elr => match (self.elr, other.elr) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Rank candidates high to low by `key`
///
/// The sort is stable, so ties keep table order.
#[must_use]
pub fn rank(
    candidates: &CandidateSet,
    stats: &LetterStats,
    scores: Option<&ElrScores>,
    key: SortKey,
) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = candidates
        .rows()
        .iter()
        .map(|candidate| RankedRow::new(candidate, stats, scores))
        .collect();
    rows.sort_by(|a, b| b.compare(a, key));
    rows
}

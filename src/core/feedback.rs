//! Wordle feedback calculation and representation
//!
//! Feedback is one mark per letter position:
//! - 0 = Absent (letter not in word, or no unmatched copies left)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)

use super::error::EngineError;
use super::letters::letter_index;
use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Mark {
    /// Parse a single feedback digit
    #[must_use]
    pub const fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Absent),
            '1' => Some(Self::Present),
            '2' => Some(Self::Exact),
            _ => None,
        }
    }

    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Exact => '2',
        }
    }

    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Feedback sequence for a whole guess
///
/// Produced by [`Feedback::calculate`] or by validated parsing of a digit
/// string; there is no unchecked constructor from raw user text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Calculate the feedback when `guess` is played and `actual` is the answer
    ///
    /// Implements Wordle's exact coloring rules, including repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool of
    ///    `actual`'s unmatched letters
    /// 2. Second pass: mark present-but-misplaced letters from the remaining pool,
    ///    consuming one copy per mark; everything else is absent
    ///
    /// Both words must have the same length; use [`Feedback::try_calculate`]
    /// when that is not already guaranteed.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let actual = Word::new("trace").unwrap();
    ///
    /// // C(present) R(exact) A(exact) N(absent) E(exact)
    /// assert_eq!(Feedback::calculate(&guess, &actual).to_string(), "12202");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, actual: &Word) -> Self {
        debug_assert_eq!(guess.len(), actual.len(), "word lengths must match");

        let guess_bytes = guess.bytes();
        let actual_bytes = actual.bytes();
        let mut marks = vec![Mark::Absent; guess_bytes.len()];
        let mut available = actual.letter_counts();

        // First pass: exact matches
        for (i, (&g, &a)) in guess_bytes.iter().zip(actual_bytes).enumerate() {
            if g == a {
                marks[i] = Mark::Exact;
                available[letter_index(g)] -= 1;
            }
        }

        // Second pass: misplaced letters from what is left
        for (mark, &g) in marks.iter_mut().zip(guess_bytes) {
            if *mark == Mark::Absent {
                let count = &mut available[letter_index(g)];
                if *count > 0 {
                    *mark = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self(marks)
    }

    /// Like [`Feedback::calculate`], but rejects words of different lengths
    ///
    /// # Errors
    /// Returns `InvalidWordLength` naming `actual` when the lengths differ.
    pub fn try_calculate(guess: &Word, actual: &Word) -> Result<Self, EngineError> {
        if guess.len() != actual.len() {
            return Err(EngineError::InvalidWordLength {
                word: actual.text().to_string(),
                expected: guess.len(),
                actual: actual.len(),
            });
        }
        Ok(Self::calculate(guess, actual))
    }

    /// Parse a digit string such as `"01202"`
    ///
    /// # Errors
    /// Returns `MalformedFeedback` if the string is not exactly `length`
    /// characters from `{0, 1, 2}`.
    pub fn parse(input: &str, length: usize) -> Result<Self, EngineError> {
        let marks = input
            .chars()
            .map(|ch| {
                Mark::from_digit(ch).ok_or_else(|| {
                    EngineError::malformed(input, format!("'{ch}' is not one of 0, 1, 2"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if marks.len() != length {
            return Err(EngineError::malformed(
                input,
                format!("expected {length} digits, got {}", marks.len()),
            ));
        }

        Ok(Self(marks))
    }

    /// All-exact feedback for a word of the given length
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self(vec![Mark::Exact; length])
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count the number of exact marks
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to emoji squares, e.g. "⬜🟨🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.digit())?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Feedback {
    type Output = Mark;

    fn index(&self, position: usize) -> &Mark {
        &self.0[position]
    }
}

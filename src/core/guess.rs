//! Player input: a guess paired with the feedback the game showed
//!
//! The accepted form is `WORD-DIGITS`, e.g. `CRANE-01202`.

use super::{EngineError, Feedback, Word};
use crate::config::WordLength;
use std::fmt;

/// Separator between the guess and its feedback digits
pub const DELIMITER: char = '-';

/// A guessed word and the feedback received for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessFeedback {
    pub guess: Word,
    pub feedback: Feedback,
}

/// An input entry that was rejected, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub input: String,
    pub error: EngineError,
}

impl GuessFeedback {
    /// Pair a guess with feedback, checking both against the word length
    ///
    /// # Errors
    /// Returns `InvalidWordLength` or `MalformedFeedback`.
    pub fn new(guess: Word, feedback: Feedback, length: WordLength) -> Result<Self, EngineError> {
        length.check(&guess)?;
        if feedback.len() != length.get() {
            return Err(EngineError::malformed(
                &feedback.to_string(),
                format!("expected {} digits, got {}", length.get(), feedback.len()),
            ));
        }
        Ok(Self { guess, feedback })
    }

    /// Parse a `WORD-DIGITS` entry
    ///
    /// Surrounding whitespace is ignored and letters are uppercased; nothing
    /// else is coerced.
    ///
    /// # Errors
    /// Returns `MalformedFeedback` for a missing or repeated delimiter or bad
    /// digits, `InvalidWord` for non-letters, `InvalidWordLength` for a guess
    /// of the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordler::config::WordLength;
    /// use wordler::core::GuessFeedback;
    ///
    /// let entry = GuessFeedback::parse("crane-01202", WordLength::DEFAULT).unwrap();
    /// assert_eq!(entry.guess.text(), "CRANE");
    /// assert_eq!(entry.feedback.to_string(), "01202");
    ///
    /// assert!(GuessFeedback::parse("CRANE:01202", WordLength::DEFAULT).is_err());
    /// ```
    pub fn parse(input: &str, length: WordLength) -> Result<Self, EngineError> {
        let trimmed = input.trim();
        let mut parts = trimmed.split(DELIMITER);

        let (Some(word), Some(digits), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EngineError::malformed(
                trimmed,
                format!("expected WORD{DELIMITER}DIGITS"),
            ));
        };

        let guess = length.word(word)?;
        let feedback = Feedback::parse(digits, length.get())?;
        Ok(Self { guess, feedback })
    }

    /// Parse a batch of entries, keeping the good ones
    ///
    /// Bad entries are returned separately so the caller can report them while
    /// continuing with the rest. When the same guess word appears more than
    /// once, the later entry replaces the earlier one.
    pub fn parse_all<I, S>(inputs: I, length: WordLength) -> (Vec<Self>, Vec<Rejected>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted: Vec<Self> = Vec::new();
        let mut rejected = Vec::new();

        for input in inputs {
            let input = input.as_ref();
            if input.trim().is_empty() {
                continue;
            }
            match Self::parse(input, length) {
                Ok(entry) => {
                    if let Some(existing) = accepted.iter_mut().find(|e| e.guess == entry.guess) {
                        *existing = entry;
                    } else {
                        accepted.push(entry);
                    }
                }
                Err(error) => rejected.push(Rejected {
                    input: input.to_string(),
                    error,
                }),
            }
        }

        (accepted, rejected)
    }
}

impl fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.guess, self.feedback)
    }
}

//! Feedback comparison command

use crate::config::WordLength;
use crate::core::{EngineError, Feedback, Word};

/// Feedback a guess would receive against a known answer
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub guess: Word,
    pub actual: Word,
    pub feedback: Feedback,
}

/// Compare two words of the configured length
///
/// # Errors
/// Returns `InvalidWord` or `InvalidWordLength` for either input.
pub fn compare_words(
    guess: &str,
    actual: &str,
    length: WordLength,
) -> Result<CompareResult, EngineError> {
    let guess = length.word(guess)?;
    let actual = length.word(actual)?;
    let feedback = Feedback::try_calculate(&guess, &actual)?;
    Ok(CompareResult {
        guess,
        actual,
        feedback,
    })
}

//! Engine error taxonomy

use super::word::WordError;
use thiserror::Error;

/// Errors raised at the engine boundary or while accumulating constraints
///
/// An empty candidate set is not an error: filtering down to zero words is a
/// valid outcome and is reported through [`crate::table::CandidateSet::is_empty`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The word contains characters outside A-Z
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// A word does not have the configured length
    #[error("word '{word}' has {actual} letters, expected {expected}")]
    InvalidWordLength {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// Feedback string has the wrong length, alphabet, or pairing delimiter
    #[error("malformed feedback '{input}': {reason}")]
    MalformedFeedback { input: String, reason: String },

    /// The accumulated constraints contradict each other
    #[error("inconsistent constraints: {0}")]
    InconsistentConstraints(String),

    /// A word appears more than once in a candidate table
    #[error("duplicate word '{0}'")]
    DuplicateWord(String),

    /// A table row's weight is not a finite number
    #[error("invalid weight '{0}'")]
    InvalidWeight(String),

    /// Configured word length is outside the supported range
    #[error("unsupported word length {0} (supported: 1-{max})", max = super::letters::MAX_POSITIONS)]
    UnsupportedWordLength(usize),

    /// The scoring worker pool could not be built
    #[error("failed to start scoring workers: {0}")]
    WorkerPool(String),
}

impl EngineError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedFeedback {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for EngineError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool(err.to_string())
    }
}

//! Word tables for the engine
//!
//! Provides a sample table compiled into the binary and a loader for
//! `WORD[,WEIGHT,...]` files.

mod embedded;
pub mod loader;

use crate::config::WordLength;
use crate::table::CandidateSet;

pub use embedded::{WORDS, WORDS_COUNT};

/// Word length of the embedded table
pub const EMBEDDED_LENGTH: WordLength = WordLength::DEFAULT;

/// The embedded table as candidates
///
/// # Examples
/// ```
/// use wordler::wordlists::{WORDS_COUNT, embedded};
///
/// let table = embedded();
/// assert_eq!(table.len(), WORDS_COUNT);
/// ```
#[must_use]
pub fn embedded() -> CandidateSet {
    let (table, _) = CandidateSet::from_rows(EMBEDDED_LENGTH, WORDS.iter().copied());
    table
}

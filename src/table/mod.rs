//! Candidate tables and ranking
//!
//! The table is the boundary with the outside world: rows come in from a
//! word list and ranked rows go out to the display layer.

mod candidates;
mod ranking;

pub use candidates::{Candidate, CandidateSet};
pub use ranking::{LetterStats, RankedRow, SortKey, rank};

//! Expected List Reduction scoring
//!
//! [`guess_elr`] scores one guess; [`ElrScorer`] scores a whole table in
//! parallel with optional cancellation and progress reporting.

mod elr;
mod parallel;

pub use elr::{elr, guess_elr, reduction_total};
pub use parallel::{CancelToken, ElrScorer, ElrScores, ScoreControl, score};

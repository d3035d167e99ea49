//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod score;
pub mod simple;
pub mod suggest;

pub use benchmark::{BenchmarkResult, DEFAULT_MAX_TURNS, best_guess, run_benchmark};
pub use compare::{CompareResult, compare_words};
pub use score::{ScoreConfig, ScoreResult, run_score, scored_len};
pub use simple::{run_session, run_simple};
pub use suggest::{SuggestConfig, SuggestResult, suggest};

//! Batch ELR scoring command
//!
//! Scores every word of the table (or a seeded sample of it) as a guess.

use crate::core::EngineError;
use crate::scoring::{ElrScorer, ScoreControl};
use crate::table::{CandidateSet, LetterStats, RankedRow, SortKey, rank};
use std::time::{Duration, Instant};

/// Configuration for a scoring run
#[derive(Debug, Clone, Copy)]
pub struct ScoreConfig {
    pub top: usize,
    /// Score a random subset of this many words instead of the full table
    pub sample: Option<usize>,
    pub seed: u64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            top: 20,
            sample: None,
            seed: 0,
        }
    }
}

/// Result of a scoring run
#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Words in the scored table
    pub requested: usize,
    /// Words scored before the run stopped
    pub scored: usize,
    pub complete: bool,
    /// Best rows by ELR, high to low
    pub rows: Vec<RankedRow>,
    pub duration: Duration,
}

impl ScoreResult {
    #[must_use]
    pub fn words_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.scored as f64 / secs
        } else {
            0.0
        }
    }
}

/// Number of words a run will score
#[must_use]
pub fn scored_len(config: &ScoreConfig, table: &CandidateSet) -> usize {
    config.sample.map_or(table.len(), |n| n.min(table.len()))
}

/// Score the table, reporting each finished guess through `on_guess`
///
/// # Errors
/// Returns `WorkerPool` if the scorer cannot start its workers.
pub fn run_score(
    config: &ScoreConfig,
    table: &CandidateSet,
    scorer: &ElrScorer,
    on_guess: Option<&(dyn Fn() + Sync)>,
) -> Result<ScoreResult, EngineError> {
    let start = Instant::now();

    let subject = match config.sample {
        Some(count) => table.sample(count, config.seed),
        None => table.clone(),
    };

    let control = ScoreControl {
        on_guess,
        ..ScoreControl::default()
    };
    let scores = scorer.score_with(&subject, control)?;

    let stats = LetterStats::from_candidates(table);
    let mut rows: Vec<RankedRow> = rank(&subject, &stats, Some(&scores), SortKey::Elr)
        .into_iter()
        .take_while(|row| row.elr.is_some())
        .collect();
    rows.truncate(config.top);

    Ok(ScoreResult {
        requested: scores.requested(),
        scored: scores.len(),
        complete: scores.is_complete(),
        rows,
        duration: start.elapsed(),
    })
}

//! Benchmark command
//!
//! Plays the engine against itself: each target word is solved by always
//! guessing the remaining candidate with the best ELR.

use crate::constraints::Session;
use crate::core::{EngineError, Feedback, GuessFeedback, Word};
use crate::scoring::ElrScorer;
use crate::table::{Candidate, CandidateSet};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Default number of turns before a game counts as failed
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Guesses over solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub max_turns: usize,
    /// Solved games keyed by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// The remaining candidate to play next
///
/// Highest ELR wins; ties go to the higher weight, then to table order.
///
/// # Errors
/// Returns `WorkerPool` if the scorer cannot start its workers.
pub fn best_guess<'a>(
    candidates: &'a CandidateSet,
    scorer: &ElrScorer,
) -> Result<Option<&'a Candidate>, EngineError> {
    let scores = scorer.score(candidates)?;

    let mut best: Option<(&Candidate, f64)> = None;
    for row in candidates.rows() {
        let Some(score) = scores.get(&row.word) else {
            continue;
        };
        let better = best.is_none_or(|(current, current_score)| {
            match score.total_cmp(&current_score) {
                Ordering::Greater => true,
                Ordering::Equal => row.weight > current.weight,
                Ordering::Less => false,
            }
        });
        if better {
            best = Some((row, score));
        }
    }
    Ok(best.map(|(row, _)| row))
}

/// Number of guesses needed for one target, or `None` if it was not solved
fn play(
    table: &CandidateSet,
    target: &Word,
    max_turns: usize,
    scorer: &ElrScorer,
) -> Result<Option<usize>, EngineError> {
    let mut session = Session::new(table.word_length());

    while session.turns() < max_turns {
        let remaining = session.candidates(table);
        let Some(guess) = best_guess(&remaining, scorer)? else {
            return Ok(None);
        };

        let feedback = Feedback::try_calculate(&guess.word, target)?;
        let solved = feedback.is_perfect();
        session.record(GuessFeedback {
            guess: guess.word.clone(),
            feedback,
        })?;

        if solved {
            return Ok(Some(session.turns()));
        }
    }
    Ok(None)
}

/// Run the benchmark on a set of target words
///
/// # Errors
/// Returns an error if a target does not fit the table or the scorer cannot
/// start its workers.
pub fn run_benchmark(
    table: &CandidateSet,
    targets: &[Word],
    max_turns: usize,
    scorer: &ElrScorer,
) -> Result<BenchmarkResult, EngineError> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for target in targets {
        table.word_length().check(target)?;
        match play(table, target, max_turns, scorer)? {
            Some(guesses) => {
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            None => failures.push(target.clone()),
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        max_turns,
        distribution,
        failures,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    })
}

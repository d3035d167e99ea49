//! Parallel ELR scoring over a whole candidate table
//!
//! Guesses are split into one contiguous slice per worker. Each worker owns
//! its partial result and the slices are concatenated at the end, so the
//! scores do not depend on the number of workers.

use super::elr::{elr, reduction_total};
use crate::config::EngineConfig;
use crate::constraints::Knowns;
use crate::core::{EngineError, Word};
use crate::table::CandidateSet;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared flag for stopping a scoring run between guesses
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Cancellation, deadline and progress hooks for a scoring run
///
/// All checks happen between guesses; a guess that has started is always
/// finished.
#[derive(Clone, Copy, Default)]
pub struct ScoreControl<'a> {
    pub cancel: Option<&'a CancelToken>,
    pub deadline: Option<Instant>,
    /// Called once per finished guess, from whichever worker finished it
    pub on_guess: Option<&'a (dyn Fn() + Sync)>,
}

impl ScoreControl<'_> {
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn finished_guess(&self) {
        if let Some(tick) = self.on_guess {
            tick();
        }
    }
}

/// ELR per guess word
///
/// Holds one entry per guess that finished before any cancellation.
#[derive(Debug, Clone, Default)]
pub struct ElrScores {
    scores: FxHashMap<Word, f64>,
    requested: usize,
}

impl ElrScores {
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.scores.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of guesses the run was asked to score
    #[must_use]
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Whether every requested guess was scored
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scores.len() == self.requested
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.scores.iter().map(|(word, &score)| (word, score))
    }

    /// Highest score, ties broken alphabetically
    #[must_use]
    pub fn best(&self) -> Option<(&Word, f64)> {
        self.iter().max_by(|(w1, s1), (w2, s2)| {
            s1.total_cmp(s2).then_with(|| w2.text().cmp(w1.text()))
        })
    }
}

/// ELR scorer with an optional dedicated worker pool
#[derive(Debug, Clone, Copy, Default)]
pub struct ElrScorer {
    threads: Option<usize>,
    time_limit: Option<Duration>,
}

impl ElrScorer {
    /// `None` runs on rayon's global pool (one worker per core)
    #[must_use]
    pub const fn new(threads: Option<usize>) -> Self {
        Self {
            threads,
            time_limit: None,
        }
    }

    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self {
            threads: config.threads,
            time_limit: config.time_limit,
        }
    }

    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Score every candidate as a guess against the table
    ///
    /// # Errors
    /// Returns `WorkerPool` if a dedicated pool cannot be started.
    pub fn score(&self, candidates: &CandidateSet) -> Result<ElrScores, EngineError> {
        self.score_with(candidates, ScoreControl::default())
    }

    /// Score with cancellation and progress hooks
    ///
    /// The configured time limit applies when `control` carries no deadline
    /// of its own.
    ///
    /// # Errors
    /// Returns `WorkerPool` if a dedicated pool cannot be started.
    pub fn score_with(
        &self,
        candidates: &CandidateSet,
        mut control: ScoreControl<'_>,
    ) -> Result<ElrScores, EngineError> {
        if control.deadline.is_none() {
            control.deadline = self.time_limit.map(|limit| Instant::now() + limit);
        }

        let pairs = match self.threads {
            Some(threads) => ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(|| run(candidates, control))?,
            None => run(candidates, control)?,
        };

        Ok(ElrScores {
            scores: pairs.into_iter().collect(),
            requested: candidates.len(),
        })
    }
}

fn run(
    candidates: &CandidateSet,
    control: ScoreControl<'_>,
) -> Result<Vec<(Word, f64)>, EngineError> {
    let guesses: Vec<&Word> = candidates.words().collect();
    let n = guesses.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let fresh = Knowns::new(candidates.word_length());
    let chunk_size = n.div_ceil(rayon::current_num_threads());

    let parts: Vec<Vec<(Word, f64)>> = guesses
        .par_chunks(chunk_size)
        .map(|slice| {
            let mut part = Vec::with_capacity(slice.len());
            for &guess in slice {
                if control.should_stop() {
                    break;
                }
                let total = reduction_total(guess, candidates, &fresh)?;
                part.push((guess.clone(), elr(total, n)));
                control.finished_guess();
            }
            Ok::<_, EngineError>(part)
        })
        .collect::<Result<_, EngineError>>()?;

    Ok(parts.into_iter().flatten().collect())
}

/// Score a table on the global pool with no limits
///
/// # Errors
/// Never fails on the global pool; the signature matches [`ElrScorer::score`].
///
/// # Examples
/// ```
/// use wordler::config::WordLength;
/// use wordler::core::Word;
/// use wordler::scoring::score;
/// use wordler::table::CandidateSet;
///
/// let candidates =
///     CandidateSet::try_from_words(WordLength::DEFAULT, &["crane", "trace", "slate"]).unwrap();
/// let scores = score(&candidates).unwrap();
/// assert_eq!(scores.len(), 3);
/// assert!(scores.is_complete());
/// let crane = scores.get(&Word::new("crane").unwrap()).unwrap();
/// assert!(crane > 1.0 / 3.0 && crane < 1.0);
/// ```
pub fn score(candidates: &CandidateSet) -> Result<ElrScores, EngineError> {
    ElrScorer::default().score(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordLength;
    use crate::scoring::guess_elr;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::atomic::AtomicUsize;

    const FIVE: WordLength = WordLength::DEFAULT;

    const POOL: [&str; 24] = [
        "crane", "trace", "slate", "irate", "grate", "share", "spare", "stare", "brave", "grade",
        "geese", "speed", "erase", "abide", "eerie", "llama", "alloy", "loyal", "robot", "floor",
        "those", "crate", "blame", "flame",
    ];

    fn table(words: &[&str]) -> CandidateSet {
        CandidateSet::try_from_words(FIVE, words).unwrap()
    }

    fn bits(scores: &ElrScores) -> Vec<(String, u64)> {
        let mut pairs: Vec<_> = scores
            .iter()
            .map(|(word, score)| (word.text().to_string(), score.to_bits()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn deterministic_across_worker_counts() {
        let candidates = table(&POOL);
        let baseline = bits(&ElrScorer::new(Some(1)).score(&candidates).unwrap());
        for threads in [Some(2), Some(3), Some(7), None] {
            let scores = ElrScorer::new(threads).score(&candidates).unwrap();
            assert_eq!(bits(&scores), baseline, "threads {threads:?}");
        }
    }

    #[test]
    fn scores_lie_within_bounds() {
        let candidates = table(&POOL);
        let n = candidates.len() as f64;
        let scores = score(&candidates).unwrap();

        assert_eq!(scores.len(), candidates.len());
        assert!(scores.is_complete());
        for (word, value) in scores.iter() {
            assert!(value >= 1.0 / n - 1e-12, "{word}: {value}");
            assert!(value < 1.0, "{word}: {value}");
        }
    }

    #[test]
    fn matches_single_guess_scoring() {
        let candidates = table(&POOL[..10]);
        let scores = score(&candidates).unwrap();
        for word in candidates.words() {
            let single = guess_elr(word, &candidates).unwrap();
            assert_eq!(scores.get(word).unwrap().to_bits(), single.to_bits());
        }
    }

    #[test]
    fn degenerate_tables() {
        let empty = score(&CandidateSet::empty(FIVE)).unwrap();
        assert!(empty.is_empty());
        assert!(empty.is_complete());
        assert!(empty.best().is_none());

        let single = score(&table(&["crane"])).unwrap();
        let (word, value) = single.best().unwrap();
        assert_eq!(word.text(), "CRANE");
        assert!((value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_breaks_ties_alphabetically() {
        // Every guess scores 1 - 2/9 here
        let scores = score(&table(&["slate", "trace", "crane"])).unwrap();
        let (word, _) = scores.best().unwrap();
        assert_eq!(word.text(), "CRANE");
    }

    #[test]
    fn cancelled_before_start_scores_nothing() {
        let candidates = table(&POOL);
        let token = CancelToken::new();
        token.cancel();

        let control = ScoreControl {
            cancel: Some(&token),
            ..ScoreControl::default()
        };
        let scores = ElrScorer::default()
            .score_with(&candidates, control)
            .unwrap();
        assert!(scores.is_empty());
        assert!(!scores.is_complete());
        assert_eq!(scores.requested(), candidates.len());
    }

    #[test]
    fn expired_deadline_scores_nothing() {
        let candidates = table(&POOL);
        let control = ScoreControl {
            deadline: Some(Instant::now()),
            ..ScoreControl::default()
        };
        let scores = ElrScorer::new(Some(2))
            .score_with(&candidates, control)
            .unwrap();
        assert!(scores.is_empty());

        let scores = ElrScorer::new(Some(2))
            .with_time_limit(Some(Duration::ZERO))
            .score(&candidates)
            .unwrap();
        assert!(!scores.is_complete());
    }

    #[test]
    fn cancelling_mid_run_keeps_finished_guesses() {
        let candidates = table(&POOL);
        let token = CancelToken::new();
        let finished = AtomicUsize::new(0);
        let tick = || {
            if finished.fetch_add(1, Ordering::Relaxed) + 1 == 5 {
                token.cancel();
            }
        };

        let control = ScoreControl {
            cancel: Some(&token),
            deadline: None,
            on_guess: Some(&tick),
        };
        let scores = ElrScorer::new(Some(1))
            .score_with(&candidates, control)
            .unwrap();

        // One worker stops right after the fifth guess
        assert_eq!(scores.len(), 5);
        assert_eq!(finished.load(Ordering::Relaxed), 5);
        for (word, value) in scores.iter() {
            assert_eq!(
                value.to_bits(),
                guess_elr(word, &candidates).unwrap().to_bits()
            );
        }
    }

    #[test]
    fn progress_ticks_once_per_guess() {
        let candidates = table(&POOL);
        let finished = AtomicUsize::new(0);
        let tick = || {
            finished.fetch_add(1, Ordering::Relaxed);
        };
        let control = ScoreControl {
            on_guess: Some(&tick),
            ..ScoreControl::default()
        };
        ElrScorer::new(Some(4))
            .score_with(&candidates, control)
            .unwrap();
        assert_eq!(finished.load(Ordering::Relaxed), candidates.len());
    }

    #[test]
    fn from_config_uses_threads_and_time_limit() {
        let config = EngineConfig::new(FIVE)
            .with_threads(Some(2))
            .with_time_limit(Some(Duration::from_secs(60)));
        let scorer = ElrScorer::from_config(&config);
        let scores = scorer.score(&table(&POOL[..6])).unwrap();
        assert!(scores.is_complete());
    }

    #[test]
    fn random_subsets_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let size = rng.random_range(2..=POOL.len());
            let words: Vec<&str> = rand::seq::index::sample(&mut rng, POOL.len(), size)
                .into_iter()
                .map(|i| POOL[i])
                .collect();
            let candidates = table(&words);
            let n = size as f64;
            let scores = ElrScorer::new(Some(3)).score(&candidates).unwrap();
            assert_eq!(scores.len(), size);
            for (_, value) in scores.iter() {
                assert!((1.0 / n - 1e-12..1.0).contains(&value));
            }
        }
    }
}

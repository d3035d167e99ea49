//! Expected List Reduction for a single guess
//!
//! For a guess `g` over candidates `C` (n words):
//!
//! ELR(g) = 1 - (Σ_{a ∈ C, a ≠ g} |filter(update(fresh, g, compare(g, a)), C)|) / n²
//!
//! The self-comparison is skipped while the divisor stays n², so scores lie in
//! [1/n, 1) for n ≥ 2.

use crate::constraints::{Filter, Knowns};
use crate::core::{EngineError, Feedback, Word};
use crate::table::CandidateSet;
use rustc_hash::FxHashMap;

/// Sum of surviving-candidate counts over every other candidate as the answer
///
/// Answers that produce the same feedback produce the same constraint state,
/// so each distinct feedback is filtered once and weighted by how many answers
/// produced it. Every trial starts from `fresh`, which is never modified.
///
/// # Errors
/// Returns `InvalidWordLength` if the guess does not fit the table.
pub fn reduction_total(
    guess: &Word,
    candidates: &CandidateSet,
    fresh: &Knowns,
) -> Result<usize, EngineError> {
    candidates.word_length().check(guess)?;

    let mut outcomes: FxHashMap<Feedback, usize> = FxHashMap::default();
    for actual in candidates.words() {
        if actual != guess {
            *outcomes
                .entry(Feedback::calculate(guess, actual))
                .or_insert(0) += 1;
        }
    }

    let mut total = 0;
    for (feedback, answers) in &outcomes {
        let state = fresh.update(guess, feedback)?;
        total += answers * Filter::new(&state).count(candidates.words());
    }
    Ok(total)
}

/// Normalize a reduction total into an ELR score
///
/// An empty table scores 0; a single word scores 1.
#[must_use]
pub fn elr(total: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    1.0 - total as f64 / (n * n) as f64
}

/// ELR of one guess against a candidate table
///
/// # Errors
/// Returns `InvalidWordLength` if the guess does not fit the table.
///
/// # Examples
/// ```
/// use wordler::config::WordLength;
/// use wordler::core::Word;
/// use wordler::scoring::guess_elr;
/// use wordler::table::CandidateSet;
///
/// let candidates =
///     CandidateSet::try_from_words(WordLength::DEFAULT, &["crane", "trace", "slate"]).unwrap();
/// let score = guess_elr(&Word::new("crane").unwrap(), &candidates).unwrap();
/// assert!((score - 7.0 / 9.0).abs() < 1e-12);
/// ```
pub fn guess_elr(guess: &Word, candidates: &CandidateSet) -> Result<f64, EngineError> {
    let fresh = Knowns::new(candidates.word_length());
    let total = reduction_total(guess, candidates, &fresh)?;
    Ok(elr(total, candidates.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordLength;
    use crate::constraints::apply;

    const FIVE: WordLength = WordLength::DEFAULT;

    fn table(words: &[&str]) -> CandidateSet {
        CandidateSet::try_from_words(FIVE, words).unwrap()
    }

    /// One filter pass per (guess, answer) pair, no grouping
    fn reference_total(guess: &Word, candidates: &CandidateSet) -> usize {
        candidates
            .words()
            .filter(|actual| *actual != guess)
            .map(|actual| {
                let feedback = Feedback::calculate(guess, actual);
                let state = Knowns::new(FIVE).update(guess, &feedback).unwrap();
                apply(&state, candidates).len()
            })
            .sum()
    }

    #[test]
    fn three_word_example() {
        // Every guess leaves exactly one word for each of the two other answers
        let candidates = table(&["crane", "trace", "slate"]);
        for guess in candidates.words() {
            let fresh = Knowns::new(FIVE);
            assert_eq!(reduction_total(guess, &candidates, &fresh).unwrap(), 2);
            let score = guess_elr(guess, &candidates).unwrap();
            assert!((score - (1.0 - 2.0 / 9.0)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn grouping_matches_per_pair_reference() {
        let candidates = table(&[
            "crane", "trace", "slate", "irate", "grate", "share", "spare", "stare", "brave",
            "grade", "geese", "speed", "erase", "abide", "eerie", "llama", "alloy", "loyal",
        ]);
        let fresh = Knowns::new(FIVE);
        for guess in candidates.words() {
            assert_eq!(
                reduction_total(guess, &candidates, &fresh).unwrap(),
                reference_total(guess, &candidates),
                "guess {guess}"
            );
        }
    }

    #[test]
    fn fresh_state_is_not_modified() {
        let candidates = table(&["crane", "trace", "slate", "share"]);
        let fresh = Knowns::new(FIVE);
        reduction_total(&Word::new("crane").unwrap(), &candidates, &fresh).unwrap();
        assert!(fresh.is_unconstrained());
    }

    #[test]
    fn guess_outside_table_is_scored() {
        let candidates = table(&["crane", "trace", "slate"]);
        let score = guess_elr(&Word::new("stare").unwrap(), &candidates).unwrap();
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn wrong_length_guess_is_rejected() {
        let candidates = table(&["crane", "trace"]);
        assert!(matches!(
            guess_elr(&Word::new("planet").unwrap(), &candidates),
            Err(EngineError::InvalidWordLength { .. })
        ));
    }

    #[test]
    fn degenerate_sizes() {
        assert!(elr(0, 0).abs() < f64::EPSILON);
        assert!((elr(0, 1) - 1.0).abs() < f64::EPSILON);

        let single = table(&["crane"]);
        let score = guess_elr(&Word::new("crane").unwrap(), &single).unwrap();
        assert!((score - 1.0).abs() < f64::EPSILON);
    }
}

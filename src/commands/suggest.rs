//! Suggestion command
//!
//! Applies the player's guess history to the table and ranks what is left.

use crate::constraints::{Knowns, Session};
use crate::core::{EngineError, GuessFeedback, Rejected};
use crate::output::formatters::percent;
use crate::scoring::ElrScorer;
use crate::table::{CandidateSet, LetterStats, RankedRow, SortKey, rank};

/// Configuration for a suggestion run
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Raw `WORD-DIGITS` entries, in play order
    pub entries: Vec<String>,
    pub top: usize,
    pub sort_by: SortKey,
    /// Compute ELR even when not sorting by it
    pub with_elr: bool,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            top: 10,
            sort_by: SortKey::LetterFrequency,
            with_elr: false,
        }
    }

    const fn wants_elr(&self) -> bool {
        self.with_elr || matches!(self.sort_by, SortKey::Elr)
    }
}

/// Result of a suggestion run
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub accepted: Vec<GuessFeedback>,
    pub rejected: Vec<Rejected>,
    pub knowns: Knowns,
    pub total: usize,
    pub remaining: usize,
    pub sort_by: SortKey,
    /// Top rows of the remaining candidates
    pub rows: Vec<RankedRow>,
    /// Whether ELR was requested and scored for every remaining word
    pub elr_complete: bool,
}

impl SuggestResult {
    /// Share of the input table still possible, in percent
    #[must_use]
    pub fn remaining_percent(&self) -> f64 {
        percent(self.remaining, self.total)
    }
}

/// Filter the table by the given feedback and rank the survivors
///
/// Bad entries are skipped and reported in the result, including entries
/// that contradict earlier ones.
///
/// # Errors
/// Returns `WorkerPool` if ELR scoring cannot start its workers.
pub fn suggest(
    config: &SuggestConfig,
    table: &CandidateSet,
    scorer: &ElrScorer,
) -> Result<SuggestResult, EngineError> {
    let length = table.word_length();
    let (parsed, mut rejected) = GuessFeedback::parse_all(&config.entries, length);

    let mut session = Session::new(length);
    let mut accepted = Vec::with_capacity(parsed.len());
    for entry in parsed {
        match session.record(entry.clone()) {
            Ok(_) => accepted.push(entry),
            Err(error) => rejected.push(Rejected {
                input: entry.to_string(),
                error,
            }),
        }
    }

    let remaining = session.candidates(table);
    let stats = LetterStats::from_candidates(table);
    let scores = if config.wants_elr() {
        Some(scorer.score(&remaining)?)
    } else {
        None
    };

    let mut rows = rank(&remaining, &stats, scores.as_ref(), config.sort_by);
    rows.truncate(config.top);

    Ok(SuggestResult {
        accepted,
        rejected,
        knowns: session.knowns().clone(),
        total: table.len(),
        remaining: remaining.len(),
        sort_by: config.sort_by,
        rows,
        elr_complete: scores.as_ref().is_some_and(|s| s.is_complete()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordLength;

    fn table() -> CandidateSet {
        CandidateSet::try_from_rows(
            WordLength::DEFAULT,
            [
                ("share", 9.0),
                ("flare", 8.0),
                ("stare", 7.0),
                ("spare", 6.0),
                ("aware", 5.0),
                ("crane", 4.0),
                ("slate", 3.0),
                ("brave", 2.0),
            ],
        )
        .unwrap()
    }

    fn config(entries: &[&str]) -> SuggestConfig {
        SuggestConfig::new(entries.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn no_history_keeps_everything() {
        let result = suggest(&config(&[]), &table(), &ElrScorer::default()).unwrap();
        assert_eq!(result.remaining, 8);
        assert!((result.remaining_percent() - 100.0).abs() < f64::EPSILON);
        assert!(result.rows.iter().all(|row| row.elr.is_none()));
        assert!(!result.elr_complete);
    }

    #[test]
    fn feedback_narrows_and_ranks() {
        let mut cfg = config(&["CRANE-01202", "SLATE-20202"]);
        cfg.sort_by = SortKey::WordFrequency;

        let result = suggest(&cfg, &table(), &ElrScorer::default()).unwrap();
        assert_eq!(result.accepted.len(), 2);
        assert!(result.rejected.is_empty());
        let words: Vec<_> = result.rows.iter().map(|r| r.word.text()).collect();
        assert_eq!(words, vec!["SHARE", "SPARE"]);
        assert!((result.remaining_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn bad_and_contradicting_entries_are_skipped() {
        let cfg = config(&["CRANE-01202", "CRANE01202", "SLATE-2020", "TRACE-22222"]);
        let result = suggest(&cfg, &table(), &ElrScorer::default()).unwrap();

        assert_eq!(result.accepted.len(), 1);
        assert_eq!(result.rejected.len(), 3);
        assert!(result.rejected.iter().any(|r| matches!(
            r.error,
            EngineError::InconsistentConstraints(_)
        )));
        // Only the first entry was applied
        assert_eq!(result.knowns.exact_pattern(), "..A.E");
    }

    #[test]
    fn elr_sort_scores_every_remaining_word() {
        let mut cfg = config(&["CRANE-01202"]);
        cfg.sort_by = SortKey::Elr;
        cfg.top = 3;

        let result = suggest(&cfg, &table(), &ElrScorer::new(Some(2))).unwrap();
        assert!(result.elr_complete);
        assert_eq!(result.rows.len(), 3);
        let scores: Vec<f64> = result.rows.iter().map(|r| r.elr.unwrap()).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn no_matches_is_not_an_error() {
        // Consistent feedback that matches nothing in the table
        let result = suggest(&config(&["CRANE-00000"]), &table(), &ElrScorer::default()).unwrap();
        assert_eq!(result.remaining, 0);
        assert!(result.rejected.is_empty());
        assert!(result.rows.is_empty());
    }
}

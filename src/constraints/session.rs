//! Live player state
//!
//! A `Session` is the player-facing accumulation of real guesses. It is
//! independent of the scorer, which only ever works on fresh states.

use super::{Knowns, filter};
use crate::config::WordLength;
use crate::core::{EngineError, GuessFeedback};
use crate::table::CandidateSet;

/// Guess history plus the constraints it implies
#[derive(Debug, Clone)]
pub struct Session {
    length: WordLength,
    history: Vec<GuessFeedback>,
    /// `states[i]` is the state after the first `i` guesses
    states: Vec<Knowns>,
}

impl Session {
    #[must_use]
    pub fn new(length: WordLength) -> Self {
        Self {
            length,
            history: Vec::new(),
            states: vec![Knowns::new(length)],
        }
    }

    /// Add a guess to the history
    ///
    /// The session is unchanged when the entry is rejected.
    ///
    /// # Errors
    /// Returns `InvalidWordLength`, `MalformedFeedback`, or
    /// `InconsistentConstraints` (the entry contradicts earlier feedback).
    pub fn record(&mut self, entry: GuessFeedback) -> Result<&Knowns, EngineError> {
        let next = self.knowns().update(&entry.guess, &entry.feedback)?;
        self.history.push(entry);
        self.states.push(next);
        Ok(self.knowns())
    }

    /// Remove the most recent guess
    pub fn undo(&mut self) -> Option<GuessFeedback> {
        let entry = self.history.pop()?;
        self.states.pop();
        Some(entry)
    }

    /// Forget every guess
    pub fn reset(&mut self) {
        self.history.clear();
        self.states.truncate(1);
    }

    /// Current constraints
    #[must_use]
    pub fn knowns(&self) -> &Knowns {
        // states always holds at least the fresh state
        &self.states[self.states.len() - 1]
    }

    #[must_use]
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }

    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.length
    }

    /// Number of guesses recorded so far
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// True once the last recorded feedback was all exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|entry| entry.feedback.is_perfect())
    }

    /// Words from `table` still consistent with the history
    #[must_use]
    pub fn candidates(&self, table: &CandidateSet) -> CandidateSet {
        filter::apply(self.knowns(), table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: WordLength = WordLength::DEFAULT;

    fn entry(text: &str) -> GuessFeedback {
        GuessFeedback::parse(text, FIVE).unwrap()
    }

    fn table() -> CandidateSet {
        CandidateSet::try_from_words(
            FIVE,
            &["crane", "trace", "slate", "share", "spare", "stare", "brave"],
        )
        .unwrap()
    }

    #[test]
    fn record_narrows_candidates() {
        let mut session = Session::new(FIVE);
        assert_eq!(session.candidates(&table()).len(), 7);

        session.record(entry("CRANE-01202")).unwrap();
        let remaining: Vec<_> = session
            .candidates(&table())
            .words()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(remaining, vec!["SHARE", "SPARE", "STARE"]);
        assert_eq!(session.turns(), 1);
        assert!(!session.is_solved());
    }

    #[test]
    fn inconsistent_entry_is_rejected_without_changing_state() {
        let mut session = Session::new(FIVE);
        session.record(entry("CRANE-20000")).unwrap();
        let before = session.knowns().clone();

        let err = session.record(entry("CLOTH-10000")).unwrap_err();
        assert!(matches!(err, EngineError::InconsistentConstraints(_)));
        assert_eq!(session.knowns(), &before);
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut session = Session::new(FIVE);
        session.record(entry("CRANE-01202")).unwrap();
        let after_first = session.knowns().clone();
        session.record(entry("SLATE-20202")).unwrap();

        let undone = session.undo().unwrap();
        assert_eq!(undone.guess.text(), "SLATE");
        assert_eq!(session.knowns(), &after_first);

        session.undo();
        assert!(session.knowns().is_unconstrained());
        assert!(session.undo().is_none());
    }

    #[test]
    fn reset_clears_history() {
        let mut session = Session::new(FIVE);
        session.record(entry("CRANE-01202")).unwrap();
        session.reset();
        assert_eq!(session.turns(), 0);
        assert!(session.knowns().is_unconstrained());
    }

    #[test]
    fn perfect_feedback_solves() {
        let mut session = Session::new(FIVE);
        session.record(entry("SHARE-22222")).unwrap();
        assert!(session.is_solved());
        assert_eq!(session.candidates(&table()).len(), 1);
    }
}

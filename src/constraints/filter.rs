//! Candidate filtering
//!
//! A [`Filter`] is compiled once from a [`Knowns`] and then tested against
//! many words. Each word goes through five checks in order:
//!
//! 1. exact letters at fixed positions
//! 2. no excluded letters anywhere
//! 3. every positionally-ruled-out letter present, but not at those positions
//! 4. no letter above its maximum count
//! 5. no letter below its minimum count
//!
//! Letters with no recorded information are unconstrained.

use super::Knowns;
use crate::core::letters::{ALPHABET_SIZE, index_letter};
use crate::core::{LetterSet, PositionSet, Word};
use crate::table::CandidateSet;

/// Compiled membership test for one constraint state
#[derive(Debug, Clone)]
pub struct Filter {
    length: usize,
    exact: Vec<(usize, u8)>,
    exclude: LetterSet,
    required: LetterSet,
    exclude_at: Vec<(u8, PositionSet)>,
    max_count: Vec<(u8, usize)>,
    min_count: Vec<(u8, usize)>,
}

impl Filter {
    #[must_use]
    pub fn new(knowns: &Knowns) -> Self {
        let exact = knowns
            .exact()
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|letter| (position, letter)))
            .collect();

        let mut required = LetterSet::EMPTY;
        let mut exclude_at = Vec::new();
        let mut max_count = Vec::new();
        let mut min_count = Vec::new();

        for letter in (0..ALPHABET_SIZE).map(index_letter) {
            let positions = knowns.excluded_at(letter);
            if !positions.is_empty() {
                required.insert(letter);
                exclude_at.push((letter, positions));
            }
            if let Some(max) = knowns.max_count(letter) {
                max_count.push((letter, max));
            }
            if let Some(min) = knowns.min_count(letter) {
                min_count.push((letter, min));
            }
        }

        Self {
            length: knowns.word_length(),
            exact,
            exclude: knowns.excluded(),
            required,
            exclude_at,
            max_count,
            min_count,
        }
    }

    /// Test a word against every check
    ///
    /// Words of another length never match.
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.length
            && self.keeps_exact(word)
            && self.keeps_exclude(word)
            && self.keeps_exclude_at(word)
            && self.keeps_max_count(word)
            && self.keeps_min_count(word)
    }

    #[inline]
    fn keeps_exact(&self, word: &Word) -> bool {
        self.exact
            .iter()
            .all(|&(position, letter)| word.char_at(position) == letter)
    }

    #[inline]
    fn keeps_exclude(&self, word: &Word) -> bool {
        !word.letters().intersects(self.exclude)
    }

    #[inline]
    fn keeps_exclude_at(&self, word: &Word) -> bool {
        word.letters().is_superset(self.required)
            && self
                .exclude_at
                .iter()
                .all(|&(letter, positions)| !word.positions_of(letter).intersects(positions))
    }

    #[inline]
    fn keeps_max_count(&self, word: &Word) -> bool {
        self.max_count
            .iter()
            .all(|&(letter, max)| word.count_of(letter) <= max)
    }

    #[inline]
    fn keeps_min_count(&self, word: &Word) -> bool {
        self.min_count
            .iter()
            .all(|&(letter, min)| word.count_of(letter) >= min)
    }

    /// Number of words that pass
    pub fn count<'a, I>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = &'a Word>,
    {
        words.into_iter().filter(|word| self.matches(word)).count()
    }
}

/// Narrow a candidate table to the words consistent with `knowns`
///
/// Order is preserved; sorting is left to the caller.
#[must_use]
pub fn apply(knowns: &Knowns, candidates: &CandidateSet) -> CandidateSet {
    candidates.retain_matching(&Filter::new(knowns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordLength;
    use crate::core::Feedback;

    const FIVE: WordLength = WordLength::DEFAULT;

    fn table(words: &[&str]) -> CandidateSet {
        CandidateSet::try_from_words(FIVE, words).unwrap()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.words().map(Word::text).collect()
    }

    fn learned(guess: &str, feedback: &str) -> Knowns {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::parse(feedback, 5).unwrap();
        Knowns::new(FIVE).update(&guess, &feedback).unwrap()
    }

    #[test]
    fn unconstrained_keeps_everything() {
        let candidates = table(&["crane", "trace", "slate"]);
        let filtered = apply(&Knowns::new(FIVE), &candidates);
        assert_eq!(texts(&filtered), vec!["CRANE", "TRACE", "SLATE"]);
    }

    #[test]
    fn exact_and_exclude_scenario() {
        let knowns = Knowns::new(FIVE)
            .with_exact(1, b'R')
            .with_exact(2, b'A')
            .with_exact(4, b'E')
            .with_excluded(b'C');
        let candidates = table(&["trace", "brave", "grade"]);

        let filtered = apply(&knowns, &candidates);
        assert_eq!(texts(&filtered), vec!["BRAVE", "GRADE"]);
    }

    #[test]
    fn exclude_at_requires_letter_elsewhere() {
        // R present but not at position 1
        let knowns = Knowns::new(FIVE).with_excluded_at(b'R', 1);
        let candidates = table(&["crane", "rates", "slate", "otter"]);

        let filtered = apply(&knowns, &candidates);
        assert_eq!(texts(&filtered), vec!["RATES", "OTTER"]);
    }

    #[test]
    fn max_and_min_counts() {
        let at_most_one = Knowns::new(FIVE).with_max_count(b'E', 1);
        let at_least_two = Knowns::new(FIVE).with_min_count(b'E', 2);
        let candidates = table(&["geese", "crane", "eerie", "sleet", "stamp"]);

        assert_eq!(
            texts(&apply(&at_most_one, &candidates)),
            vec!["CRANE", "STAMP"]
        );
        assert_eq!(
            texts(&apply(&at_least_two, &candidates)),
            vec!["GEESE", "EERIE", "SLEET"]
        );
    }

    #[test]
    fn repeated_letter_feedback_filters_correctly() {
        // SPEED against ABIDE: exactly one E, not at positions 2 or 3
        let knowns = learned("speed", "00101");
        let candidates = table(&["abide", "eerie", "ended", "slide", "edict"]);

        let filtered = apply(&knowns, &candidates);
        assert_eq!(texts(&filtered), vec!["ABIDE", "EDICT"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let knowns = learned("crane", "01202");
        let candidates = table(&["crane", "trace", "slate", "irate", "grate", "rupee"]);

        let once = apply(&knowns, &candidates);
        let twice = apply(&knowns, &once);
        assert_eq!(texts(&once), texts(&twice));
    }

    #[test]
    fn tighter_state_keeps_a_subset() {
        let candidates = table(&[
            "crane", "trace", "slate", "irate", "grate", "share", "flare", "stare", "spare",
            "aware",
        ]);
        // Answer SHARE: CRANE then SLATE
        let loose = learned("crane", "01202");
        let tight = loose
            .update(
                &Word::new("slate").unwrap(),
                &Feedback::parse("20202", 5).unwrap(),
            )
            .unwrap();

        let loose_words = apply(&loose, &candidates);
        let tight_words = apply(&tight, &candidates);
        assert_eq!(
            texts(&loose_words),
            vec!["SHARE", "FLARE", "STARE", "SPARE", "AWARE"]
        );
        assert_eq!(texts(&tight_words), vec!["SHARE", "SPARE"]);
        for word in tight_words.words() {
            assert!(loose_words.contains(word));
        }
    }

    #[test]
    fn count_matches_apply() {
        let knowns = learned("slate", "00202");
        let candidates = table(&["crane", "trace", "slate", "irate", "grate", "brave"]);

        let filter = Filter::new(&knowns);
        assert_eq!(
            filter.count(candidates.words()),
            apply(&knowns, &candidates).len()
        );
    }

    #[test]
    fn wrong_length_never_matches() {
        let filter = Filter::new(&Knowns::new(FIVE));
        assert!(!filter.matches(&Word::new("planet").unwrap()));
        assert!(filter.matches(&Word::new("plane").unwrap()));
    }
}

//! Constraint accumulation
//!
//! `Knowns` folds (guess, feedback) pairs into everything learned about the
//! answer so far. It is a plain value: every field is owned, fixed-size or
//! `Copy`, so a clone never shares storage with the original. [`Knowns::update`]
//! takes `&self` and returns a successor, which lets the scorer start each
//! simulated trial from the same fresh state without any chance of leakage.

use crate::config::WordLength;
use crate::core::letters::{ALPHABET_SIZE, index_letter, letter_index};
use crate::core::{EngineError, Feedback, GuessFeedback, LetterSet, Mark, PositionSet, Word};

/// Accumulated constraints on the answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Knowns {
    /// Required letter per position, `None` when unknown
    exact: Vec<Option<u8>>,
    /// Letters absent from the answer
    exclude: LetterSet,
    /// Positions each letter is known not to occupy
    exclude_at: [PositionSet; ALPHABET_SIZE],
    /// Minimum occurrences per letter (0 = no bound)
    min_count: [u8; ALPHABET_SIZE],
    /// Maximum occurrences per letter
    max_count: [Option<u8>; ALPHABET_SIZE],
}

impl Knowns {
    /// The all-unknown state
    #[must_use]
    pub fn new(length: WordLength) -> Self {
        Self {
            exact: vec![None; length.get()],
            exclude: LetterSet::EMPTY,
            exclude_at: [PositionSet::EMPTY; ALPHABET_SIZE],
            min_count: [0; ALPHABET_SIZE],
            max_count: [None; ALPHABET_SIZE],
        }
    }

    /// Fold a whole guess history into a fresh state
    ///
    /// # Errors
    /// Fails on the first entry that has the wrong length or makes the state
    /// inconsistent.
    pub fn from_history<'a, I>(length: WordLength, history: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = &'a GuessFeedback>,
    {
        history
            .into_iter()
            .try_fold(Self::new(length), |knowns, entry| {
                knowns.update(&entry.guess, &entry.feedback)
            })
    }

    /// Learn from one guess and its feedback, returning the successor state
    ///
    /// Letters that occur once in the guess:
    /// - exact fixes the position
    /// - present rules out that position for the letter
    /// - absent excludes the letter everywhere, unless it is already known to be
    ///   in the answer, in which case only that position is ruled out
    ///
    /// Letters that occur more than once are handled together: with no
    /// non-absent marks the letter is excluded (same exception as above);
    /// otherwise the number of non-absent marks becomes a lower bound, and also
    /// an upper bound when any copy came back absent. Each exact copy fixes its
    /// position and every other copy rules its position out.
    ///
    /// Bounds only ever tighten: lower bounds merge with `max`, upper bounds
    /// with `min`.
    ///
    /// # Errors
    /// - `InvalidWordLength` / `MalformedFeedback` when the guess or feedback
    ///   does not match this state's word length
    /// - `InconsistentConstraints` when the result contradicts itself
    ///
    /// # Examples
    /// ```
    /// use wordler::config::WordLength;
    /// use wordler::constraints::Knowns;
    /// use wordler::core::{Feedback, Word};
    ///
    /// let fresh = Knowns::new(WordLength::DEFAULT);
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::parse("01202", 5).unwrap();
    ///
    /// let knowns = fresh.update(&guess, &feedback).unwrap();
    /// assert_eq!(knowns.exact_at(2), Some(b'A'));
    /// assert!(knowns.is_excluded(b'C'));
    /// assert!(fresh.is_unconstrained());
    /// ```
    pub fn update(&self, guess: &Word, feedback: &Feedback) -> Result<Self, EngineError> {
        let length = self.exact.len();
        if guess.len() != length {
            return Err(EngineError::InvalidWordLength {
                word: guess.text().to_string(),
                expected: length,
                actual: guess.len(),
            });
        }
        if feedback.len() != length {
            return Err(EngineError::malformed(
                &feedback.to_string(),
                format!("expected {length} digits, got {}", feedback.len()),
            ));
        }

        let mut next = self.clone();
        next.absorb(guess, feedback)?;
        next.check()?;
        Ok(next)
    }

    fn absorb(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), EngineError> {
        for letter in guess.letters().iter() {
            let positions = guess.positions_of(letter);

            if positions.len() == 1 {
                let Some(position) = positions.first() else {
                    continue;
                };
                match feedback[position] {
                    Mark::Exact => self.fix(position, letter)?,
                    Mark::Present => self.rule_out(letter, position),
                    Mark::Absent => self.mark_absent(letter, positions),
                }
                continue;
            }

            let non_absent = positions.iter().filter(|&p| !feedback[p].is_absent()).count();
            let absent = positions.len() - non_absent;

            if non_absent == 0 {
                self.mark_absent(letter, positions);
                continue;
            }

            let index = letter_index(letter);
            let non_absent = non_absent as u8;
            self.min_count[index] = self.min_count[index].max(non_absent);
            if absent > 0 {
                self.max_count[index] =
                    Some(self.max_count[index].map_or(non_absent, |max| max.min(non_absent)));
            }

            for position in positions.iter() {
                if feedback[position] == Mark::Exact {
                    self.fix(position, letter)?;
                } else {
                    self.rule_out(letter, position);
                }
            }
        }
        Ok(())
    }

    /// Absent marks exclude a letter outright, unless the letter is already
    /// known to be in the answer; then only the guessed positions are ruled out.
    fn mark_absent(&mut self, letter: u8, positions: PositionSet) {
        if self.is_known_present(letter) {
            for position in positions.iter() {
                self.rule_out(letter, position);
            }
        } else {
            self.exclude.insert(letter);
        }
    }

    fn fix(&mut self, position: usize, letter: u8) -> Result<(), EngineError> {
        match self.exact[position] {
            Some(existing) if existing != letter => {
                Err(EngineError::InconsistentConstraints(format!(
                    "position {} cannot be both {} and {}",
                    position + 1,
                    existing as char,
                    letter as char
                )))
            }
            _ => {
                self.exact[position] = Some(letter);
                Ok(())
            }
        }
    }

    fn rule_out(&mut self, letter: u8, position: usize) {
        self.exclude_at[letter_index(letter)].insert(position);
    }

    /// Verify the state does not contradict itself
    ///
    /// # Errors
    /// Returns `InconsistentConstraints` describing the first contradiction:
    /// a fixed letter that is excluded or ruled out at its own position, a
    /// required letter that is excluded, a lower bound above the upper bound,
    /// more required copies than open positions, or more required letters
    /// than the word has positions.
    pub fn check(&self) -> Result<(), EngineError> {
        let length = self.exact.len();
        let mut fixed = [0u8; ALPHABET_SIZE];

        for (position, slot) in self.exact.iter().enumerate() {
            let Some(letter) = *slot else { continue };
            fixed[letter_index(letter)] += 1;

            if self.exclude.contains(letter) {
                return Err(inconsistent(format!(
                    "{} is fixed at position {} but excluded",
                    letter as char,
                    position + 1
                )));
            }
            if self.exclude_at[letter_index(letter)].contains(position) {
                return Err(inconsistent(format!(
                    "{} is both fixed and ruled out at position {}",
                    letter as char,
                    position + 1
                )));
            }
        }

        let mut required_total = 0usize;
        for index in 0..ALPHABET_SIZE {
            let letter = index_letter(index);
            let required = usize::from(self.required_count(index, fixed[index]));
            if required == 0 {
                continue;
            }

            if self.exclude.contains(letter) {
                return Err(inconsistent(format!(
                    "{} is excluded but required",
                    letter as char
                )));
            }
            if let Some(max) = self.max_count[index]
                && required > usize::from(max)
            {
                return Err(inconsistent(format!(
                    "{} needs at least {required} copies but at most {max} are allowed",
                    letter as char
                )));
            }

            let open = self
                .exact
                .iter()
                .enumerate()
                .filter(|&(position, slot)| {
                    !self.exclude_at[index].contains(position)
                        && slot.is_none_or(|fixed_letter| fixed_letter == letter)
                })
                .count();
            if open < required {
                return Err(inconsistent(format!(
                    "{} needs {required} positions but only {open} are open",
                    letter as char
                )));
            }

            required_total += required;
        }

        if required_total > length {
            return Err(inconsistent(format!(
                "{required_total} letters are required in a {length}-letter word"
            )));
        }
        Ok(())
    }

    /// Lowest number of copies of a letter the answer must contain
    fn required_count(&self, index: usize, fixed: u8) -> u8 {
        let positional = u8::from(!self.exclude_at[index].is_empty());
        self.min_count[index].max(fixed).max(positional)
    }

    /// True if the letter is fixed somewhere, ruled out somewhere, or has a lower bound
    #[must_use]
    pub fn is_known_present(&self, letter: u8) -> bool {
        let index = letter_index(letter);
        self.min_count[index] > 0
            || !self.exclude_at[index].is_empty()
            || self.exact.contains(&Some(letter))
    }

    /// Word length this state applies to
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.exact.len()
    }

    /// Required letter at a position
    #[inline]
    #[must_use]
    pub fn exact_at(&self, position: usize) -> Option<u8> {
        self.exact.get(position).copied().flatten()
    }

    /// All position slots, `None` where unknown
    #[inline]
    #[must_use]
    pub fn exact(&self) -> &[Option<u8>] {
        &self.exact
    }

    /// Letters known to be absent
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.exclude
    }

    #[inline]
    #[must_use]
    pub const fn is_excluded(&self, letter: u8) -> bool {
        self.exclude.contains(letter)
    }

    /// Positions a letter is known not to occupy
    #[inline]
    #[must_use]
    pub const fn excluded_at(&self, letter: u8) -> PositionSet {
        self.exclude_at[letter_index(letter)]
    }

    #[inline]
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> Option<usize> {
        match self.min_count[letter_index(letter)] {
            0 => None,
            n => Some(n as usize),
        }
    }

    #[inline]
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> Option<usize> {
        match self.max_count[letter_index(letter)] {
            Some(n) => Some(n as usize),
            None => None,
        }
    }

    /// True for the all-unknown state
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.exact.iter().all(Option::is_none)
            && self.exclude.is_empty()
            && self.exclude_at.iter().all(|p| p.is_empty())
            && self.min_count.iter().all(|&n| n == 0)
            && self.max_count.iter().all(Option::is_none)
    }

    /// Fix a letter at a position
    ///
    /// Builders do not validate; call [`Knowns::check`] afterwards if the
    /// combination may contradict itself.
    #[must_use]
    pub fn with_exact(mut self, position: usize, letter: u8) -> Self {
        self.exact[position] = Some(letter.to_ascii_uppercase());
        self
    }

    /// Exclude a letter everywhere
    #[must_use]
    pub fn with_excluded(mut self, letter: u8) -> Self {
        self.exclude.insert(letter.to_ascii_uppercase());
        self
    }

    /// Rule a letter out at a position (the letter must still appear elsewhere)
    #[must_use]
    pub fn with_excluded_at(mut self, letter: u8, position: usize) -> Self {
        self.rule_out(letter.to_ascii_uppercase(), position);
        self
    }

    #[must_use]
    pub fn with_min_count(mut self, letter: u8, count: u8) -> Self {
        let index = letter_index(letter.to_ascii_uppercase());
        self.min_count[index] = self.min_count[index].max(count);
        self
    }

    #[must_use]
    pub fn with_max_count(mut self, letter: u8, count: u8) -> Self {
        let index = letter_index(letter.to_ascii_uppercase());
        self.max_count[index] = Some(self.max_count[index].map_or(count, |max| max.min(count)));
        self
    }

    /// Exact slots rendered as a pattern, e.g. `".RA.E"`
    #[must_use]
    pub fn exact_pattern(&self) -> String {
        self.exact
            .iter()
            .map(|slot| slot.map_or('.', char::from))
            .collect()
    }
}

fn inconsistent(detail: String) -> EngineError {
    EngineError::InconsistentConstraints(detail)
}

//! Compact letter and position sets
//!
//! Both sets are single `u32` bitmasks, so they are `Copy` and cloning a
//! constraint state never shares storage between copies.

/// Number of letters in the alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// Largest supported word length (positions are bits of a `u32`)
pub const MAX_POSITIONS: usize = 32;

/// Index (0-25) of an uppercase ASCII letter
///
/// Callers must pass a byte in `b'A'..=b'Z'`; [`crate::core::Word`] guarantees this.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// Uppercase ASCII letter for an index (0-25)
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    b'A' + index as u8
}

/// Set of letters, one bit per letter of the alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(index_letter)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Set of word positions, one bit per position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(u32);

impl PositionSet {
    pub const EMPTY: Self = Self(0);

    /// Set containing a single position
    #[inline]
    #[must_use]
    pub const fn single(position: usize) -> Self {
        Self(1 << position)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    #[inline]
    pub const fn insert(&mut self, position: usize) {
        self.0 |= 1 << position;
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Lowest position in the set, if any
    #[inline]
    #[must_use]
    pub const fn first(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let bits = self.0;
        (0..MAX_POSITIONS).filter(move |&i| bits & (1 << i) != 0)
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for position in iter {
            set.insert(position);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_round_trip_edges() {
        assert_eq!(letter_index(b'A'), 0);
        assert_eq!(letter_index(b'Z'), 25);
        assert_eq!(index_letter(0), b'A');
        assert_eq!(index_letter(25), b'Z');
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'C');
        set.insert(b'Z');
        set.insert(b'C');

        assert_eq!(set.len(), 2);
        assert!(set.contains(b'C'));
        assert!(set.contains(b'Z'));
        assert!(!set.contains(b'A'));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'C', b'Z']);
    }

    #[test]
    fn letter_set_relations() {
        let abc: LetterSet = b"ABC".iter().copied().collect();
        let bc: LetterSet = b"BC".iter().copied().collect();
        let xyz: LetterSet = b"XYZ".iter().copied().collect();

        assert!(abc.is_superset(bc));
        assert!(!bc.is_superset(abc));
        assert!(abc.intersects(bc));
        assert!(!abc.intersects(xyz));
        assert!(abc.is_superset(LetterSet::EMPTY));
    }

    #[test]
    fn position_set_basics() {
        let mut set = PositionSet::single(3);
        set.insert(0);
        set.insert(31);

        assert_eq!(set.len(), 3);
        assert_eq!(set.first(), Some(0));
        assert!(set.contains(31));
        assert!(!set.contains(1));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 31]);
        assert_eq!(PositionSet::EMPTY.first(), None);
    }

    #[test]
    fn position_set_intersects() {
        let a: PositionSet = [0, 2].into_iter().collect();
        let b: PositionSet = [2, 4].into_iter().collect();
        let c: PositionSet = [1].into_iter().collect();

        assert!(a.intersects(b));
        assert!(!a.intersects(c));
    }
}

//! Letter helpers
//!
//! Letters are lowercase ASCII bytes. Per-letter state is kept in `[_; ALPHABET]`
//! arrays indexed by [`index`], and letter sets are a 26-bit mask.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET: usize = 26;

/// Array index of a lowercase ASCII letter
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Letter for an array index (0-25)
#[inline]
#[must_use]
pub const fn from_index(index: usize) -> u8 {
    debug_assert!(index < ALPHABET);
    b'a' + index as u8
}

/// Iterate the alphabet in order
pub fn alphabet() -> impl Iterator<Item = u8> {
    b'a'..=b'z'
}

/// A set of letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << index(letter)) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << index(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << index(letter));
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        alphabet().filter(move |&letter| self.contains(letter))
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

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_alphabet() {
        for letter in alphabet() {
            assert_eq!(from_index(index(letter)), letter);
        }
        assert_eq!(index(b'a'), 0);
        assert_eq!(index(b'z'), 25);
    }

    #[test]
    fn set_insert_remove() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'q');
        set.insert(b'a');
        set.insert(b'q');
        assert_eq!(set.len(), 2);
        assert!(set.contains(b'q'));
        assert!(!set.contains(b'b'));

        set.remove(b'q');
        assert_eq!(set.len(), 1);
        assert!(!set.contains(b'q'));
    }

    #[test]
    fn set_iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aberz");
        assert_eq!(set.to_string(), "aberz");
    }

    #[test]
    fn set_intersects() {
        let a: LetterSet = b"teach".iter().copied().collect();
        let b: LetterSet = b"sound".iter().copied().collect();
        let c: LetterSet = b"shout".iter().copied().collect();
        assert!(!a.intersects(b));
        assert!(a.intersects(c));
    }
}

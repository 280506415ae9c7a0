//! Alphabet helpers
//!
//! Letters are lowercase ASCII bytes. Tables keyed by letter use `index()` to map
//! `b'a'..=b'z'` onto `0..26`.

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Map a lowercase ASCII letter to its table index (0-25)
///
/// # Panics
/// Panics in debug mode if `letter` is not lowercase ASCII
#[inline]
#[must_use]
pub const fn index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be lowercase ASCII");
    (letter - b'a') as usize
}

/// Map a table index (0-25) back to its lowercase ASCII letter
#[inline]
#[must_use]
pub const fn from_index(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_SIZE);
    b'a' + index as u8
}

/// Set of letters stored as a 26-bit mask
///
/// # Examples
/// ```
/// use wordle_solver::core::letter::LetterSet;
///
/// let mut set = LetterSet::EMPTY;
/// set.insert(b'e');
/// set.insert(b'a');
/// assert!(set.contains(b'e'));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'a', b'e']);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & ((1 << ALPHABET_SIZE) - 1))
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << index(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << index(letter)) != 0
    }

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

    /// Letters in this set that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(from_index)
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

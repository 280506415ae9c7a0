//! Per-game knowledge derived from feedback
//!
//! Two structures hold everything the board has learned:
//! - [`ConfirmedPositions`]: the letter proven correct at each slot
//! - one [`LetterConstraint`] per letter: a bitset of the positions the letter
//!   is known not to occupy. All five bits set means the letter is absent.

use crate::core::letter::{self, ALPHABET_SIZE, LetterSet};
use crate::core::{Feedback, Pattern, Word};
use log::{trace, warn};

/// Positions (bitset over 0..5) where a letter is known not to occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterConstraint(u8);

impl LetterConstraint {
    const ALL: u8 = 0b1_1111;

    /// Letter excluded from every position
    pub const ABSENT: Self = Self(Self::ALL);

    #[inline]
    pub fn exclude(&mut self, position: usize) {
        debug_assert!(position < 5);
        self.0 |= 1 << position;
    }

    #[inline]
    pub fn exclude_all(&mut self) {
        self.0 = Self::ALL;
    }

    #[inline]
    #[must_use]
    pub const fn excludes(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    /// True once all five positions are excluded
    #[inline]
    #[must_use]
    pub const fn is_absent(self) -> bool {
        self.0 == Self::ALL
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Letter proven correct at each of the five slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmedPositions([Option<u8>; 5]);

impl ConfirmedPositions {
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    /// Record `letter` at `position`
    ///
    /// Slots are write-once: returns `false` if the slot already holds a
    /// different letter, leaving it unchanged.
    pub fn confirm(&mut self, position: usize, letter: u8) -> bool {
        match self.0[position] {
            Some(existing) => existing == letter,
            None => {
                self.0[position] = Some(letter);
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&Some(letter))
    }

    /// Letters confirmed somewhere
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.0.iter().flatten().copied().collect()
    }

    /// Number of confirmed slots
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Whether `word` has every confirmed letter in place
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0
            .iter()
            .zip(word.chars())
            .all(|(slot, &ch)| slot.is_none_or(|letter| letter == ch))
    }
}

/// Everything learned so far in one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    confirmed: ConfirmedPositions,
    letters: [Option<LetterConstraint>; ALPHABET_SIZE],
    contradicted: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraints {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            confirmed: ConfirmedPositions([None; 5]),
            letters: [None; ALPHABET_SIZE],
            contradicted: false,
        }
    }

    /// Forget everything
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub const fn confirmed(&self) -> &ConfirmedPositions {
        &self.confirmed
    }

    /// Exclusions recorded for `letter`, if it has appeared as present or absent
    #[must_use]
    pub const fn letter(&self, letter: u8) -> Option<LetterConstraint> {
        self.letters[letter::index(letter)]
    }

    /// Letters the feedback has said anything about
    ///
    /// Confirmed letters plus every letter carrying a constraint. These add no
    /// information when guessed again.
    #[must_use]
    pub fn known_letters(&self) -> LetterSet {
        let constrained: LetterSet = self
            .letters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .map(|(i, _)| letter::from_index(i))
            .collect();
        constrained.union(self.confirmed.letters())
    }

    /// Set when feedback tried to overwrite a confirmed slot
    #[must_use]
    pub const fn is_contradicted(&self) -> bool {
        self.contradicted
    }

    /// Whether nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.confirmed.count() == 0 && self.letters.iter().all(Option::is_none) && !self.contradicted
    }

    /// Whether `word` agrees with everything learned so far
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::board::Constraints;
    /// use wordle_solver::core::{Pattern, Word};
    ///
    /// let mut constraints = Constraints::new();
    /// let guess = Word::new("crane").unwrap();
    /// constraints.apply(&guess, Pattern::parse("00201").unwrap());
    ///
    /// assert!(constraints.admits(&Word::new("beast").unwrap()));
    /// assert!(!constraints.admits(&Word::new("slate").unwrap())); // E excluded at 4
    /// assert!(!constraints.admits(&Word::new("cheap").unwrap())); // C is absent
    /// ```
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if self.contradicted || !self.confirmed.matches(word) {
            return false;
        }

        self.letters.iter().enumerate().all(|(i, constraint)| {
            let Some(constraint) = constraint else {
                return true;
            };
            let letter = letter::from_index(i);
            (constraint.is_absent() || word.has_letter(letter))
                && word.positions_of(letter).all(|p| !constraint.excludes(p))
        })
    }

    /// Fold one guess and its feedback into the constraints
    ///
    /// Correct marks are recorded first so that a duplicated letter's absent
    /// copy is read as "not here" rather than "nowhere".
    pub fn apply(&mut self, guess: &Word, pattern: Pattern) {
        let feedback = pattern.feedback();

        for (position, &mark) in feedback.iter().enumerate() {
            if mark == Feedback::Correct {
                let letter = guess.char_at(position);
                if !self.confirmed.confirm(position, letter) {
                    warn!(
                        "feedback for '{guess}' puts '{}' at position {position}, already confirmed as '{}'",
                        char::from(letter),
                        self.confirmed.get(position).map_or('?', char::from),
                    );
                    self.contradicted = true;
                }
            }
        }

        // Letters this guess proved to be in the word
        let marked: LetterSet = feedback
            .iter()
            .zip(guess.chars())
            .filter(|(mark, _)| **mark != Feedback::Absent)
            .map(|(_, &ch)| ch)
            .collect();

        for (position, &mark) in feedback.iter().enumerate() {
            let letter = guess.char_at(position);
            let slot = &mut self.letters[letter::index(letter)];
            match mark {
                Feedback::Correct => {}
                Feedback::Present => slot.get_or_insert_default().exclude(position),
                Feedback::Absent => {
                    if self.confirmed.contains(letter) || marked.contains(letter) {
                        slot.get_or_insert_default().exclude(position);
                    } else {
                        slot.get_or_insert_default().exclude_all();
                    }
                }
            }
        }

        trace!("applied {guess} {pattern}: {self:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn applied(guess: &str, pattern: &str) -> Constraints {
        let mut constraints = Constraints::new();
        constraints.apply(&word(guess), Pattern::parse(pattern).unwrap());
        constraints
    }

    #[test]
    fn new_constraints_admit_everything() {
        let constraints = Constraints::new();
        assert!(constraints.is_empty());
        assert!(constraints.admits(&word("utter")));
        assert!(constraints.known_letters().is_empty());
    }

    #[test]
    fn correct_letters_are_confirmed() {
        let constraints = applied("crane", "20000");
        assert_eq!(constraints.confirmed().get(0), Some(b'c'));
        assert_eq!(constraints.confirmed().get(1), None);
        assert!(constraints.admits(&word("cloud")));
        assert!(!constraints.admits(&word("bloud")));
    }

    #[test]
    fn present_letter_excluded_only_at_its_position() {
        let constraints = applied("crane", "01000");
        let r = constraints.letter(b'r').unwrap();
        assert!(r.excludes(1));
        assert!(!r.is_absent());
        assert!(constraints.admits(&word("flour")));
        assert!(!constraints.admits(&word("bread")));
        // Present letters must appear somewhere
        assert!(!constraints.admits(&word("moldy")));
    }

    #[test]
    fn absent_letter_excluded_everywhere() {
        let constraints = applied("crane", "00000");
        assert!(constraints.letter(b'c').unwrap().is_absent());
        assert!(!constraints.admits(&word("tulic")));
        assert!(constraints.admits(&word("tulip")));
    }

    #[test]
    fn absent_copy_of_confirmed_letter_is_positional() {
        // "tatty" against "trial": first T correct, other Ts absent
        let constraints = applied("tatty", "21000");
        let t = constraints.letter(b't').unwrap();
        assert!(!t.is_absent());
        assert!(t.excludes(2) && t.excludes(3));
        assert!(constraints.admits(&word("trial")));
    }

    #[test]
    fn absent_copy_of_present_letter_in_same_guess_is_positional() {
        // One E in "ideal": the first E of "eerie" is present, the others absent
        let guess = word("eerie");
        let target = word("ideal");
        let pattern = Pattern::calculate(&guess, &target);
        assert_eq!(pattern.to_string(), "10010");

        let mut constraints = Constraints::new();
        constraints.apply(&guess, pattern);
        let e = constraints.letter(b'e').unwrap();
        assert!(!e.is_absent());
        assert!(constraints.admits(&target));
    }

    #[test]
    fn conflicting_confirmation_empties_everything() {
        let mut constraints = applied("crane", "20000");
        constraints.apply(&word("blunt"), Pattern::parse("20000").unwrap());
        assert!(constraints.is_contradicted());
        assert!(!constraints.admits(&word("cloud")));
        assert!(!constraints.admits(&word("bloud")));
    }

    #[test]
    fn known_letters_cover_confirmed_and_constrained() {
        let constraints = applied("crane", "21000");
        let known = constraints.known_letters();
        for letter in b"crane" {
            assert!(known.contains(*letter));
        }
        assert_eq!(known.len(), 5);
    }

    #[test]
    fn clear_resets_state() {
        let mut constraints = applied("crane", "21000");
        constraints.clear();
        assert_eq!(constraints, Constraints::new());
    }

    #[test]
    fn confirm_is_write_once() {
        let mut confirmed = ConfirmedPositions::default();
        assert!(confirmed.confirm(2, b'a'));
        assert!(confirmed.confirm(2, b'a'));
        assert!(!confirmed.confirm(2, b'e'));
        assert_eq!(confirmed.get(2), Some(b'a'));
        assert_eq!(confirmed.count(), 1);
    }

    #[test]
    fn letter_constraint_bits() {
        let mut c = LetterConstraint::default();
        c.exclude(0);
        c.exclude(4);
        assert_eq!(c.bits(), 0b1_0001);
        assert!(!c.is_absent());
        c.exclude_all();
        assert_eq!(c, LetterConstraint::ABSENT);
    }

    #[test]
    fn true_feedback_never_excludes_target_for_duplicate_guesses() {
        let dictionary = words_from_slice(WORDS);
        for guess in ["eerie", "geese", "tatty", "speed", "ferry", "utter", "pupil", "cacti"] {
            let guess = word(guess);
            for target in &dictionary {
                let mut constraints = Constraints::new();
                constraints.apply(&guess, Pattern::calculate(&guess, target));
                assert!(
                    constraints.admits(target),
                    "{guess} excluded {target} after its own feedback"
                );
            }
        }
    }
}

//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. Displayed, a pattern reads
//! left to right as five digits, e.g. `"21001"`.

use super::Word;
use super::letter;
use crate::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Share-card square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; 5]) -> Self {
        Self(encode(feedback.map(Feedback::digit)))
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Feedback at one position (0-4)
    #[must_use]
    pub fn at(self, position: usize) -> Feedback {
        debug_assert!(position < 5);
        Feedback::from_digit(self.0 / 3u8.pow(position as u32) % 3)
    }

    /// Per-position feedback, left to right
    #[must_use]
    pub fn feedback(self) -> [Feedback; 5] {
        std::array::from_fn(|i| self.at(i))
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters: each letter of the answer can justify at most one
    /// correct or present mark.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-wrong-position from the remaining pool
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Word, Pattern};
    ///
    /// let guess = Word::new("cacti").unwrap();
    /// let answer = Word::new("cigar").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_string(), "21001");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [0u8; 5];
        let mut answer_available = answer.char_counts();

        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.char_at(i) == answer.char_at(i) {
                result[i] = 2;
                answer_available[letter::index(guess.char_at(i))] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == 0 {
                let count = &mut answer_available[letter::index(guess.char_at(i))];
                if *count > 0 {
                    result[i] = 1;
                    *count -= 1;
                }
            }
        }

        Self(encode(result))
    }

    /// Count the number of correct feedback squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&f| f == Feedback::Correct)
            .count()
    }

    /// Count the number of present feedback squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&f| f == Feedback::Present)
            .count()
    }

    /// Parse a pattern from a string like "21001", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - '2'/'G'/'g'/🟩 for correct
    /// - '1'/'Y'/'y'/🟨 for present
    /// - '0'/'-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::parse("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != 5 {
            return None;
        }

        let mut digits = [0u8; 5];
        for (digit, ch) in digits.iter_mut().zip(chars) {
            *digit = match ch {
                '2' | 'G' | 'g' | '🟩' => 2,
                '1' | 'Y' | 'y' | '🟨' => 1,
                '0' | '-' | '_' | '⬜' => 0,
                _ => return None,
            };
        }

        Some(Self(encode(digits)))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|f| f.emoji()).collect()
    }
}

fn encode(digits: [u8; 5]) -> u8 {
    digits.iter().rev().fold(0, |acc, &digit| acc * 3 + digit)
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.feedback() {
            write!(f, "{}", feedback.digit())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PatternError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = calc("crane", "tulip");
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.to_string(), "00000");
    }

    #[test]
    fn pattern_all_correct() {
        let pattern = calc("utter", "utter");
        assert_eq!(pattern, Pattern::PERFECT);
        assert!(pattern.is_perfect());
        assert_eq!(pattern.count_correct(), 5);
    }

    #[test]
    fn repeated_guess_letter_marks_only_the_match() {
        assert_eq!(calc("ccccc", "cigar").to_string(), "20000");
    }

    #[test]
    fn duplicate_after_green_is_absent() {
        assert_eq!(calc("cacti", "cigar").to_string(), "21001");
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S present, both E present, P and D absent
        let pattern = calc("speed", "erase");
        assert_eq!(pattern.to_string(), "10110");
        assert_eq!(pattern.value(), 37);
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 3);
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O present, second O correct
        let pattern = calc("robot", "floor");
        assert_eq!(pattern.to_string(), "11020");
        assert_eq!(pattern.count_correct(), 1);
        assert_eq!(pattern.count_present(), 2);
    }

    #[test]
    fn second_copy_absent_when_answer_has_one() {
        // Only one T in "trial"; the first T is correct, the second gets nothing
        assert_eq!(calc("tatty", "trial").to_string(), "21000");
    }

    #[test]
    fn feedback_round_trip_through_positions() {
        let feedback = [
            Feedback::Correct,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Present,
        ];
        let pattern = Pattern::from_feedback(feedback);
        assert_eq!(pattern.feedback(), feedback);
        assert_eq!(pattern.at(0), Feedback::Correct);
        assert_eq!(pattern.at(4), Feedback::Present);
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();
        let p4: Pattern = "21200".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);

        // 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GYGGYX").is_none());
        assert!(Pattern::parse("GYG").is_none());
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
        assert!("31000".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_real_wordle_example() {
        // CRANE vs SLATE: A and E correct, nothing present
        let pattern = calc("crane", "slate");
        assert_eq!(pattern.value(), 180);
        assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    }
}

//! Wordle feedback calculation and representation
//!
//! A feedback pattern holds one [`Mark`] per guess position, packed in base 3:
//! - 0 = Absent (letter not in word, or all copies already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word, WordError, letter_index};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter matches the answer at this position
    Correct,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter does not occur, accounting for copies already consumed
    Absent,
}

impl Mark {
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

    /// Display symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Parse a single mark symbol
    ///
    /// Accepts `G`/`2`/🟩, `Y`/`1`/🟨 and `-`/`_`/`B`/`X`/`0`/⬛/⬜ (letters
    /// case-insensitive).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            '-' | '_' | 'B' | 'b' | 'X' | 'x' | '0' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Complete feedback pattern for one guess
///
/// Produced by [`Feedback::calculate`]; the only other constructors exist for
/// tests and for translating feedback supplied by an external oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u8);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must have exactly 5 marks, got {0}")]
    WrongLength(usize),
    #[error("invalid feedback symbol {0:?}")]
    InvalidSymbol(char),
}

impl Feedback {
    /// All marks correct (the game is won)
    pub const ALL_CORRECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Total number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Build a pattern from individual marks
    #[must_use]
    pub const fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        let mut i = 0;
        while i < WORD_LENGTH {
            value += marks[i].digit() * multiplier;
            multiplier *= 3;
            i += 1;
        }
        Self(value)
    }

    /// Get the packed pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Unpack into one mark per position
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut val = self.0;
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Check if every mark is `Correct`
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::ALL_CORRECT.0
    }

    /// Count marks of the given kind
    #[must_use]
    pub fn count(self, kind: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == kind).count()
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. Count the multiplicity of every letter in the answer
    /// 2. First pass: mark exact matches `Correct` and consume their letter
    /// 3. Second pass, left to right: mark `Present` while unconsumed copies
    ///    remain, otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolve::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// use Mark::{Absent, Correct};
    /// assert_eq!(feedback.marks(), [Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut remaining = answer.letter_counts();
        let guess = guess.chars();
        let answer = answer.chars();
        let mut marks = [Mark::Absent; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                marks[i] = Mark::Correct;
                remaining[letter_index(guess[i])] -= 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            let slot = &mut remaining[letter_index(guess[i])];
            if *slot > 0 {
                marks[i] = Mark::Present;
                *slot -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Render as an emoji string such as "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.symbol()).collect()
    }
}

/// Compute feedback for two raw strings
///
/// Both inputs are normalized through [`Word::new`].
///
/// # Errors
/// Returns `WordError::LengthMismatch` if either input is not exactly 5 letters,
/// and `WordError::NonAlphabetic` for non-letter input.
///
/// # Examples
/// ```
/// use wordle_autosolve::core::{compute_feedback, WordError};
///
/// assert!(compute_feedback("aback", "ABACK").unwrap().is_solved());
/// assert!(matches!(
///     compute_feedback("abacus", "aback"),
///     Err(WordError::LengthMismatch { actual: 6, .. })
/// ));
/// ```
pub fn compute_feedback(guess: &str, answer: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(Feedback::calculate(&guess, &answer))
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse a pattern from a string like "GY-GY", "gybbb", "21000" or "🟩🟨⬛🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackParseError::WrongLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol).ok_or(FeedbackParseError::InvalidSymbol(symbol))?;
        }

        Ok(Self::from_marks(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::Mark::{Absent, Correct, Present};
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    const SAMPLE: &[&str] = &[
        "aback", "kabab", "speed", "creep", "geese", "erase", "robot", "floor", "crane", "slate",
        "llama", "allay", "eerie", "sassy", "mamma", "abbey",
    ];

    #[test]
    fn all_correct_constant() {
        assert_eq!(Feedback::from_marks([Correct; 5]), Feedback::ALL_CORRECT);
        assert!(Feedback::ALL_CORRECT.is_solved());
        assert_eq!(Feedback::ALL_CORRECT.count(Correct), 5);
    }

    #[test]
    fn aback_against_itself_is_all_correct() {
        let feedback = compute_feedback("ABACK", "ABACK").unwrap();
        assert_eq!(feedback.marks(), [Correct; 5]);
    }

    #[test]
    fn kabab_against_aback() {
        // ABACK holds A×2, B, C, K. No position matches, so every mark comes
        // from the second pass: K, A, B, A consume K, A, B, A; the final B
        // finds the single B already used.
        let feedback = compute_feedback("KABAB", "ABACK").unwrap();
        assert_eq!(feedback.marks(), [Present, Present, Present, Present, Absent]);
    }

    #[test]
    fn all_absent() {
        let feedback = Feedback::calculate(&word("quick"), &word("dream"));
        assert_eq!(feedback.marks(), [Absent; 5]);
        assert_eq!(feedback.value(), 0);
    }

    #[test]
    fn duplicate_letters_in_guess() {
        // Correct E at position 2 and 3, second E in SPEED is spare
        let feedback = Feedback::calculate(&word("speed"), &word("creep"));
        assert_eq!(feedback.marks(), [Absent, Present, Correct, Correct, Absent]);
    }

    #[test]
    fn duplicate_guess_limited_answer() {
        let feedback = Feedback::calculate(&word("geese"), &word("creep"));
        assert_eq!(feedback.marks(), [Absent, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn correct_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: the first O is present, the second is correct
        let feedback = Feedback::calculate(&word("robot"), &word("floor"));
        assert_eq!(feedback.marks(), [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn compute_feedback_rejects_bad_lengths() {
        assert_eq!(
            compute_feedback("abac", "aback"),
            Err(WordError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            compute_feedback("aback", "abacks"),
            Err(WordError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn self_feedback_always_correct() {
        for &text in SAMPLE {
            let w = word(text);
            assert!(Feedback::calculate(&w, &w).is_solved(), "{text}");
        }
    }

    #[test]
    fn marked_letters_never_exceed_answer_multiplicity() {
        for &guess in SAMPLE {
            for &answer in SAMPLE {
                let guess = word(guess);
                let answer = word(answer);
                let marks = Feedback::calculate(&guess, &answer).marks();
                let answer_counts = answer.letter_counts();
                let guess_counts = guess.letter_counts();

                let mut credited = [0u8; 26];
                for (i, mark) in marks.iter().enumerate() {
                    if *mark != Absent {
                        credited[letter_index(guess.chars()[i])] += 1;
                    }
                }

                for letter in 0..26 {
                    assert!(credited[letter] <= answer_counts[letter]);
                    assert_eq!(
                        credited[letter],
                        guess_counts[letter].min(answer_counts[letter]),
                        "{guess} vs {answer}"
                    );
                }
            }
        }
    }

    #[test]
    fn marks_roundtrip_through_packing() {
        let marks = [Correct, Present, Absent, Absent, Correct];
        let feedback = Feedback::from_marks(marks);
        // 2 + 1×3 + 0×9 + 0×27 + 2×81 = 167
        assert_eq!(feedback.value(), 167);
        assert_eq!(feedback.marks(), marks);
        assert_eq!(feedback.count(Present), 1);
    }

    #[test]
    fn parse_accepts_all_notations() {
        let expected = Feedback::from_marks([Correct, Present, Absent, Absent, Absent]);
        assert_eq!("GY---".parse::<Feedback>().unwrap(), expected);
        assert_eq!("gybbb".parse::<Feedback>().unwrap(), expected);
        assert_eq!("21000".parse::<Feedback>().unwrap(), expected);
        assert_eq!("🟩🟨⬛⬜⬛".parse::<Feedback>().unwrap(), expected);
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_eq!(
            "gybbb1".parse::<Feedback>(),
            Err(FeedbackParseError::WrongLength(6))
        );
        assert_eq!(
            "gyb".parse::<Feedback>(),
            Err(FeedbackParseError::WrongLength(3))
        );
        assert_eq!(
            "gybzb".parse::<Feedback>(),
            Err(FeedbackParseError::InvalidSymbol('z'))
        );
    }

    #[test]
    fn emoji_display() {
        let feedback = Feedback::from_marks([Correct, Present, Absent, Absent, Correct]);
        assert_eq!(feedback.to_string(), "🟩🟨⬛⬛🟩");
    }
}

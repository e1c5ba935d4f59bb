//! Feedback scoring
//!
//! Feedback is the pair (blacks, whites) a code keeper answers a guess with:
//! - black = right color in the right position
//! - white = right color in the wrong position, bounded by how many of that
//!   color remain in the code once the blacks are taken out
//!
//! Scoring is a two-pass computation: exact matches first, then a multiset
//! intersection of the unmatched pegs.

use super::code::{Code, MAX_CODE_LENGTH};
use super::error::{InputError, MastermindError, Result};
use super::peg::MAX_COLORS;
use std::fmt;

/// Number of distinct histogram buckets [`Feedback::bucket`] can produce
pub const FEEDBACK_BUCKETS: usize = (MAX_CODE_LENGTH + 1) * (MAX_CODE_LENGTH + 1);

/// Black and white peg counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    blacks: u8,
    whites: u8,
}

impl Feedback {
    /// Create feedback for a code of `length` pegs
    ///
    /// # Errors
    /// Returns `InvalidFeedback` if `blacks + whites > length` or the pair is
    /// the impossible `(length - 1, 1)`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert!(Feedback::new(2, 1, 4).is_ok());
    /// assert!(Feedback::new(3, 2, 4).is_err());
    /// assert!(Feedback::new(3, 1, 4).is_err());
    /// ```
    pub fn new(blacks: usize, whites: usize, length: usize) -> Result<Self> {
        if blacks.checked_add(whites).is_none_or(|pegs| pegs > length) {
            return Err(MastermindError::InvalidFeedback(format!(
                "{blacks} black + {whites} white exceeds {length} pegs"
            )));
        }
        if blacks + 1 == length && whites == 1 {
            return Err(MastermindError::InvalidFeedback(format!(
                "{blacks} black and 1 white cannot happen with {length} pegs"
            )));
        }
        Ok(Self {
            blacks: blacks as u8,
            whites: whites as u8,
        })
    }

    /// All blacks for a code of `length` pegs
    #[must_use]
    pub const fn win(length: usize) -> Self {
        Self {
            blacks: length as u8,
            whites: 0,
        }
    }

    /// Score `guess` against `code`
    ///
    /// Both codes must have the same length; use [`score`] when that is not
    /// already guaranteed.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Code, Feedback};
    ///
    /// let alphabet = Alphabet::default();
    /// let guess = Code::parse("rrgr", &alphabet).unwrap();
    /// let code = Code::parse("ggrr", &alphabet).unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &code);
    /// assert_eq!((feedback.blacks(), feedback.whites()), (1, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, code: &Code) -> Self {
        debug_assert_eq!(guess.len(), code.len(), "codes must have equal length");

        let mut blacks = 0u8;
        let mut guess_left = [0u8; MAX_COLORS];
        let mut code_left = [0u8; MAX_COLORS];

        // Black pass; unmatched pegs go to the per-color pools
        for (g, c) in guess.pegs().iter().zip(code.pegs()) {
            if g == c {
                blacks += 1;
            } else {
                guess_left[g.index()] += 1;
                code_left[c.index()] += 1;
            }
        }

        // White pass: each color scores as many times as both pools hold it
        let whites = guess_left
            .iter()
            .zip(&code_left)
            .map(|(&g, &c)| g.min(c))
            .sum();

        Self { blacks, whites }
    }

    /// Parse feedback typed by a human keeper
    ///
    /// Accepts counts (`"2 1"`, `"2,1"`, `"2/1"`, or a lone `"4"` for blacks
    /// only) or peg notation where `k`/`b` mark a black, `w` a white and
    /// `-`, `.`, `_`, `o` an empty hole (`"kkw"`, `"BBW-"`).
    ///
    /// # Errors
    /// Returns `InvalidFeedback` for anything unparsable or impossible.
    pub fn parse(input: &str, length: usize) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(MastermindError::InvalidFeedback("empty input".into()));
        }

        // A leading minus still means counts, so "-1 2" is rejected as negative
        let numeric = input
            .trim_start_matches('-')
            .starts_with(|c: char| c.is_ascii_digit());
        if numeric {
            return Self::parse_counts(input, length);
        }

        let mut blacks = 0;
        let mut whites = 0;
        for symbol in input.chars() {
            match symbol.to_ascii_lowercase() {
                'k' | 'b' => blacks += 1,
                'w' => whites += 1,
                '-' | '.' | '_' | 'o' => {}
                other => {
                    return Err(MastermindError::InvalidFeedback(format!(
                        "unexpected symbol '{other}'"
                    )));
                }
            }
        }
        Self::new(blacks, whites, length)
    }

    fn parse_counts(input: &str, length: usize) -> Result<Self> {
        let fields: Vec<&str> = input
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        let count = |field: &str| {
            field.parse::<usize>().map_err(|_| {
                MastermindError::InvalidFeedback(format!(
                    "'{field}' is not a non-negative count"
                ))
            })
        };

        match fields.as_slice() {
            [blacks] => Self::new(count(*blacks)?, 0, length),
            [blacks, whites] => Self::new(count(*blacks)?, count(*whites)?, length),
            _ => Err(MastermindError::InvalidFeedback(format!(
                "expected 'blacks whites', got '{input}'"
            ))),
        }
    }

    /// Number of black pegs
    #[inline]
    #[must_use]
    pub const fn blacks(self) -> usize {
        self.blacks as usize
    }

    /// Number of white pegs
    #[inline]
    #[must_use]
    pub const fn whites(self) -> usize {
        self.whites as usize
    }

    /// Check if this is a solved code of `length` pegs
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.blacks as usize == length
    }

    /// Dense index in `0..FEEDBACK_BUCKETS`, used for histograms
    #[inline]
    #[must_use]
    pub const fn bucket(self) -> usize {
        self.blacks as usize * (MAX_CODE_LENGTH + 1) + self.whites as usize
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.blacks, self.whites)
    }
}

/// Score `guess` against `code`
///
/// # Errors
/// Returns `InputError::LengthMismatch` if the codes differ in length.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code, score};
///
/// let alphabet = Alphabet::default();
/// let guess = Code::parse("rrrb", &alphabet).unwrap();
/// let code = Code::parse("rgbb", &alphabet).unwrap();
///
/// let feedback = score(&guess, &code).unwrap();
/// assert_eq!((feedback.blacks(), feedback.whites()), (2, 0));
/// ```
pub fn score(guess: &Code, code: &Code) -> Result<Feedback> {
    if guess.len() != code.len() {
        return Err(InputError::LengthMismatch {
            expected: code.len(),
            found: guess.len(),
        }
        .into());
    }
    Ok(Feedback::calculate(guess, code))
}

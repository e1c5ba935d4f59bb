//! Game rules: which colors, how many pegs

use super::code::{Code, MAX_CODE_LENGTH};
use super::error::{InputError, Result};
use super::feedback::Feedback;
use super::peg::{Alphabet, Peg};

/// Largest universe a session will enumerate
pub const MAX_UNIVERSE: usize = 1 << 20;

/// Alphabet and code length of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    alphabet: Alphabet,
    code_length: usize,
}

impl Rules {
    /// Create rules for codes of `code_length` pegs over `alphabet`
    ///
    /// # Errors
    /// Returns `InvalidInput` if the length is outside `1..=MAX_CODE_LENGTH` or
    /// the universe would hold more than [`MAX_UNIVERSE`] codes.
    pub fn new(alphabet: Alphabet, code_length: usize) -> Result<Self> {
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(InputError::InvalidLength {
                max: MAX_CODE_LENGTH,
                found: code_length,
            }
            .into());
        }

        let too_large = InputError::UniverseTooLarge {
            colors: alphabet.len(),
            length: code_length,
            max: MAX_UNIVERSE,
        };
        let size = u32::try_from(code_length)
            .ok()
            .and_then(|exp| alphabet.len().checked_pow(exp))
            .ok_or_else(|| too_large.clone())?;
        if size > MAX_UNIVERSE {
            return Err(too_large.into());
        }

        Ok(Self {
            alphabet,
            code_length,
        })
    }

    /// Rules from an alphabet size, using the default symbols
    ///
    /// # Errors
    /// Same as [`Alphabet::with_size`] and [`Rules::new`].
    pub fn with_size(alphabet_size: usize, code_length: usize) -> Result<Self> {
        Self::new(Alphabet::with_size(alphabet_size)?, code_length)
    }

    /// Six colors (`rgbcym`), four pegs
    #[must_use]
    pub fn classic() -> Self {
        Self {
            alphabet: Alphabet::default(),
            code_length: 4,
        }
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Number of possible codes, `K^N`
    #[must_use]
    pub fn universe_size(&self) -> usize {
        (0..self.code_length).fold(1, |size, _| size * self.alphabet.len())
    }

    /// Every code, in lexicographic alphabet order
    #[must_use]
    pub fn universe(&self) -> Vec<Code> {
        let colors = self.alphabet.len();
        (0..self.universe_size())
            .map(|index| Code::from_index(index, colors, self.code_length))
            .collect()
    }

    /// Parse a code and check it against these rules
    ///
    /// # Errors
    /// Returns `InvalidInput` for unknown symbols or the wrong length.
    pub fn parse_code(&self, text: &str) -> Result<Code> {
        let code = Code::parse(text, &self.alphabet)?;
        self.validate(&code)?;
        Ok(code)
    }

    /// Parse feedback typed by a human keeper
    ///
    /// # Errors
    /// Returns `InvalidFeedback`, see [`Feedback::parse`].
    pub fn parse_feedback(&self, text: &str) -> Result<Feedback> {
        Feedback::parse(text, self.code_length)
    }

    /// Check length and colors of a code
    ///
    /// # Errors
    /// Returns `InvalidInput` if the code does not belong to this game.
    pub fn validate(&self, code: &Code) -> Result<()> {
        if code.len() != self.code_length {
            return Err(InputError::LengthMismatch {
                expected: self.code_length,
                found: code.len(),
            }
            .into());
        }
        code.pegs().iter().try_for_each(|&peg| self.alphabet.check(peg))
    }

    /// Check that feedback is possible for this code length
    ///
    /// # Errors
    /// Returns `InvalidFeedback` otherwise.
    pub fn validate_feedback(&self, feedback: Feedback) -> Result<()> {
        Feedback::new(feedback.blacks(), feedback.whites(), self.code_length).map(|_| ())
    }

    /// Score with both codes checked against these rules
    ///
    /// # Errors
    /// Returns `InvalidInput` if either code does not belong to this game.
    pub fn score(&self, guess: &Code, code: &Code) -> Result<Feedback> {
        self.validate(guess)?;
        self.validate(code)?;
        Ok(Feedback::calculate(guess, code))
    }

    /// Winning feedback for this game
    #[must_use]
    pub const fn win(&self) -> Feedback {
        Feedback::win(self.code_length)
    }

    /// Knuth-style opening: first half of the pegs in the first color, the
    /// rest in the second (`rrgg` for the classic game)
    #[must_use]
    pub fn default_opening(&self) -> Code {
        let second = Peg::from_raw(u8::from(self.alphabet.len() > 1));
        let pegs: Vec<Peg> = (0..self.code_length)
            .map(|i| {
                if i < self.code_length / 2 {
                    Peg::default()
                } else {
                    second
                }
            })
            .collect();

        Code::new(&pegs).unwrap_or_else(|_| Code::from_index(0, 1, self.code_length))
    }

    /// Render a code with this game's symbols
    #[must_use]
    pub fn render(&self, code: &Code) -> String {
        code.render(&self.alphabet)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

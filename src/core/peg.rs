//! Peg colors and the alphabet they are drawn from
//!
//! A [`Peg`] is only an index. The [`Alphabet`] maps indices to the display
//! symbols used at the presentation boundary.

use super::error::{InputError, Result};
use std::fmt;

/// Largest supported alphabet
pub const MAX_COLORS: usize = 16;

/// Symbols handed out by [`Alphabet::with_size`], in order
///
/// The first six are the classic Mastermind colors.
pub const DEFAULT_SYMBOLS: &str = "rgbcymowpkaehijl";

/// One peg color, stored as its index in the alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Peg(u8);

impl Peg {
    /// Create a peg from an alphabet index
    ///
    /// # Errors
    /// Returns `InputError::ColorOutOfRange` if `index >= MAX_COLORS`.
    pub fn new(index: usize) -> Result<Self> {
        if index >= MAX_COLORS {
            return Err(InputError::ColorOutOfRange {
                index,
                size: MAX_COLORS,
            }
            .into());
        }
        Ok(Self(index as u8))
    }

    /// Peg from an index already known to be below [`MAX_COLORS`]
    #[inline]
    pub(crate) const fn from_raw(index: u8) -> Self {
        debug_assert!((index as usize) < MAX_COLORS);
        Self(index)
    }

    /// Index of this color in its alphabet
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The ordered set of colors a game is played with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from its display symbols, in order
    ///
    /// # Errors
    /// Returns `InvalidInput` if the alphabet is empty, larger than
    /// [`MAX_COLORS`], or repeats a symbol.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("rgbcym").unwrap();
    /// assert_eq!(alphabet.len(), 6);
    /// assert!(Alphabet::new("rgbr").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.is_empty() || symbols.len() > MAX_COLORS {
            return Err(InputError::AlphabetSize {
                max: MAX_COLORS,
                found: symbols.len(),
            }
            .into());
        }

        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(InputError::DuplicateSymbol(*symbol).into());
            }
        }

        Ok(Self { symbols })
    }

    /// Alphabet of `size` colors taken from [`DEFAULT_SYMBOLS`]
    ///
    /// # Errors
    /// Returns `InvalidInput` if `size` is zero or above [`MAX_COLORS`].
    pub fn with_size(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_COLORS {
            return Err(InputError::AlphabetSize {
                max: MAX_COLORS,
                found: size,
            }
            .into());
        }
        Self::new(&DEFAULT_SYMBOLS[..size])
    }

    /// Number of colors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet holds at least one color
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up the peg for a display symbol
    ///
    /// Matching is case-insensitive when the alphabet has no case-sensitive
    /// match.
    ///
    /// # Errors
    /// Returns `InputError::UnknownSymbol` if the symbol is not in the alphabet.
    pub fn peg(&self, symbol: char) -> Result<Peg> {
        let position = self
            .symbols
            .iter()
            .position(|&s| s == symbol)
            .or_else(|| {
                let lower = symbol.to_ascii_lowercase();
                self.symbols.iter().position(|&s| s == lower)
            })
            .ok_or(InputError::UnknownSymbol(symbol))?;

        Peg::new(position)
    }

    /// Display symbol of a peg, if it belongs to this alphabet
    #[must_use]
    pub fn symbol(&self, peg: Peg) -> Option<char> {
        self.symbols.get(peg.index()).copied()
    }

    /// Check that a peg belongs to this alphabet
    ///
    /// # Errors
    /// Returns `InputError::ColorOutOfRange` otherwise.
    pub fn check(&self, peg: Peg) -> Result<()> {
        if peg.index() < self.len() {
            Ok(())
        } else {
            Err(InputError::ColorOutOfRange {
                index: peg.index(),
                size: self.len(),
            }
            .into())
        }
    }

    /// All symbols as a string
    #[must_use]
    pub fn symbols(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.chars().take(6).collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MastermindError;

    #[test]
    fn default_alphabet_is_classic() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.symbols(), "rgbcym");
        assert_eq!(alphabet, Alphabet::with_size(6).unwrap());
    }

    #[test]
    fn peg_lookup_follows_alphabet_order() {
        let alphabet = Alphabet::new("rgbcym").unwrap();
        assert_eq!(alphabet.peg('r').unwrap().index(), 0);
        assert_eq!(alphabet.peg('m').unwrap().index(), 5);
        assert_eq!(alphabet.peg('Y').unwrap().index(), 4);
    }

    #[test]
    fn unknown_symbol_rejected() {
        let alphabet = Alphabet::default();
        assert_eq!(
            alphabet.peg('x'),
            Err(MastermindError::InvalidInput(InputError::UnknownSymbol('x')))
        );
    }

    #[test]
    fn symbol_round_trip() {
        let alphabet = Alphabet::new("123456").unwrap();
        let peg = alphabet.peg('4').unwrap();
        assert_eq!(alphabet.symbol(peg), Some('4'));
    }

    #[test]
    fn alphabet_size_limits() {
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::with_size(0).is_err());
        assert!(Alphabet::with_size(MAX_COLORS + 1).is_err());
        assert_eq!(Alphabet::with_size(1).unwrap().symbols(), "r");
        assert_eq!(Alphabet::with_size(MAX_COLORS).unwrap().len(), MAX_COLORS);
    }

    #[test]
    fn duplicate_symbols_rejected() {
        assert!(matches!(
            Alphabet::new("rgbg"),
            Err(MastermindError::InvalidInput(InputError::DuplicateSymbol('g')))
        ));
    }

    #[test]
    fn check_rejects_foreign_pegs() {
        let alphabet = Alphabet::with_size(3).unwrap();
        assert!(alphabet.check(Peg::new(2).unwrap()).is_ok());
        assert!(alphabet.check(Peg::new(3).unwrap()).is_err());
    }

    #[test]
    fn peg_index_bounded() {
        assert!(Peg::new(MAX_COLORS - 1).is_ok());
        assert!(Peg::new(MAX_COLORS).is_err());
    }
}

//! Fixed-size code representation
//!
//! A code is up to [`MAX_CODE_LENGTH`] pegs stored inline, so codes are `Copy`
//! and cheap to hash. Unused slots are always the zero peg, which keeps the
//! derived equality, ordering and hashing consistent.

use super::error::{InputError, Result};
use super::peg::{Alphabet, Peg};
use std::fmt;

/// Longest supported code
pub const MAX_CODE_LENGTH: usize = 8;

/// An ordered sequence of pegs
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    pegs: [Peg; MAX_CODE_LENGTH],
    len: u8,
}

impl Code {
    /// Create a code from its pegs
    ///
    /// # Errors
    /// Returns `InputError::InvalidLength` if `pegs` is empty or longer than
    /// [`MAX_CODE_LENGTH`].
    pub fn new(pegs: &[Peg]) -> Result<Self> {
        if pegs.is_empty() || pegs.len() > MAX_CODE_LENGTH {
            return Err(InputError::InvalidLength {
                max: MAX_CODE_LENGTH,
                found: pegs.len(),
            }
            .into());
        }

        let mut inline = [Peg::default(); MAX_CODE_LENGTH];
        inline[..pegs.len()].copy_from_slice(pegs);

        Ok(Self {
            pegs: inline,
            len: pegs.len() as u8,
        })
    }

    /// Parse a code from display symbols
    ///
    /// # Errors
    /// Returns `InvalidInput` for unknown symbols or an unsupported length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Code};
    ///
    /// let alphabet = Alphabet::default();
    /// let code = Code::parse("rrgg", &alphabet).unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.render(&alphabet), "rrgg");
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self> {
        let pegs = text
            .trim()
            .chars()
            .map(|symbol| alphabet.peg(symbol))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&pegs)
    }

    /// The `index`-th code of the `colors^length` universe
    ///
    /// Codes are numbered in lexicographic order with the first position most
    /// significant, so index 0 is all color 0.
    pub(crate) fn from_index(mut index: usize, colors: usize, length: usize) -> Self {
        let mut pegs = [Peg::default(); MAX_CODE_LENGTH];
        for slot in pegs[..length].iter_mut().rev() {
            *slot = Peg::from_raw((index % colors) as u8);
            index /= colors;
        }
        Self {
            pegs,
            len: length as u8,
        }
    }

    /// The pegs of this code
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs[..self.len as usize]
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; a code holds at least one peg
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Render as display symbols
    ///
    /// Pegs outside the alphabet render as `?`.
    #[must_use]
    pub fn render(&self, alphabet: &Alphabet) -> String {
        self.pegs()
            .iter()
            .map(|&peg| alphabet.symbol(peg).unwrap_or('?'))
            .collect()
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<usize> = self.pegs().iter().map(|p| p.index()).collect();
        f.debug_tuple("Code").field(&indices).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MastermindError;

    fn classic() -> Alphabet {
        Alphabet::default()
    }

    #[test]
    fn parse_and_render() {
        let alphabet = classic();
        let code = Code::parse("ycmb", &alphabet).unwrap();
        assert_eq!(code.render(&alphabet), "ycmb");
        assert_eq!(code.pegs().len(), 4);
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert!(matches!(
            Code::parse("rrgx", &classic()),
            Err(MastermindError::InvalidInput(InputError::UnknownSymbol('x')))
        ));
    }

    #[test]
    fn parse_rejects_bad_lengths() {
        assert!(Code::parse("", &classic()).is_err());
        assert!(Code::parse("rrggbbccy", &classic()).is_err());
        assert!(Code::parse("rrggbbcc", &classic()).is_ok());
    }

    #[test]
    fn equality_is_positional() {
        let alphabet = classic();
        let a = Code::parse("rgbc", &alphabet).unwrap();
        let b = Code::parse("rgbc", &alphabet).unwrap();
        let c = Code::parse("cbgr", &alphabet).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn from_index_is_lexicographic() {
        let alphabet = classic();
        assert_eq!(Code::from_index(0, 6, 4).render(&alphabet), "rrrr");
        assert_eq!(Code::from_index(1, 6, 4).render(&alphabet), "rrrg");
        assert_eq!(Code::from_index(6, 6, 4).render(&alphabet), "rrgr");
        assert_eq!(Code::from_index(1295, 6, 4).render(&alphabet), "mmmm");
    }

    #[test]
    fn ordering_matches_universe_order() {
        let first = Code::from_index(10, 6, 4);
        let second = Code::from_index(11, 6, 4);
        assert!(first < second);
    }
}

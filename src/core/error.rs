//! Error types shared by the scorer and the solver

use crate::solver::SessionState;
use thiserror::Error;

/// Everything the core can report to its caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    /// A guess, code or rule set that does not fit the configured game
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Every code has been ruled out; the feedback history contradicts itself
    #[error("no code is consistent with the feedback received so far")]
    NoConsistentCandidates,

    /// A (blacks, whites) pair no guess/code pair can produce
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),

    /// A session operation was called in the wrong state
    #[error("session is {0}, cannot accept this action")]
    OutOfTurn(SessionState),
}

/// Details for [`MastermindError::InvalidInput`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected a code of length {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("code length must be between 1 and {max}, got {found}")]
    InvalidLength { max: usize, found: usize },

    #[error("symbol '{0}' is not part of the alphabet")]
    UnknownSymbol(char),

    #[error("peg {index} is outside an alphabet of {size} colors")]
    ColorOutOfRange { index: usize, size: usize },

    #[error("alphabet must contain between 1 and {max} colors, got {found}")]
    AlphabetSize { max: usize, found: usize },

    #[error("symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(char),

    #[error("{colors}^{length} codes exceeds the limit of {max}")]
    UniverseTooLarge {
        colors: usize,
        length: usize,
        max: usize,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, MastermindError>;

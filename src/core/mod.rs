//! Core domain types for Mastermind
//!
//! Pegs, codes, feedback scoring and game rules. Everything here is pure and
//! free of I/O.

mod code;
mod error;
mod feedback;
mod peg;
mod rules;

pub use code::{Code, MAX_CODE_LENGTH};
pub use error::{InputError, MastermindError, Result};
pub use feedback::{FEEDBACK_BUCKETS, Feedback, score};
pub use peg::{Alphabet, DEFAULT_SYMBOLS, MAX_COLORS, Peg};
pub use rules::{MAX_UNIVERSE, Rules};

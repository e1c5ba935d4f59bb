//! Mastermind solving algorithms
//!
//! The session engine and the guess selection strategies it drives.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::{Session, SessionState, Turn};
pub use minimax::Selection;
pub use strategy::{ConsistentStrategy, KnuthStrategy, RandomStrategy, Strategy, StrategyType};

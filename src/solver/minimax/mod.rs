//! Minimax guess selection
//!
//! Implements the worst-case minimization at the heart of Knuth's algorithm.

mod calculator;
mod selector;

pub use calculator::{calculate_worst_case, expected_remaining, group_by_feedback};
pub use selector::{Selection, select_best_guess};

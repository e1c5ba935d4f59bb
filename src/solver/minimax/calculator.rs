//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and a set of codes, computes how the feedback to that guess
//! partitions the set and how large the largest partition is.

use crate::core::{Code, FEEDBACK_BUCKETS, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the size of the largest partition a guess leaves behind
///
/// Returns the worst-case number of codes that remain indistinguishable
/// after this guess, or 0 for an empty set.
///
/// # Strategy
/// For each code, score the guess against it and count the code in the
/// bucket of that feedback. The worst case is the fullest bucket.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::minimax::calculate_worst_case;
///
/// let rules = Rules::classic();
/// let universe = rules.universe();
/// let opening = rules.parse_code("rrgg").unwrap();
///
/// assert_eq!(calculate_worst_case(&opening, &universe), 256);
/// ```
#[must_use]
pub fn calculate_worst_case(guess: &Code, codes: &[Code]) -> usize {
    let mut buckets = [0usize; FEEDBACK_BUCKETS];

    for code in codes {
        buckets[Feedback::calculate(guess, code).bucket()] += 1;
    }

    buckets.iter().copied().max().unwrap_or(0)
}

/// Group codes by the feedback they give to `guess`
#[must_use]
pub fn group_by_feedback(guess: &Code, codes: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for code in codes {
        *counts.entry(Feedback::calculate(guess, code)).or_insert(0) += 1;
    }

    counts
}

/// Expected number of codes left after `guess`, assuming every code is
/// equally likely
#[must_use]
pub fn expected_remaining(guess: &Code, codes: &[Code]) -> f64 {
    if codes.is_empty() {
        return 0.0;
    }

    let sum_of_squares: usize = group_by_feedback(guess, codes)
        .values()
        .map(|&count| count * count)
        .sum();

    sum_of_squares as f64 / codes.len() as f64
}

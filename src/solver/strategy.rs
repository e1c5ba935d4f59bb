//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::{Selection, calculate_worst_case, select_best_guess};
use crate::core::Code;
use std::fmt;

/// A strategy for choosing the next guess
pub trait Strategy {
    /// Select the next guess
    ///
    /// - `candidates`: codes still consistent with every feedback (S)
    /// - `pool`: codes never played so far (T)
    ///
    /// Returns `None` if the strategy has nothing to offer.
    fn select_guess(&self, candidates: &[Code], pool: &[Code]) -> Option<Selection>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Knuth's five-guess algorithm (default)
    #[default]
    Knuth,
    /// Minimax restricted to still-possible guesses
    Consistent,
    /// Random still-possible code
    Random,
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &[Code], pool: &[Code]) -> Option<Selection> {
        match self {
            Self::Knuth => KnuthStrategy.select_guess(candidates, pool),
            Self::Consistent => ConsistentStrategy.select_guess(candidates, pool),
            Self::Random => RandomStrategy.select_guess(candidates, pool),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "knuth", "consistent", "random". Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "knuth" | "minimax" => Some(Self::Knuth),
            "consistent" | "possible" => Some(Self::Consistent),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Canonical name, accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Knuth => "knuth",
            Self::Consistent => "consistent",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Knuth's minimax
///
/// Every untried code may be guessed; each is judged by how it partitions the
/// still-possible codes. Ties go to guesses that could themselves be the
/// answer.
pub struct KnuthStrategy;

impl Strategy for KnuthStrategy {
    fn select_guess(&self, candidates: &[Code], pool: &[Code]) -> Option<Selection> {
        if candidates.is_empty() {
            return None;
        }
        select_best_guess(pool, candidates, candidates)
    }
}

/// Minimax over still-possible guesses
///
/// Only codes consistent with the feedback so far are guessed; each is judged
/// by how it partitions the untried pool. Ties go to untried codes.
pub struct ConsistentStrategy;

impl Strategy for ConsistentStrategy {
    fn select_guess(&self, candidates: &[Code], pool: &[Code]) -> Option<Selection> {
        select_best_guess(candidates, pool, pool)
    }
}

/// Random strategy
///
/// Picks a uniformly random still-possible code. A baseline for comparison.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, candidates: &[Code], _pool: &[Code]) -> Option<Selection> {
        use rand::prelude::IndexedRandom;

        let guess = *candidates.choose(&mut rand::rng())?;
        Some(Selection {
            guess,
            worst_case: calculate_worst_case(&guess, candidates),
            tied: candidates.len(),
        })
    }
}

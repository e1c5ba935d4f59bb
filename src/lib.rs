//! Mastermind Solver
//!
//! A Mastermind code breaker using Knuth's minimax algorithm, solving every
//! classic game in at most five guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::Rules;
//! use mastermind_solver::solver::{Session, StrategyType};
//!
//! let rules = Rules::classic();
//! let secret = rules.parse_code("ycmb").unwrap();
//!
//! let mut session = Session::new(rules.clone(), rules.default_opening(), StrategyType::Knuth).unwrap();
//! let guess = session.next_guess().unwrap();
//! assert_eq!(rules.render(&guess), "rrgg");
//!
//! // Feedback for the guess
//! let feedback = rules.score(&guess, &secret).unwrap();
//! session.play(guess).unwrap();
//! session.respond(feedback).unwrap();
//! assert_eq!(session.candidates().len(), 256);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Players and game loop
pub mod game;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

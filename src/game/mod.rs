//! Game drivers
//!
//! Roles, collaborators and the loop that connects them to a session.

mod driver;
mod mode;
mod players;

pub use driver::{GameOutcome, play_game};
pub use mode::{Breaker, GameMode, Keeper};
pub use players::{GuessSource, Responder, SecretKeeper, SolverGuesses};

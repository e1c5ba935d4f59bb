//! The collaborators a session plays with
//!
//! A [`GuessSource`] proposes guesses and a [`Responder`] answers them. Only
//! the computer players are here; the `play` command prompts people directly
//! since they can also undo or quit.

use crate::core::{Code, Feedback, Peg, Result, Rules};
use crate::solver::{Session, Strategy};
use rand::Rng;

/// Supplies feedback for a played guess
pub trait Responder {
    /// Score `guess`
    ///
    /// # Errors
    /// Implementations report invalid guesses or unusable input.
    fn respond(&mut self, guess: &Code) -> Result<Feedback>;
}

/// Supplies the next guess to play
pub trait GuessSource<S: Strategy> {
    /// Choose the next guess for `session`
    ///
    /// # Errors
    /// Implementations report when no guess can be produced.
    fn next_guess(&mut self, session: &Session<S>) -> Result<Code>;
}

/// Code keeper holding a hidden code
#[derive(Debug, Clone)]
pub struct SecretKeeper {
    rules: Rules,
    secret: Code,
}

impl SecretKeeper {
    /// Keep `secret`
    ///
    /// # Errors
    /// Returns `InvalidInput` if the secret does not fit the rules.
    pub fn new(rules: Rules, secret: Code) -> Result<Self> {
        rules.validate(&secret)?;
        Ok(Self { rules, secret })
    }

    /// Keep a uniformly random code
    #[must_use]
    pub fn random(rules: Rules) -> Self {
        let mut rng = rand::rng();
        let colors = rules.alphabet().len();
        let pegs: Vec<Peg> = (0..rules.code_length())
            .filter_map(|_| Peg::new(rng.random_range(0..colors)).ok())
            .collect();

        let secret = Code::new(&pegs).unwrap_or_else(|_| rules.default_opening());
        Self { rules, secret }
    }

    /// The hidden code
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }
}

impl Responder for SecretKeeper {
    fn respond(&mut self, guess: &Code) -> Result<Feedback> {
        self.rules.score(guess, &self.secret)
    }
}

/// Guesses straight from the solver
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverGuesses;

impl<S: Strategy> GuessSource<S> for SolverGuesses {
    fn next_guess(&mut self, session: &Session<S>) -> Result<Code> {
        session.next_guess()
    }
}

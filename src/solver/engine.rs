//! Game session: candidate sets, history and the guess/feedback cycle

use super::minimax::{Selection, calculate_worst_case};
use super::strategy::{Strategy, StrategyType};
use crate::core::{Code, Feedback, MastermindError, Result, Rules};
use std::fmt;

/// Where a session is in the guess/feedback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for the next guess to be played
    AwaitingGuess,
    /// A guess has been played and needs feedback
    AwaitingFeedback,
    /// The last guess was the code
    Won,
    /// The feedback history ruled out every code
    Inconsistent,
}

impl SessionState {
    /// Check if no further guesses can be played
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Inconsistent)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AwaitingGuess => "awaiting a guess",
            Self::AwaitingFeedback => "awaiting feedback",
            Self::Won => "won",
            Self::Inconsistent => "inconsistent",
        })
    }
}

/// One played guess and what came of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    /// Consistent codes before this turn
    pub candidates_before: usize,
    /// Consistent codes after this turn (unchanged if the turn was rejected)
    pub candidates_after: usize,
}

/// One game of Mastermind from the code breaker's side
///
/// Owns the candidate set S (codes consistent with all feedback) and the guess
/// pool T (codes not yet played). Both start as the full universe; S only
/// shrinks through [`Session::prune`].
pub struct Session<S: Strategy = StrategyType> {
    rules: Rules,
    opening: Code,
    strategy: S,
    universe_size: usize,
    candidates: Vec<Code>,
    pool: Vec<Code>,
    history: Vec<Turn>,
    played: Option<Code>,
    state: SessionState,
}

impl<S: Strategy> Session<S> {
    /// Start a new game
    ///
    /// # Errors
    /// Returns `InvalidInput` if the opening guess does not fit the rules.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Rules;
    /// use mastermind_solver::solver::{Session, StrategyType};
    ///
    /// let rules = Rules::classic();
    /// let opening = rules.parse_code("rrgg").unwrap();
    /// let session = Session::new(rules, opening, StrategyType::Knuth).unwrap();
    ///
    /// assert_eq!(session.candidates().len(), 1296);
    /// assert_eq!(session.next_guess().unwrap(), opening);
    /// ```
    pub fn new(rules: Rules, opening: Code, strategy: S) -> Result<Self> {
        rules.validate(&opening)?;

        let universe = rules.universe();
        Ok(Self {
            universe_size: universe.len(),
            candidates: universe.clone(),
            pool: universe,
            rules,
            opening,
            strategy,
            history: Vec::new(),
            played: None,
            state: SessionState::AwaitingGuess,
        })
    }

    /// Start a game over the first `alphabet_size` default colors
    ///
    /// # Errors
    /// Returns `InvalidInput` for unsupported sizes or a mismatched opening.
    pub fn with_size(
        alphabet_size: usize,
        code_length: usize,
        opening: &str,
        strategy: S,
    ) -> Result<Self> {
        let rules = Rules::with_size(alphabet_size, code_length)?;
        let opening = rules.parse_code(opening)?;
        Self::new(rules, opening, strategy)
    }

    /// Filter the candidate set with the feedback to `guess`
    ///
    /// Removes `guess` from both sets, then keeps only candidates that would
    /// have produced `feedback`. Winning feedback ends the game instead and is
    /// handled by [`Session::respond`].
    ///
    /// # Errors
    /// - `OutOfTurn` once the session is won or inconsistent
    /// - `InvalidInput` / `InvalidFeedback` if the arguments do not fit the rules
    /// - `NoConsistentCandidates` if no code survives; the sets are left as
    ///   they were so the caller can supply corrected feedback
    pub fn prune(&mut self, guess: &Code, feedback: Feedback) -> Result<()> {
        if self.state.is_terminal() {
            return Err(MastermindError::OutOfTurn(self.state));
        }
        self.rules.validate(guess)?;
        self.rules.validate_feedback(feedback)?;

        let remaining: Vec<Code> = self
            .candidates
            .iter()
            .filter(|&code| code != guess && Feedback::calculate(guess, code) == feedback)
            .copied()
            .collect();

        if remaining.is_empty() {
            return Err(MastermindError::NoConsistentCandidates);
        }

        self.history.push(Turn {
            guess: *guess,
            feedback,
            candidates_before: self.candidates.len(),
            candidates_after: remaining.len(),
        });
        self.candidates = remaining;
        self.pool.retain(|code| code != guess);

        Ok(())
    }

    /// The guess the solver recommends next
    ///
    /// The configured opening before any turn, minimax afterwards.
    ///
    /// # Errors
    /// Returns `NoConsistentCandidates` if the session is inconsistent or the
    /// strategy has nothing left to propose.
    pub fn next_guess(&self) -> Result<Code> {
        self.suggest().map(|selection| selection.guess)
    }

    /// Like [`Session::next_guess`], with the minimax figures behind the choice
    ///
    /// # Errors
    /// Same as [`Session::next_guess`].
    pub fn suggest(&self) -> Result<Selection> {
        if self.state == SessionState::Inconsistent || self.candidates.is_empty() {
            return Err(MastermindError::NoConsistentCandidates);
        }

        if self.history.is_empty() {
            return Ok(Selection {
                guess: self.opening,
                worst_case: calculate_worst_case(&self.opening, &self.candidates),
                tied: 1,
            });
        }

        self.strategy
            .select_guess(&self.candidates, &self.pool)
            .ok_or(MastermindError::NoConsistentCandidates)
    }

    /// Play a guess, from the solver or from a human breaker
    ///
    /// # Errors
    /// - `OutOfTurn` unless the session is awaiting a guess
    /// - `InvalidInput` if the guess does not fit the rules
    pub fn play(&mut self, guess: Code) -> Result<()> {
        if self.state != SessionState::AwaitingGuess {
            return Err(MastermindError::OutOfTurn(self.state));
        }
        self.rules.validate(&guess)?;

        self.played = Some(guess);
        self.state = SessionState::AwaitingFeedback;
        Ok(())
    }

    /// Record the keeper's feedback to the played guess
    ///
    /// Returns the new state: `Won` on all blacks, otherwise `AwaitingGuess`
    /// after pruning.
    ///
    /// # Errors
    /// - `OutOfTurn` unless a guess is awaiting feedback
    /// - `InvalidFeedback` if the pair is impossible; the session still
    ///   awaits feedback
    /// - `NoConsistentCandidates` if the feedback contradicts the history; the
    ///   turn is recorded and the session becomes `Inconsistent`
    pub fn respond(&mut self, feedback: Feedback) -> Result<SessionState> {
        let guess = match (self.state, self.played) {
            (SessionState::AwaitingFeedback, Some(guess)) => guess,
            _ => return Err(MastermindError::OutOfTurn(self.state)),
        };
        self.rules.validate_feedback(feedback)?;

        if feedback.is_win(self.rules.code_length()) {
            self.history.push(Turn {
                guess,
                feedback,
                candidates_before: self.candidates.len(),
                candidates_after: 1,
            });
            self.played = None;
            self.state = SessionState::Won;
            return Ok(self.state);
        }

        match self.prune(&guess, feedback) {
            Ok(()) => {
                self.played = None;
                self.state = SessionState::AwaitingGuess;
                Ok(self.state)
            }
            Err(MastermindError::NoConsistentCandidates) => {
                self.history.push(Turn {
                    guess,
                    feedback,
                    candidates_before: self.candidates.len(),
                    candidates_after: self.candidates.len(),
                });
                self.played = None;
                self.state = SessionState::Inconsistent;
                Err(MastermindError::NoConsistentCandidates)
            }
            Err(err) => Err(err),
        }
    }

    /// Retract the last turn
    ///
    /// Rebuilds both sets by replaying the remaining history, and leaves the
    /// session awaiting a guess. A guess still waiting for feedback is
    /// withdrawn first; only if there is none is a turn removed.
    ///
    /// # Errors
    /// Propagates errors from replaying the history, which only happens if the
    /// history was built outside this session's rules.
    pub fn undo(&mut self) -> Result<Option<Turn>> {
        if self.state == SessionState::AwaitingFeedback {
            self.played = None;
            self.state = SessionState::AwaitingGuess;
            return Ok(None);
        }

        let Some(last) = self.history.pop() else {
            return Ok(None);
        };

        let replay = std::mem::take(&mut self.history);
        self.reset();
        for turn in replay {
            self.prune(&turn.guess, turn.feedback)?;
        }

        Ok(Some(last))
    }

    /// Start over with the same rules, opening and strategy
    pub fn reset(&mut self) {
        let universe = self.rules.universe();
        self.candidates.clone_from(&universe);
        self.pool = universe;
        self.history.clear();
        self.played = None;
        self.state = SessionState::AwaitingGuess;
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn opening(&self) -> Code {
        self.opening
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Codes still consistent with every feedback (S)
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Codes not yet played (T)
    #[must_use]
    pub fn pool(&self) -> &[Code] {
        &self.pool
    }

    /// Every turn so far, including a final winning or contradictory one
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of guesses that have received feedback
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Guess currently waiting for feedback
    #[must_use]
    pub const fn played(&self) -> Option<Code> {
        self.played
    }

    /// Size of the full code universe
    #[must_use]
    pub const fn universe_size(&self) -> usize {
        self.universe_size
    }
}

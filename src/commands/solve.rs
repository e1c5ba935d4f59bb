//! Code solving command
//!
//! Solves a specific hidden code and returns the solution path.

use crate::config::GameConfig;
use crate::core::{Code, Feedback, MastermindError};
use crate::game::{Responder, SecretKeeper};
use crate::solver::{SessionState, Strategy};

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest partition the guess could have left
    pub worst_case: usize,
    /// Guesses sharing that worst case
    pub tied: usize,
}

/// Solve `secret` with the solver playing every guess
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the configured rules
/// - The solver runs out of candidates
pub fn solve_code<S: Strategy>(
    config: &GameConfig,
    strategy: S,
    secret: Code,
) -> Result<SolveResult, MastermindError> {
    let mut keeper = SecretKeeper::new(config.rules.clone(), secret)?;
    let mut session = config.session(strategy)?;
    let mut steps = Vec::new();

    while session.guess_count() < config.max_turns {
        let candidates_before = session.candidates().len();
        let selection = session.suggest()?;

        session.play(selection.guess)?;
        let feedback = keeper.respond(&selection.guess)?;
        let state = session.respond(feedback)?;

        steps.push(GuessStep {
            guess: config.rules.render(&selection.guess),
            feedback,
            candidates_before,
            candidates_after: if state == SessionState::Won {
                1
            } else {
                session.candidates().len()
            },
            worst_case: selection.worst_case,
            tied: selection.tied,
        });

        if state == SessionState::Won {
            break;
        }
    }

    Ok(SolveResult {
        success: session.state() == SessionState::Won,
        steps,
        secret: config.rules.render(&secret),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;

    #[test]
    fn solve_ycmb() {
        let config = GameConfig::classic();
        let secret = config.rules.parse_code("ycmb").unwrap();

        let result = solve_code(&config, StrategyType::Knuth, secret).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, "ycmb");
        assert!(result.steps.len() <= 5);
        assert_eq!(result.steps.last().unwrap().guess, "ycmb");
        assert_eq!(result.steps[0].guess, "rrgg");
        assert_eq!(result.steps[0].candidates_before, 1296);
        assert_eq!(result.steps[0].worst_case, 256);
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let config = GameConfig::classic();
        let secret = config.rules.parse_code("bbgm").unwrap();

        let result = solve_code(&config, StrategyType::Consistent, secret).unwrap();

        assert!(result.success);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_opening_hit() {
        let config = GameConfig::classic();
        let result = solve_code(&config, StrategyType::Knuth, config.opening).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].feedback.is_win(4));
    }

    #[test]
    fn solve_respects_turn_limit() {
        let config = GameConfig::classic().with_max_turns(3);
        let secret = config.rules.parse_code("ycmb").unwrap();

        let result = solve_code(&config, StrategyType::Knuth, secret).unwrap();

        assert!(!result.success);
        assert_eq!(result.steps.len(), 3);
    }

    #[test]
    fn solve_rejects_foreign_secret() {
        let config = GameConfig::classic();
        let secret = GameConfig::new("rgbcym", 5, None).unwrap().opening;

        assert!(matches!(
            solve_code(&config, StrategyType::Knuth, secret),
            Err(MastermindError::InvalidInput(_))
        ));
    }
}

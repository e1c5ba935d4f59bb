//! Automated game loop

use super::players::{GuessSource, Responder};
use crate::core::Result;
use crate::solver::{Session, SessionState, Strategy, Turn};

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub solved: bool,
    pub turns: Vec<Turn>,
}

impl GameOutcome {
    /// Number of guesses played
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }
}

/// Play until the code is found or `max_turns` guesses have been made
///
/// # Errors
/// Propagates errors from the guess source, the responder, or the session;
/// contradictory feedback surfaces as `NoConsistentCandidates` with the
/// offending turn left in the session history.
pub fn play_game<S, G, R>(
    session: &mut Session<S>,
    source: &mut G,
    responder: &mut R,
    max_turns: usize,
) -> Result<GameOutcome>
where
    S: Strategy,
    G: GuessSource<S>,
    R: Responder,
{
    while session.guess_count() < max_turns {
        let guess = source.next_guess(session)?;
        session.play(guess)?;

        let feedback = responder.respond(&guess)?;
        if session.respond(feedback)? == SessionState::Won {
            break;
        }
    }

    Ok(GameOutcome {
        solved: session.state() == SessionState::Won,
        turns: session.history().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Code, Feedback, MastermindError};
    use crate::game::{SecretKeeper, SolverGuesses};
    use crate::solver::StrategyType;
    use rayon::prelude::*;

    fn solve(config: &GameConfig, strategy: StrategyType, secret: Code) -> GameOutcome {
        let mut session = config.session(strategy).unwrap();
        let mut keeper = SecretKeeper::new(config.rules.clone(), secret).unwrap();
        play_game(&mut session, &mut SolverGuesses, &mut keeper, config.max_turns).unwrap()
    }

    #[test]
    fn solves_ycmb_within_five() {
        let config = GameConfig::classic();
        let secret = config.rules.parse_code("ycmb").unwrap();

        for strategy in [StrategyType::Knuth, StrategyType::Consistent] {
            let outcome = solve(&config, strategy, secret);

            assert!(outcome.solved, "{strategy}");
            assert!(outcome.guesses() <= 5, "{strategy}: {}", outcome.guesses());
            assert_eq!(outcome.turns.last().unwrap().guess, secret);
            assert_eq!(outcome.turns[0].guess, config.opening);
        }
    }

    #[test]
    fn knuth_path_for_ycmb() {
        let config = GameConfig::classic();
        let secret = config.rules.parse_code("ycmb").unwrap();
        let outcome = solve(&config, StrategyType::Knuth, secret);

        let played: Vec<String> = outcome
            .turns
            .iter()
            .map(|turn| config.rules.render(&turn.guess))
            .collect();
        assert_eq!(played, ["rrgg", "bbcy", "cmyb", "cybm", "ycmb"]);
    }

    #[test]
    fn knuth_solves_every_classic_code_within_five() {
        let config = GameConfig::classic();
        let universe = config.rules.universe();

        let guesses: Vec<usize> = universe
            .par_iter()
            .map(|&secret| {
                let outcome = solve(&config, StrategyType::Knuth, secret);
                assert!(outcome.solved);
                assert_eq!(outcome.turns.last().unwrap().guess, secret);
                outcome.guesses()
            })
            .collect();

        let worst = guesses.iter().copied().max().unwrap();
        assert!(worst <= 5, "worst case {worst}");
        assert_eq!(guesses.iter().filter(|&&n| n == 1).count(), 1);
    }

    #[test]
    fn consistent_variant_solves_every_classic_code() {
        let config = GameConfig::classic();
        let universe = config.rules.universe();

        let guesses: Vec<usize> = universe
            .par_iter()
            .map(|&secret| {
                let outcome = solve(&config, StrategyType::Consistent, secret);
                assert!(outcome.solved);
                outcome.guesses()
            })
            .collect();

        // Guessing only from the still-possible codes costs three extra turns
        let worst = guesses.iter().copied().max().unwrap();
        assert_eq!(worst, 8);
        assert_eq!(guesses.iter().filter(|&&n| n == 8).count(), 1);
        assert_eq!(guesses.iter().filter(|&&n| n > 5).count(), 194);
    }

    #[test]
    fn secret_survives_every_prune() {
        let config = GameConfig::classic();
        let secret = config.rules.parse_code("gcgm").unwrap();
        let mut session = config.session(StrategyType::Knuth).unwrap();
        let mut keeper = SecretKeeper::new(config.rules.clone(), secret).unwrap();

        while session.state() != SessionState::Won {
            let guess = session.next_guess().unwrap();
            session.play(guess).unwrap();
            session.respond(keeper.respond(&guess).unwrap()).unwrap();
            if session.state() == SessionState::AwaitingGuess {
                assert!(session.candidates().contains(&secret));
            }
        }

        let sizes: Vec<usize> = session.history().iter().map(|t| t.candidates_after).collect();
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn generalizes_to_other_sizes() {
        for (colors, length) in [(2, 3), (3, 3), (4, 3), (5, 2), (1, 4)] {
            let config = GameConfig::new(
                &crate::core::DEFAULT_SYMBOLS[..colors],
                length,
                None,
            )
            .unwrap();

            for secret in config.rules.universe() {
                let outcome = solve(&config, StrategyType::Knuth, secret);
                assert!(outcome.solved, "{colors}x{length}");
            }
        }
    }

    #[test]
    fn turn_ceiling_stops_the_game() {
        let config = GameConfig::classic().with_max_turns(2);
        let secret = config.rules.parse_code("ycmb").unwrap();
        let outcome = solve(&config, StrategyType::Knuth, secret);

        assert!(!outcome.solved);
        assert_eq!(outcome.guesses(), 2);
    }

    struct LyingKeeper;

    impl Responder for LyingKeeper {
        fn respond(&mut self, _guess: &Code) -> Result<Feedback> {
            // Claims one black on everything, which no code can sustain
            Feedback::new(1, 0, 4)
        }
    }

    #[test]
    fn lying_keeper_is_caught() {
        let config = GameConfig::classic();
        let mut session = config.session(StrategyType::Knuth).unwrap();

        let result = play_game(&mut session, &mut SolverGuesses, &mut LyingKeeper, 12);
        assert_eq!(result, Err(MastermindError::NoConsistentCandidates));
        assert_eq!(session.state(), SessionState::Inconsistent);
        assert!(session.history().len() >= 2);
    }
}

//! Minimax-based guess selection
//!
//! Picks the guess whose worst-case partition is smallest. Ties go to the
//! first tied guess that belongs to a preferred set, then to the first tied
//! guess overall, so the result never depends on thread scheduling.

use super::calculator::calculate_worst_case;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Outcome of a minimax search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The chosen guess
    pub guess: Code,
    /// Largest partition the guess can leave
    pub worst_case: usize,
    /// How many guesses shared that worst case
    pub tied: usize,
}

/// Select the guess minimizing the worst-case partition of `universe`
///
/// Worst cases are computed in parallel; the reduction is sequential and
/// follows the order of `guesses`. Returns `None` if `guesses` is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let rules = Rules::classic();
/// let universe = rules.universe();
///
/// let guesses = vec![
///     rules.parse_code("rrrr").unwrap(),
///     rules.parse_code("rrgg").unwrap(),
/// ];
///
/// let best = select_best_guess(&guesses, &universe, &[]).unwrap();
/// assert_eq!(rules.render(&best.guess), "rrgg");
/// assert_eq!(best.worst_case, 256);
/// ```
#[must_use]
pub fn select_best_guess(
    guesses: &[Code],
    universe: &[Code],
    preferred: &[Code],
) -> Option<Selection> {
    let worst_cases: Vec<usize> = guesses
        .par_iter()
        .map(|guess| calculate_worst_case(guess, universe))
        .collect();

    let best = worst_cases.iter().copied().min()?;

    let tied: Vec<&Code> = guesses
        .iter()
        .zip(&worst_cases)
        .filter(|&(_, &worst)| worst == best)
        .map(|(guess, _)| guess)
        .collect();

    let preferred: FxHashSet<&Code> = preferred.iter().collect();
    let guess = tied
        .iter()
        .find(|guess| preferred.contains(**guess))
        .or_else(|| tied.first())
        .copied()?;

    Some(Selection {
        guess: *guess,
        worst_case: best,
        tied: tied.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    fn codes(rules: &Rules, texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| rules.parse_code(t).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_worst_case() {
        let rules = Rules::classic();
        let universe = rules.universe();
        let guesses = codes(&rules, &["rrrr", "rrrg", "rrgg", "rgbc"]);

        let best = select_best_guess(&guesses, &universe, &[]).unwrap();
        assert_eq!(rules.render(&best.guess), "rrgg");
        assert_eq!(best.worst_case, 256);
        assert_eq!(best.tied, 1);
    }

    #[test]
    fn ties_prefer_first_in_order() {
        let rules = Rules::classic();
        let universe = codes(&rules, &["yyyy"]);
        let guesses = codes(&rules, &["rrrr", "gggg", "bbbb"]);

        let best = select_best_guess(&guesses, &universe, &[]).unwrap();
        assert_eq!(rules.render(&best.guess), "rrrr");
        assert_eq!(best.tied, 3);
    }

    #[test]
    fn ties_prefer_preferred_set() {
        let rules = Rules::classic();
        let universe = codes(&rules, &["yyyy"]);
        let guesses = codes(&rules, &["rrrr", "gggg", "bbbb"]);
        let preferred = codes(&rules, &["bbbb", "cccc"]);

        let best = select_best_guess(&guesses, &universe, &preferred).unwrap();
        assert_eq!(rules.render(&best.guess), "bbbb");
    }

    #[test]
    fn preference_never_beats_a_better_worst_case() {
        let rules = Rules::classic();
        let universe = codes(&rules, &["rrrr", "gggg"]);
        let guesses = codes(&rules, &["yyyy", "rrrr"]);
        let preferred = codes(&rules, &["yyyy"]);

        let best = select_best_guess(&guesses, &universe, &preferred).unwrap();
        assert_eq!(rules.render(&best.guess), "rrrr");
        assert_eq!(best.worst_case, 1);
    }

    #[test]
    fn deterministic_across_runs() {
        let rules = Rules::classic();
        let universe = rules.universe();
        let guesses = &universe[..200];

        let first = select_best_guess(guesses, &universe, &[]);
        let second = select_best_guess(guesses, &universe, &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn returns_none_on_empty_guesses() {
        let rules = Rules::classic();
        let universe = rules.universe();
        assert!(select_best_guess(&[], &universe, &[]).is_none());
    }
}

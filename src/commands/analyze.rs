//! Guess analysis command
//!
//! Shows how a guess partitions a set of candidate codes.

use crate::core::{Code, Feedback, Result, Rules};
use crate::solver::minimax::{expected_remaining, group_by_feedback};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    /// Partition sizes ordered by feedback (blacks, then whites)
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Whether the guess is itself one of the candidates
    pub could_win: bool,
}

/// Analyze how `guess` splits `candidates`
///
/// # Errors
///
/// Returns an error if the guess cannot be parsed under `rules`.
pub fn analyze_guess(rules: &Rules, guess: &str, candidates: &[Code]) -> Result<AnalysisResult> {
    let code = rules.parse_code(guess)?;

    let mut partitions: Vec<(Feedback, usize)> =
        group_by_feedback(&code, candidates).into_iter().collect();
    partitions.sort_unstable_by_key(|&(feedback, _)| feedback);

    Ok(AnalysisResult {
        guess: rules.render(&code),
        worst_case: partitions.iter().map(|&(_, n)| n).max().unwrap_or(0),
        expected_remaining: expected_remaining(&code, candidates),
        total_candidates: candidates.len(),
        could_win: candidates.contains(&code),
        partitions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_opening() {
        let rules = Rules::classic();
        let result = analyze_guess(&rules, "rrgg", &rules.universe()).unwrap();

        assert_eq!(result.guess, "rrgg");
        assert_eq!(result.total_candidates, 1296);
        assert_eq!(result.worst_case, 256);
        assert_eq!(result.partitions.len(), 13);
        assert!(result.could_win);
        assert_eq!(
            result.partitions.iter().map(|&(_, n)| n).sum::<usize>(),
            1296
        );
        assert!((result.expected_remaining - 204.535).abs() < 0.01);
    }

    #[test]
    fn partitions_are_ordered() {
        let rules = Rules::classic();
        let result = analyze_guess(&rules, "rrrr", &rules.universe()).unwrap();

        let expected: Vec<(Feedback, usize)> = [(0, 625), (1, 500), (2, 150), (3, 20), (4, 1)]
            .into_iter()
            .map(|(b, n)| (Feedback::new(b, 0, 4).unwrap(), n))
            .collect();
        assert_eq!(result.partitions, expected);
        assert_eq!(result.worst_case, 625);
    }

    #[test]
    fn all_distinct_guess() {
        let rules = Rules::classic();
        let result = analyze_guess(&rules, "rgbc", &rules.universe()).unwrap();

        assert_eq!(result.partitions.len(), 14);
        assert_eq!(result.worst_case, 312);
    }

    #[test]
    fn analyze_invalid_guess() {
        let rules = Rules::classic();

        assert!(analyze_guess(&rules, "rgbz", &rules.universe()).is_err());
        assert!(analyze_guess(&rules, "rgb", &rules.universe()).is_err());
    }

    #[test]
    fn empty_candidates() {
        let rules = Rules::classic();
        let result = analyze_guess(&rules, "rrgg", &[]).unwrap();

        assert_eq!(result.worst_case, 0);
        assert!(result.partitions.is_empty());
        assert!(!result.could_win);
    }
}

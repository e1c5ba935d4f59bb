//! Scoring command
//!
//! Scores one guess against one code.

use crate::core::{Feedback, Result, Rules};

/// Score `guess` against `code`, both given as text under `rules`
///
/// # Errors
///
/// Returns an error if either code cannot be parsed.
pub fn score_codes(rules: &Rules, guess: &str, code: &str) -> Result<Feedback> {
    let guess = rules.parse_code(guess)?;
    let code = rules.parse_code(code)?;
    rules.score(&guess, &code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MastermindError;

    #[test]
    fn scores_reference_fixtures() {
        let rules = Rules::classic();
        let cases = [
            ("rrrr", "gggg", (0, 0)),
            ("rrcr", "ccrc", (0, 2)),
            ("rrcr", "ggrg", (0, 1)),
            ("rrbb", "bbrr", (0, 4)),
            ("rrcr", "rgrg", (1, 1)),
            ("ycmb", "ycmb", (4, 0)),
        ];

        for (guess, code, (blacks, whites)) in cases {
            let feedback = score_codes(&rules, guess, code).unwrap();
            assert_eq!(
                (feedback.blacks(), feedback.whites()),
                (blacks, whites),
                "{guess} vs {code}"
            );
        }
    }

    #[test]
    fn rejects_bad_codes() {
        let rules = Rules::classic();

        assert!(matches!(
            score_codes(&rules, "rrrrr", "gggg"),
            Err(MastermindError::InvalidInput(_))
        ));
        assert!(score_codes(&rules, "rrrr", "xxxx").is_err());
    }
}

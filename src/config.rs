//! Game configuration
//!
//! Collects the rules, the opening guess and the driver's turn ceiling.

use crate::core::{Alphabet, Code, Result, Rules};
use crate::solver::{Session, Strategy};

/// Turn ceiling of the physical board game
pub const DEFAULT_MAX_TURNS: usize = 12;

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rules: Rules,
    pub opening: Code,
    pub max_turns: usize,
}

impl GameConfig {
    /// Build a configuration from user-facing settings
    ///
    /// Without an explicit opening the rules' default opening is used.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the alphabet, length or opening is invalid.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    ///
    /// let config = GameConfig::new("rgbcym", 4, None).unwrap();
    /// assert_eq!(config, GameConfig::classic());
    ///
    /// let digits = GameConfig::new("123456", 4, Some("1122")).unwrap();
    /// assert_eq!(digits.rules.render(&digits.opening), "1122");
    /// ```
    pub fn new(colors: &str, code_length: usize, opening: Option<&str>) -> Result<Self> {
        let rules = Rules::new(Alphabet::new(colors)?, code_length)?;
        let opening = match opening {
            Some(text) => rules.parse_code(text)?,
            None => rules.default_opening(),
        };

        Ok(Self {
            rules,
            opening,
            max_turns: DEFAULT_MAX_TURNS,
        })
    }

    /// Six colors, four pegs, opening `rrgg`, twelve turns
    #[must_use]
    pub fn classic() -> Self {
        let rules = Rules::classic();
        Self {
            opening: rules.default_opening(),
            rules,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Override the turn ceiling
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Start a session with these settings
    ///
    /// # Errors
    /// Returns `InvalidInput` if the opening does not fit the rules.
    pub fn session<S: Strategy>(&self, strategy: S) -> Result<Session<S>> {
        Session::new(self.rules.clone(), self.opening, strategy)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;

    #[test]
    fn classic_settings() {
        let config = GameConfig::classic();
        assert_eq!(config.rules.alphabet().symbols(), "rgbcym");
        assert_eq!(config.rules.code_length(), 4);
        assert_eq!(config.rules.render(&config.opening), "rrgg");
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
    }

    #[test]
    fn explicit_opening_must_fit() {
        assert!(GameConfig::new("rgbcym", 4, Some("rrg")).is_err());
        assert!(GameConfig::new("rgbcym", 4, Some("rrgx")).is_err());
        assert!(GameConfig::new("rgbcym", 5, Some("rrggb")).is_ok());
    }

    #[test]
    fn invalid_alphabet_rejected() {
        assert!(GameConfig::new("", 4, None).is_err());
        assert!(GameConfig::new("rgbr", 4, None).is_err());
    }

    #[test]
    fn session_uses_opening() {
        let config = GameConfig::new("rgbcym", 4, Some("rgbc")).unwrap().with_max_turns(8);
        let session = config.session(StrategyType::Knuth).unwrap();
        assert_eq!(session.next_guess().unwrap(), config.opening);
        assert_eq!(config.max_turns, 8);
    }
}

//! Who breaks and who keeps the code

use std::fmt;

/// The code breaker's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Breaker {
    /// The solver proposes every guess
    #[default]
    Computer,
    /// A person types every guess
    Human,
}

/// The code keeper's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Keeper {
    /// Feedback is computed against a hidden code
    #[default]
    Computer,
    /// A person enters feedback for every guess
    Human,
}

impl Breaker {
    /// Parse a side name: "computer" (or "cpu") and "human"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "computer" | "cpu" => Some(Self::Computer),
            "human" => Some(Self::Human),
            _ => None,
        }
    }
}

impl Keeper {
    /// Same names as [`Breaker::from_name`]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match Breaker::from_name(name)? {
            Breaker::Computer => Some(Self::Computer),
            Breaker::Human => Some(Self::Human),
        }
    }
}

/// One of the four breaker/keeper combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameMode {
    pub breaker: Breaker,
    pub keeper: Keeper,
}

impl GameMode {
    #[must_use]
    pub const fn new(breaker: Breaker, keeper: Keeper) -> Self {
        Self { breaker, keeper }
    }

    /// Computer against computer
    #[must_use]
    pub const fn auto() -> Self {
        Self::new(Breaker::Computer, Keeper::Computer)
    }

    /// Whether the game needs a hidden code chosen up front
    #[must_use]
    pub const fn needs_secret(self) -> bool {
        matches!(self.keeper, Keeper::Computer)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breaker = match self.breaker {
            Breaker::Computer => "computer",
            Breaker::Human => "human",
        };
        let keeper = match self.keeper {
            Keeper::Computer => "computer",
            Keeper::Human => "human",
        };
        write!(f, "{breaker} breaker vs {keeper} keeper")
    }
}

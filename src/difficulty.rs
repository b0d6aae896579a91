//! Difficulty tiers and their search limits

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Named strength tier.
///
/// Every tier plays forced wins and blocks; only search depth and breadth vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "facile")]
    Easy,
    #[default]
    #[serde(alias = "moyen")]
    Medium,
    #[serde(alias = "difficile")]
    Hard,
}

/// Search depth in plies and candidates kept per node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchProfile {
    pub depth: u8,
    pub width: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn profile(self) -> SearchProfile {
        match self {
            Difficulty::Easy => SearchProfile { depth: 1, width: 15 },
            Difficulty::Medium => SearchProfile { depth: 3, width: 12 },
            Difficulty::Hard => SearchProfile { depth: 4, width: 10 },
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "facile" => Ok(Difficulty::Easy),
            "medium" | "moyen" => Ok(Difficulty::Medium),
            "hard" | "difficile" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

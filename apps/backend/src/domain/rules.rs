use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::moves::Move;

/// Round result from the submitting player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown outcome '{0}'")]
pub struct ParseOutcomeError(pub String);

impl Outcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
            Outcome::Draw => "DRAW",
        }
    }

    /// The same round seen from the other side of the table.
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    // Stored values are always canonical; no alias handling here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIN" => Ok(Outcome::Win),
            "LOSE" => Ok(Outcome::Lose),
            "DRAW" => Ok(Outcome::Draw),
            other => Err(ParseOutcomeError(other.to_string())),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one decision plus a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub result: Outcome,
    pub message: String,
}

/// Decide a round.
///
/// Equal moves draw; otherwise the player wins iff their move beats the cpu move.
pub fn decide(player_move: Move, cpu_move: Move) -> Verdict {
    if player_move == cpu_move {
        Verdict {
            result: Outcome::Draw,
            message: format!("{player_move} and {cpu_move}. It's a draw!"),
        }
    } else if player_move.beats() == cpu_move {
        Verdict {
            result: Outcome::Win,
            message: format!("{player_move} beats {cpu_move}. You win!"),
        }
    } else {
        Verdict {
            result: Outcome::Lose,
            message: format!("{cpu_move} beats {player_move}. The CPU wins!"),
        }
    }
}

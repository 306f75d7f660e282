use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three jokenpo hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Raw input did not name a move. Carries the normalized (trimmed, uppercased) text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move '{normalized}'")]
pub struct ParseMoveError {
    pub normalized: String,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical label, as stored and as returned over HTTP.
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
        }
    }

    /// The move this one defeats.
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// Trim, uppercase and resolve user input.
    ///
    /// The Portuguese names (`PEDRA`, `PAPEL`, `TESOURA`) are accepted as
    /// aliases of the canonical English labels.
    pub fn normalize(raw: &str) -> Result<Move, ParseMoveError> {
        let normalized = raw.trim().to_uppercase();
        match normalized.as_str() {
            "ROCK" | "PEDRA" => Ok(Move::Rock),
            "PAPER" | "PAPEL" => Ok(Move::Paper),
            "SCISSORS" | "TESOURA" => Ok(Move::Scissors),
            _ => Err(ParseMoveError { normalized }),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::normalize(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

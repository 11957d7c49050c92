use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}
impl Move {
    /// Rock -> Paper -> Scissors -> Rock
    pub fn next(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Keyword written to the judge.
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unrecognized move {0:?}")]
pub struct ParseMoveError(pub String);

// The judge upper-cases replies before comparing, so parsing does the same.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ROCK" => Ok(Move::Rock),
            "PAPER" => Ok(Move::Paper),
            "SCISSORS" => Ok(Move::Scissors),
            _ => Err(ParseMoveError(s.to_owned())),
        }
    }
}

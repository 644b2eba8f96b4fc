use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// A parsed player command.
///
/// Coordinates stay signed so that negative input is reported as an invalid cell rather than
/// as a malformed command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal { row: i64, col: i64 },
    ToggleFlag { row: i64, col: i64 },
}

impl Command {
    pub const FLAG_PREFIX: &'static str = "f";

    pub const fn target(self) -> (i64, i64) {
        match self {
            Self::Reveal { row, col } | Self::ToggleFlag { row, col } => (row, col),
        }
    }
}

fn parse_index(token: &str) -> Result<i64> {
    token.parse().map_err(|_| GameError::InvalidCommandShape)
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let parts = (tokens.next(), tokens.next(), tokens.next(), tokens.next());

        match parts {
            (Some(row), Some(col), None, None) => Ok(Self::Reveal {
                row: parse_index(row)?,
                col: parse_index(col)?,
            }),
            (Some(Self::FLAG_PREFIX), Some(row), Some(col), None) => Ok(Self::ToggleFlag {
                row: parse_index(row)?,
                col: parse_index(col)?,
            }),
            _ => Err(GameError::InvalidCommandShape),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Reveal { row, col } => write!(f, "{row} {col}"),
            Self::ToggleFlag { row, col } => write!(f, "{} {row} {col}", Self::FLAG_PREFIX),
        }
    }
}

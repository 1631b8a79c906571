use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::BoardError;

/// Value held by a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Mine,
    Hidden,
    /// Revealed safe cell with the number of mines around it.
    Uncovered(u32),
}

impl Tile {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_uncovered(self) -> bool {
        matches!(self, Self::Uncovered(_))
    }

    pub const fn count(self) -> Option<u32> {
        match self {
            Self::Uncovered(count) => Some(count),
            Self::Mine | Self::Hidden => None,
        }
    }

    /// Canonical single-token rendering, the inverse of [`Tile::from_token`].
    pub fn cell_as_string(self) -> String {
        self.to_string()
    }

    /// Builds an uncovered tile, rejecting negative counts.
    pub fn from_count(count: i32) -> Result<Self, BoardError> {
        u32::try_from(count)
            .map(Self::Uncovered)
            .map_err(|_| BoardError::NegativeTile(count))
    }

    /// Converts one board token: `_` is hidden, `*` is a mine and any integer is an
    /// uncovered count.
    pub fn from_token(token: &str) -> Result<Self, BoardError> {
        match token {
            "_" => Ok(Self::Hidden),
            "*" => Ok(Self::Mine),
            other => match other.parse::<i32>() {
                Ok(count) => Self::from_count(count),
                Err(_) => Err(BoardError::UnrecognizedCell(other.into())),
            },
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Hidden
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mine => f.write_str("*"),
            Self::Hidden => f.write_str("_"),
            Self::Uncovered(count) => write!(f, "{count}"),
        }
    }
}

impl FromStr for Tile {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

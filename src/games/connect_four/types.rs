//! Core domain types for the connection game.

use serde::{Deserialize, Serialize};

/// Board width in columns.
pub const WIDTH: usize = 7;

/// Board height in playable rows.
pub const HEIGHT: usize = 6;

/// Bits one column occupies in a packed mask: the playable cells plus one
/// guard bit above them.
pub const COLUMN_BITS: usize = HEIGHT + 1;

/// Total playable cells on the board.
pub const SIZE: usize = WIDTH * HEIGHT;

/// One of the two sides at the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Disc {
    /// First side (marker `@`, moves on even turns).
    Red,
    /// Second side (marker `0`, moves on odd turns).
    Yellow,
}

impl Disc {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    /// Index of this side in per-side storage.
    pub fn index(self) -> usize {
        match self {
            Disc::Red => 0,
            Disc::Yellow => 1,
        }
    }

    /// Side that moves on the given turn count.
    pub fn from_parity(turns: u32) -> Self {
        if turns & 1 == 0 {
            Disc::Red
        } else {
            Disc::Yellow
        }
    }

    /// Single-character board marker for this side.
    pub fn marker(self) -> char {
        match self {
            Disc::Red => '@',
            Disc::Yellow => '0',
        }
    }
}

/// Outcome of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side connected four in a row.
    Win(Disc),
    /// A side conceded; the other side wins.
    Forfeit {
        /// Side awarded the win.
        winner: Disc,
        /// Side that conceded.
        loser: Disc,
    },
    /// The board filled without a connection.
    Draw,
}

impl Outcome {
    /// Returns the winning side, if the outcome has one.
    pub fn winner(&self) -> Option<Disc> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Forfeit { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{side} wins"),
            Outcome::Forfeit { winner, loser } => {
                write!(f, "{winner} wins by forfeit of {loser}")
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

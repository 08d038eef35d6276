//! Packed bitboard storage for the connection game.
//!
//! Each side's pieces live in one `u64`. A column occupies `HEIGHT + 1`
//! contiguous bits: the low `HEIGHT` bits are playable cells (bit 0 of a
//! column is the bottom row) and the top bit is a guard bit that is never
//! playable. Column overflow and four-in-a-row checks are constant-time
//! bit operations on the packed masks; nothing scans cells.

use super::rules;
use super::types::{COLUMN_BITS, Disc, HEIGHT, WIDTH};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Guard bit of every column.
const TOP: u64 = {
    let mut mask = 0u64;
    let mut column = 0;
    while column < WIDTH {
        mask |= 1u64 << (column * COLUMN_BITS + HEIGHT);
        column += 1;
    }
    mask
};

/// The packed board: one mask per side, a free-cell cursor per column, and
/// the move count that selects the side to move.
///
/// The two side masks are always disjoint, and neither ever sets a guard
/// bit while callers respect [`Bitboard::is_playable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitboard {
    /// Piece masks, indexed by [`Disc::index`].
    sides: [u64; 2],
    /// Absolute bit index of the next free cell in each column.
    cursors: [u8; WIDTH],
    /// Moves applied so far; parity selects the side to move.
    turns: u32,
}

impl Bitboard {
    /// Creates an empty board.
    pub fn new() -> Self {
        let mut cursors = [0u8; WIDTH];
        let mut column = 0;
        while column < WIDTH {
            cursors[column] = (column * COLUMN_BITS) as u8;
            column += 1;
        }
        Self {
            sides: [0; 2],
            cursors,
            turns: 0,
        }
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Disc {
        Disc::from_parity(self.turns)
    }

    /// Number of moves applied so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Checks that no column in `mask` has overflowed into its guard bit.
    pub fn is_legal(mask: u64) -> bool {
        mask & TOP == 0
    }

    /// Checks whether the side to move can drop a piece in `column`.
    ///
    /// Simulates the drop on the mover's mask without mutating state.
    /// Out-of-range columns report unplayable rather than panicking;
    /// callers validate range before indexing cells directly.
    pub fn is_playable(&self, column: usize) -> bool {
        let Some(&cursor) = self.cursors.get(column) else {
            return false;
        };
        Self::is_legal(self.sides[self.to_move().index()] | (1u64 << cursor))
    }

    /// Drops the mover's piece into `column` and passes the turn.
    ///
    /// Callers must have confirmed [`Bitboard::is_playable`] for the same
    /// column; this operation does not re-validate.
    #[instrument(skip(self), fields(side = %self.to_move(), turn = self.turns))]
    pub fn drop_piece(&mut self, column: usize) {
        debug_assert!(
            self.is_playable(column),
            "drop into unplayable column {column}"
        );
        let side = self.to_move().index();
        self.sides[side] |= 1u64 << self.cursors[column];
        self.cursors[column] += 1;
        self.turns += 1;
    }

    /// Checks whether `side` has connected four in any direction.
    pub fn has_won(&self, side: Disc) -> bool {
        rules::has_connected_four(self.sides[side.index()])
    }

    /// Checks whether every playable cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self.sides[0] | self.sides[1])
    }

    /// Owner of the cell at (`column`, `row`), with row 0 at the bottom.
    ///
    /// Both coordinates must be in range; this is a rendering lookup, not
    /// a validation entry point.
    pub fn cell(&self, column: usize, row: usize) -> Option<Disc> {
        debug_assert!(column < WIDTH && row < HEIGHT, "cell ({column}, {row}) out of range");
        let mask = 1u64 << (column * COLUMN_BITS + row);
        if self.sides[0] & mask != 0 {
            Some(Disc::Red)
        } else if self.sides[1] & mask != 0 {
            Some(Disc::Yellow)
        } else {
            None
        }
    }
}

impl Default for Bitboard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Bitboard {
    /// Renders the grid with a 1-based column header, top row first.
    /// Occupied cells show the owning side's marker, empty cells `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for column in 1..=WIDTH {
            write!(f, " {column}")?;
        }
        writeln!(f)?;
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                let glyph = match self.cell(column, row) {
                    Some(side) => side.marker(),
                    None => '.',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Draw detection on packed masks.

use super::super::types::{COLUMN_BITS, HEIGHT, WIDTH};

/// Mask with every playable cell set and every guard bit clear.
const FULL: u64 = {
    let mut mask = 0u64;
    let mut column = 0;
    while column < WIDTH {
        mask |= ((1u64 << HEIGHT) - 1) << (column * COLUMN_BITS);
        column += 1;
    }
    mask
};

/// Checks whether every playable cell in the combined occupancy mask is
/// taken. A full board with no connection is a draw.
pub fn is_full(occupied: u64) -> bool {
    occupied & FULL == FULL
}

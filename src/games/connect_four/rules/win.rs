//! Four-in-a-row detection on packed masks.

use super::super::types::{COLUMN_BITS, HEIGHT};
use tracing::instrument;

/// Bit-shift distances for the four line directions in the packed column
/// layout: vertical, horizontal, diagonal falling, diagonal rising.
const DIRECTIONS: [u32; 4] = [
    1,
    COLUMN_BITS as u32,
    HEIGHT as u32,
    (HEIGHT + 2) as u32,
];

/// Checks whether `mask` holds four set bits in a line.
///
/// For each direction distance `d`, `mask & (mask >> d)` keeps the bits that
/// start a run of at least two; intersecting that with itself shifted by
/// `2 * d` keeps the bits that start a run of at least four. The guard bit
/// above each column stays clear, so runs never continue across column
/// boundaries.
#[instrument]
pub fn has_connected_four(mask: u64) -> bool {
    DIRECTIONS.iter().any(|&d| {
        let pairs = mask & (mask >> d);
        pairs & (pairs >> (2 * d)) != 0
    })
}

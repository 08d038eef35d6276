mod bitboard;
mod rules;
mod types;

pub use bitboard::Bitboard;
pub use rules::{has_connected_four, is_full};
pub use types::{COLUMN_BITS, Disc, HEIGHT, Outcome, SIZE, WIDTH};

//! Command-line interface for dropfour.

use clap::{Parser, Subcommand};

/// Dropfour - two-player connection game
#[derive(Parser, Debug)]
#[command(name = "dropfour")]
#[command(about = "Two-player connection game on a packed bitboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game in the terminal
    Play {
        /// Name of the first player (marker `@`, moves first)
        #[arg(long, default_value = "Player 1")]
        first: String,

        /// Name of the second player (marker `0`)
        #[arg(long, default_value = "Player 2")]
        second: String,
    },
}

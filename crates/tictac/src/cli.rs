//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::{Difficulty, Mark};

/// Tictac - tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against a casual, strategic or expert opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds against the computer in the terminal
    Play {
        /// Path to the config file (optional; defaults apply if missing)
        #[arg(short, long, default_value = crate::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Opponent strength: casual, strategic or expert (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Your mark; X moves first
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Seed for reproducible engine play
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Pit two engine tiers against each other and report the tally
    Duel {
        /// Tier playing X
        #[arg(long, default_value = "strategic")]
        x: Difficulty,

        /// Tier playing O
        #[arg(long, default_value = "casual")]
        o: Difficulty,

        /// Number of rounds
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Seed for reproducible play
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

//! Tictac - terminal front end for the tictac engine.
//!
//! Owns everything the engine deliberately does not: the authoritative
//! board, turn order, the score tally, configuration and terminal I/O.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod duel;
mod play;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use duel::{Tally, run_duel};
pub use play::{Input, InputError, PlaySession};
pub use session::{Move, Round, RoundError, Scoreboard};

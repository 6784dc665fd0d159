//! Tictac engine - move selection for a computer tic-tac-toe opponent.
//!
//! The engine is pure: callers hand it a board snapshot and the seat
//! assignment, and get back the square the computer wants to play.
//! Round lifecycle, scoring and rendering belong to the caller.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Mark`], [`Position`]
//! - **Rules**: win/draw detection and the fixed line table ([`rules`])
//! - **Players**: [`CasualPlayer`], [`HeuristicPlayer`], [`SearchPlayer`]
//! - **Selector**: [`select_move`] and [`MoveSelector`] dispatch on [`Difficulty`]
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictac_engine::{Board, Difficulty, Mark, Seats, select_move};
//!
//! # fn example() -> Result<(), tictac_engine::EngineError> {
//! let board: Board = "XX. OO. ...".parse()?;
//! let seats = Seats::engine_plays(Mark::O);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let chosen = select_move(&board, Difficulty::Expert, seats, &mut rng)?;
//! assert_eq!(chosen.to_index(), 5);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod players;
mod position;
pub mod rules;
mod selector;
mod types;

pub use error::{EngineError, EngineErrorKind};
pub use players::{CasualPlayer, HeuristicPlayer, Rule, SearchPlayer};
pub use position::Position;
pub use selector::{Difficulty, MoveSelector, select_move};
pub use types::{Board, GameStatus, Mark, Seats, Square};

//! Move selection: dispatch a board snapshot to the configured tier.

use crate::rules::empty_cells;
use crate::{
    Board, CasualPlayer, EngineError, EngineErrorKind, HeuristicPlayer, Position, SearchPlayer,
    Seats,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Mostly random play with no win or block awareness.
    #[serde(alias = "easy")]
    #[strum(to_string = "casual", serialize = "easy")]
    Casual,
    /// Rule cascade: strong but beatable.
    #[default]
    #[serde(alias = "medium")]
    #[strum(to_string = "strategic", serialize = "medium")]
    Strategic,
    /// Full alpha-beta search: never loses.
    #[serde(alias = "hard")]
    #[strum(to_string = "expert", serialize = "hard")]
    Expert,
}

impl Difficulty {
    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Strategic => "Strategic",
            Self::Expert => "Expert",
        }
    }

    /// Cycles to the next tier, wrapping from Expert to Casual.
    pub fn next(self) -> Self {
        match self {
            Self::Casual => Self::Strategic,
            Self::Strategic => Self::Expert,
            Self::Expert => Self::Casual,
        }
    }
}

/// Chooses the engine's move on `board`.
///
/// `rng` is consulted by the casual tier always and by the strategic tier
/// only for its corner, edge and fallback picks.
///
/// # Errors
///
/// Returns [`EngineErrorKind::NoMoveAvailable`] if the board has no empty
/// square. Callers must not ask for a move once a round is over.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn select_move<R: Rng>(
    board: &Board,
    difficulty: Difficulty,
    seats: Seats,
    rng: &mut R,
) -> Result<Position, EngineError> {
    if empty_cells(board).is_empty() {
        return Err(EngineError::new(EngineErrorKind::NoMoveAvailable));
    }

    let chosen = match difficulty {
        Difficulty::Casual => CasualPlayer::new().choose(board, rng),
        Difficulty::Strategic => HeuristicPlayer::new(seats).choose(board, rng),
        Difficulty::Expert => SearchPlayer::new(seats).best_move(board),
    };

    let pos = chosen.ok_or_else(|| EngineError::new(EngineErrorKind::NoMoveAvailable))?;
    debug!(%difficulty, position = %pos, "Selected move");
    Ok(pos)
}

/// Stateful selector owning the randomness source and the configuration.
///
/// Changing the difficulty takes effect at the next [`MoveSelector::select`].
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    difficulty: Difficulty,
    seats: Seats,
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a reproducible selector from a seed.
    #[instrument]
    pub fn from_seed(difficulty: Difficulty, seats: Seats, seed: u64) -> Self {
        Self::with_rng(difficulty, seats, StdRng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the operating system.
    #[instrument]
    pub fn from_os_rng(difficulty: Difficulty, seats: Seats) -> Self {
        Self::with_rng(difficulty, seats, StdRng::from_os_rng())
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector around any randomness source.
    pub fn with_rng(difficulty: Difficulty, seats: Seats, rng: R) -> Self {
        Self {
            difficulty,
            seats,
            rng,
        }
    }

    /// The current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The current seats.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Changes the difficulty from the next selection on.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Changes which mark the engine plays.
    pub fn set_seats(&mut self, seats: Seats) {
        self.seats = seats;
    }

    /// Chooses the engine's move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::NoMoveAvailable`] on a full board.
    pub fn select(&mut self, board: &Board) -> Result<Position, EngineError> {
        select_move(board, self.difficulty, self.seats, &mut self.rng)
    }
}

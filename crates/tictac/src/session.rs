//! Round and score bookkeeping for a play session.
//!
//! The engine only ever sees board snapshots; this module owns the
//! authoritative board, whose turn it is, the move history and the tally.

use serde::{Deserialize, Serialize};
use tictac_engine::rules::status;
use tictac_engine::{Board, EngineError, GameStatus, Mark, Position, Seats};
use tracing::{debug, info, instrument};

/// A move in a round: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when applying a move to a round.
#[derive(Debug, Clone, derive_more::Display)]
pub enum RoundError {
    /// The round has already ended.
    #[display("Round is already over")]
    RoundOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// The board rejected the placement.
    #[display("{}", _0)]
    Engine(EngineError),
}

impl std::error::Error for RoundError {}

impl From<EngineError> for RoundError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}

/// One round: an empty board, X to move, played until a win or draw.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Round {
    /// Starts a new round.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the round is still being played.
    pub fn in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Places `mark` at `position` and returns the resulting status.
    ///
    /// # Errors
    ///
    /// Fails if the round is over, it is not `mark`'s turn, or the square
    /// is occupied. The round is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, mark: Mark, position: Position) -> Result<GameStatus, RoundError> {
        if !self.in_progress() {
            return Err(RoundError::RoundOver);
        }
        if mark != self.to_move {
            return Err(RoundError::WrongTurn(mark));
        }

        self.board.place(position, mark)?;
        let mov = Move { mark, position };
        debug!(%mov, "Move applied");
        self.history.push(mov);
        self.to_move = mark.opponent();
        self.status = status(&self.board);
        Ok(self.status)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

/// Running tally for the session. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds the human won.
    pub human_wins: u32,
    /// Rounds the engine won.
    pub engine_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Scoreboard {
    /// Records a finished round. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus, seats: Seats) {
        match status {
            GameStatus::Won(mark) if mark == seats.human() => self.human_wins += 1,
            GameStatus::Won(_) => self.engine_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        info!(
            human = self.human_wins,
            engine = self.engine_wins,
            draws = self.draws,
            "Round recorded"
        );
    }

    /// Total rounds recorded.
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.engine_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - {} Computer ({} drawn)",
            self.human_wins, self.engine_wins, self.draws
        )
    }
}

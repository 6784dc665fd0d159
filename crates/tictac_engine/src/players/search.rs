//! Expert tier: full-depth minimax with alpha-beta pruning.
//!
//! Scores are from the engine's side: a win found `d` plies below the
//! current board is worth `WIN_SCORE - d`, a loss `d - WIN_SCORE`, and a
//! draw 0. Faster wins and slower losses therefore score higher.

use crate::rules::{empty_cells, has_won};
use crate::{Board, Mark, Position, Seats, Square};
use tracing::{debug, instrument, trace};

/// Score of an immediate win before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Most plies that can remain on a 3x3 board.
pub const MAX_DEPTH: i32 = 9;

/// Perfect player used for the expert tier.
///
/// Ties go to the first square in ascending index order.
#[derive(Debug, Clone, Copy)]
pub struct SearchPlayer {
    seats: Seats,
}

impl SearchPlayer {
    /// Creates a search player for the given seats.
    pub fn new(seats: Seats) -> Self {
        Self { seats }
    }

    /// Picks the optimal square, or `None` on a full board.
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        self.best_move_scored(board).map(|(pos, _)| pos)
    }

    /// Picks the optimal square together with its depth-adjusted score.
    #[instrument(skip(self), fields(engine = %self.seats.engine()))]
    pub fn best_move_scored(&self, board: &Board) -> Option<(Position, i32)> {
        let engine = self.seats.engine();
        let mut scratch = *board;
        let mut nodes = 0u64;
        let mut alpha = i32::MIN;
        let mut best: Option<(Position, i32)> = None;

        for pos in empty_cells(board) {
            scratch.set(pos, Square::Occupied(engine));
            let score = self.minimax(&mut scratch, 1, false, alpha, i32::MAX, &mut nodes);
            scratch.set(pos, Square::Empty);
            trace!(position = %pos, score, "Scored root move");

            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
            alpha = alpha.max(score);
        }

        if let Some((pos, score)) = best {
            debug!(position = %pos, score, nodes, "Search chose move");
        }
        best
    }

    /// Scores `board` with `to_move` about to play.
    pub fn score(&self, board: &Board, to_move: Mark) -> i32 {
        let mut scratch = *board;
        let mut nodes = 0u64;
        let maximizing = to_move == self.seats.engine();
        self.minimax(&mut scratch, 0, maximizing, i32::MIN, i32::MAX, &mut nodes)
    }

    /// Place, recurse, revert. `board` is restored before every return.
    fn minimax(
        &self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        let (engine, human) = (self.seats.engine(), self.seats.human());

        if has_won(board, engine) {
            return WIN_SCORE - depth;
        }
        if has_won(board, human) {
            return depth - WIN_SCORE;
        }
        let moves = empty_cells(board);
        if moves.is_empty() || depth >= MAX_DEPTH {
            return 0;
        }

        let mover = if maximizing { engine } else { human };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in moves {
            board.set(pos, Square::Occupied(mover));
            let score = self.minimax(board, depth + 1, !maximizing, alpha, beta, nodes);
            board.set(pos, Square::Empty);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

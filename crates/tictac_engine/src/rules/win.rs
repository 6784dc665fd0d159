//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` holds all three squares of any line.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.has(*pos, mark)))
}

/// Returns the mark holding the first complete line, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}

/// The empty square of a line holding two of `mark` and one empty square.
fn open_square(board: &Board, line: &[Position; 3], mark: Mark) -> Option<Position> {
    let mut own = 0;
    let mut empty = None;
    for pos in line {
        match board.get(*pos) {
            Square::Occupied(m) if m == mark => own += 1,
            Square::Empty => empty = Some(*pos),
            Square::Occupied(_) => return None,
        }
    }
    if own == 2 { empty } else { None }
}

/// The square that completes a line for `mark` this move.
///
/// Scans [`LINES`] in declared order and returns the first hit.
pub fn completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES
        .iter()
        .find_map(|line| open_square(board, line, mark))
}

/// Number of lines one move away from completion for `mark`.
pub fn threat_count(board: &Board, mark: Mark) -> usize {
    LINES
        .iter()
        .filter(|line| open_square(board, line, mark).is_some())
        .count()
}

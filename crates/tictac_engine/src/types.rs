//! Core domain types for tic-tac-toe.

use crate::{EngineError, EngineErrorKind, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Which mark the engine plays and which the human plays.
///
/// Built from the engine's mark alone, so the two seats never share a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    engine: Mark,
    human: Mark,
}

impl Seats {
    /// Seats the engine on `mark` and the human on the other one.
    pub fn engine_plays(mark: Mark) -> Self {
        Self {
            engine: mark,
            human: mark.opponent(),
        }
    }

    /// Seats the human on `mark` and the engine on the other one.
    pub fn human_plays(mark: Mark) -> Self {
        Self::engine_plays(mark.opponent())
    }

    /// The engine's mark.
    pub fn engine(&self) -> Mark {
        self.engine
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// The mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain `Copy` value: hypothetical placements work on copies and never
/// alias the caller's board.
///
/// Serializes as a 9-element array of `"X"`, `"O"` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Mark>>", into = "Vec<Option<Mark>>")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if a square holds `mark`.
    pub fn has(&self, pos: Position, mark: Mark) -> bool {
        self.get(pos) == Square::Occupied(mark)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn move_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Places `mark` on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), EngineError> {
        if !self.is_empty(pos) {
            return Err(EngineError::new(EngineErrorKind::SquareOccupied(pos)));
        }
        self.set(pos, Square::Occupied(mark));
        Ok(())
    }

    /// Returns a copy of this board with `mark` on `pos`.
    ///
    /// Unchecked: callers only pass squares they know are empty.
    pub fn with(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.set(pos, Square::Occupied(mark));
        next
    }

    /// Overwrites a square. Used for place-and-revert on scratch copies.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses 9 cell symbols: `X`, `O`, or `.`/`-`/`_` for empty.
///
/// Whitespace and `|` separators are ignored, so `"XO. ... ..X"` and the
/// rows of [`Board::display`] with numbers swapped for dots both parse.
impl FromStr for Board {
    type Err = EngineError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match c {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                other => {
                    return Err(EngineError::invalid_board(format!(
                        "unexpected cell symbol {other:?}"
                    )));
                }
            };
            cells.push(cell);
        }
        Board::try_from(cells)
    }
}

impl TryFrom<Vec<Option<Mark>>> for Board {
    type Error = EngineError;

    fn try_from(cells: Vec<Option<Mark>>) -> Result<Self, Self::Error> {
        if cells.len() != 9 {
            return Err(EngineError::invalid_board(format!(
                "expected 9 cells, got {}",
                cells.len()
            )));
        }
        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            if let Some(mark) = cell {
                board.set(pos, Square::Occupied(mark));
            }
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Option<Mark>> {
    fn from(board: Board) -> Self {
        board.squares.iter().map(|s| s.mark()).collect()
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended in a win.
    Won(Mark),
    /// Round ended in a draw.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats_never_share_a_mark() {
        let seats = Seats::engine_plays(Mark::O);
        assert_eq!(seats.engine(), Mark::O);
        assert_eq!(seats.human(), Mark::X);
        assert_eq!(Seats::human_plays(Mark::O), Seats::engine_plays(Mark::X));
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        let err = board.place(Position::Center, Mark::O).unwrap_err();
        assert_eq!(
            err.kind(),
            &EngineErrorKind::SquareOccupied(Position::Center)
        );
        assert!(board.has(Position::Center, Mark::X));
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::TopLeft, Mark::O);
        assert!(board.is_empty(Position::TopLeft));
        assert!(next.has(Position::TopLeft, Mark::O));
        assert_eq!(next.move_count(), 1);
    }

    #[test]
    fn test_parse_accepts_separators() {
        let board: Board = "X|O|.\n.|X|.\n_|-|o".parse().unwrap();
        assert!(board.has(Position::TopLeft, Mark::X));
        assert!(board.has(Position::TopCenter, Mark::O));
        assert!(board.has(Position::Center, Mark::X));
        assert!(board.has(Position::BottomRight, Mark::O));
        assert_eq!(board.move_count(), 4);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO.".parse::<Board>().unwrap_err();
        assert!(matches!(err.kind(), EngineErrorKind::InvalidBoard(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "XO?......".parse::<Board>().unwrap_err();
        assert!(matches!(err.kind(), EngineErrorKind::InvalidBoard(_)));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|X");
    }
}

//! Strategic tier: a fixed-priority rule cascade.
//!
//! Rules fire in order and the first one that matches decides the move:
//! win, block, fork, block-fork, center, opposite corner, corner, edge.
//! The cascade is beatable on purpose; block-fork is a two-ply check over
//! forcing replies, not a search.

use super::pick;
use crate::rules::{completing_cell, empty_cells, threat_count};
use crate::{Board, Mark, Position, Seats};
use rand::Rng;
use tracing::{debug, instrument};

/// The cascade rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Rule {
    /// Complete one of our own lines.
    Win,
    /// Occupy the open square of an opponent line.
    Block,
    /// Create two open lines at once.
    Fork,
    /// Take the opponent's fork square, or force them away from one.
    BlockFork,
    /// Take the center.
    Center,
    /// Answer an opponent corner with the one diagonally across.
    OppositeCorner,
    /// Random empty corner.
    Corner,
    /// Random empty edge.
    Edge,
    /// Random empty square.
    Fallback,
}

/// First empty square (ascending) where `mark` would hold two open lines.
///
/// Open lines already on the board count toward the two.
pub fn fork_cell(board: &Board, mark: Mark) -> Option<Position> {
    empty_cells(board)
        .into_iter()
        .find(|pos| threat_count(&board.with(*pos, mark), mark) >= 2)
}

/// The block-fork rule.
///
/// Takes the opponent's fork square if they have one. Otherwise looks for
/// the first square (ascending) where our move opens a line, the opponent
/// is forced to block it, and the block leaves them without a fork.
pub fn block_fork_cell(board: &Board, seats: Seats) -> Option<Position> {
    let (me, them) = (seats.engine(), seats.human());

    if let Some(pos) = fork_cell(board, them) {
        return Some(pos);
    }

    empty_cells(board).into_iter().find(|pos| {
        let after = board.with(*pos, me);
        match completing_cell(&after, me) {
            Some(forced) => fork_cell(&after.with(forced, them), them).is_none(),
            None => false,
        }
    })
}

/// Rule-cascade player used for the strategic tier.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicPlayer {
    seats: Seats,
}

impl HeuristicPlayer {
    /// Creates a heuristic player for the given seats.
    pub fn new(seats: Seats) -> Self {
        Self { seats }
    }

    /// The rule that fires and the squares it allows.
    ///
    /// Deterministic rules return a single square; the random rules
    /// (corner, edge, fallback) return their whole pool. Returns `None` on a
    /// full board.
    #[instrument(skip(self), fields(engine = %self.seats.engine()))]
    pub fn candidates(&self, board: &Board) -> Option<(Rule, Vec<Position>)> {
        let (me, them) = (self.seats.engine(), self.seats.human());

        let forced = completing_cell(board, me)
            .map(|pos| (Rule::Win, pos))
            .or_else(|| completing_cell(board, them).map(|pos| (Rule::Block, pos)))
            .or_else(|| fork_cell(board, me).map(|pos| (Rule::Fork, pos)))
            .or_else(|| block_fork_cell(board, self.seats).map(|pos| (Rule::BlockFork, pos)))
            .or_else(|| {
                board
                    .is_empty(Position::Center)
                    .then_some((Rule::Center, Position::Center))
            })
            .or_else(|| {
                Position::CORNERS.into_iter().find_map(|corner| {
                    let across = corner.opposite_corner()?;
                    (board.has(corner, them) && board.is_empty(across))
                        .then_some((Rule::OppositeCorner, across))
                })
            });
        if let Some((rule, pos)) = forced {
            return Some((rule, vec![pos]));
        }

        let empty = empty_cells(board);
        let pools: [(Rule, &[Position]); 3] = [
            (Rule::Corner, &Position::CORNERS),
            (Rule::Edge, &Position::EDGES),
            (Rule::Fallback, &Position::ALL),
        ];
        pools.into_iter().find_map(|(rule, pool)| {
            let open: Vec<Position> = pool
                .iter()
                .copied()
                .filter(|pos| empty.contains(pos))
                .collect();
            (!open.is_empty()).then_some((rule, open))
        })
    }

    /// Picks a square and reports which rule chose it.
    pub fn decide<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<(Position, Rule)> {
        let (rule, pool) = self.candidates(board)?;
        let pos = pick(rng, &pool)?;
        debug!(%rule, position = %pos, "Cascade rule fired");
        Some((pos, rule))
    }

    /// Picks a square, or `None` on a full board.
    pub fn choose<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<Position> {
        self.decide(board, rng).map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn decide(board: &str, engine: Mark) -> (Position, Rule) {
        let board: Board = board.parse().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        HeuristicPlayer::new(Seats::engine_plays(engine))
            .decide(&board, &mut rng)
            .unwrap()
    }

    fn candidates(board: &str, engine: Mark) -> (Rule, Vec<Position>) {
        let board: Board = board.parse().unwrap();
        HeuristicPlayer::new(Seats::engine_plays(engine))
            .candidates(&board)
            .unwrap()
    }

    #[test]
    fn test_win_beats_block() {
        assert_eq!(decide("XX.OO....", Mark::O), (Position::MiddleRight, Rule::Win));
    }

    #[test]
    fn test_block_open_line() {
        assert_eq!(decide("XX.O.....", Mark::O), (Position::TopRight, Rule::Block));
    }

    #[test]
    fn test_fork_when_two_lines_open() {
        // Top-right opens both the top row and the right column.
        assert_eq!(decide("X..OOX...", Mark::X), (Position::TopRight, Rule::Fork));
    }

    #[test]
    fn test_fork_cell_counts_existing_open_lines() {
        let board: Board = "OX..O..XX".parse().unwrap();
        assert_eq!(fork_cell(&board, Mark::X), Some(Position::TopRight));
    }

    #[test]
    fn test_block_fork_takes_opponent_fork_square() {
        // X holds opposite corners around O's center and forks on 2 or 6.
        assert_eq!(decide("X...O...X", Mark::O), (Position::TopRight, Rule::BlockFork));
    }

    #[test]
    fn test_block_fork_forces_a_harmless_block() {
        // X has no fork; X at 0 threatens 8 and O's forced block leaves O no fork.
        assert_eq!(decide(".O..X....", Mark::X), (Position::TopLeft, Rule::BlockFork));
    }

    #[test]
    fn test_center_on_empty_board() {
        assert_eq!(decide(".........", Mark::X), (Position::Center, Rule::Center));
    }

    #[test]
    fn test_opposite_corner() {
        assert_eq!(
            decide("O...X....", Mark::X),
            (Position::BottomRight, Rule::OppositeCorner)
        );
        assert_eq!(
            decide("....X...O", Mark::X),
            (Position::TopLeft, Rule::OppositeCorner)
        );
    }

    #[test]
    fn test_corner_pool_after_human_takes_center() {
        let (rule, pool) = candidates("....X....", Mark::O);
        assert_eq!(rule, Rule::Corner);
        assert_eq!(pool, Position::CORNERS.to_vec());
    }

    #[test]
    fn test_corner_pool_skips_taken_corners() {
        let (rule, pool) = candidates("X...O....", Mark::X);
        assert_eq!(rule, Rule::Corner);
        assert_eq!(
            pool,
            vec![Position::TopRight, Position::BottomLeft, Position::BottomRight]
        );
    }

    #[test]
    fn test_edge_pool_when_corners_are_gone() {
        let (rule, pool) = candidates("XOX.X.OXO", Mark::O);
        assert_eq!(rule, Rule::Edge);
        assert_eq!(pool, vec![Position::MiddleLeft, Position::MiddleRight]);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let player = HeuristicPlayer::new(Seats::engine_plays(Mark::X));
        assert_eq!(player.candidates(&board), None);
    }
}

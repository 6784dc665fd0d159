//! Tests for move selection across the three tiers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_engine::{
    Board, Difficulty, EngineErrorKind, Mark, MoveSelector, Position, Seats, select_move,
};

fn select(board: &str, difficulty: Difficulty, engine: Mark, seed: u64) -> Position {
    let board: Board = board.parse().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    select_move(&board, difficulty, Seats::engine_plays(engine), &mut rng).unwrap()
}

#[test]
fn test_every_tier_returns_an_empty_square() {
    let board: Board = "XO..X..O.".parse().unwrap();
    for difficulty in [Difficulty::Casual, Difficulty::Strategic, Difficulty::Expert] {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pos = select_move(&board, difficulty, Seats::engine_plays(Mark::X), &mut rng)
                .unwrap();
            assert!(board.is_empty(pos), "{difficulty} chose occupied {pos}");
        }
    }
}

#[test]
fn test_strategic_and_expert_take_the_win() {
    for difficulty in [Difficulty::Strategic, Difficulty::Expert] {
        assert_eq!(select("OO.XX.X..", difficulty, Mark::O, 0), Position::TopRight);
    }
}

#[test]
fn test_strategic_and_expert_block() {
    for difficulty in [Difficulty::Strategic, Difficulty::Expert] {
        assert_eq!(select("XX.O.....", difficulty, Mark::O, 0), Position::TopRight);
    }
}

#[test]
fn test_own_win_outranks_block() {
    // X threatens the top row, but O completes the middle row first.
    for difficulty in [Difficulty::Strategic, Difficulty::Expert] {
        assert_eq!(select("XX.OO....", difficulty, Mark::O, 0), Position::MiddleRight);
    }
}

#[test]
fn test_strategic_answers_center_with_a_corner() {
    for seed in 0..50 {
        let pos = select("....X....", Difficulty::Strategic, Mark::O, seed);
        assert!(pos.is_corner(), "seed {seed} chose {pos}");
    }
}

#[test]
fn test_strategic_opens_in_the_center() {
    assert_eq!(select(".........", Difficulty::Strategic, Mark::X, 0), Position::Center);
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let picks = |seed| {
        let mut selector = MoveSelector::from_seed(Difficulty::Casual, Seats::engine_plays(Mark::X), seed);
        let board = Board::new();
        (0..16).map(|_| selector.select(&board).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(picks(42), picks(42));
}

#[test]
fn test_selection_does_not_mutate_the_board() {
    let board: Board = "X...O...X".parse().unwrap();
    let before = board;
    for difficulty in [Difficulty::Casual, Difficulty::Strategic, Difficulty::Expert] {
        let mut rng = StdRng::seed_from_u64(9);
        select_move(&board, difficulty, Seats::engine_plays(Mark::O), &mut rng).unwrap();
    }
    assert_eq!(board, before);
}

#[test]
fn test_no_move_on_full_board_for_every_tier() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    for difficulty in [Difficulty::Casual, Difficulty::Strategic, Difficulty::Expert] {
        let mut rng = StdRng::seed_from_u64(0);
        let err = select_move(&board, difficulty, Seats::engine_plays(Mark::X), &mut rng)
            .unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::NoMoveAvailable);
    }
}

#[test]
fn test_no_move_on_full_board_with_a_winner() {
    let board: Board = "XXXOOXXOO".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let err = select_move(&board, Difficulty::Expert, Seats::engine_plays(Mark::O), &mut rng)
        .unwrap_err();
    assert_eq!(err.kind(), &EngineErrorKind::NoMoveAvailable);
}

#[test]
fn test_board_from_json_array() {
    let board: Board =
        serde_json::from_str(r#"["X","X",null,"O","O",null,null,null,null]"#).unwrap();
    assert_eq!(board, "XX.OO....".parse().unwrap());
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#"["X","X",null,"O","O",null,null,null,null]"#);
}

#[test]
fn test_board_json_with_wrong_length_is_invalid() {
    let result: Result<Board, _> = serde_json::from_str(r#"["X",null,"O"]"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid board"), "{err}");
}

#[test]
fn test_board_json_with_unknown_mark_is_rejected() {
    let result: Result<Board, _> =
        serde_json::from_str(r#"["X","Z",null,null,null,null,null,null,null]"#);
    assert!(result.is_err());
}

#[test]
fn test_difficulty_deserializes_from_config_names() {
    let tiers: Vec<Difficulty> = serde_json::from_str(r#"["casual","medium","hard"]"#).unwrap();
    assert_eq!(
        tiers,
        vec![Difficulty::Casual, Difficulty::Strategic, Difficulty::Expert]
    );
}

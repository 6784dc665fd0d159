//! Scripted terminal sessions against a seeded engine.

use std::io::Cursor;
use std::time::Duration;
use tictac::{PlaySession, Scoreboard};
use tictac_engine::{Difficulty, Mark, MoveSelector, Seats};

fn run(script: &str, difficulty: Difficulty, human: Mark) -> (Scoreboard, String) {
    let selector = MoveSelector::from_seed(difficulty, Seats::human_plays(human), 17);
    let mut session = PlaySession::new(selector, Duration::ZERO);
    let mut out = Vec::new();
    let score = session.run(Cursor::new(script), &mut out).unwrap();
    (score, String::from_utf8(out).unwrap())
}

#[test]
fn test_expert_punishes_a_blunder() {
    // X: 1, 2, 4. Expert O answers center, blocks at 3, then wins on 7.
    let (score, out) = run("1\n2\n4\nquit\n", Difficulty::Expert, Mark::X);
    assert!(out.contains("Computer plays Center"), "{out}");
    assert!(out.contains("Computer plays Top-right"), "{out}");
    assert!(out.contains("Computer plays Bottom-left"), "{out}");
    assert!(out.contains("Computer wins."), "{out}");
    assert_eq!(
        score,
        Scoreboard {
            human_wins: 0,
            engine_wins: 1,
            draws: 0
        }
    );
    assert!(out.contains("Final score: You 0 - 1 Computer (0 drawn)"), "{out}");
}

#[test]
fn test_bad_input_is_reported_and_ignored() {
    let (score, out) = run(
        "5\n5\nfoo\ndifficulty casual\nscore\nquit\n",
        Difficulty::Expert,
        Mark::X,
    );
    assert!(out.contains("Computer plays Top-left"), "{out}");
    assert!(out.contains("Center is taken"), "{out}");
    assert!(out.contains("Unrecognized input 'foo'"), "{out}");
    assert!(out.contains("Difficulty set to Casual"), "{out}");
    assert_eq!(score.rounds(), 0);
}

#[test]
fn test_engine_opens_when_human_plays_o() {
    let (_, out) = run("", Difficulty::Expert, Mark::O);
    assert!(out.contains("you are O, computer is X (Expert)"), "{out}");
    assert!(out.contains("Computer plays Top-left"), "{out}");
    assert!(out.contains("Final score"), "{out}");
}

#[test]
fn test_mark_switch_applies_from_next_round() {
    let (_, out) = run("mark o\nnew\nquit\n", Difficulty::Expert, Mark::X);
    assert!(out.contains("You will play O from the next round"), "{out}");
    let switched = out.find("you are O").expect("new round announced with O");
    let opened = out.find("Computer plays Top-left").expect("engine opened as X");
    assert!(opened > switched);
}

#[test]
fn test_help_lists_commands() {
    let (_, out) = run("help\n", Difficulty::Casual, Mark::X);
    assert!(out.contains("difficulty <tier>"), "{out}");
}

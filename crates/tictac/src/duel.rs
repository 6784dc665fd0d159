//! Engine-versus-engine rounds.

use crate::session::Round;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tictac_engine::{Difficulty, GameStatus, Mark, Seats, select_move};
use tracing::{debug, info, instrument};

/// Outcome counts for a duel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}  O wins: {}  draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `rounds` rounds of `x` against `o` with one shared seeded source.
///
/// # Errors
///
/// Propagates any engine or round error; neither occurs while both sides
/// only move on boards with empty squares.
#[instrument]
pub fn run_duel(x: Difficulty, o: Difficulty, rounds: u32, seed: u64) -> anyhow::Result<Tally> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tally = Tally::default();

    for n in 0..rounds {
        let mut round = Round::new();
        while round.in_progress() {
            let mark = round.to_move();
            let difficulty = match mark {
                Mark::X => x,
                Mark::O => o,
            };
            let pos = select_move(round.board(), difficulty, Seats::engine_plays(mark), &mut rng)?;
            round.play(mark, pos)?;
        }

        match round.status() {
            GameStatus::Won(Mark::X) => tally.x_wins += 1,
            GameStatus::Won(Mark::O) => tally.o_wins += 1,
            GameStatus::Draw => tally.draws += 1,
            GameStatus::InProgress => unreachable!("loop exits only when the round ends"),
        }
        debug!(round = n, status = ?round.status(), moves = round.history().len(), "Duel round finished");
    }

    info!(%tally, "Duel finished");
    Ok(tally)
}

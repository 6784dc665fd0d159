//! Interactive terminal play against the engine.

use crate::config::GameConfig;
use crate::session::{Round, Scoreboard};
use derive_more::Display;
use rand::Rng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Duration;
use tictac_engine::{Difficulty, GameStatus, Mark, MoveSelector, Position, Seats};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  1-9 or a square name   place your mark (e.g. 5, center, top-left)
  difficulty <tier>      casual, strategic or expert (applies to the next computer move)
  mark <X|O>             switch sides from the next round
  score                  show the tally
  new                    abandon this round and start another
  quit                   leave";

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the player's mark.
    Move(Position),
    /// Change the opponent's strength.
    Difficulty(Difficulty),
    /// Switch sides from the next round.
    Mark(Mark),
    /// Show the tally.
    Score,
    /// Abandon the current round.
    New,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was entered.
    #[display("Enter a square (1-9) or 'help'")]
    Empty,
    /// A command argument was missing or wrong.
    #[display("Usage: {}", _0)]
    Usage(&'static str),
    /// The line matched no command or square.
    #[display("Unrecognized input '{}' (try 'help')", _0)]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(InputError::Empty),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            "help" | "?" => Ok(Input::Help),
            "score" => Ok(Input::Score),
            "new" => Ok(Input::New),
            "difficulty" | "level" => rest
                .parse()
                .map(Input::Difficulty)
                .map_err(|_| InputError::Usage("difficulty <casual|strategic|expert>")),
            "mark" => rest
                .parse()
                .map(Input::Mark)
                .map_err(|_| InputError::Usage("mark <X|O>")),
            _ => Position::from_label_or_number(line)
                .map(Input::Move)
                .ok_or_else(|| InputError::Unrecognized(line.to_string())),
        }
    }
}

/// A play session: the current round, the tally and the engine.
pub struct PlaySession<R = StdRng> {
    selector: MoveSelector<R>,
    round: Round,
    score: Scoreboard,
    next_human_mark: Option<Mark>,
    think_delay: Duration,
}

impl PlaySession<StdRng> {
    /// Builds a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let seats = Seats::human_plays(*config.human_mark());
        let selector = match config.seed() {
            Some(seed) => MoveSelector::from_seed(*config.difficulty(), seats, *seed),
            None => MoveSelector::from_os_rng(*config.difficulty(), seats),
        };
        Self::new(selector, Duration::from_millis(*config.think_delay_ms()))
    }
}

impl<R: Rng> PlaySession<R> {
    /// Creates a session around an existing selector.
    pub fn new(selector: MoveSelector<R>, think_delay: Duration) -> Self {
        Self {
            selector,
            round: Round::new(),
            score: Scoreboard::default(),
            next_human_mark: None,
            think_delay,
        }
    }

    /// The tally so far.
    pub fn score(&self) -> Scoreboard {
        self.score
    }

    /// Runs until `quit` or end of input and returns the final tally.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from `input`/`out`, or an engine error if the
    /// engine is asked to move on a finished board.
    #[instrument(skip_all)]
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, out: &mut O) -> anyhow::Result<Scoreboard> {
        writeln!(out, "Tic-tac-toe. Type 'help' for commands.")?;
        self.announce_round(out)?;

        loop {
            if !self.round.in_progress() {
                self.finish_round(out)?;
                self.start_round(out)?;
                continue;
            }

            if self.round.to_move() == self.selector.seats().engine() {
                self.engine_turn(out)?;
                continue;
            }

            writeln!(out, "\n{}\n", self.round.board().display())?;
            write!(out, "Your move ({}): ", self.selector.seats().human())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(cmd) => self.handle(cmd, out)?,
                Err(e) => writeln!(out, "{e}")?,
            }
        }

        writeln!(out, "\nFinal score: {}", self.score)?;
        Ok(self.score)
    }

    fn handle<O: Write>(&mut self, cmd: Input, out: &mut O) -> anyhow::Result<()> {
        match cmd {
            Input::Move(pos) => {
                let mark = self.selector.seats().human();
                if let Err(e) = self.round.play(mark, pos) {
                    warn!(error = %e, "Rejected player move");
                    writeln!(out, "{pos} is taken, pick another square")?;
                }
            }
            Input::Difficulty(difficulty) => {
                self.selector.set_difficulty(difficulty);
                writeln!(out, "Difficulty set to {}", difficulty.label())?;
            }
            Input::Mark(mark) => {
                self.next_human_mark = Some(mark);
                writeln!(out, "You will play {mark} from the next round")?;
            }
            Input::Score => writeln!(out, "{}", self.score)?,
            Input::New => {
                info!("Round abandoned");
                self.start_round(out)?;
            }
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn engine_turn<O: Write>(&mut self, out: &mut O) -> anyhow::Result<()> {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        let pos = self.selector.select(self.round.board())?;
        let mark = self.selector.seats().engine();
        self.round.play(mark, pos)?;
        writeln!(out, "Computer plays {pos}")?;
        Ok(())
    }

    fn finish_round<O: Write>(&mut self, out: &mut O) -> anyhow::Result<()> {
        let status = self.round.status();
        let seats = self.selector.seats();
        self.score.record(status, seats);

        writeln!(out, "\n{}\n", self.round.board().display())?;
        match status {
            GameStatus::Won(mark) if mark == seats.human() => writeln!(out, "You win!")?,
            GameStatus::Won(_) => writeln!(out, "Computer wins.")?,
            GameStatus::Draw => writeln!(out, "Draw.")?,
            GameStatus::InProgress => {}
        }
        writeln!(out, "{}", self.score)?;
        Ok(())
    }

    fn start_round<O: Write>(&mut self, out: &mut O) -> anyhow::Result<()> {
        if let Some(mark) = self.next_human_mark.take() {
            self.selector.set_seats(Seats::human_plays(mark));
        }
        self.round = Round::new();
        self.announce_round(out)
    }

    fn announce_round<O: Write>(&self, out: &mut O) -> anyhow::Result<()> {
        let seats = self.selector.seats();
        writeln!(
            out,
            "\nNew round: you are {}, computer is {} ({}). X moves first.",
            seats.human(),
            seats.engine(),
            self.selector.difficulty().label()
        )?;
        Ok(())
    }
}

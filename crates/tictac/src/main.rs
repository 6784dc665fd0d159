//! Tictac - play tic-tac-toe against the computer.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictac::{Cli, Command, GameConfig, PlaySession, run_duel};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            mark,
            seed,
            think_ms,
        } => {
            let config = GameConfig::load_or_default(&config)?
                .with_overrides(difficulty, mark, seed, think_ms);
            run_play(config)
        }
        Command::Duel { x, o, rounds, seed } => {
            let tally = run_duel(x, o, rounds, seed)?;
            println!("{} (X) vs {} (O), {} rounds", x.label(), o.label(), rounds);
            println!("{tally}");
            Ok(())
        }
    }
}

/// Run the interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!(?config, "Starting play session");
    let mut session = PlaySession::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let score = session.run(stdin.lock(), &mut stdout)?;
    info!(rounds = score.rounds(), "Play session ended");
    Ok(())
}

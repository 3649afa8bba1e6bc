//! chess-play - play a game of chess at the terminal.
//!
//! Both sides are entered on standard input in coordinate notation. The
//! board, the status line and the captured pieces are printed after every
//! move.

mod command;
mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess_engine::Game;
use clap::Parser;
use command::Command;
use config::PlayConfig;
use tracing_subscriber::EnvFilter;

/// Play chess at the terminal.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play a game of chess at the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this position instead of the standard one
    #[arg(long)]
    fen: Option<String>,

    /// Write the move history as JSON to this file on exit
    #[arg(long)]
    json_history: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(PlayConfig::default_path);
    let config = PlayConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut game = match args.fen.as_deref().or(config.start_fen.as_deref()) {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("invalid start position '{}'", fen))?,
        None => Game::new(),
    };
    tracing::info!(fen = %game.to_fen(), "session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::position(&mut out, &game, config.show_board)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("{}", e);
                continue;
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => break,
            Command::Board => writeln!(out, "{}", game.board())?,
            Command::History => render::history(&mut out, game.history())?,
            Command::Moves(sq) => render::destinations(&mut out, game.legal_moves(sq))?,
            Command::Reset => {
                game.reset();
                tracing::info!("game reset");
                render::position(&mut out, &game, config.show_board)?;
            }
            Command::Play(mv) => match game.play_uci(&mv) {
                Ok(record) => {
                    tracing::debug!(from = %record.from, to = %record.to, "move applied");
                    tracing::info!("{}", record.notation);
                    render::position(&mut out, &game, config.show_board)?;
                    if let Some(result) = game.result() {
                        tracing::info!(?result, "game over");
                    }
                }
                Err(e) => tracing::warn!("{}: {}", mv, e),
            },
        }
        out.flush()?;
    }

    if let Some(path) = args.json_history {
        let json = serde_json::to_string_pretty(game.history())?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("history written to {}", path.display());
    }

    Ok(())
}

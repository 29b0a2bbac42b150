//! Two-player chess in the terminal.
//!
//! Both players enter moves in coordinate notation (`e2e4`, `e7e8q`) on the
//! same terminal. Diagnostics go to stderr.

mod config;
mod session;
mod view;

use anyhow::Context;
use chess_engine::Game;
use clap::Parser;
use config::Config;
use session::Session;
use std::io;
use std::path::PathBuf;

/// Two-player chess in the terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play chess against another person in the terminal")]
struct Args {
    /// Path to a TOML config file (defaults to chess.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Diagnostic level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args.fen, args.log_level);

    tracing_subscriber::fmt()
        .with_max_level(config.level_filter()?)
        .with_writer(io::stderr)
        .init();

    let mut game = match &config.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("Invalid FEN: {fen}"))?,
        None => Game::new(),
    };
    tracing::info!(fen = ?config.fen, "Starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = Session::new(stdin.lock(), stdout.lock()).run(&mut game)?;
    tracing::info!(?end, "Session ended");
    Ok(())
}

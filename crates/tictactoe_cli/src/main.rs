//! Tic-tac-toe terminal front end.
//!
//! A thin presentation layer over `tictactoe_engine`: it forwards cell
//! indices to the engine and renders the state it gets back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{CliConfig, OutputFormat};
use tictactoe_engine::{BoardView, replay, try_replay};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,tictactoe_engine=info";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(&config);

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay {
            moves,
            format,
            strict,
        } => run_replay(&config, &moves, format.unwrap_or(*config.format()), strict),
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the config filter.
fn init_tracing(config: &CliConfig) {
    let fallback = config
        .log_filter()
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: &CliConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin();
    let summary = session::run(stdin.lock(), std::io::stdout(), &config.view_config())?;
    info!(?summary, "Session ended");
    Ok(())
}

/// Replay a move list and print the final state
#[instrument(skip(config))]
fn run_replay(
    config: &CliConfig,
    moves: &[usize],
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    let state = if strict {
        try_replay(moves)?
    } else {
        let state = replay(moves.iter().copied());
        let ignored = moves.len() - state.move_count();
        if ignored > 0 {
            warn!(ignored, "Illegal moves were skipped");
        }
        state
    };

    let view_config = config.view_config();
    let view = BoardView::from_state(&state, &view_config);
    match format {
        OutputFormat::Text => print!("{}", render::render_text(&view, &view_config)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view).context("Failed to serialize board")?;
            println!("{json}");
        }
    }
    Ok(())
}

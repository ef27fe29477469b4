//! Command-line interface for the tic-tac-toe terminal front end.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or replay tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading moves from stdin
    Play,

    /// Apply a move list from the initial state and print the result
    Replay {
        /// Comma-separated cell indices (0-8), e.g. 0,3,1,4,2
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Fail on the first illegal move instead of skipping it
        #[arg(long)]
        strict: bool,
    },
}

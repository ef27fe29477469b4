//! Interactive play loop.
//!
//! Reads one command per line, forwards cell indices to the engine and
//! re-renders after every accepted move. The loop owns the single
//! [`Game`] for the session.

use crate::render::render_text;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{BoardView, Game, GameResult, GameState, Position, ViewConfig};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Enter a cell index (0-8) or label (e.g. center, top-left).\n\
Commands: reset, help, quit";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at this cell index (may be out of range).
    Place(usize),
    /// Start a new game.
    Reset,
    /// Show usage.
    Help,
    /// Leave the session.
    Quit,
}

/// Error for input that is neither a command nor a cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unrecognized input: {input:?}")]
pub struct InputError {
    /// The offending line, trimmed.
    pub input: String,
}

impl Input {
    /// Parses a line of user input.
    ///
    /// Numbers are passed through unchecked so the engine decides whether
    /// they are in range.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "reset" | "r" | "new" => return Ok(Input::Reset),
            "help" | "h" | "?" => return Ok(Input::Help),
            "quit" | "q" | "exit" => return Ok(Input::Quit),
            _ => {}
        }
        if let Ok(index) = trimmed.parse::<usize>() {
            return Ok(Input::Place(index));
        }
        Position::from_label_or_number(trimmed)
            .map(|pos| Input::Place(pos.to_index()))
            .ok_or_else(|| InputError {
                input: trimmed.to_string(),
            })
    }
}

/// Tally of finished games in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Tied games.
    pub ties: usize,
}

impl SessionSummary {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::XWins => self.x_wins += 1,
            GameResult::OWins => self.o_wins += 1,
            GameResult::Tie => self.ties += 1,
            GameResult::None => {}
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &ViewConfig,
) -> Result<SessionSummary> {
    let mut game = Game::new();
    let mut summary = SessionSummary::default();

    writeln!(output, "{HELP}\n")?;
    render(&mut output, &game, config)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match Input::parse(&line) {
            Ok(Input::Place(index)) => match game
                .play(index)
                .map(|state| (state.is_finished(), state.result()))
            {
                Ok((finished, result)) => {
                    render(&mut output, &game, config)?;
                    if finished {
                        summary.record(result);
                        info!(?result, "Game finished");
                        writeln!(output, "Type 'reset' to play again.")?;
                    }
                }
                Err(e) => {
                    warn!(index, error = %e, "Move rejected");
                    writeln!(output, "{e}")?;
                }
            },
            Ok(Input::Reset) => {
                debug!("Reset requested");
                game.reset();
                render(&mut output, &game, config)?;
            }
            Ok(Input::Help) => {
                writeln!(output, "{HELP}")?;
                writeln!(output, "{}", open_cells(game.state()))?;
            }
            Ok(Input::Quit) => break,
            Err(e) => writeln!(output, "{e}. Type 'help' for usage.")?,
        }
    }

    writeln!(
        output,
        "Session over. X wins: {}, O wins: {}, ties: {}",
        summary.x_wins, summary.o_wins, summary.ties
    )?;
    Ok(summary)
}

/// Lists the cells still accepting a mark.
fn open_cells(state: &GameState) -> String {
    if state.is_finished() {
        return "No open cells. Type 'reset' to play again.".to_string();
    }
    let cells: Vec<String> = Position::valid_moves(state.board())
        .iter()
        .map(|pos| format!("{} ({})", pos.to_index(), pos.label()))
        .collect();
    format!("Open cells: {}", cells.join(", "))
}

fn render<W: Write>(output: &mut W, game: &Game, config: &ViewConfig) -> Result<()> {
    let view = BoardView::from_state(game.state(), config);
    write!(output, "{}", render_text(&view, config))?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let config = ViewConfig {
            decorations: false,
            ..ViewConfig::default()
        };
        let summary = run(Cursor::new(script), &mut out, &config).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("4"), Ok(Input::Place(4)));
        assert_eq!(Input::parse(" 12 "), Ok(Input::Place(12)));
        assert_eq!(Input::parse("center"), Ok(Input::Place(4)));
        assert_eq!(Input::parse("Bottom Right"), Ok(Input::Place(8)));
        assert_eq!(Input::parse("RESET"), Ok(Input::Reset));
        assert_eq!(Input::parse("q"), Ok(Input::Quit));
        assert_eq!(Input::parse("?"), Ok(Input::Help));
        assert!(Input::parse("somewhere").is_err());
    }

    #[test]
    fn test_winning_session() {
        let (summary, out) = play("0\n3\n1\n4\n2\nquit\n");
        assert_eq!(summary.o_wins, 1);
        assert!(out.contains("Player O wins!"));
        assert!(out.contains("Type 'reset' to play again."));
        assert!(out.ends_with("Session over. X wins: 0, O wins: 1, ties: 0\n"));
    }

    #[test]
    fn test_rejected_moves_are_reported() {
        let (_, out) = play("0\n0\n9\nnowhere\n");
        assert!(out.contains("Square Top-left is already occupied"));
        assert!(out.contains("Cell index 9 is out of range (must be 0-8)"));
        assert!(out.contains("Unrecognized input: \"nowhere\". Type 'help' for usage."));
    }

    #[test]
    fn test_moves_after_finish_are_rejected_until_reset() {
        let (summary, out) = play("0\n3\n1\n4\n2\n5\nreset\n5\n");
        assert_eq!(summary.o_wins, 1);
        assert!(out.contains("Game is already over"));
        // After reset, O moves first again.
        assert!(out.contains(" 3 | 4 | O \n"));
    }

    #[test]
    fn test_help_lists_open_cells() {
        let (_, out) = play("4\n0\nhelp\n");
        assert!(out.contains(
            "Open cells: 1 (Top-center), 2 (Top-right), 3 (Middle-left), 5 (Middle-right), \
             6 (Bottom-left), 7 (Bottom-center), 8 (Bottom-right)\n"
        ));

        let (_, out) = play("0\n3\n1\n4\n2\n?\n");
        assert!(out.contains("No open cells. Type 'reset' to play again.\n"));
    }

    #[test]
    fn test_tie_session_counts_ties() {
        let (summary, out) = play("1\n0\n2\n4\n3\n5\n7\n6\n8\n");
        assert_eq!(summary.ties, 1);
        assert!(out.contains("It's a tie!"));
    }
}

//! Render-ready snapshot of a game state.
//!
//! A presentation layer (terminal, browser, anything else) renders a
//! [`BoardView`] without re-deriving game logic: each cell already knows
//! its mark, whether it belongs to the winning line and whether it accepts
//! input, and the status strings are precomputed.

use super::{GameResult, GameState, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// Presentation options with defaulted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Append celebratory emoji to end-of-game messages.
    pub decorations: bool,
    /// Show cell indices in empty squares when rendering as text.
    pub show_indices: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            decorations: true,
            show_indices: true,
        }
    }
}

/// One cell of the board as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Named position of the cell.
    pub position: Position,
    /// Row-major index, 0-8.
    pub index: usize,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// Mark in the cell, if any.
    pub mark: Option<Player>,
    /// Whether the cell belongs to the winning line.
    pub is_winning: bool,
    /// Whether the cell rejects input (occupied, or game finished).
    pub disabled: bool,
    /// Whether the game is finished.
    pub game_finished: bool,
}

impl CellView {
    /// `row R, column C`, one-based.
    pub fn position_description(&self) -> String {
        format!("row {}, column {}", self.row + 1, self.col + 1)
    }

    /// Screen-reader label for the cell.
    pub fn description(&self) -> String {
        let position = self.position_description();
        let winning = if self.is_winning {
            " (part of winning combination)"
        } else {
            ""
        };
        match (self.game_finished, self.mark) {
            (true, Some(player)) => {
                format!("Game finished. {position} contains {player}{winning}")
            }
            (true, None) => format!("Game finished. {position} contains nothing"),
            (false, Some(player)) => {
                format!("Block {} at {position} contains {player}", self.index + 1)
            }
            (false, None) => format!(
                "Empty block {} at {position}. Click to place your mark.",
                self.index + 1
            ),
        }
    }
}

/// Snapshot of a whole game for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// The 9 cells in index order.
    pub cells: [CellView; 9],
    /// Whether the game is still accepting moves.
    pub status: GameStatus,
    /// Result once finished.
    pub result: GameResult,
    /// Player to move while playing.
    pub current_player: Option<Player>,
    /// Headline status message.
    pub message: String,
    /// Longer status text for assistive technology.
    pub detailed_status: String,
    /// Number of marks placed.
    pub move_count: usize,
}

impl BoardView {
    /// Builds the snapshot for `state`.
    pub fn from_state(state: &GameState, config: &ViewConfig) -> Self {
        let finished = state.is_finished();
        let cells = Position::ALL.map(|position| {
            let mark = state.board().get(position).player();
            CellView {
                position,
                index: position.to_index(),
                row: position.row(),
                col: position.col(),
                mark,
                is_winning: state.is_winning_cell(position),
                disabled: finished || mark.is_some(),
                game_finished: finished,
            }
        });

        Self {
            cells,
            status: state.status(),
            result: state.result(),
            current_player: (!finished).then_some(state.current_player()),
            message: message(state, config),
            detailed_status: detailed_status(state),
            move_count: state.move_count(),
        }
    }

    /// Cells in the given zero-based row.
    pub fn row(&self, row: usize) -> &[CellView] {
        &self.cells[row * 3..row * 3 + 3]
    }

    /// Positions of the winning line in board order, or empty.
    pub fn winning_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.is_winning)
            .map(|c| c.position)
            .collect()
    }
}

/// Headline message: whose turn it is, or how the game ended.
pub fn message(state: &GameState, config: &ViewConfig) -> String {
    let (text, emoji) = match state.result() {
        GameResult::None => return format!("Player {}'s turn", state.current_player()),
        GameResult::XWins => ("Player X wins!", " 🎉"),
        GameResult::OWins => ("Player O wins!", " 🎉"),
        GameResult::Tie => ("It's a tie!", " 🤝"),
    };
    if config.decorations {
        format!("{text}{emoji}")
    } else {
        text.to_string()
    }
}

/// Detailed status text suitable for a live region.
pub fn detailed_status(state: &GameState) -> String {
    let filled = state.board().occupied_count();
    let result = state.result();
    match (result, result.winner()) {
        (_, Some(winner)) => format!(
            "Game won by player {winner} after {} moves.",
            state.move_count()
        ),
        (GameResult::Tie, None) => format!(
            "Game ended in a tie after {} moves. All 9 squares are filled.",
            state.move_count()
        ),
        _ => format!(
            "Game in progress. {filled} squares filled, {} squares remaining. Current player: {}.",
            9 - filled,
            state.current_player()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, replay};

    #[test]
    fn test_initial_view() {
        let view = BoardView::from_state(&GameState::new(), &ViewConfig::default());
        assert_eq!(view.message, "Player O's turn");
        assert_eq!(view.current_player, Some(Player::O));
        assert_eq!(
            view.detailed_status,
            "Game in progress. 0 squares filled, 9 squares remaining. Current player: O."
        );
        assert!(view.cells.iter().all(|c| !c.disabled && c.mark.is_none()));
    }

    #[test]
    fn test_occupied_cell_disabled() {
        let state = apply_move(GameState::new(), 4);
        let view = BoardView::from_state(&state, &ViewConfig::default());
        assert!(view.cells[4].disabled);
        assert_eq!(view.cells[4].mark, Some(Player::O));
        assert!(!view.cells[0].disabled);
        assert_eq!(view.message, "Player X's turn");
    }

    #[test]
    fn test_win_view() {
        let state = replay([0, 3, 1, 4, 2]);
        let view = BoardView::from_state(&state, &ViewConfig::default());
        assert_eq!(view.message, "Player O wins! 🎉");
        assert_eq!(view.current_player, None);
        assert_eq!(
            view.winning_positions(),
            vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert!(view.cells.iter().all(|c| c.disabled));
        assert_eq!(view.detailed_status, "Game won by player O after 5 moves.");
    }

    #[test]
    fn test_detailed_status_names_winner_from_result() {
        let mut state = replay([0, 3, 1, 4, 8, 5]);
        assert_eq!(state.result(), GameResult::XWins);
        state.current_player = Player::O;
        assert_eq!(detailed_status(&state), "Game won by player X after 6 moves.");
    }

    #[test]
    fn test_tie_view_without_decorations() {
        let state = replay([1, 0, 2, 4, 3, 5, 7, 6, 8]);
        let config = ViewConfig {
            decorations: false,
            ..ViewConfig::default()
        };
        let view = BoardView::from_state(&state, &config);
        assert_eq!(view.message, "It's a tie!");
        assert!(view.winning_positions().is_empty());
        assert_eq!(
            view.detailed_status,
            "Game ended in a tie after 9 moves. All 9 squares are filled."
        );
    }

    #[test]
    fn test_cell_descriptions() {
        let state = apply_move(GameState::new(), 4);
        let view = BoardView::from_state(&state, &ViewConfig::default());
        assert_eq!(
            view.cells[0].description(),
            "Empty block 1 at row 1, column 1. Click to place your mark."
        );
        assert_eq!(view.cells[4].description(), "Block 5 at row 2, column 2 contains O");

        let finished = replay([0, 3, 1, 4, 2]);
        let view = BoardView::from_state(&finished, &ViewConfig::default());
        assert_eq!(
            view.cells[8].description(),
            "Game finished. row 3, column 3 contains nothing"
        );
        assert_eq!(
            view.cells[0].description(),
            "Game finished. row 1, column 1 contains O (part of winning combination)"
        );
        assert_eq!(
            view.cells[3].description(),
            "Game finished. row 2, column 1 contains X"
        );
    }

    #[test]
    fn test_row_slices() {
        let view = BoardView::from_state(&GameState::new(), &ViewConfig::default());
        let middle: Vec<_> = view.row(1).iter().map(|c| c.index).collect();
        assert_eq!(middle, vec![3, 4, 5]);
    }
}

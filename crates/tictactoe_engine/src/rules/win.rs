//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type WinningLine = [Position; 3];

/// The 8 canonical winning combinations, in evaluation order.
pub const WINNING_COMBINATIONS: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of [`check_win`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinCheck {
    line: Option<WinningLine>,
}

impl WinCheck {
    /// A check that found no winning line.
    pub const NONE: WinCheck = WinCheck { line: None };

    /// Returns true if a line was completed.
    pub fn won(&self) -> bool {
        self.line.is_some()
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<WinningLine> {
        self.line
    }
}

/// Checks whether placing at `last_index` completed a line for `player`.
///
/// Only combinations containing `last_index` are examined: a line can only
/// be completed by the cell just played, and `board` must already hold that
/// placement. A line wins when all three cells hold `player`'s mark, so an
/// empty line never matches. The first match in [`WINNING_COMBINATIONS`]
/// order is returned.
#[instrument(skip(board))]
pub fn check_win(board: &Board, last_index: usize, player: Player) -> WinCheck {
    let Some(last) = Position::from_index(last_index) else {
        return WinCheck::NONE;
    };
    let mark = Square::Occupied(player);

    let line = WINNING_COMBINATIONS
        .iter()
        .filter(|line| line.contains(&last))
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied();

    WinCheck { line }
}

/// Scans every combination for a completed line, regardless of the last move.
///
/// Used for auditing states rather than for move evaluation.
pub fn find_completed_line(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_COMBINATIONS.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        let mark = Square::Occupied(player);
        (board.get(b) == mark && board.get(c) == mark).then_some((player, [a, b, c]))
    })
}

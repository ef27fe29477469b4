//! Move count invariant: the counter matches the marks on the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: `move_count` equals the number of occupied squares.
///
/// Every accepted move places exactly one mark, and rejected moves place
/// none, so the counter can never drift from the board.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.move_count() == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count matches number of occupied squares"
    }
}

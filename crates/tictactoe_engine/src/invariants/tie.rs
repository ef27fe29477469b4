//! Tie invariant: a tie is a full board with no completed line.

use super::super::{GameState, check_tie, find_completed_line};
use super::Invariant;

/// Invariant: `result = Tie` implies every square is occupied and no
/// winning combination is satisfied.
pub struct TieInvariant;

impl Invariant<GameState> for TieInvariant {
    fn holds(state: &GameState) -> bool {
        if !state.result().is_tie() {
            return true;
        }
        check_tie(state.board()) && find_completed_line(state.board()).is_none()
    }

    fn description() -> &'static str {
        "Tie only on a full board without a completed line"
    }
}

//! Winning line invariant: a win names a real, fully-marked line.

use super::super::{GameState, Square, WINNING_COMBINATIONS};
use super::Invariant;

/// Invariant: a win result carries one of the 8 canonical combinations, all
/// three cells of which hold the winner's mark; any other result carries no
/// line at all.
pub struct WinningLineInvariant;

impl Invariant<GameState> for WinningLineInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.result().winner(), state.winning_line()) {
            (Some(winner), Some(line)) => {
                WINNING_COMBINATIONS.contains(&line)
                    && line
                        .iter()
                        .all(|&pos| state.board().get(pos) == Square::Occupied(winner))
            }
            (None, None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winning line is a canonical combination held by the winner"
    }
}

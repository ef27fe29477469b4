//! Status/result agreement: a result exists exactly when the game is finished.

use super::super::{GameResult, GameState, GameStatus, find_completed_line};
use super::Invariant;

/// Invariant: `Playing` carries no result, no winning line and no completed
/// line on the board; `Finished` always carries a result.
pub struct StatusResultInvariant;

impl Invariant<GameState> for StatusResultInvariant {
    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::Playing => {
                state.result() == GameResult::None
                    && state.winning_line().is_none()
                    && find_completed_line(state.board()).is_none()
            }
            GameStatus::Finished => state.result() != GameResult::None,
        }
    }

    fn description() -> &'static str {
        "Playing games have no result or completed line; finished games always have a result"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square, WINNING_COMBINATIONS, replay};

    #[test]
    fn test_playing_and_finished_hold() {
        assert!(StatusResultInvariant::holds(&GameState::new()));
        assert!(StatusResultInvariant::holds(&replay([0, 3, 1, 4, 2])));
    }

    #[test]
    fn test_playing_with_line_violates() {
        let mut state = GameState::new();
        state.winning_line = Some(WINNING_COMBINATIONS[0]);
        assert!(!StatusResultInvariant::holds(&state));
    }

    #[test]
    fn test_playing_with_completed_line_on_board_violates() {
        let mut state = replay([0, 3, 1, 4]);
        state.board.set(Position::TopRight, Square::Occupied(Player::O));
        state.move_count = 5;
        assert!(!StatusResultInvariant::holds(&state));
    }

    #[test]
    fn test_finished_without_result_violates() {
        let mut state = GameState::new();
        state.status = GameStatus::Finished;
        assert!(!StatusResultInvariant::holds(&state));
    }
}

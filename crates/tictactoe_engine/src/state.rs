//! The canonical game state record.

use super::invariants::{GameInvariants, InvariantSet, InvariantViolation, describe_violations};
use super::rules::WinningLine;
use super::types::{Board, GameResult, GameStatus, Player};
use super::Position;
use serde::{Deserialize, Serialize};

/// Player who moves first in a fresh game.
pub const FIRST_PLAYER: Player = Player::O;

/// Complete game state.
///
/// States are plain values: the engine takes a state and returns the next
/// one. Fields are private so only engine transitions can produce them;
/// deserialized states are checked against [`GameInvariants`] and rejected
/// with [`InvalidState`] if any fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) result: GameResult,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) move_count: usize,
}

impl GameState {
    /// Creates the initial state: empty board, O to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: FIRST_PLAYER,
            status: GameStatus::Playing,
            result: GameResult::None,
            winning_line: None,
            move_count: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is; after a win, the player who won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the game result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// The completed line when the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns true once the game is won or tied.
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Returns true if `pos` belongs to the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of [`GameState`] before validation.
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    result: GameResult,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

/// A deserialized state that no sequence of moves could reach.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game state: {}", describe_violations(violations))]
pub struct InvalidState {
    /// Every invariant the state breaks.
    pub violations: Vec<InvariantViolation>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            current_player: raw.current_player,
            status: raw.status,
            result: raw.result,
            winning_line: raw.winning_line,
            move_count: raw.move_count,
        };
        GameInvariants::check_all(&state).map_err(|violations| InvalidState { violations })?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay;

    #[test]
    fn test_deserialize_accepts_reachable_state() {
        let state = replay([0, 3, 1, 4, 2]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), state);
    }

    #[test]
    fn test_deserialize_rejects_inflated_move_count() {
        let mut value = serde_json::to_value(GameState::new()).unwrap();
        value["move_count"] = serde_json::json!(3);
        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("Invalid game state"));
        assert!(err.to_string().contains("Move count"));
    }

    #[test]
    fn test_deserialize_rejects_max_move_count() {
        let mut value = serde_json::to_value(GameState::new()).unwrap();
        value["move_count"] = serde_json::json!(usize::MAX);
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_playing_state_with_completed_line() {
        // O holds the top row but the game was never finished.
        let mut value = serde_json::to_value(replay([0, 3, 1, 4])).unwrap();
        value["board"]["squares"][2] = serde_json::json!({ "Occupied": "O" });
        value["move_count"] = serde_json::json!(5);
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }
}

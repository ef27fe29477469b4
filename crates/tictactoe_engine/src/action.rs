//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent the player's
//! intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game already reached a win or a tie.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(action.to_string(), "O -> Center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            MoveError::OutOfRange(12).to_string(),
            "Cell index 12 is out of range (must be 0-8)"
        );
        assert_eq!(
            MoveError::CellOccupied(Position::TopLeft).to_string(),
            "Square Top-left is already occupied"
        );
    }
}

//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`. A move is
//! the bare cell index the presentation layer hands in; preconditions turn
//! it into a [`Position`] or reject it, postconditions audit the state the
//! engine produced.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet, describe_violations};
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not finished.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects any move once the game is won or tied.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_finished() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names one of the 9 cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: the target square is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto an occupied square.
    pub fn check(state: &GameState, pos: Position) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: game in progress, index in range, square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: usize) -> Result<Position, MoveError> {
        GameInProgress::check(state)?;
        let pos = IndexInRange::check(index)?;
        CellIsEmpty::check(state, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark at a cell index.
///
/// Preconditions:
/// - Game still in progress
/// - Index in 0-8
/// - Square empty
///
/// Postconditions:
/// - Marks already on the board are untouched
/// - Exactly one mark was added
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(state, *index).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let kept_marks = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .all(|(old, new)| *old == Square::Empty || old == new);
        if !kept_marks {
            warn!("Postcondition failed: existing mark overwritten");
            return Err(MoveError::InvariantViolation(
                "Existing marks must never change".to_string(),
            ));
        }

        if after.move_count() != before.move_count() + 1 {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "Postcondition failed: move count did not advance by one"
            );
            return Err(MoveError::InvariantViolation(
                "A move places exactly one mark".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = describe_violations(&violations);
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

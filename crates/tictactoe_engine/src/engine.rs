//! State transitions for tic-tac-toe.
//!
//! The engine is stateless: every operation takes a [`GameState`] and
//! returns the next one. [`Game`] wraps the same transitions for callers
//! that prefer to own a single mutable state.

use super::action::{Move, MoveError};
use super::contracts::LegalMove;
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::rules::{check_tie, check_win};
use super::{GameResult, GameState, GameStatus, Square};
use tracing::{debug, info, instrument};

/// Creates a fresh game: empty board, O to move.
pub fn create_initial_state() -> GameState {
    GameState::new()
}

/// Returns the state a finished (or any) game resets to.
///
/// Always equal to [`create_initial_state`].
#[instrument]
pub fn reset() -> GameState {
    debug!("Resetting game");
    create_initial_state()
}

/// Places the current player's mark at `index`, reporting illegal moves.
///
/// On success the returned state has the mark placed and either a win, a
/// tie, or the turn passed to the opponent. On error `state` is untouched.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the game is finished
/// - [`MoveError::OutOfRange`] if `index` is not in 0-8
/// - [`MoveError::CellOccupied`] if the square already holds a mark
pub fn try_apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    place(state, index).map(|(_, next)| next)
}

/// Validates and applies a move, returning the accepted [`Move`] with the
/// next state.
#[instrument(
    skip(state),
    fields(player = %state.current_player(), move_count = state.move_count())
)]
fn place(state: &GameState, index: usize) -> Result<(Move, GameState), MoveError> {
    let position = LegalMove::check(state, index)?;
    let mover = state.current_player;

    let mut next = *state;
    next.board.set(position, Square::Occupied(mover));
    next.move_count = next.move_count.saturating_add(1);

    let win = check_win(&next.board, index, mover);
    if let Some(line) = win.line() {
        next.status = GameStatus::Finished;
        next.result = GameResult::win_for(mover);
        next.winning_line = Some(line);
        info!(winner = %mover, ?line, moves = next.move_count, "Game won");
    } else if check_tie(&next.board) {
        next.status = GameStatus::Finished;
        next.result = GameResult::Tie;
        info!(moves = next.move_count, "Game tied");
    } else {
        next.current_player = mover.opponent();
        debug!(%position, next = %next.current_player, "Move applied");
    }

    #[cfg(debug_assertions)]
    MoveContract::post(state, &next)?;

    Ok((Move::new(mover, position), next))
}

/// Places the current player's mark at `index`, ignoring illegal moves.
///
/// Illegal moves (finished game, out-of-range index, occupied square)
/// return `state` unchanged.
pub fn apply_move(state: GameState, index: usize) -> GameState {
    match try_apply_move(&state, index) {
        Ok(next) => next,
        Err(e) => {
            debug!(index, error = %e, "Move ignored");
            state
        }
    }
}

/// Applies a sequence of cell indices from the initial state.
///
/// Illegal moves are skipped exactly as [`apply_move`] skips them.
pub fn replay(indices: impl IntoIterator<Item = usize>) -> GameState {
    indices.into_iter().fold(create_initial_state(), apply_move)
}

/// A move rejected while replaying a sequence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {} (cell {}) rejected: {}", step + 1, index, source)]
pub struct ReplayError {
    /// Zero-based position of the rejected move in the sequence.
    pub step: usize,
    /// Cell index that was rejected.
    pub index: usize,
    /// Why it was rejected.
    pub source: MoveError,
    /// State reached before the rejected move.
    pub state: GameState,
}

/// Applies a sequence of cell indices, stopping at the first illegal move.
///
/// # Errors
///
/// Returns [`ReplayError`] naming the first rejected move and the state
/// reached before it.
#[instrument]
pub fn try_replay(indices: &[usize]) -> Result<GameState, ReplayError> {
    indices
        .iter()
        .enumerate()
        .try_fold(create_initial_state(), |state, (step, &index)| {
            try_apply_move(&state, index).map_err(|source| ReplayError {
                step,
                index,
                source,
                state,
            })
        })
}

/// A single game owned by one caller.
///
/// Holds the current state plus the moves that produced it, and exposes the
/// engine transitions as in-place updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves accepted since the last reset, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Makes a move at the given cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`try_apply_move`]; the game is left
    /// unchanged.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<&GameState, MoveError> {
        let (accepted, next) = place(&self.state, index)?;
        self.history.push(accepted);
        self.state = next;
        Ok(&self.state)
    }

    /// Starts over from the initial state.
    pub fn reset(&mut self) {
        self.state = reset();
        self.history.clear();
    }
}

//! Tic-tac-toe game-state engine.
//!
//! The engine is the pure decision logic behind a 3x3 tic-tac-toe board:
//! given a [`GameState`] and a cell index it decides whether the move is
//! legal, whether it wins (and along which line), whether it ties, and what
//! the next state is. Presentation layers own the state and hand it back in
//! on every move.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: [`check_win`] and [`check_tie`], pure board predicates
//! - **Engine**: [`apply_move`] / [`try_apply_move`] state transitions
//! - **Contracts & invariants**: pre/postconditions audited in debug builds
//! - **View**: [`BoardView`], a render-ready snapshot for front ends
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameResult, apply_move, create_initial_state};
//!
//! let state = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(create_initial_state(), apply_move);
//! assert_eq!(state.result(), GameResult::OWins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod position;
mod rules;
mod state;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use engine::{
    Game, ReplayError, apply_move, create_initial_state, replay, reset, try_apply_move,
    try_replay,
};
pub use position::Position;
pub use rules::{
    WINNING_COMBINATIONS, WinCheck, WinningLine, check_tie, check_win, find_completed_line,
};
pub use state::{FIRST_PLAYER, GameState, InvalidState};
pub use types::{Board, GameResult, GameStatus, Player, Square};
pub use view::{BoardView, CellView, ViewConfig, detailed_status, message};

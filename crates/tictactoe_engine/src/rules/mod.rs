//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from state
//! transitions so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::check_tie;
pub use win::{WINNING_COMBINATIONS, WinCheck, WinningLine, check_win, find_completed_line};

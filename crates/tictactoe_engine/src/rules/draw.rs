//! Tie detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board is only a tie once a win has been ruled out; callers check
/// [`check_win`](super::check_win) first.
#[instrument]
pub fn check_tie(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::super::win::find_completed_line;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        check_tie(board) && find_completed_line(board).is_none()
    }

    fn board_from(marks: [Player; 9]) -> Board {
        Board::from_squares(marks.map(Square::Occupied))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!check_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!check_tie(&board));
    }

    #[test]
    fn test_eight_of_nine_not_full() {
        let mut board = board_from([Player::X; 9]);
        board.set(Position::BottomRight, Square::Empty);
        assert!(!check_tie(&board));
    }

    #[test]
    fn test_tie_detection() {
        use Player::{O, X};
        // X O X / O X O / O X O
        let board = board_from([X, O, X, O, X, O, O, X, O]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_a_tie() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = board_from([X, X, X, O, O, X, X, O, O]);
        assert!(check_tie(&board));
        assert!(!is_tie(&board));
    }
}

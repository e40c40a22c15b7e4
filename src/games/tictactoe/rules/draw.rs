//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| s.is_occupied())
}

/// A full board with no winning line.
///
/// The winner check runs first: a full board that completes a line is a
/// win, not a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn fill(marks: [Player; 9]) -> Board {
        Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |b, (pos, p)| b.with_mark(*pos, p))
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_one_gap_is_not_draw() {
        use Player::{O, X};
        let mut board = fill([X, O, X, O, X, X, O, X, O]);
        board.set(Position::BottomRight, crate::games::tictactoe::Square::Empty);
        assert!(!is_draw(&board));
    }
}

//! Monotonic board invariant: each snapshot extends the previous one.

use super::super::{Player, Position, Square, TimeTravelGame};
use super::Invariant;

/// Invariant: squares never change once set, and each move adds one mark.
///
/// Between snapshot `i` and `i + 1` exactly one empty square becomes
/// occupied, by X when `i` is even and by O when `i` is odd.
pub struct MonotonicBoardInvariant;

impl Invariant<TimeTravelGame> for MonotonicBoardInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let mover = Square::Occupied(Player::for_step(i));
                let mut added = 0;
                for pos in Position::ALL {
                    let (old, new) = (pair[0].get(pos), pair[1].get(pos));
                    if old == new {
                        continue;
                    }
                    if old != Square::Empty || new != mover {
                        return false;
                    }
                    added += 1;
                }
                added == 1
            })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    #[test]
    fn test_empty_game_holds() {
        let game = TimeTravelGame::new();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_full_game_holds() {
        let mut game = TimeTravelGame::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.click_index(index);
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = TimeTravelGame::new();
        game.click(Position::Center);
        let overwritten = Board::new().with_mark(Position::Center, Player::O);
        game.history.record(1, overwritten);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut game = TimeTravelGame::new();
        game.history
            .record(0, Board::new().with_mark(Position::Center, Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}

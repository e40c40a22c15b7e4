//! Alternating turn invariant: the turn marker follows the step parity.

use super::super::{Player, TimeTravelGame};
use super::Invariant;

/// Invariant: X is to move on even steps, O on odd ones.
///
/// Holds after moves (which flip the marker) and after jumps (which set it
/// from the step) alike.
pub struct AlternatingTurnInvariant;

impl Invariant<TimeTravelGame> for AlternatingTurnInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.to_move() == Player::for_step(game.step())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let game = TimeTravelGame::new();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut game = TimeTravelGame::new();
        for index in [4, 0, 8] {
            game.click_index(index);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
        game.jump(1);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_marker_violates() {
        let mut game = TimeTravelGame::new();
        game.click_index(4);
        game.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}

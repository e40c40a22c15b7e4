//! History consistency invariant: the step pointer and snapshots agree.

use super::super::{Board, TimeTravelGame};
use super::Invariant;

/// Invariant: the recorded history is well formed around the step pointer.
///
/// - the log holds at least the starting snapshot
/// - the step pointer names a recorded snapshot
/// - snapshot 0 is the empty board
/// - snapshot `i` holds exactly `i` marks
/// - the displayed board is the snapshot at the step pointer
pub struct HistoryConsistentInvariant;

impl Invariant<TimeTravelGame> for HistoryConsistentInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        if game.history().is_empty() {
            return false;
        }
        let snapshots = game.history().snapshots();

        let Some(displayed) = snapshots.get(game.step()) else {
            return false;
        };

        snapshots.first() == Some(&Board::new())
            && snapshots
                .iter()
                .enumerate()
                .all(|(i, board)| board.occupied_count() == i)
            && displayed == game.board()
    }

    fn description() -> &'static str {
        "History snapshots match the step pointer and displayed board"
    }
}

//! Snapshot log backing time travel.

use super::types::Board;
use tracing::{debug, instrument};

/// Ordered log of board snapshots.
///
/// Entry 0 is always the empty board; entry `n` is the board after the
/// `n`-th move on the branch currently recorded. The log is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a log holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (moves on this branch plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Most recent snapshot on the recorded branch.
    pub fn latest(&self) -> &Board {
        // Non-empty by construction.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Records `board` as the snapshot following `step`.
    ///
    /// Anything recorded after `step` belongs to an abandoned branch and is
    /// discarded first. Returns the number of snapshots dropped.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub fn record(&mut self, step: usize, board: Board) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        let dropped = self.snapshots.len() - keep;
        if dropped > 0 {
            debug!(dropped, step, "Discarding abandoned branch");
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(board);
        dropped
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_history_holds_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some(&Board::new()));
        assert_eq!(history.get(1), None);
    }

    #[test]
    fn test_record_appends_at_tip() {
        let mut history = History::new();
        let first = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(history.record(0, first), 0);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), &first);
    }

    #[test]
    fn test_record_truncates_abandoned_branch() {
        let mut history = History::new();
        let a = Board::new().with_mark(Position::Center, Player::X);
        let b = a.with_mark(Position::TopLeft, Player::O);
        let c = b.with_mark(Position::TopRight, Player::X);
        history.record(0, a);
        history.record(1, b);
        history.record(2, c);

        let branch = a.with_mark(Position::BottomLeft, Player::O);
        assert_eq!(history.record(1, branch), 2);
        assert_eq!(history.snapshots(), &[Board::new(), a, branch]);
    }
}

//! First-class user commands for the time-travel game.
//!
//! Every interaction the presentation layer can produce is a [`Command`].
//! Dispatching one yields a [`Transition`] that says whether it changed the
//! game and, if not, why it was ignored.

use super::{GameStatus, Position};
use serde::{Deserialize, Serialize};

/// A user interaction routed to the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Place the current player's mark on a cell.
    #[display("click {}", _0)]
    Click(Position),
    /// Return to a fresh game.
    #[display("reset")]
    Reset,
    /// Show the snapshot at the given history step.
    #[display("jump to step {}", _0)]
    Jump(usize),
}

/// Why a command left the game unchanged.
///
/// None of these are errors: the corresponding UI control is simply inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has been won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// The requested history step was never recorded.
    #[display("Step {} is outside the recorded history of {} entries", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A raw cell index did not name a board square.
    #[display("Index {} is not a board square", _0)]
    InvalidIndex(usize),
}

/// Result of dispatching a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The command changed the game state.
    Applied,
    /// The command was a no-op.
    Ignored(IgnoreReason),
}

impl Transition {
    /// Returns true if the state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    /// Returns the reason the command was ignored, if it was.
    pub fn ignored(&self) -> Option<IgnoreReason> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(reason) => Some(*reason),
        }
    }
}

impl From<Result<(), IgnoreReason>> for Transition {
    fn from(result: Result<(), IgnoreReason>) -> Self {
        match result {
            Ok(()) => Transition::Applied,
            Err(reason) => Transition::Ignored(reason),
        }
    }
}

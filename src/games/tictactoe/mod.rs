//! Tic-tac-toe with move history and time travel.
//!
//! - [`types`]: board, squares, players and outcome
//! - [`rules`]: pure win/draw evaluation
//! - [`history`]: the snapshot log
//! - [`controller`]: the state bundle driven by [`Command`]s

pub mod action;
pub mod contracts;
pub mod controller;
pub mod history;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod types;

pub use action::{Command, IgnoreReason, Transition};
pub use controller::TimeTravelGame;
pub use history::History;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

/// Alias for the turn marker.
pub type Mark = Player;

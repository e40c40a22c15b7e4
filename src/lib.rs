//! Time-travel tic-tac-toe: a two-player game with a navigable move history.
//!
//! # Architecture
//!
//! - **Games**: board types, pure rules, the snapshot history, and the
//!   [`TimeTravelGame`] controller that applies [`Command`]s
//! - **View**: a pure render model ([`GameView`]) with stylesheet class names
//! - **TUI**: a ratatui terminal host that turns keys and clicks into commands
//! - **Config**: TOML settings for logging and the terminal host
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{Command, GameStatus, Player, Position, TimeTravelGame};
//!
//! let mut game = TimeTravelGame::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::BottomLeft, Position::TopRight] {
//!     game.dispatch(Command::Click(pos));
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Rewind to the start and branch.
//! game.dispatch(Command::Jump(0));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.to_move(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod view;

pub mod cli;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, LoggingConfig, UiConfig};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, Command, GameStatus, History, IgnoreReason, Mark, Player, Position, Square,
    TimeTravelGame, Transition, rules,
};

// Crate-level exports - Invariants and contracts
pub use games::tictactoe::contracts::{ClickContract, Contract, JumpContract};
pub use games::tictactoe::invariants::{
    Invariant, InvariantSet, InvariantViolation, TimeTravelInvariants,
};

// Crate-level exports - Presentation
pub use view::{
    CellView, GameView, HISTORY_HEADING, HistoryEntryView, RESET_LABEL, ResetView, Section,
    TITLE, class, history_label, status_message,
};

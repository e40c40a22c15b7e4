//! Presentation model: a pure function from game state to what is shown.
//!
//! [`GameView::from_game`] captures everything a renderer needs (labels,
//! which controls are inert, which history entry is current, and the
//! style class names the stylesheet keys on) without knowing how it is
//! drawn. The terminal renderer in [`crate::tui`] is one consumer.

use crate::games::tictactoe::{Command, GameStatus, Player, Position, TimeTravelGame, rules};
use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// Style class names emitted for the external stylesheet.
pub mod class {
    /// Root container.
    pub const ROOT: &str = "tic-tac-toe";
    /// Status line.
    pub const STATUS: &str = "status";
    /// Board container.
    pub const BOARD: &str = "board";
    /// One row of three cells.
    pub const BOARD_ROW: &str = "board-row";
    /// A board cell.
    pub const CELL: &str = "cell";
    /// Added to occupied cells.
    pub const FILLED: &str = "filled";
    /// Added to the cells of the winning line.
    pub const WINNING: &str = "winning";
    /// Controls container.
    pub const CONTROLS: &str = "controls";
    /// Reset button.
    pub const RESET_BUTTON: &str = "reset-btn";
    /// History list.
    pub const HISTORY: &str = "history";
    /// Added to the history entry for the displayed step.
    pub const CURRENT_MOVE: &str = "current-move";
}

/// A styled container of the page, outside the cells and history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Section {
    /// The whole game.
    Root,
    /// The status line.
    Status,
    /// The 3x3 grid.
    Board,
    /// One row of the grid.
    BoardRow,
    /// The row holding the reset control.
    Controls,
    /// The move history list.
    History,
}

impl Section {
    /// Class name the stylesheet keys this section on.
    pub fn class(self) -> &'static str {
        match self {
            Section::Root => class::ROOT,
            Section::Status => class::STATUS,
            Section::Board => class::BOARD,
            Section::BoardRow => class::BOARD_ROW,
            Section::Controls => class::CONTROLS,
            Section::History => class::HISTORY,
        }
    }
}

/// Heading above the board.
pub const TITLE: &str = "Tic Tac Toe";
/// Heading above the history list.
pub const HISTORY_HEADING: &str = "Move History";
/// Reset control label.
pub const RESET_LABEL: &str = "Reset Game";

/// Status line text for an outcome and the player to move.
#[instrument]
pub fn status_message(status: GameStatus, to_move: Player) -> String {
    match status {
        GameStatus::Won(winner) => format!("Winner: {}! 🎉", winner),
        GameStatus::Draw => "It's a Draw! 🤝".to_string(),
        GameStatus::InProgress => format!("Next Player: {}", to_move),
    }
}

/// Label of the history entry for `step`.
pub fn history_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// One board cell as shown.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct CellView {
    position: Position,
    /// Mark text, empty for a blank cell.
    label: String,
    /// Clicking does nothing.
    disabled: bool,
    /// Part of the winning line.
    winning: bool,
}

impl CellView {
    /// Class list, e.g. `["cell", "filled"]`.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![class::CELL];
        if !self.label.is_empty() {
            classes.push(class::FILLED);
        }
        if self.winning {
            classes.push(class::WINNING);
        }
        classes
    }

    /// Command this cell emits when clicked.
    pub fn command(&self) -> Command {
        Command::Click(self.position)
    }
}

/// One entry of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct HistoryEntryView {
    step: usize,
    label: String,
    /// This entry is the displayed snapshot.
    current: bool,
}

impl HistoryEntryView {
    /// Class list: `["current-move"]` for the current entry, else empty.
    pub fn classes(&self) -> Vec<&'static str> {
        if self.current {
            vec![class::CURRENT_MOVE]
        } else {
            Vec::new()
        }
    }

    /// Command this entry emits when clicked.
    pub fn command(&self) -> Command {
        Command::Jump(self.step)
    }
}

/// The reset control. It is never disabled.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ResetView {
    #[getter(skip)]
    label: &'static str,
}

impl ResetView {
    /// Get field `label` from instance of `ResetView`.
    pub fn label(&self) -> &&'static str {
        &self.label
    }

    /// Class list: `["reset-btn"]`.
    pub fn classes(&self) -> Vec<&'static str> {
        vec![class::RESET_BUTTON]
    }

    /// Command the control emits when clicked.
    pub fn command(&self) -> Command {
        Command::Reset
    }
}

impl Default for ResetView {
    fn default() -> Self {
        Self { label: RESET_LABEL }
    }
}

/// Complete render model of a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    status: String,
    status_kind: GameStatus,
    /// Cells grouped into the three board rows.
    rows: [[CellView; 3]; 3],
    history: Vec<HistoryEntryView>,
    reset: ResetView,
}

impl GameView {
    /// Builds the view for the game's current state.
    #[instrument(skip(game), fields(step = game.step(), status = %game.status()))]
    pub fn from_game(game: &TimeTravelGame) -> Self {
        let board = game.board();
        let status = game.status();
        let terminal = status.is_terminal();
        let line = match status {
            GameStatus::Won(_) => rules::winning_line(board),
            _ => None,
        };

        let rows = Position::ROWS.map(|row| {
            row.map(|position| {
                let square = board.get(position);
                CellView::new(
                    position,
                    square.player().map(|p| p.to_string()).unwrap_or_default(),
                    square.is_occupied() || terminal,
                    line.is_some_and(|l| l.contains(&position)),
                )
            })
        });

        let history = (0..game.history().len())
            .map(|step| HistoryEntryView::new(step, history_label(step), step == game.step()))
            .collect();

        Self {
            status: status_message(status, game.to_move()),
            status_kind: status,
            rows,
            history,
            reset: ResetView::default(),
        }
    }

    /// Class list of a section container.
    pub fn section_classes(&self, section: Section) -> Vec<&'static str> {
        vec![section.class()]
    }

    /// Cell view for a position.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.rows[position.row()][position.col()]
    }

    /// History entry for `step`, if recorded.
    pub fn history_entry(&self, step: usize) -> Option<&HistoryEntryView> {
        self.history.get(step)
    }
}

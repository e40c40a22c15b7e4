//! Application state and logic.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, instrument};

use super::input::{self, Direction, Intent};
use super::layout::{Hit, ScreenLayout};
use crate::games::tictactoe::{Command, Position, TimeTravelGame, Transition};
use crate::view::GameView;

/// Which control keyboard navigation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep handling events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state: the game plus keyboard navigation.
#[derive(Debug, Clone)]
pub struct App {
    game: TimeTravelGame,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_help: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    #[instrument]
    pub fn new(show_help: bool) -> Self {
        Self {
            game: TimeTravelGame::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_help,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &TimeTravelGame {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry while the history list has focus.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the key binding line is drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match input::intent_for(key) {
            Some(intent) => self.apply(intent),
            None => Flow::Continue,
        }
    }

    /// Handles a mouse event against the layout of the last drawn frame.
    #[instrument(skip(self, layout))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) -> Flow {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Flow::Continue;
        }
        let Some(hit) = layout.hit(mouse.column, mouse.row, self.game.history().len()) else {
            return Flow::Continue;
        };
        match hit {
            Hit::Cell(pos) => {
                self.cursor = pos;
                self.focus = Focus::Board;
            }
            Hit::History(_) => self.focus = Focus::History,
            Hit::Reset => {}
        }
        if let Some(command) = self.command_for(hit) {
            self.dispatch(command);
        }
        Flow::Continue
    }

    /// Command the control under `hit` emits, as the view describes it.
    fn command_for(&self, hit: Hit) -> Option<Command> {
        let view = GameView::from_game(&self.game);
        match hit {
            Hit::Cell(pos) => Some(view.cell(pos).command()),
            Hit::History(step) => view.history_entry(step).map(|entry| entry.command()),
            Hit::Reset => Some(view.reset().command()),
        }
    }

    /// Applies a decoded intent.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::Quit => return Flow::Quit,
            Intent::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => {
                        self.selected = self.game.step();
                        Focus::History
                    }
                    Focus::History => Focus::Board,
                };
            }
            Intent::Navigate(direction) => self.navigate(direction),
            Intent::Activate => {
                let hit = match self.focus {
                    Focus::Board => Hit::Cell(self.cursor),
                    Focus::History => Hit::History(self.selected),
                };
                if let Some(command) = self.command_for(hit) {
                    self.dispatch(command);
                }
            }
            Intent::Click(pos) => {
                self.cursor = pos;
                if let Some(command) = self.command_for(Hit::Cell(pos)) {
                    self.dispatch(command);
                }
            }
            Intent::Reset => {
                if let Some(command) = self.command_for(Hit::Reset) {
                    self.dispatch(command);
                }
            }
            Intent::StepBack => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.dispatch(Command::Jump(step));
                }
            }
            Intent::StepForward => {
                let step = self.game.step() + 1;
                if self.game.can_jump(step) {
                    self.dispatch(Command::Jump(step));
                }
            }
        }
        Flow::Continue
    }

    /// Sends a command to the game and keeps the history selection valid.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Transition {
        let transition = self.game.dispatch(command);
        if transition.is_applied() {
            match command {
                Command::Jump(step) => self.selected = step,
                Command::Reset => self.selected = 0,
                Command::Click(_) => {}
            }
        }
        self.selected = self.selected.min(self.game.history().len() - 1);
        debug!(?transition, selected = self.selected, "Dispatched");
        transition
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = input::move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.game.history().len() - 1;
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(last),
                };
            }
        }
    }
}

//! Key bindings and cursor movement.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::instrument;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Leave the application.
    Quit,
    /// Switch keyboard focus between the board and the history list.
    ToggleFocus,
    /// Move the board cursor or the history selection.
    Navigate(Direction),
    /// Click whatever the focus is on.
    Activate,
    /// Click a cell directly (keys 1-9).
    Click(Position),
    /// Start a new game.
    Reset,
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
}

/// Maps a key event to an intent. Key releases map to nothing.
#[instrument]
pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Intent::ToggleFocus),
        KeyCode::Up => Some(Intent::Navigate(Direction::Up)),
        KeyCode::Down => Some(Intent::Navigate(Direction::Down)),
        KeyCode::Left => Some(Intent::Navigate(Direction::Left)),
        KeyCode::Right => Some(Intent::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Activate),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),
        KeyCode::Char('[') => Some(Intent::StepBack),
        KeyCode::Char(']') => Some(Intent::StepForward),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Position::from_label_or_number(&c.to_string()).map(Intent::Click)
        }
        _ => None,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Left), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomCenter, Direction::Down), Position::BottomCenter);
    }

    #[test]
    fn test_digits_click_cells() {
        assert_eq!(
            intent_for(press(KeyCode::Char('1'))),
            Some(Intent::Click(Position::TopLeft))
        );
        assert_eq!(
            intent_for(press(KeyCode::Char('9'))),
            Some(Intent::Click(Position::BottomRight))
        );
        assert_eq!(intent_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert_eq!(intent_for(key), None);
        assert_eq!(intent_for(press(KeyCode::Char('r'))), Some(Intent::Reset));
    }
}

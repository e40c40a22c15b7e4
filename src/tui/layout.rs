//! Screen geometry shared by rendering and mouse hit-testing.

use crate::games::tictactoe::Position;
use ratatui::layout::{Constraint, Layout, Rect};

/// Width of one board cell.
const CELL_WIDTH: u16 = 11;
/// Height of one board cell.
const CELL_HEIGHT: u16 = 3;
/// Board including the one-character separators.
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Something clickable under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A history entry, by step.
    History(usize),
    /// The reset control.
    Reset,
}

/// Areas of every screen element for one frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// Board including separators.
    pub board: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Row holding the reset control.
    pub controls: Rect,
    /// Reset control.
    pub reset: Rect,
    /// History list, including its border.
    pub history: Rect,
    /// Key binding line (zero height when hidden).
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a frame area.
    pub fn new(area: Rect, show_help: bool) -> Self {
        let help_height = if show_help { 3 } else { 0 };
        let [title, status, main, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT + 3),
            Constraint::Length(help_height),
        ])
        .areas(area);

        let [left, history] =
            Layout::horizontal([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(24)])
                .areas(main);

        let [board_area, controls] =
            Layout::vertical([Constraint::Length(BOARD_HEIGHT + 1), Constraint::Length(3)])
                .areas(left);

        let board = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);
        let reset = center_rect(controls, 16, 3);

        let cells = Position::ALL.map(|pos| {
            let col = pos.col() as u16;
            let row = pos.row() as u16;
            Rect {
                x: board.x + col * (CELL_WIDTH + 1),
                y: board.y + row * (CELL_HEIGHT + 1),
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            }
            .intersection(board)
        });

        Self {
            title,
            status,
            board,
            cells,
            controls,
            reset,
            history,
            help,
        }
    }

    /// Area spanning the three cells of board row `row` (0-2).
    pub fn board_row(&self, row: usize) -> Rect {
        self.cells[row * 3].union(self.cells[row * 3 + 2])
    }

    /// Area of the history entry for `step`, inside the list border.
    pub fn history_entry(&self, step: usize) -> Option<Rect> {
        let inner_height = self.history.height.saturating_sub(2) as usize;
        if step >= inner_height {
            return None;
        }
        Some(Rect {
            x: self.history.x + 1,
            y: self.history.y + 1 + step as u16,
            width: self.history.width.saturating_sub(2),
            height: 1,
        })
    }

    /// What lies under terminal cell (`column`, `row`).
    ///
    /// History entries past `history_len` are not hit.
    pub fn hit(&self, column: u16, row: u16, history_len: usize) -> Option<Hit> {
        if let Some(index) = self.cells.iter().position(|r| contains(*r, column, row)) {
            return Position::from_index(index).map(Hit::Cell);
        }
        if contains(self.reset, column, row) {
            return Some(Hit::Reset);
        }
        (0..history_len)
            .find(|step| self.history_entry(*step).is_some_and(|r| contains(r, column, row)))
            .map(Hit::History)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 30), true)
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_board_row_spans_its_cells() {
        let layout = layout();
        let row = layout.board_row(1);
        for cell in &layout.cells[3..6] {
            assert_eq!(row.intersection(*cell), *cell);
        }
        assert!(!row.intersects(layout.cells[0]));
        assert!(layout.controls.contains(layout.reset.as_position()));
    }

    #[test]
    fn test_hit_cell_center() {
        let layout = layout();
        let center = layout.cells[4];
        assert_eq!(
            layout.hit(center.x + 1, center.y + 1, 1),
            Some(Hit::Cell(Position::Center))
        );
    }

    #[test]
    fn test_hit_reset_and_history() {
        let layout = layout();
        assert_eq!(layout.hit(layout.reset.x, layout.reset.y, 1), Some(Hit::Reset));

        let entry = layout.history_entry(2).unwrap();
        assert_eq!(layout.hit(entry.x, entry.y, 3), Some(Hit::History(2)));
        // Entry 2 is not drawn when only two snapshots exist.
        assert_eq!(layout.hit(entry.x, entry.y, 2), None);
    }

    #[test]
    fn test_hidden_help_has_no_height() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30), false);
        assert_eq!(layout.help.height, 0);
    }
}

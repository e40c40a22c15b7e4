//! Stateless UI rendering for the time-travel game.
//!
//! Draws a [`GameView`] into the areas of a [`ScreenLayout`]. Style class
//! names from the view are mapped to terminal styles here.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use super::layout::ScreenLayout;
use crate::games::tictactoe::{GameStatus, Position};
use crate::view::{CellView, GameView, HISTORY_HEADING, ResetView, Section, TITLE, class};

/// Key binding line.
const HELP: &str = "1-9/Enter: move | Tab: history | [ ]: step | R: reset | Q: quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let view = GameView::from_game(app.game());

    let root = Block::default().style(class_style(&view.section_classes(Section::Root)));
    frame.render_widget(root, frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(view.status().as_str())
        .style(status_style(&view, *view.status_kind()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    draw_board(frame, app, &view, layout);
    draw_controls(frame, &view, layout);
    draw_history(frame, app, &view, layout.history);

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }
}

fn status_style(view: &GameView, status: GameStatus) -> Style {
    let color = match status {
        GameStatus::InProgress => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
    };
    class_style(&view.section_classes(Section::Status)).fg(color)
}

/// Terminal style for a class list emitted by the view.
pub fn class_style(classes: &[&str]) -> Style {
    classes.iter().fold(Style::default(), |style, name| match *name {
        class::ROOT => style.fg(Color::Gray),
        class::STATUS => style.add_modifier(Modifier::BOLD),
        class::BOARD => style.fg(Color::DarkGray),
        class::BOARD_ROW => style.fg(Color::Gray),
        class::CELL => style.fg(Color::DarkGray),
        class::FILLED => style.add_modifier(Modifier::BOLD),
        class::WINNING => style.bg(Color::Green),
        class::CONTROLS => style.fg(Color::Gray),
        class::RESET_BUTTON => style.fg(Color::White).add_modifier(Modifier::BOLD),
        class::HISTORY => style.fg(Color::Gray),
        class::CURRENT_MOVE => style.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        _ => style,
    })
}

fn draw_board(frame: &mut Frame, app: &App, view: &GameView, layout: &ScreenLayout) {
    let grid = class_style(&view.section_classes(Section::Board));
    for row in 1..3u16 {
        let y = layout.board.y + row * 4 - 1;
        if y < layout.board.bottom() {
            let line = Rect { y, height: 1, ..layout.board };
            frame.render_widget(Paragraph::new("─".repeat(line.width as usize)).style(grid), line);
        }
    }
    for col in 1..3u16 {
        let x = layout.board.x + col * 12 - 1;
        if x < layout.board.right() {
            let line = Rect { x, width: 1, ..layout.board };
            let bar: Vec<Line> = (0..line.height).map(|_| Line::from("│")).collect();
            frame.render_widget(Paragraph::new(bar).style(grid), line);
        }
    }

    let row_style = class_style(&view.section_classes(Section::BoardRow));
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    for (row, positions) in Position::ROWS.iter().enumerate() {
        frame.render_widget(Block::default().style(row_style), layout.board_row(row));
        for &pos in positions {
            let area = layout.cells[pos.to_index()];
            draw_cell(frame, area, row_style, view.cell(pos), cursor == Some(pos));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, row: Style, cell: &CellView, under_cursor: bool) {
    let mut style = row.patch(class_style(&cell.classes()));
    style = match cell.label().as_str() {
        "X" => style.fg(Color::Blue),
        "O" => style.fg(Color::Red),
        _ => style,
    };
    if *cell.disabled() && cell.label().is_empty() {
        style = style.add_modifier(Modifier::DIM);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let symbol = if cell.label().is_empty() {
        "·".to_string()
    } else {
        cell.label().clone()
    };
    let mut lines = vec![Line::default(); (area.height / 2) as usize];
    lines.push(Line::from(Span::raw(symbol)));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, view: &GameView, layout: &ScreenLayout) {
    let controls = Block::default().style(class_style(&view.section_classes(Section::Controls)));
    frame.render_widget(controls, layout.controls);
    draw_reset(frame, view.reset(), layout.reset);
}

fn draw_reset(frame: &mut Frame, reset: &ResetView, area: Rect) {
    let button = Paragraph::new(*reset.label())
        .style(class_style(&reset.classes()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_history(frame: &mut Frame, app: &App, view: &GameView, area: Rect) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = view
        .history()
        .iter()
        .map(|entry| {
            let marker = if focused && *entry.step() == app.selected() {
                "> "
            } else {
                "  "
            };
            let text = format!("{}{}. {}", marker, entry.step() + 1, entry.label());
            ListItem::new(Line::from(Span::styled(text, class_style(&entry.classes()))))
        })
        .collect();

    let section = class_style(&view.section_classes(Section::History));
    let border = if focused {
        section.fg(Color::Cyan)
    } else {
        section
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(HISTORY_HEADING),
    );
    frame.render_widget(list, area);
}

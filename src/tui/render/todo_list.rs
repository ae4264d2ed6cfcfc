use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode::{pad_to_width, truncate_to_width};

const ACTION_COLUMN_W: u16 = 14;

/// The list of to-dos with the Edit / Complete / Exit column beside it
pub fn render_todo_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(ACTION_COLUMN_W),
        ])
        .split(area);

    render_list(frame, app, chunks[0]);
    render_actions(frame, app, chunks[2]);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::List;
    let border_color = if focused { app.theme.ink } else { app.theme.dim };
    let base = Style::default().fg(app.theme.ink).bg(app.theme.field_bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" To-Dos ")
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    let width = inner.width as usize;
    if height == 0 || width == 0 {
        return;
    }

    if app.todos.is_empty() {
        let empty = Span::styled(
            " Nothing to do",
            base.fg(app.theme.dim).add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(Paragraph::new(empty), inner);
        return;
    }

    // Keep the cursor row visible
    if app.cursor < app.list_scroll {
        app.list_scroll = app.cursor;
    } else if app.cursor >= app.list_scroll + height {
        app.list_scroll = app.cursor + 1 - height;
    }
    app.list_scroll = app.list_scroll.min(app.todos.len().saturating_sub(1));

    let selected = app.selected_index();
    let highlight = Style::default()
        .fg(app.theme.selection_fg)
        .bg(app.theme.selection_bg)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = app
        .todos
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(height)
        .map(|(i, text)| {
            let marker = if selected == Some(i) { "\u{25B8}" } else { " " };
            let content = format!("{}{}", marker, truncate_to_width(text, width.saturating_sub(2)));
            let style = if selected == Some(i) || (focused && i == app.cursor) {
                highlight
            } else {
                base
            };
            Line::from(Span::styled(pad_to_width(&content, width), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(base), inner);
}

fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let buttons: [(&str, &str, Color); 2] = [
        ("e", "Edit", app.theme.button),
        ("c", "Complete", app.theme.button),
    ];

    // Skip the list's top border row so buttons line up with the first item
    let mut y = area.y + 1;
    for (key, label, color) in buttons {
        if y >= area.bottom() {
            return;
        }
        render_action(frame, app, key, label, color, Rect::new(area.x, y, area.width, 1), width);
        y += 2;
    }

    // Exit sits at the bottom, above the list's bottom border
    if area.height >= 2 {
        let row = Rect::new(area.x, area.bottom() - 2, area.width, 1);
        if row.y >= y {
            render_action(frame, app, "q", "Exit", app.theme.danger, row, width);
        }
    }
}

fn render_action(
    frame: &mut Frame,
    app: &App,
    key: &str,
    label: &str,
    color: Color,
    row: Rect,
    width: usize,
) {
    let style = Style::default().fg(app.theme.text).bg(color);
    let text = pad_to_width(&format!(" {}  {}", key, label), width);
    frame.render_widget(
        Paragraph::new(Span::styled(text, style.add_modifier(Modifier::BOLD))),
        row,
    );
}

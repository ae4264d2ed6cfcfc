use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode::byte_offset_to_display_col;

pub const PLACEHOLDER: &str = " Add a new to-do ";

/// Text field with the Save and Clear buttons to its right
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    render_field(frame, app, chunks[0]);
    render_button(frame, app, " Save ", chunks[2]);
    render_button(frame, app, " Clear ", chunks[4]);
}

fn render_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let border_color = if focused { app.theme.ink } else { app.theme.dim };
    let field_style = Style::default().fg(app.theme.ink).bg(app.theme.field_bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .style(field_style);
    let inner = block.inner(area);

    if app.input.is_empty() {
        let placeholder = Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(app.theme.dim)
                .bg(app.theme.field_bg)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(Paragraph::new(placeholder).block(block), area);
        if focused && app.warning.is_none() {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    // Scroll horizontally so the cursor stays inside the field
    let cursor_col = byte_offset_to_display_col(&app.input, app.input_cursor) as u16;
    let visible = inner.width.max(1);
    let offset = cursor_col.saturating_sub(visible - 1);

    let paragraph = Paragraph::new(app.input.as_str())
        .block(block)
        .scroll((0, offset));
    frame.render_widget(paragraph, area);

    if focused && app.warning.is_none() {
        frame.set_cursor_position((inner.x + cursor_col - offset, inner.y));
    }
}

fn render_button(frame: &mut Frame, app: &App, label: &str, area: Rect) {
    if area.height < 2 {
        return;
    }
    // Middle row of the three-row input strip
    let row = Rect::new(area.x, area.y + 1, area.width, 1);
    let style = Style::default()
        .fg(app.theme.text)
        .bg(app.theme.button)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(label.to_string(), style)).style(style), row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_placeholder_when_empty() {
        let app = app_with(&[]);
        let out = render_to_string(50, 3, |frame, area| render_input_row(frame, &app, area));
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows[1].contains(PLACEHOLDER.trim()));
        assert!(rows[1].contains("Save"));
        assert!(rows[1].ends_with("Clear"));
    }

    #[test]
    fn test_typed_text_replaces_placeholder() {
        let mut app = app_with(&[]);
        app.input = "walk the dog".into();
        app.input_cursor = app.input.len();
        let out = render_to_string(50, 3, |frame, area| render_input_row(frame, &app, area));
        assert!(out.contains("walk the dog"));
        assert!(!out.contains(PLACEHOLDER.trim()));
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let mut app = app_with(&[]);
        app.input = format!("{}END", "x".repeat(60));
        app.input_cursor = app.input.len();
        let out = render_to_string(50, 3, |frame, area| render_input_row(frame, &app, area));
        assert!(out.lines().nth(1).unwrap().contains("END"));
    }
}

pub mod clock_bar;
pub mod input_row;
pub mod status_row;
pub mod todo_list;
pub mod warning_popup;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: clock, input row, list, status row, then any warning on top.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // clock and date
            Constraint::Length(1),
            Constraint::Length(3), // input field and buttons
            Constraint::Length(1),
            Constraint::Min(3),    // list and action column
            Constraint::Length(1), // status row
        ])
        .split(area);

    clock_bar::render_clock_bar(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[2]);
    todo_list::render_todo_list(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    if app.warning.is_some() {
        warning_popup::render_warning_popup(frame, app, area);
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Key hints for whatever currently has focus
pub fn status_hint(app: &App) -> &'static str {
    if app.warning.is_some() {
        return "Enter/Esc dismiss";
    }
    match app.focus {
        Focus::Input => "Enter save  Esc clear  Tab list  Ctrl-C quit",
        Focus::List => "\u{2191}\u{2193} select  e edit  c complete  s save  Esc clear  Tab input  q exit",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(status_hint(app), Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

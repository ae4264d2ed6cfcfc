use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Time on the left, date on the right
pub fn render_clock_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let clock = format!(" {}", app.clock_text());
    let date = format!("{} ", app.date_text());

    let mut spans = vec![Span::styled(
        clock.clone(),
        Style::default()
            .fg(app.theme.ink)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = display_width(&clock) + display_width(&date);
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(date, Style::default().fg(app.theme.ink).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clock_left_date_right() {
        let app = app_with(&[]);
        let out = render_to_string(40, 1, |frame, area| render_clock_bar(frame, &app, area));
        assert_eq!(out, format!(" 09:00{}Tue, Mar 26, 2024", " ".repeat(16)));
    }

    #[test]
    fn test_narrow_drops_date() {
        let app = app_with(&[]);
        let out = render_to_string(12, 1, |frame, area| render_clock_bar(frame, &app, area));
        assert_eq!(out, " 09:00");
    }
}

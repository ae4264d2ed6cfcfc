use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::wrap::wrap_words;
use crate::util::unicode::display_width;

const MIN_POPUP_W: u16 = 30;

/// Modal warning dialog, centered over `area`
pub fn render_warning_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(warning) = &app.warning else {
        return;
    };
    let bg = app.theme.ink;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let key_style = Style::default()
        .fg(app.theme.background)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let max_w = area.width.saturating_sub(4).max(MIN_POPUP_W).min(area.width);
    let popup_w = (display_width(&warning.message) as u16 + 4).clamp(MIN_POPUP_W.min(max_w), max_w);
    // Borders plus one cell of padding on each side
    let text_w = popup_w.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = wrap_words(&warning.message, text_w)
        .into_iter()
        .map(|l| Line::from(Span::styled(format!(" {}", l), text_style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Enter", key_style),
        Span::styled(" OK", text_style),
    ]));

    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", warning.title))
        .border_style(Style::default().fg(app.theme.danger).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines).block(block).style(text_style);
    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

use chrono::{DateTime, Local, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::TodoFile;
use crate::model::config::UiConfig;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Tuesday 26 March 2024, 09:00:00 local time.
pub fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 26, 9, 0, 0).unwrap()
}

/// An app over the given items. The file is never written by render tests.
pub fn app_with(items: &[&str]) -> App {
    let todos = items.iter().map(|s| s.to_string()).collect();
    App::new(
        TodoFile::new("/tmp/tally-render-test/todos.txt"),
        todos,
        &UiConfig::default(),
        fixed_time(),
    )
}

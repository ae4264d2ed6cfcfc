use crossterm::event::{KeyCode, KeyEvent};

use crate::io::storage::StorageError;
use crate::tui::app::{App, Focus};

/// Keys while the list has focus
pub(super) fn handle_list(app: &mut App, key: KeyEvent) -> Result<(), StorageError> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_current(),
        KeyCode::Char('e') => app.edit(),
        KeyCode::Char('c') => app.complete()?,
        KeyCode::Char('s') => app.save()?,
        KeyCode::Esc => app.clear(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab | KeyCode::Char('i') => app.focus = Focus::Input,
        _ => {}
    }
    Ok(())
}

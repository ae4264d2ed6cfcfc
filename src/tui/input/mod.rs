mod field;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use crate::io::storage::StorageError;

use field::handle_field;
use list::handle_list;

/// Handle a key event for whichever widget has focus.
///
/// Only storage failures are returned; everything the user can get wrong
/// surfaces as a warning dialog instead.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StorageError> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Ok(());
    }

    // The warning dialog blocks everything until dismissed
    if app.warning.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.warning = None;
        }
        return Ok(());
    }

    match app.focus {
        Focus::Input => handle_field(app, key),
        Focus::List => handle_list(app, key),
    }
}

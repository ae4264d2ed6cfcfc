use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::storage::StorageError;
use crate::tui::app::{App, Focus};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Keys while the text field has focus
pub(super) fn handle_field(app: &mut App, key: KeyEvent) -> Result<(), StorageError> {
    match key.code {
        KeyCode::Enter => app.save()?,
        KeyCode::Esc => app.clear(),
        KeyCode::Tab | KeyCode::Down => app.focus = Focus::List,
        KeyCode::Left => {
            if let Some(pos) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = pos;
            }
        }
        KeyCode::Right => {
            if let Some(pos) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = pos;
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.input.len(),
        KeyCode::Backspace => {
            if let Some(pos) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(pos..app.input_cursor, "");
                app.input_cursor = pos;
            }
        }
        KeyCode::Delete => {
            if let Some(end) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(app.input_cursor..end, "");
            }
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{key, setup, type_str};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typing_and_cursor_movement() {
        let (_tmp, mut app) = setup("");
        type_str(&mut app, "helo");
        handle_field(&mut app, key(KeyCode::Left)).unwrap();
        type_str(&mut app, "l");
        assert_eq!(app.input, "hello");
        assert_eq!(app.input_cursor, 4);

        handle_field(&mut app, key(KeyCode::Home)).unwrap();
        handle_field(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(app.input, "ello");
        handle_field(&mut app, key(KeyCode::End)).unwrap();
        handle_field(&mut app, key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.input, "ell");
        assert_eq!(app.input_cursor, 3);
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let (_tmp, mut app) = setup("");
        type_str(&mut app, "cafe\u{301}");
        handle_field(&mut app, key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.input, "caf");
    }

    #[test]
    fn test_edges_are_noops() {
        let (_tmp, mut app) = setup("");
        handle_field(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_field(&mut app, key(KeyCode::Left)).unwrap();
        handle_field(&mut app, key(KeyCode::Delete)).unwrap();
        handle_field(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.input, "");
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn test_esc_clears_and_tab_moves_focus() {
        let (_tmp, mut app) = setup("a\n");
        type_str(&mut app, "draft");
        handle_field(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.input.is_empty());
        handle_field(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_control_chars_not_inserted() {
        let (_tmp, mut app) = setup("");
        handle_field(
            &mut app,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT),
        )
        .unwrap();
        assert!(app.input.is_empty());
    }
}

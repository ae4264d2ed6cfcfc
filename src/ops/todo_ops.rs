use crate::model::todo::{LINE_TERMINATOR, display_text, to_stored_line};

/// Error type for list operations driven by user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("no to-do item with number {0}")]
    OutOfRange(i64),
    #[error("the field is blank")]
    Blank,
    #[error("the value is unchanged")]
    Unchanged,
    #[error("no item selected")]
    NoSelection,
}

/// Parse a 1-based item number as typed by the user.
pub fn parse_number(arg: &str) -> Result<i64, TodoError> {
    arg.trim()
        .parse::<i64>()
        .map_err(|_| TodoError::InvalidNumber(arg.to_string()))
}

/// Map a 1-based item number onto a 0-based index into `len` items.
pub fn resolve_index(number: i64, len: usize) -> Result<usize, TodoError> {
    if number < 1 || number as u64 > len as u64 {
        return Err(TodoError::OutOfRange(number));
    }
    Ok((number - 1) as usize)
}

/// Append a task as a stored line.
///
/// An unterminated last line gets its terminator first so the new task
/// starts on a line of its own.
pub fn add(lines: &mut Vec<String>, text: &str) {
    if let Some(last) = lines.last_mut()
        && !last.ends_with(LINE_TERMINATOR)
    {
        last.push(LINE_TERMINATOR);
    }
    lines.push(to_stored_line(text));
}

/// Replace item `number` (1-based) and return the previous text.
pub fn edit(lines: &mut [String], number: i64, text: &str) -> Result<String, TodoError> {
    let index = resolve_index(number, lines.len())?;
    let old = std::mem::replace(&mut lines[index], to_stored_line(text));
    Ok(display_text(&old).to_string())
}

/// Remove item `number` (1-based) and return its text.
pub fn complete(lines: &mut Vec<String>, number: i64) -> Result<String, TodoError> {
    let index = resolve_index(number, lines.len())?;
    let removed = lines.remove(index);
    Ok(display_text(&removed).to_string())
}

/// Numbered listing in `N- text` form, one entry per item.
pub fn numbered(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}- {}", i + 1, display_text(line)))
        .collect()
}

// ---------------------------------------------------------------------------
// Selection-based edits (desktop window)
// ---------------------------------------------------------------------------

/// Position of the first item equal to `selected`.
pub fn position_of(items: &[String], selected: &str) -> Option<usize> {
    items.iter().position(|t| t == selected)
}

/// Append trimmed `input` as a new item.
pub fn add_item(items: &mut Vec<String>, input: &str) -> Result<(), TodoError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(TodoError::Blank);
    }
    items.push(text.to_string());
    Ok(())
}

/// Replace the first item equal to `selected` with trimmed `input`.
pub fn update_item(items: &mut [String], selected: &str, input: &str) -> Result<usize, TodoError> {
    let index = position_of(items, selected).ok_or(TodoError::NoSelection)?;
    let text = input.trim();
    if text.is_empty() {
        return Err(TodoError::Blank);
    }
    if text == selected {
        return Err(TodoError::Unchanged);
    }
    items[index] = text.to_string();
    Ok(index)
}

/// Remove the first item equal to `selected`.
pub fn remove_item(items: &mut Vec<String>, selected: &str) -> Result<String, TodoError> {
    let index = position_of(items, selected).ok_or(TodoError::NoSelection)?;
    Ok(items.remove(index))
}

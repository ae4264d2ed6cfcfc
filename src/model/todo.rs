/// Line terminator used by the backing file.
pub const LINE_TERMINATOR: char = '\n';

/// Text of a stored line without its trailing terminator.
///
/// Only the terminator (and a `\r` before it) is removed; other surrounding
/// whitespace belongs to the task.
pub fn display_text(line: &str) -> &str {
    let line = line.strip_suffix(LINE_TERMINATOR).unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Turn task text into a stored line by appending the terminator.
pub fn to_stored_line(text: &str) -> String {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push(LINE_TERMINATOR);
    line
}

/// Stored lines for a list of plain task texts.
pub fn to_stored_lines<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|t| to_stored_line(t.as_ref())).collect()
}

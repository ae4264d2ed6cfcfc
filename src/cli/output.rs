use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::model::todo::display_text;

// ---------------------------------------------------------------------------
// Command loop messages
// ---------------------------------------------------------------------------

pub const PROMPT: &str = "\nType add, show, edit, complete, or exit:  ";
pub const EDIT_PROMPT: &str = "\nEnter new todo item:  ";
pub const MSG_FILE_CREATED: &str =
    "\n--- No file found for the To-Do list. Creating new empty one. ---";
pub const MSG_EMPTY: &str = "\n--- No items found in the To-do list. ---";
pub const MSG_NO_SUCH_ITEM: &str = "\n--- There is no to-do item with that number. ---";
pub const MSG_NOT_VALID: &str = "\n--- Your command is not valid. ---";
pub const MSG_INVALID: &str = "\n--- Invalid Command. ---";
pub const MSG_GOODBYE: &str = "\n\n--- Thank you for using this app. Goodbye! ---\n";

/// Greeting printed when the command loop starts.
pub fn format_greeting<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("\nIt is, {}.", now.format("%b %d, %Y %H:%M:%S"))
}

/// Confirmation after `complete`.
pub fn format_removed(text: &str) -> String {
    format!(
        "\n--- \"{}\" removed from the To-do list successfully. ---",
        text
    )
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoListJson {
    pub file: String,
    pub todos: Vec<String>,
}

pub fn list_to_json(file: &str, lines: &[String]) -> TodoListJson {
    TodoListJson {
        file: file.to_string(),
        todos: lines.iter().map(|l| display_text(l).to_string()).collect(),
    }
}

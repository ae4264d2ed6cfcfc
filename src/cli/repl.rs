//! The interactive command loop.
//!
//! Each command reloads the list from the backing file, mutates it in memory
//! and writes the whole list back. Input and output are generic so the loop
//! can be driven from tests.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::cli::output::*;
use crate::io::storage::{StorageError, TodoFile};
use crate::ops::todo_ops::{self, TodoError};

/// Error type for the command loop
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("terminal i/o: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Todo(#[from] TodoError),
}

/// A parsed input line. Keywords are matched by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Add(&'a str),
    Show,
    Edit(&'a str),
    Complete(&'a str),
    Exit,
    Invalid,
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn parse_command(line: &str) -> ReplCommand<'_> {
    if let Some(rest) = line.strip_prefix("add") {
        ReplCommand::Add(skip_separator(rest))
    } else if line.starts_with("show") {
        ReplCommand::Show
    } else if let Some(rest) = line.strip_prefix("edit") {
        ReplCommand::Edit(skip_separator(rest))
    } else if let Some(rest) = line.strip_prefix("complete") {
        ReplCommand::Complete(skip_separator(rest))
    } else if line == "exit" {
        ReplCommand::Exit
    } else {
        ReplCommand::Invalid
    }
}

/// Drop the one character separating a keyword from its argument.
fn skip_separator(rest: &str) -> &str {
    let mut chars = rest.chars();
    chars.next();
    chars.as_str()
}

pub struct Repl<'a, R, W> {
    file: &'a TodoFile,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(file: &'a TodoFile, input: R, out: W) -> Self {
        Repl { file, input, out }
    }

    /// Greet, then read and execute commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ReplError> {
        writeln!(self.out, "{}", format_greeting(&Local::now()))?;
        while let Some(line) = self.prompt(PROMPT)? {
            if self.execute(&line)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one trimmed input line.
    pub fn execute(&mut self, line: &str) -> Result<Flow, ReplError> {
        tracing::debug!(command = line, "repl command");
        match parse_command(line) {
            ReplCommand::Add(text) => {
                let mut lines = self.load()?;
                todo_ops::add(&mut lines, text);
                self.file.write(&lines)?;
            }
            ReplCommand::Show => {
                let lines = self.load()?;
                if lines.is_empty() {
                    writeln!(self.out, "{}", MSG_EMPTY)?;
                } else {
                    writeln!(self.out)?;
                    for row in todo_ops::numbered(&lines) {
                        writeln!(self.out, "{}", row)?;
                    }
                }
            }
            ReplCommand::Edit(arg) => return self.edit(arg),
            ReplCommand::Complete(arg) => self.complete(arg)?,
            ReplCommand::Exit => {
                writeln!(self.out, "{}", MSG_GOODBYE)?;
                return Ok(Flow::Exit);
            }
            ReplCommand::Invalid => writeln!(self.out, "{}", MSG_INVALID)?,
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self, arg: &str) -> Result<Flow, ReplError> {
        let number = match todo_ops::parse_number(arg) {
            Ok(n) => n,
            Err(_) => {
                writeln!(self.out, "{}", MSG_NOT_VALID)?;
                return Ok(Flow::Continue);
            }
        };
        let mut lines = self.load()?;
        // Out-of-range numbers never reach the prompt
        if todo_ops::resolve_index(number, lines.len()).is_err() {
            writeln!(self.out, "{}", MSG_NO_SUCH_ITEM)?;
            return Ok(Flow::Continue);
        }
        let Some(text) = self.prompt(EDIT_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let old = todo_ops::edit(&mut lines, number, &text)?;
        tracing::debug!(old = old.as_str(), new = text.as_str(), "edited to-do");
        self.file.write(&lines)?;
        Ok(Flow::Continue)
    }

    fn complete(&mut self, arg: &str) -> Result<(), ReplError> {
        let number = match todo_ops::parse_number(arg) {
            Ok(n) => n,
            Err(_) => {
                writeln!(self.out, "{}", MSG_NOT_VALID)?;
                return Ok(());
            }
        };
        let mut lines = self.load()?;
        match todo_ops::complete(&mut lines, number) {
            Ok(removed) => {
                self.file.write(&lines)?;
                writeln!(self.out, "{}", format_removed(&removed))?;
            }
            Err(TodoError::OutOfRange(_)) => writeln!(self.out, "{}", MSG_NO_SUCH_ITEM)?,
            Err(e) => writeln!(self.out, "\n--- {} ---", e)?,
        }
        Ok(())
    }

    /// Fresh copy of the list; creates the backing file if it is missing.
    fn load(&mut self) -> Result<Vec<String>, ReplError> {
        let loaded = self.file.load_or_create()?;
        if loaded.created {
            writeln!(self.out, "{}", MSG_FILE_CREATED)?;
        }
        Ok(loaded.lines)
    }

    /// Print `text`, read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

/// Print the list once in `show` format.
pub fn print_listing<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        writeln!(out, "{}", MSG_EMPTY.trim_start())?;
        return Ok(());
    }
    for row in todo_ops::numbered(lines) {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

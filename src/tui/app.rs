use std::io;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::storage::{StorageError, TodoFile};
use crate::model::config::{AppConfig, UiConfig};
use crate::model::todo::to_stored_lines;
use crate::ops::todo_ops::{self, TodoError};

use super::input;
use super::render;
use super::theme::Theme;

pub const WARN_BLANK_ADD: &str = "The field is blank. There is nothing to add.";
pub const WARN_BLANK_UPDATE: &str = "The field is blank. There is nothing to update.";
pub const WARN_UNCHANGED: &str =
    "The value of this todo item remains unchanged. There is nothing to update.";
pub const WARN_SELECT_TO_EDIT: &str = "Please select a to-do item from the list to edit it.";
pub const WARN_SELECT_TO_COMPLETE: &str =
    "Please select a to-do item from the list to mark it as complete.";

/// Which widget receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// A blocking warning dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

/// Window state: the session's list plus input, selection and clock.
pub struct App {
    pub file: TodoFile,
    /// Task texts, trimmed
    pub todos: Vec<String>,
    /// Text of the chosen list item; resolved by first match
    pub selected: Option<String>,
    /// Highlighted row in the list
    pub cursor: usize,
    /// First visible list row
    pub list_scroll: usize,
    pub focus: Focus,
    pub input: String,
    /// Byte offset into `input`
    pub input_cursor: usize,
    pub warning: Option<Warning>,
    pub now: DateTime<Local>,
    pub clock_format: String,
    pub date_format: String,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(file: TodoFile, todos: Vec<String>, ui: &UiConfig, now: DateTime<Local>) -> Self {
        App {
            file,
            todos,
            selected: None,
            cursor: 0,
            list_scroll: 0,
            focus: Focus::Input,
            input: String::new(),
            input_cursor: 0,
            warning: None,
            now,
            clock_format: ui.clock_format.clone(),
            date_format: ui.date_format.clone(),
            theme: Theme::from_config(ui),
            should_quit: false,
        }
    }

    /// Load the list once for the session, creating the file if needed.
    pub fn load(file: TodoFile, ui: &UiConfig, now: DateTime<Local>) -> Result<Self, StorageError> {
        let loaded = file.load_or_create()?;
        let todos = loaded.lines.iter().map(|l| l.trim().to_string()).collect();
        Ok(App::new(file, todos, ui, now))
    }

    pub fn clock_text(&self) -> String {
        self.now.format(&self.clock_format).to_string()
    }

    pub fn date_text(&self) -> String {
        self.now.format(&self.date_format).to_string()
    }

    /// Advance the clock. Returns true when the displayed time changed.
    pub fn tick(&mut self, now: DateTime<Local>) -> bool {
        let before = self.clock_text();
        self.now = now;
        before != self.clock_text()
    }

    /// Index of the selected item (first match).
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        todo_ops::position_of(&self.todos, selected)
    }

    pub fn warn(&mut self, message: &str) {
        self.warning = Some(Warning {
            title: "Warning".to_string(),
            message: message.to_string(),
        });
    }

    // -----------------------------------------------------------------------
    // List cursor and selection
    // -----------------------------------------------------------------------

    /// Move the list cursor by `delta` rows; the item under it becomes selected.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.todos.is_empty() {
            return;
        }
        let last = self.todos.len() - 1;
        let target = self.cursor.saturating_add_signed(delta).min(last);
        if target != self.cursor || self.selected.is_none() {
            self.cursor = target;
            self.select_current();
        }
    }

    /// Select the item under the cursor.
    pub fn select_current(&mut self) {
        self.selected = self.todos.get(self.cursor).cloned();
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Add the input as a new item, or update the selected item with it.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let result = match self.selected.as_deref() {
            None => todo_ops::add_item(&mut self.todos, &self.input),
            Some(selected) => {
                todo_ops::update_item(&mut self.todos, selected, &self.input).map(|_| ())
            }
        };
        if let Err(e) = result {
            let message = match e {
                TodoError::Blank if self.selected.is_none() => WARN_BLANK_ADD,
                TodoError::Blank => WARN_BLANK_UPDATE,
                TodoError::Unchanged => WARN_UNCHANGED,
                _ => WARN_SELECT_TO_EDIT,
            };
            self.warn(message);
        }
        self.persist()
    }

    /// Put the selected item's text into the input for modification.
    pub fn edit(&mut self) {
        match self.selected.clone() {
            None => self.warn(WARN_SELECT_TO_EDIT),
            Some(text) => {
                self.input_cursor = text.len();
                self.input = text;
                self.focus = Focus::Input;
            }
        }
    }

    /// Remove the selected item.
    pub fn complete(&mut self) -> Result<(), StorageError> {
        let Some(selected) = self.selected.clone() else {
            self.warn(WARN_SELECT_TO_COMPLETE);
            return Ok(());
        };
        if todo_ops::remove_item(&mut self.todos, &selected).is_err() {
            self.warn(WARN_SELECT_TO_COMPLETE);
        }
        self.persist()
    }

    /// Clear the input and drop the selection.
    pub fn clear(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.selected = None;
    }

    /// Rewrite the whole file from the session list and reset the input.
    fn persist(&mut self) -> Result<(), StorageError> {
        self.file.write(&to_stored_lines(&self.todos))?;
        self.clear();
        self.cursor = self.cursor.min(self.todos.len().saturating_sub(1));
        Ok(())
    }
}

/// Run the window until the user exits
pub fn run(file: TodoFile, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load(file, &config.ui, Local::now())?;
    let tick = Duration::from_millis(config.ui.tick_ms.max(10));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key)?;
        }

        app.tick(Local::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

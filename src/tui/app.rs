use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::model::{Config, TaskId};
use crate::ops::search::highlight_regex;
use crate::ops::task_ops::TaskStore;
use crate::ops::view::{BoardView, PriorityFilter};
use crate::util::unicode;

use super::form::AddForm;
use super::input;
use super::render;
use super::theme::Theme;

/// Single-line text buffer with a byte-offset cursor on a grapheme boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

impl From<&str> for TextInput {
    /// Buffer holding `text` with the cursor at the end
    fn from(text: &str) -> Self {
        TextInput {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }
}

/// The top-level modal. Only one can be open at a time.
#[derive(Debug, Clone, Default)]
pub enum Modal {
    #[default]
    Idle,
    /// Add-task form with its staged draft
    AddTask(AddForm),
    /// Waiting for the user to confirm deleting this task
    ConfirmDelete(TaskId),
}

/// An in-progress inline title edit
#[derive(Debug, Clone)]
pub struct InlineEdit {
    pub task_id: TaskId,
    pub input: TextInput,
}

/// Where list-level keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search bar
    Search,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub modal: Modal,
    /// Independent of `modal`: at most one row edited at a time
    pub editing: Option<InlineEdit>,
    /// Filter popover: `Some(highlighted choice)` when open
    pub filter_popup: Option<usize>,
    pub priority_filter: PriorityFilter,
    pub search: TextInput,
    pub mode: Mode,
    /// Cursor index into the visible rows (pending then completed)
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Reference date for due labels and the due-date minimum
    pub today: NaiveDate,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: TaskStore::new(),
            modal: Modal::Idle,
            editing: None,
            filter_popup: None,
            priority_filter: PriorityFilter::All,
            search: TextInput::new(),
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            today: Local::now().date_naive(),
        }
    }

    /// Search, filter, split and sort the current tasks
    pub fn board(&self) -> BoardView<'_> {
        BoardView::derive(self.store.tasks(), self.search.text(), self.priority_filter)
    }

    /// Regex for highlighting the active search in titles
    pub fn search_re(&self) -> Option<Regex> {
        highlight_regex(self.search.text())
    }

    /// Whether search or the priority filter is narrowing the board
    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty() || self.priority_filter != PriorityFilter::All
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.board().row(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the visible rows
    pub fn clamp_cursor(&mut self) {
        let len = self.board().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Move the cursor onto a task if it is visible
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(pos) = self.board().position(id) {
            self.cursor = pos;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.board().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    // --- Add ---

    pub fn open_add_form(&mut self) {
        if matches!(self.modal, Modal::Idle) {
            self.modal = Modal::AddTask(AddForm::new());
        }
    }

    /// Commit the staged draft. Does nothing (form stays open) while the
    /// draft is invalid.
    pub fn submit_add_form(&mut self) {
        let Modal::AddTask(form) = &self.modal else {
            return;
        };
        let draft = match form.validate(self.today) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!(reason = %e, "add disabled");
                return;
            }
        };
        self.modal = Modal::Idle;
        if let Some(id) = self.store.add_task(draft) {
            self.select_task(id);
        }
        self.clamp_cursor();
    }

    // --- Delete ---

    pub fn request_delete(&mut self) {
        if !matches!(self.modal, Modal::Idle) {
            return;
        }
        if let Some(id) = self.cursor_task_id() {
            self.modal = Modal::ConfirmDelete(id);
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Modal::ConfirmDelete(id) = self.modal {
            self.modal = Modal::Idle;
            self.store.delete_task(id);
            if self.editing.as_ref().is_some_and(|e| e.task_id == id) {
                self.editing = None;
            }
            self.clamp_cursor();
        }
    }

    /// Close whatever modal is open without touching the store
    pub fn cancel_modal(&mut self) {
        self.modal = Modal::Idle;
    }

    // --- Toggle ---

    pub fn toggle_cursor_task(&mut self) {
        if let Some(id) = self.cursor_task_id() {
            self.store.toggle_complete(id);
            self.clamp_cursor();
        }
    }

    // --- Inline edit ---

    /// Start editing the title under the cursor, replacing any other edit
    pub fn begin_edit(&mut self) {
        let Some(task) = self.board().row(self.cursor) else {
            return;
        };
        let edit = InlineEdit {
            task_id: task.id,
            input: TextInput::from(task.title.as_str()),
        };
        self.editing = Some(edit);
    }

    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            self.store.update_title(edit.task_id, edit.input.text());
            self.clamp_cursor();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // --- Filter / search ---

    pub fn open_filter_popup(&mut self) {
        let current = PriorityFilter::CHOICES
            .iter()
            .position(|c| *c == self.priority_filter)
            .unwrap_or(0);
        self.filter_popup = Some(current);
    }

    pub fn set_filter(&mut self, filter: PriorityFilter) {
        self.priority_filter = filter;
        self.filter_popup = None;
        tracing::debug!(filter = %filter, "priority filter set");
        self.clamp_cursor();
    }

    /// Called after every search keystroke
    pub fn search_changed(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }
}

/// Run the TUI application
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

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

    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(tasks = app.store.len(), "session ended, discarding tasks");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.today = Local::now().date_naive();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

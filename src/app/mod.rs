mod edit_mode;
mod entry_ops;
mod navigation;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::storage::{self, TodoEntry, TodoStore};

/// Columns reserved left of the entry text for the pointer and checkbox glyphs.
pub const TODO_OFFSET: usize = 6;

/// Rows below the list: status bar and message line.
pub const STATUS_LINES: usize = 2;

/// Longest status message kept, in bytes.
pub const STATUS_MESSAGE_MAX: usize = 79;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkMode {
    #[default]
    Normal,
    Insert,
}

/// How the current insert session was started. Decides where the cursor
/// goes if the session ends on an empty entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionMode {
    #[default]
    After,
    Before,
    Current,
}

/// `x` is a screen column; in insert mode `x - TODO_OFFSET` is the byte
/// offset into the current entry. `y` is an entry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub x: usize,
    pub y: usize,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: TODO_OFFSET,
            y: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub row_offset: usize,
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl ViewState {
    /// Geometry for a window of `rows` x `cols`, leaving room for the status lines.
    #[must_use]
    pub fn for_window(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            screen_rows: rows.saturating_sub(STATUS_LINES).max(1),
            screen_cols: cols,
        }
    }
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a char.
#[must_use]
pub fn prefix_within(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub time: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, time: Instant) -> Self {
        let mut text = text.into();
        let end = prefix_within(&text, STATUS_MESSAGE_MAX).len();
        text.truncate(end);
        Self { text, time }
    }

    #[must_use]
    pub fn is_visible(&self, now: Instant, timeout: Duration) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.time) < timeout
    }
}

pub struct App {
    pub store: TodoStore,
    pub cursor: CursorState,
    pub view: ViewState,
    pub mode: WorkMode,
    pub insertion: InsertionMode,
    pub status_message: Option<StatusMessage>,
    pub path: Option<PathBuf>,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    /// Creates an app for a `rows` x `cols` window, loading the list at `path` if given.
    pub fn new(
        config: Config,
        path: Option<PathBuf>,
        rows: usize,
        cols: usize,
    ) -> io::Result<Self> {
        let store = match path.as_deref() {
            Some(path) => {
                let store = storage::load_todos(path)?;
                log::info!(
                    "loaded {} entries ({} done) from {}",
                    store.len(),
                    store.done_count(),
                    path.display()
                );
                store
            }
            None => {
                log::info!("no list file, starting with an unsaved list");
                TodoStore::new()
            }
        };

        Ok(Self::with_store(config, store, path, rows, cols))
    }

    #[must_use]
    pub fn with_store(
        config: Config,
        store: TodoStore,
        path: Option<PathBuf>,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            store,
            cursor: CursorState::default(),
            view: ViewState::for_window(rows, cols),
            mode: WorkMode::Normal,
            insertion: InsertionMode::After,
            status_message: None,
            path,
            config,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&TodoEntry> {
        self.store.get(self.cursor.y)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(msg, Instant::now()));
    }

    /// Writes the list to its file and reports the outcome in the status line.
    /// Lists without a file are never saved.
    pub fn save(&mut self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };

        match storage::save_todos(path, &self.store) {
            Ok(written) => {
                log::debug!("saved {written} bytes");
                self.set_status(format!("{written} bytes written to disk"));
            }
            Err(e) => {
                log::warn!("save failed: {e}");
                self.set_status(format!("Can't save I/O error: {e}"));
            }
        }
    }

    pub fn quit(&mut self) {
        log::info!("quit requested");
        self.should_quit = true;
    }
}

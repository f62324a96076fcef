#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Instant;

use tempfile::TempDir;

use todos::app::{App, WorkMode};
use todos::config::Config;
use todos::handlers;
use todos::input::{self, Key};
use todos::ui;

pub const ROWS: usize = 12;
pub const COLS: usize = 60;

pub struct TestContext {
    pub app: App,
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_content("")
    }

    pub fn with_content(content: &str) -> Self {
        Self::with_window(content, ROWS, COLS)
    }

    pub fn with_window(content: &str, rows: usize, cols: usize) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let list_path = temp_dir.path().join("todos.txt");
        std::fs::write(&list_path, content).expect("Failed to write list");

        let app = App::new(Config::default(), Some(list_path), rows, cols)
            .expect("Failed to create app");

        Self { app, temp_dir }
    }

    pub fn press(&mut self, key: Key) {
        handlers::handle_key(&mut self.app, key);
    }

    /// Feeds raw terminal bytes through the decoder, one key at a time.
    pub fn feed(&mut self, bytes: &[u8]) {
        let mut input = bytes;
        while !input.is_empty() {
            let key = input::read_key(&mut input).expect("decode failed");
            self.press(key);
        }
    }

    pub fn type_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.press(Key::Char(byte));
        }
    }

    pub fn render(&mut self) -> String {
        let frame = ui::render_frame(&mut self.app, Instant::now());
        String::from_utf8_lossy(&frame).into_owned()
    }

    pub fn screen_contains(&mut self, text: &str) -> bool {
        self.render().contains(text)
    }

    pub fn status_contains(&self, text: &str) -> bool {
        self.app
            .status_message
            .as_ref()
            .is_some_and(|s| s.text.contains(text))
    }

    pub fn list_path(&self) -> PathBuf {
        self.temp_dir.path().join("todos.txt")
    }

    pub fn read_list(&self) -> String {
        std::fs::read_to_string(self.list_path()).unwrap_or_default()
    }

    pub fn texts(&self) -> Vec<String> {
        self.app
            .store
            .iter()
            .map(|e| String::from_utf8_lossy(&e.text).into_owned())
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.app.store.len()
    }

    pub fn selected_index(&self) -> usize {
        self.app.cursor.y
    }

    pub fn is_insert(&self) -> bool {
        self.app.mode == WorkMode::Insert
    }

    /// Verify invariants that must always hold after any operation.
    pub fn verify_invariants(&mut self) {
        self.verify_counts();
        self.verify_selection_bounds();
        self.verify_cursor_bounds();
        self.verify_scroll_window();
    }

    fn verify_counts(&self) {
        let store = &self.app.store;
        assert_eq!(
            store.done_count() + store.pending_count(),
            store.len(),
            "done {} + pending {} != count {}",
            store.done_count(),
            store.pending_count(),
            store.len()
        );
        assert_eq!(store.recount(), (store.done_count(), store.pending_count()));
    }

    fn verify_selection_bounds(&self) {
        let count = self.entry_count();
        let selected = self.selected_index();
        if count > 0 {
            assert!(
                selected < count,
                "Selection {} out of bounds (entry_count={})",
                selected,
                count
            );
        } else {
            assert_eq!(selected, 0, "Selection {} on an empty list", selected);
        }
    }

    fn verify_cursor_bounds(&self) {
        if !self.is_insert() {
            return;
        }
        let entry = self
            .app
            .current_entry()
            .expect("Insert mode without a current entry");
        let x = self.app.cursor.x;
        let offset = todos::app::TODO_OFFSET;
        assert!(
            x >= offset && x <= offset + entry.size(),
            "Cursor column {} outside text (size={})",
            x,
            entry.size()
        );
    }

    fn verify_scroll_window(&mut self) {
        self.render();
        let view = self.app.view;
        let y = self.app.cursor.y;
        assert!(
            view.row_offset <= y && y < view.row_offset + view.screen_rows,
            "Cursor row {} outside window starting at {} ({} rows)",
            y,
            view.row_offset,
            view.screen_rows
        );
    }
}

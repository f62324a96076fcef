use crate::input::Direction;

use super::{App, InsertionMode, TODO_OFFSET, WorkMode};

impl App {
    /// Adds a blank entry next to the cursor row and starts editing it.
    ///
    /// `After` places it below the cursor row and moves the cursor down onto
    /// it; `Before` places it at the cursor row, pushing that row down.
    pub fn create_todo(&mut self, insertion: InsertionMode) {
        self.insertion = insertion;

        let y = self.cursor.y;
        let at = match insertion {
            InsertionMode::After => y + 1,
            InsertionMode::Before | InsertionMode::Current => y,
        }
        .min(self.store.len());

        self.store.insert(at, b"", false);

        if insertion == InsertionMode::After && self.store.len() > y + 1 {
            self.cursor.y += 1;
        }

        self.cursor.x = TODO_OFFSET;
        self.mode = WorkMode::Insert;
    }

    /// Starts editing the current entry with the cursor after its last byte.
    pub fn edit_current(&mut self) {
        let Some(entry) = self.current_entry() else {
            return;
        };
        self.cursor.x = entry.size() + TODO_OFFSET;
        self.insertion = InsertionMode::Current;
        self.mode = WorkMode::Insert;
    }

    /// Leaves insert mode. An entry left empty is dropped; anything else is saved.
    pub fn end_insert(&mut self) {
        self.mode = WorkMode::Normal;

        let is_empty = self.current_entry().is_none_or(|entry| entry.is_empty());
        if !is_empty {
            self.save();
            return;
        }

        self.store.remove(self.cursor.y);
        match self.insertion {
            InsertionMode::After => self.move_cursor(Direction::Up),
            InsertionMode::Before => {}
            // The emptied entry was already on disk.
            InsertionMode::Current => self.save(),
        }
        self.clamp_cursor();
    }

    /// Commits the current entry and immediately opens another one, so
    /// several entries can be typed in one go. Does nothing on an empty entry.
    pub fn chain_insert(&mut self, insertion: InsertionMode) {
        if self.current_entry().is_none_or(|entry| entry.is_empty()) {
            return;
        }
        self.save();
        self.create_todo(insertion);
    }

    fn text_offset(&self) -> usize {
        self.cursor.x.saturating_sub(TODO_OFFSET)
    }

    pub fn insert_char(&mut self, byte: u8) {
        if self.current_entry().is_none() {
            return;
        }
        self.store.insert_char(self.cursor.y, self.text_offset(), byte);
        self.cursor.x += 1;
    }

    /// Removes the byte left of the cursor.
    pub fn delete_char_before(&mut self) {
        if self.cursor.x <= TODO_OFFSET {
            return;
        }
        if self
            .store
            .delete_char(self.cursor.y, self.text_offset() - 1)
            .is_some()
        {
            self.cursor.x -= 1;
        }
    }

    /// Removes the byte under the cursor. At the end of the text there is
    /// nothing under it, so the byte before the cursor goes instead.
    pub fn delete_char_under(&mut self) {
        let at_end = self
            .current_entry()
            .is_some_and(|entry| self.text_offset() >= entry.size());
        if at_end {
            self.delete_char_before();
        } else {
            self.store.delete_char(self.cursor.y, self.text_offset());
        }
    }
}

use crate::input::Direction;

use super::{App, TODO_OFFSET, WorkMode};

impl App {
    /// Left/Right move within the entry text and only apply in insert mode.
    /// Up/Down move between entries and only apply in normal mode.
    pub fn move_cursor(&mut self, direction: Direction) {
        match (direction, self.mode) {
            (Direction::Left, WorkMode::Insert) => {
                if self.cursor.x > TODO_OFFSET {
                    self.cursor.x -= 1;
                }
            }
            (Direction::Right, WorkMode::Insert) => {
                if let Some(entry) = self.current_entry()
                    && self.cursor.x < entry.size() + TODO_OFFSET
                {
                    self.cursor.x += 1;
                }
            }
            (Direction::Up, WorkMode::Normal) => {
                self.cursor.y = self.cursor.y.saturating_sub(1);
            }
            (Direction::Down, WorkMode::Normal) => {
                if self.cursor.y + 1 < self.store.len() {
                    self.cursor.y += 1;
                }
            }
            _ => {}
        }
    }

    /// Moves half a screen up or down.
    pub fn page(&mut self, direction: Direction) {
        for _ in 0..self.view.screen_rows / 2 {
            self.move_cursor(direction);
        }
    }

    pub fn jump_to_first(&mut self) {
        self.cursor.y = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.cursor.y = self.store.len().saturating_sub(1);
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.x = TODO_OFFSET;
    }

    pub fn move_to_line_end(&mut self) {
        if let Some(entry) = self.current_entry() {
            self.cursor.x = entry.size() + TODO_OFFSET;
        }
    }

    /// Pulls the cursor back onto the last entry after the list shrank.
    pub(super) fn clamp_cursor(&mut self) {
        self.cursor.y = self.cursor.y.min(self.store.len().saturating_sub(1));
    }
}

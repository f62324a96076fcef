use crate::input::Direction;

use super::App;

impl App {
    pub fn toggle_current_entry(&mut self) {
        if self.store.toggle(self.cursor.y).is_some() {
            self.save();
        }
    }

    /// Deletes the entry under the cursor. With `move_up_first` the cursor
    /// steps up before deleting, so Backspace removes the row above.
    pub fn delete_current_entry(&mut self, move_up_first: bool) {
        if move_up_first {
            self.move_cursor(Direction::Up);
        }
        if self.store.remove(self.cursor.y).is_some() {
            self.clamp_cursor();
            self.save();
        }
    }
}

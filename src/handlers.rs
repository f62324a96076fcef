use crate::app::{App, InsertionMode, WorkMode};
use crate::input::{BACKSPACE, Direction, ENTER, Key, ctrl_key};

const QUIT: u8 = ctrl_key(b'q');
const CTRL_H: u8 = ctrl_key(b'h');
const CTRL_L: u8 = ctrl_key(b'l');

/// Routes one key to the handler for the current work mode.
pub fn handle_key(app: &mut App, key: Key) {
    match app.mode {
        WorkMode::Normal => handle_normal_key(app, key),
        WorkMode::Insert => handle_insert_key(app, key),
    }
}

pub fn handle_normal_key(app: &mut App, key: Key) {
    match key {
        Key::Char(ENTER) => app.create_todo(InsertionMode::After),
        Key::AltEnter => app.create_todo(InsertionMode::Before),
        Key::Char(QUIT) => app.quit(),
        Key::Char(b'e') => app.edit_current(),
        Key::Char(b' ') => app.toggle_current_entry(),
        Key::Home => app.jump_to_first(),
        Key::End => app.jump_to_last(),
        Key::Delete => app.delete_current_entry(false),
        Key::Char(BACKSPACE) => app.delete_current_entry(true),
        Key::PageUp => app.page(Direction::Up),
        Key::PageDown => app.page(Direction::Down),
        Key::Arrow(direction) => app.move_cursor(direction),
        Key::Tab => app.move_cursor(Direction::Down),
        Key::ShiftTab => app.move_cursor(Direction::Up),
        _ => {}
    }
}

pub fn handle_insert_key(app: &mut App, key: Key) {
    match key {
        Key::Escape | Key::Char(ENTER) => app.end_insert(),
        Key::Tab => app.chain_insert(InsertionMode::After),
        Key::ShiftTab => app.chain_insert(InsertionMode::Before),
        Key::PageUp | Key::PageDown | Key::AltEnter | Key::Char(CTRL_L) => {}
        Key::Home => app.move_to_line_start(),
        Key::End => app.move_to_line_end(),
        Key::Char(BACKSPACE | CTRL_H) => app.delete_char_before(),
        Key::Delete => app.delete_char_under(),
        Key::Arrow(direction) => app.move_cursor(direction),
        Key::Char(byte) if is_insertable(byte) => app.insert_char(byte),
        Key::Char(_) => {}
    }
}

/// Printable ASCII and any byte of a multi-byte UTF-8 sequence.
fn is_insertable(byte: u8) -> bool {
    byte >= b' ' && byte != BACKSPACE
}

use std::time::Instant;

use crate::app::{App, TODO_OFFSET, WorkMode, prefix_within};
use crate::storage::TodoEntry;

use super::scroll::ensure_row_visible;
use super::theme;

#[must_use]
pub fn welcome_banner() -> String {
    format!("Todo App -- version {}", env!("CARGO_PKG_VERSION"))
}

/// Builds one complete frame for the current state. Scrolls first so the
/// cursor row is on screen.
pub fn render_frame(app: &mut App, now: Instant) -> Vec<u8> {
    ensure_row_visible(
        &mut app.view.row_offset,
        app.cursor.y,
        app.view.screen_rows,
    );

    let mut frame = Vec::new();
    frame.extend_from_slice(theme::HIDE_CURSOR);
    frame.extend_from_slice(theme::CURSOR_HOME);

    draw_rows(app, &mut frame);
    draw_status_bar(app, &mut frame);
    draw_status_message(app, now, &mut frame);

    let row = app.cursor.y.saturating_sub(app.view.row_offset) + 1;
    let col = app.cursor.x + 1;
    frame.extend_from_slice(&theme::cursor_to(row, col));

    if app.mode == WorkMode::Insert {
        frame.extend_from_slice(theme::SHOW_CURSOR);
    }

    frame
}

fn draw_rows(app: &App, frame: &mut Vec<u8>) {
    for screen_row in 0..app.view.screen_rows {
        let index = screen_row + app.view.row_offset;

        match app.store.get(index) {
            Some(entry) => draw_entry(app, entry, index, frame),
            None if app.store.is_empty() && screen_row == 0 => {
                draw_welcome(app.view.screen_cols, frame);
            }
            None => frame.push(theme::FILLER),
        }

        frame.extend_from_slice(theme::CLEAR_LINE);
        frame.extend_from_slice(b"\r\n");
    }
}

fn draw_welcome(cols: usize, frame: &mut Vec<u8>) {
    let welcome = welcome_banner();
    let length = welcome.len().min(cols);

    let mut padding = (cols - length) / 2;
    if padding > 0 {
        frame.push(theme::FILLER);
        padding -= 1;
    }
    frame.resize(frame.len() + padding, b' ');
    frame.extend_from_slice(&welcome.as_bytes()[..length]);
}

fn draw_entry(app: &App, entry: &TodoEntry, index: usize, frame: &mut Vec<u8>) {
    let pointer = if index != app.cursor.y {
        b' '
    } else if app.mode == WorkMode::Normal {
        theme::POINTER_NORMAL
    } else {
        theme::POINTER_INSERT
    };
    let glyph = if entry.done {
        theme::DONE_GLYPH
    } else {
        theme::PENDING_GLYPH
    };

    frame.extend_from_slice(b"  ");
    frame.push(pointer);
    frame.push(b' ');
    frame.push(glyph);
    frame.push(b' ');

    let length = entry
        .size()
        .min(app.view.screen_cols.saturating_sub(TODO_OFFSET));

    for &byte in &entry.text[..length] {
        if entry.done && is_printable(byte) {
            frame.extend_from_slice(theme::DONE_START);
            frame.push(byte);
            frame.extend_from_slice(theme::DONE_END);
        } else {
            frame.push(byte);
        }
    }
}

fn is_printable(byte: u8) -> bool {
    (b' '..=b'~').contains(&byte)
}

/// Reverse-video line: `row - pending/done/total`, padded to the full width.
fn draw_status_bar(app: &App, frame: &mut Vec<u8>) {
    let cols = app.view.screen_cols;
    let status = format!(
        "{:2} - {:2}/{:2}/{:2}",
        app.cursor.y + 1,
        app.store.pending_count(),
        app.store.done_count(),
        app.store.len()
    );
    let length = status.len().min(cols);

    frame.extend_from_slice(theme::REVERSE_VIDEO);
    frame.extend_from_slice(&status.as_bytes()[..length]);
    frame.resize(frame.len() + (cols - length), b' ');
    frame.extend_from_slice(theme::RESET_VIDEO);
    frame.extend_from_slice(b"\r\n");
}

fn draw_status_message(app: &App, now: Instant, frame: &mut Vec<u8>) {
    frame.extend_from_slice(theme::CLEAR_LINE);

    let Some(message) = &app.status_message else {
        return;
    };
    if !message.is_visible(now, app.config.status_timeout()) {
        return;
    }

    let shown = prefix_within(&message.text, app.view.screen_cols);
    frame.extend_from_slice(shown.as_bytes());
}

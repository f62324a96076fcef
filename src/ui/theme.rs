// Cursor
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

// Clearing
pub const CLEAR_LINE: &[u8] = b"\x1b[K";

// Status bar
pub const REVERSE_VIDEO: &[u8] = b"\x1b[7m";
pub const RESET_VIDEO: &[u8] = b"\x1b[m";

// Done entries: struck through in magenta, one byte at a time
pub const DONE_START: &[u8] = b"\x1b[9m\x1b[35m";
pub const DONE_END: &[u8] = b"\x1b[30m\x1b[0m";

/// Pointer glyph drawn on the cursor row.
pub const POINTER_NORMAL: u8 = b'>';
pub const POINTER_INSERT: u8 = b'*';

pub const PENDING_GLYPH: u8 = b'-';
pub const DONE_GLYPH: u8 = b' ';

/// Filler for rows past the end of the list.
pub const FILLER: u8 = b'~';

/// Absolute cursor position, 1-based.
#[must_use]
pub fn cursor_to(row: usize, col: usize) -> Vec<u8> {
    format!("\x1b[{row};{col}H").into_bytes()
}

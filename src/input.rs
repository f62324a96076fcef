//! Decodes raw terminal bytes into keys.

use std::io;

pub const ESC: u8 = 0x1b;
pub const ENTER: u8 = b'\r';
pub const TAB: u8 = b'\t';
pub const BACKSPACE: u8 = 127;

/// Byte produced by pressing Ctrl together with `key`.
#[must_use]
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(u8),
    Arrow(Direction),
    Home,
    End,
    Delete,
    PageUp,
    PageDown,
    Tab,
    ShiftTab,
    AltEnter,
    Escape,
}

/// Source of single input bytes.
///
/// `Ok(None)` means no byte is available right now (timeout or would-block).
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl ByteSource for &[u8] {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.split_first() {
            Some((&byte, rest)) => {
                *self = rest;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

/// Blocks until one key has been read.
///
/// Would-block and interrupted reads are retried; any other read error is
/// returned to the caller.
pub fn read_key<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Key> {
    let byte = loop {
        match source.read_byte() {
            Ok(Some(byte)) => break byte,
            Ok(None) => continue,
            Err(e) if is_retryable(&e) => continue,
            Err(e) => return Err(e),
        }
    };

    Ok(match byte {
        ESC => decode_escape(source),
        TAB => Key::Tab,
        other => Key::Char(other),
    })
}

fn is_retryable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

/// Continuation bytes that do not arrive right away end the sequence.
fn lookahead<S: ByteSource + ?Sized>(source: &mut S) -> Option<u8> {
    source.read_byte().ok().flatten()
}

fn decode_escape<S: ByteSource + ?Sized>(source: &mut S) -> Key {
    let Some(first) = lookahead(source) else {
        return Key::Escape;
    };
    if first == ENTER {
        return Key::AltEnter;
    }
    let Some(second) = lookahead(source) else {
        return Key::Escape;
    };

    match (first, second) {
        (b'[', digit @ b'0'..=b'9') => match lookahead(source) {
            Some(b'~') => numeric_key(digit),
            _ => Key::Escape,
        },
        (b'[', letter) => csi_letter_key(letter),
        (b'O', b'H') => Key::Home,
        (b'O', b'F') => Key::End,
        _ => Key::Escape,
    }
}

fn numeric_key(digit: u8) -> Key {
    match digit {
        b'1' | b'7' => Key::Home,
        b'3' => Key::Delete,
        b'4' | b'8' => Key::End,
        b'5' => Key::PageUp,
        b'6' => Key::PageDown,
        _ => Key::Escape,
    }
}

fn csi_letter_key(letter: u8) -> Key {
    match letter {
        b'A' => Key::Arrow(Direction::Up),
        b'B' => Key::Arrow(Direction::Down),
        b'C' => Key::Arrow(Direction::Right),
        b'D' => Key::Arrow(Direction::Left),
        b'H' => Key::Home,
        b'F' => Key::End,
        b'Z' => Key::ShiftTab,
        _ => Key::Escape,
    }
}

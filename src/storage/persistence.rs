use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;

use super::entries::TodoStore;

/// Parses one line of the list file (without its line terminator).
/// Returns `(done, text)` for `"- text"` and `"  text"`, `None` otherwise.
#[must_use]
pub fn parse_line(line: &[u8]) -> Option<(bool, &[u8])> {
    if line.len() <= 2 || line[1] != b' ' {
        return None;
    }
    match line[0] {
        b'-' => Some((true, &line[2..])),
        b' ' => Some((false, &line[2..])),
        _ => None,
    }
}

fn strip_line_ending(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}

/// Builds a store from list file content, skipping lines that do not parse.
#[must_use]
pub fn parse_todos(content: &[u8]) -> TodoStore {
    let mut store = TodoStore::new();
    for line in content.split_inclusive(|&b| b == b'\n') {
        if let Some((done, text)) = parse_line(strip_line_ending(line)) {
            store.push(text, done);
        }
    }
    store
}

#[must_use]
pub fn serialize_todos(store: &TodoStore) -> Vec<u8> {
    let length: usize = store.iter().map(|e| e.size() + 3).sum();
    let mut out = Vec::with_capacity(length);
    for entry in store.iter() {
        out.push(entry.marker());
        out.push(b' ');
        out.extend_from_slice(&entry.text);
        out.push(b'\n');
    }
    out
}

/// Loads the list at `path`, creating an empty file if none exists.
pub fn load_todos(path: &Path) -> io::Result<TodoStore> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;

    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(parse_todos(&content))
}

/// Overwrites `path` with the serialized store and returns the number of bytes written.
pub fn save_todos(path: &Path, store: &TodoStore) -> io::Result<usize> {
    let content = serialize_todos(store);
    let mut file = OpenOptions::new().write(true).create(true).open(path)?;
    file.set_len(content.len() as u64)?;
    file.write_all(&content)?;
    Ok(content.len())
}

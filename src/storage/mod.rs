mod entries;
mod persistence;

pub use entries::{TodoEntry, TodoStore};

pub use persistence::{load_todos, parse_line, parse_todos, save_todos, serialize_todos};

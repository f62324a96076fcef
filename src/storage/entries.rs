/// A single line of the list. Text is kept as raw bytes so files that are
/// not valid UTF-8 survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoEntry {
    pub text: Vec<u8>,
    pub done: bool,
}

impl TodoEntry {
    #[must_use]
    pub fn new(text: &[u8], done: bool) -> Self {
        Self {
            text: text.to_vec(),
            done,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Line prefix byte in the list file: `-` for done, space for pending.
    #[must_use]
    pub fn marker(&self) -> u8 {
        if self.done { b'-' } else { b' ' }
    }
}

/// Ordered list of entries with running done/pending counts.
///
/// Every mutation goes through the methods below, which keep
/// `done_count() + pending_count() == len()`.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    entries: Vec<TodoEntry>,
    done: usize,
    pending: usize,
}

impl TodoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn done_count(&self) -> usize {
        self.done
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    #[must_use]
    pub fn get(&self, at: usize) -> Option<&TodoEntry> {
        self.entries.get(at)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoEntry> {
        self.entries.iter()
    }

    /// Inserts an entry at `at`, shifting later entries down.
    /// Out-of-range positions are ignored.
    pub fn insert(&mut self, at: usize, text: &[u8], done: bool) {
        if at > self.entries.len() {
            return;
        }
        self.entries.insert(at, TodoEntry::new(text, done));
        if done {
            self.done += 1;
        } else {
            self.pending += 1;
        }
    }

    pub fn push(&mut self, text: &[u8], done: bool) {
        self.insert(self.entries.len(), text, done);
    }

    pub fn remove(&mut self, at: usize) -> Option<TodoEntry> {
        if at >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(at);
        if entry.done {
            self.done -= 1;
        } else {
            self.pending -= 1;
        }
        Some(entry)
    }

    /// Flips the done flag. Returns the new state, or `None` when `at` is out of range.
    pub fn toggle(&mut self, at: usize) -> Option<bool> {
        let entry = self.entries.get_mut(at)?;
        entry.done = !entry.done;
        if entry.done {
            self.done += 1;
            self.pending -= 1;
        } else {
            self.done -= 1;
            self.pending += 1;
        }
        Some(entry.done)
    }

    /// Inserts one byte into entry `at`. An offset past the end appends.
    pub fn insert_char(&mut self, at: usize, offset: usize, byte: u8) {
        if let Some(entry) = self.entries.get_mut(at) {
            let offset = offset.min(entry.text.len());
            entry.text.insert(offset, byte);
        }
    }

    /// Removes the byte at `offset` from entry `at`, if there is one.
    pub fn delete_char(&mut self, at: usize, offset: usize) -> Option<u8> {
        let entry = self.entries.get_mut(at)?;
        if offset >= entry.text.len() {
            return None;
        }
        Some(entry.text.remove(offset))
    }

    /// Counts done and pending entries from scratch as `(done, pending)`.
    /// Diagnostic only; the running counters are not touched.
    #[must_use]
    pub fn recount(&self) -> (usize, usize) {
        let done = self.entries.iter().filter(|e| e.done).count();
        (done, self.entries.len() - done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_counts_consistent(store: &TodoStore) {
        assert_eq!(store.done_count() + store.pending_count(), store.len());
        assert_eq!(store.recount(), (store.done_count(), store.pending_count()));
    }

    #[test]
    fn insert_shifts_and_counts() {
        let mut store = TodoStore::new();
        store.insert(0, b"b", false);
        store.insert(0, b"a", true);
        store.insert(2, b"c", false);

        let texts: Vec<&[u8]> = store.iter().map(|e| e.text.as_slice()).collect();
        assert_eq!(texts, [&b"a"[..], &b"b"[..], &b"c"[..]]);
        assert_eq!(store.done_count(), 1);
        assert_eq!(store.pending_count(), 2);
        assert_counts_consistent(&store);
    }

    #[test]
    fn insert_out_of_range_is_ignored() {
        let mut store = TodoStore::new();
        store.insert(1, b"nope", false);
        assert!(store.is_empty());
        assert_eq!(store.pending_count(), 0);
    }

    #[test]
    fn remove_updates_matching_counter() {
        let mut store = TodoStore::new();
        store.push(b"one", true);
        store.push(b"two", false);

        let removed = store.remove(0).unwrap();
        assert_eq!(removed.text, b"one");
        assert_eq!(store.done_count(), 0);
        assert_eq!(store.pending_count(), 1);

        assert!(store.remove(5).is_none());
        assert_counts_consistent(&store);
    }

    #[test]
    fn toggle_twice_restores_counts() {
        let mut store = TodoStore::new();
        store.push(b"task", false);
        store.push(b"other", true);

        assert_eq!(store.toggle(0), Some(true));
        assert_eq!((store.done_count(), store.pending_count()), (2, 0));
        assert_eq!(store.toggle(0), Some(false));
        assert_eq!((store.done_count(), store.pending_count()), (1, 1));
        assert_eq!(store.toggle(9), None);
    }

    #[test]
    fn insert_char_clamps_offset() {
        let mut store = TodoStore::new();
        store.push(b"ac", false);
        store.insert_char(0, 1, b'b');
        store.insert_char(0, 99, b'd');
        assert_eq!(store.get(0).unwrap().text, b"abcd");
        assert_eq!(store.get(0).unwrap().size(), 4);
    }

    #[test]
    fn insert_then_delete_is_identity() {
        let mut store = TodoStore::new();
        store.push(b"hello", false);
        for offset in 0..=5 {
            store.insert_char(0, offset, b'x');
            assert_eq!(store.delete_char(0, offset), Some(b'x'));
            assert_eq!(store.get(0).unwrap().text, b"hello");
        }
    }

    #[test]
    fn delete_char_out_of_range_is_ignored() {
        let mut store = TodoStore::new();
        store.push(b"ab", false);
        assert_eq!(store.delete_char(0, 2), None);
        assert_eq!(store.delete_char(3, 0), None);
        assert_eq!(store.get(0).unwrap().text, b"ab");
    }

    #[test]
    fn counts_hold_through_mixed_operations() {
        let mut store = TodoStore::new();
        let ops: [(u8, usize); 12] = [
            (b'i', 0),
            (b'i', 1),
            (b't', 0),
            (b'i', 0),
            (b'r', 2),
            (b't', 1),
            (b't', 1),
            (b'i', 2),
            (b'r', 0),
            (b't', 0),
            (b'r', 7),
            (b'r', 0),
        ];
        for (op, at) in ops {
            match op {
                b'i' => store.insert(at, b"x", at % 2 == 0),
                b'r' => {
                    store.remove(at);
                }
                _ => {
                    store.toggle(at);
                }
            }
            assert_counts_consistent(&store);
        }
    }
}

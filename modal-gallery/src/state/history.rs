//! Navigation history.

use super::types::HistoryEntry;

/// Linear history with a cursor, like a browser tab.
///
/// Always holds at least one entry: the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    past: Vec<HistoryEntry>,
    current: HistoryEntry,
    future: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new(initial: HistoryEntry) -> Self {
        Self {
            past: Vec::new(),
            current: initial,
            future: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.current
    }

    /// Add an entry after the current one, dropping any forward entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.future.clear();
        let previous = std::mem::replace(&mut self.current, entry);
        self.past.push(previous);
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, entry: HistoryEntry) {
        self.current = entry;
    }

    /// Step back. Returns `false` at the first entry.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, previous);
        self.future.push(current);
        true
    }

    /// Step forward. Returns `false` at the last entry.
    pub fn forward(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, next);
        self.past.push(current);
        true
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of entries, current included.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }
}

//! Bounded undo/redo history.
//!
//! Each recorded entry is the full state *before* an edit. Document
//! snapshots share rope nodes with the live text, so an entry costs roughly
//! the size of the edit rather than the document.
//!
//! ```text
//!  undo: [s0, s1, s2] ◄── record(s3)      redo: []
//!  undo(current=s4) → s2, redo: [s4]
//! ```

use std::collections::VecDeque;

/// Default number of undo steps kept.
pub const DEFAULT_CAPACITY: usize = 100;

pub struct History<S> {
    undo: VecDeque<S>,
    redo: Vec<S>,
    capacity: usize,
    /// Monotonic edit counter.
    version: u64,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<S> History<S> {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            redo: Vec::new(),
            capacity: capacity.max(1),
            version: 0,
        }
    }

    /// Record the state preceding a new edit. Clears the redo stack and
    /// drops the oldest entry when full.
    pub fn record(&mut self, before: S) {
        self.undo.push_back(before);
        if self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        self.redo.clear();
        self.version += 1;
    }

    /// Step back. `current` becomes redoable.
    pub fn undo(&mut self, current: S) -> Option<S> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        self.version += 1;
        Some(previous)
    }

    /// Step forward. `current` becomes undoable again.
    pub fn redo(&mut self, current: S) -> Option<S> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        self.version += 1;
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Bumped by every record, undo and redo.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_sequence() {
        let mut history = History::new(10);
        history.record("a");
        history.record("ab");
        // live state is "abc"
        assert_eq!(history.undo("abc"), Some("ab"));
        assert_eq!(history.undo("ab"), Some("a"));
        assert_eq!(history.undo("a"), None);
        assert_eq!(history.redo("a"), Some("ab"));
        assert_eq!(history.redo("ab"), Some("abc"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(10);
        history.record(1);
        assert_eq!(history.undo(2), Some(1));
        assert!(history.can_redo());
        history.record(1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.record(i);
        }
        assert_eq!(history.undo(5), Some(4));
        assert_eq!(history.undo(4), Some(3));
        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), None);
    }

    #[test]
    fn test_version_is_monotonic() {
        let mut history = History::new(3);
        history.record(0);
        let v = history.version();
        history.undo(1);
        assert!(history.version() > v);
        let v = history.version();
        assert_eq!(history.undo(0), None);
        assert_eq!(history.version(), v);
    }
}

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open character range `[start, start + length)`.
///
/// A zero length is a bare caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn caret(position: usize) -> Self {
        Self::new(position, 0)
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn is_caret(&self) -> bool {
        self.length == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Clamp to a buffer of `len` characters.
    pub fn clamp(self, len: usize) -> Self {
        let start = self.start.min(len);
        let length = self.length.min(len - start);
        Self { start, length }
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

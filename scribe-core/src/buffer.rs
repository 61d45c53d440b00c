//! The formatting-query capability the style resolver depends on.

use crate::style::{CharFormat, FontDescriptor};
use std::ops::Range;

/// Read access to per-character fonts of a formatted text.
///
/// Positions are character indices (not bytes). Implementors must return a
/// font for every position below [`len`](Self::len).
pub trait FormattedTextBuffer {
    /// Number of characters.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Font in effect at `position`. Panics if `position >= len()`.
    fn font_at(&self, position: usize) -> &FontDescriptor;

    /// Fallback font substituted for mixed family or size.
    fn default_font(&self) -> &FontDescriptor;

    /// Font a caret at `position` would type with.
    fn insertion_font(&self, position: usize) -> &FontDescriptor {
        let len = self.len();
        if position < len {
            self.font_at(position)
        } else if len > 0 {
            self.font_at(len - 1)
        } else {
            self.default_font()
        }
    }
}

/// A contiguous span of characters sharing one format.
#[derive(Clone, Debug, PartialEq)]
pub struct FormattingRun<'a> {
    pub range: Range<usize>,
    pub format: &'a CharFormat,
}

impl FormattingRun<'_> {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

//! Rope-backed text with formatting spans and paragraph alignments.
//!
//! ```text
//!  text   │H e l l o ␤ w o r l d│        (ropey, char indexed)
//!  spans  │ 3 bold  │ 8 plain     │        (cover every char once)
//!  paras  │ Left      │ Center    │        (one per '\n' + 1)
//! ```

use crate::buffer::FormattingRun;
use crate::style::{Alignment, CharFormat};
use ropey::Rope;
use std::borrow::Cow;
use std::ops::{Range, RangeInclusive};

/// A run length paired with its format.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub len: usize,
    pub format: CharFormat,
}

impl Span {
    pub fn new(len: usize, format: CharFormat) -> Self {
        Self { len, format }
    }
}

/// Replace `\r\n` and lone `\r` with `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Content {
    text: Rope,
    spans: Vec<Span>,
    /// Start offset of each span, rebuilt by `normalize`.
    starts: Vec<usize>,
    paragraphs: Vec<Alignment>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            text: Rope::new(),
            spans: Vec::new(),
            starts: Vec::new(),
            paragraphs: vec![Alignment::Left],
        }
    }
}

impl Content {
    pub fn from_text(text: &str, format: &CharFormat) -> Self {
        let mut content = Self::default();
        content.insert(0, text, format);
        content
    }

    /// Assemble from pre-built parts. `paragraphs` must hold one entry per
    /// line of `text` and `spans` must cover it exactly.
    pub fn from_parts(text: &str, spans: Vec<Span>, paragraphs: Vec<Alignment>) -> Self {
        let mut content = Self {
            text: Rope::from_str(text),
            spans,
            starts: Vec::new(),
            paragraphs,
        };
        content.normalize();
        debug_assert_eq!(content.paragraphs.len(), content.text.len_lines());
        content
    }

    pub fn len(&self) -> usize {
        self.text.len_chars()
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }

    pub fn slice_text(&self, range: Range<usize>) -> String {
        self.text.slice(range).to_string()
    }

    pub fn format_at(&self, position: usize) -> &CharFormat {
        &self.spans[self.span_index(position)].format
    }

    pub fn runs(&self) -> impl Iterator<Item = FormattingRun<'_>> + '_ {
        self.starts
            .iter()
            .zip(&self.spans)
            .map(|(&start, span)| FormattingRun {
                range: start..start + span.len,
                format: &span.format,
            })
    }

    #[cfg(test)]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    // ---------------------------------------------------------------
    // Paragraphs
    // ---------------------------------------------------------------

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn paragraph_of(&self, position: usize) -> usize {
        self.text.char_to_line(position)
    }

    /// Character range of a paragraph, excluding its trailing `\n`.
    pub fn paragraph_range(&self, paragraph: usize) -> Range<usize> {
        let start = self.text.line_to_char(paragraph);
        let line = self.text.line(paragraph);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }
        start..start + len
    }

    pub fn alignment(&self, paragraph: usize) -> Alignment {
        self.paragraphs[paragraph]
    }

    #[cfg(test)]
    pub fn alignments(&self) -> &[Alignment] {
        &self.paragraphs
    }

    /// Paragraphs touched by `range`.
    pub fn paragraphs_in(&self, range: Range<usize>) -> RangeInclusive<usize> {
        let first = self.paragraph_of(range.start);
        let last = if range.end > range.start {
            self.paragraph_of(range.end - 1)
        } else {
            first
        };
        first..=last
    }

    /// Set the alignment of `paragraphs`. Returns whether anything changed.
    pub fn set_alignment(&mut self, paragraphs: RangeInclusive<usize>, alignment: Alignment) -> bool {
        let mut changed = false;
        for slot in &mut self.paragraphs[paragraphs] {
            if *slot != alignment {
                *slot = alignment;
                changed = true;
            }
        }
        changed
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    pub fn insert(&mut self, position: usize, text: &str, format: &CharFormat) {
        let text = normalize_newlines(text);
        let len = text.chars().count();
        self.insert_spans(position, &text, vec![Span::new(len, format.clone())]);
    }

    /// Insert `text` formatted by `spans` (whose lengths must sum to the
    /// character count of `text`).
    pub fn insert_spans(&mut self, position: usize, text: &str, spans: Vec<Span>) {
        if text.is_empty() {
            return;
        }
        debug_assert_eq!(spans.iter().map(|s| s.len).sum::<usize>(), text.chars().count());

        let paragraph = self.paragraph_of(position);
        let breaks = text.matches('\n').count();
        let inherited = self.paragraphs[paragraph];
        self.paragraphs.splice(
            paragraph + 1..paragraph + 1,
            std::iter::repeat(inherited).take(breaks),
        );

        let index = self.split_at(position);
        self.spans.splice(index..index, spans);
        self.text.insert(position, text);
        self.normalize();
    }

    pub fn remove(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let first = self.paragraph_of(range.start);
        let breaks = self.text.slice(range.clone()).chars().filter(|&c| c == '\n').count();
        self.paragraphs.drain(first + 1..first + 1 + breaks);

        let from = self.split_at(range.start);
        let to = self.split_at(range.end);
        self.spans.drain(from..to);
        self.text.remove(range);
        self.normalize();
    }

    /// Apply `edit` to the format of every character in `range`.
    pub fn apply<F>(&mut self, range: Range<usize>, mut edit: F)
    where
        F: FnMut(&mut CharFormat),
    {
        if range.is_empty() {
            return;
        }
        let from = self.split_at(range.start);
        let to = self.split_at(range.end);
        for span in &mut self.spans[from..to] {
            edit(&mut span.format);
        }
        self.normalize();
    }

    /// Spans covering `range`, clipped to it.
    pub fn spans_in(&self, range: Range<usize>) -> Vec<Span> {
        self.runs()
            .filter_map(|run| {
                let start = run.range.start.max(range.start);
                let end = run.range.end.min(range.end);
                (start < end).then(|| Span::new(end - start, run.format.clone()))
            })
            .collect()
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    fn span_index(&self, position: usize) -> usize {
        debug_assert!(position < self.len(), "position {position} out of bounds");
        self.starts.partition_point(|&start| start <= position) - 1
    }

    /// Ensure a span boundary at `position`; returns the index of the span
    /// starting there (or `spans.len()` at the end of the text).
    fn split_at(&mut self, position: usize) -> usize {
        if position >= self.len() {
            return self.spans.len();
        }
        let index = self.span_index(position);
        let offset = position - self.starts[index];
        if offset == 0 {
            return index;
        }
        let tail = Span::new(self.spans[index].len - offset, self.spans[index].format.clone());
        self.spans[index].len = offset;
        self.spans.insert(index + 1, tail);
        self.starts.insert(index + 1, position);
        index + 1
    }

    /// Drop empty spans, merge equal neighbours, rebuild `starts`.
    fn normalize(&mut self) {
        let mut merged: Vec<Span> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if span.len == 0 {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.format == span.format => last.len += span.len,
                _ => merged.push(span),
            }
        }
        self.spans = merged;

        self.starts.clear();
        let mut offset = 0;
        for span in &self.spans {
            self.starts.push(offset);
            offset += span.len;
        }
        debug_assert_eq!(offset, self.text.len_chars());
    }
}

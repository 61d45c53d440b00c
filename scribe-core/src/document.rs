//! The editable rich-text document.
//!
//! `RichText` owns the text, its formatting runs, paragraph alignments, the
//! current selection and the undo history. It never calls out to a UI;
//! instead it queues [`DocumentEvent`]s that a presentation layer drains
//! and reacts to.

use crate::buffer::{FormattedTextBuffer, FormattingRun};
use crate::clipboard::Fragment;
use crate::content::{normalize_newlines, Content, Span};
use crate::error::EditError;
use crate::history::History;
use crate::links::{detect_links, Link};
use crate::resolver::Shared;
use crate::selection::Selection;
use crate::style::{Alignment, CharFormat, Color, FontDescriptor, StyleFlags};
use std::collections::VecDeque;
use std::ops::Range;

/// Notifications emitted by a [`RichText`].
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentEvent {
    /// The selection moved, or the text or formatting under it changed.
    SelectionChanged(Selection),
    /// Text, formatting or alignment changed.
    ContentChanged,
}

#[derive(Clone)]
struct Snapshot {
    content: Content,
    selection: Selection,
}

/// A formatted text with a selection and undo history.
pub struct RichText {
    content: Content,
    default_format: CharFormat,
    /// Format for the next typed text, set by style changes at a caret.
    typing_format: Option<CharFormat>,
    selection: Selection,
    history: History<Snapshot>,
    events: VecDeque<DocumentEvent>,
    /// History version at the last save.
    saved_version: u64,
    read_only: bool,
}

impl Default for RichText {
    fn default() -> Self {
        Self::new(CharFormat::default())
    }
}

impl RichText {
    pub fn new(default_format: CharFormat) -> Self {
        Self::from_content(Content::default(), default_format)
    }

    pub fn from_plain_text(text: &str, default_format: CharFormat) -> Self {
        let content = Content::from_text(text, &default_format);
        Self::from_content(content, default_format)
    }

    fn from_content(content: Content, default_format: CharFormat) -> Self {
        Self {
            content,
            default_format,
            typing_format: None,
            selection: Selection::default(),
            history: History::default(),
            events: VecDeque::new(),
            saved_version: 0,
            read_only: false,
        }
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.len() == 0
    }

    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn slice_text(&self, range: Range<usize>) -> String {
        self.content.slice_text(range)
    }

    pub fn runs(&self) -> impl Iterator<Item = FormattingRun<'_>> + '_ {
        self.content.runs()
    }

    /// Panics if `position >= len()`.
    pub fn format_at(&self, position: usize) -> &CharFormat {
        self.content.format_at(position)
    }

    pub fn paragraph_count(&self) -> usize {
        self.content.paragraph_count()
    }

    pub fn paragraph_range(&self, paragraph: usize) -> Range<usize> {
        self.content.paragraph_range(paragraph)
    }

    pub fn alignment_of(&self, paragraph: usize) -> Alignment {
        self.content.alignment(paragraph)
    }

    pub fn default_format(&self) -> &CharFormat {
        &self.default_format
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_text(&self) -> String {
        self.content.slice_text(self.selection.range())
    }

    /// Format new text typed at the caret would receive.
    pub fn insertion_format(&self) -> &CharFormat {
        self.insertion_format_at(self.selection.start)
    }

    fn insertion_format_at(&self, position: usize) -> &CharFormat {
        if let Some(typing) = &self.typing_format {
            if position == self.selection.start {
                return typing;
            }
        }
        let len = self.len();
        if position < len {
            self.content.format_at(position)
        } else if len > 0 {
            self.content.format_at(len - 1)
        } else {
            &self.default_format
        }
    }

    /// Colour of the selection, `Mixed` when characters differ.
    pub fn selection_color(&self) -> Shared<Color> {
        let selection = self.selection;
        if selection.length <= 1 {
            return Shared::Uniform(self.insertion_format_at(selection.start).color);
        }
        let mut color = Shared::Uniform(self.content.format_at(selection.start).color);
        for run in self.content.runs() {
            if run.range.end > selection.start && run.range.start < selection.end() {
                color.merge(&run.format.color);
            }
        }
        color
    }

    /// Alignment of the paragraphs under the selection.
    pub fn selection_alignment(&self) -> Shared<Alignment> {
        let paragraphs = self.content.paragraphs_in(self.selection.range());
        let mut alignment = Shared::Uniform(self.content.alignment(*paragraphs.start()));
        for paragraph in paragraphs {
            alignment.merge(&self.content.alignment(paragraph));
        }
        alignment
    }

    pub fn links(&self) -> Vec<Link> {
        detect_links(&self.content.text())
    }

    pub fn link_at(&self, position: usize) -> Option<Link> {
        self.links()
            .into_iter()
            .find(|link| link.range.contains(&position))
    }

    pub fn is_modified(&self) -> bool {
        self.history.version() != self.saved_version
    }

    /// Clear the modified flag, e.g. after saving.
    pub fn mark_saved(&mut self) {
        self.saved_version = self.history.version();
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<DocumentEvent> {
        self.events.drain(..).collect()
    }

    // ---------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------

    /// Select `[start, start + length)`, clamped to the text.
    pub fn set_selection(&mut self, start: usize, length: usize) {
        let selection = Selection::new(start, length).clamp(self.len());
        if selection != self.selection {
            self.typing_format = None;
            self.selection = selection;
            self.events.push_back(DocumentEvent::SelectionChanged(selection));
        }
    }

    pub fn select_all(&mut self) {
        self.set_selection(0, self.len());
    }

    // ---------------------------------------------------------------
    // Editing
    // ---------------------------------------------------------------

    /// Replace the selection with `text` typed in the insertion format.
    pub fn replace_selection(&mut self, text: &str) -> Result<(), EditError> {
        self.ensure_writable()?;
        let text = normalize_newlines(text);
        let selection = self.selection;
        if text.is_empty() && selection.is_caret() {
            return Ok(());
        }

        let format = self.insertion_format().clone();
        self.record();
        self.content.remove(selection.range());
        self.content.insert(selection.start, &text, &format);
        self.finish_edit(Selection::caret(selection.start + text.chars().count()));
        Ok(())
    }

    pub fn delete_selection(&mut self) -> Result<(), EditError> {
        self.ensure_writable()?;
        let selection = self.selection;
        if selection.is_caret() {
            return Ok(());
        }
        self.record();
        self.content.remove(selection.range());
        self.finish_edit(Selection::caret(selection.start));
        Ok(())
    }

    /// Turn `flag` on or off for the selection.
    pub fn set_style(&mut self, flag: StyleFlags, on: bool) -> Result<(), EditError> {
        self.edit_format(|format| format.font.flags.set(flag, on))
    }

    pub fn set_font_family(&mut self, family: &str) -> Result<(), EditError> {
        let family = family.trim();
        if family.is_empty() {
            return Err(EditError::EmptyFontFamily);
        }
        self.edit_format(|format| format.font.family = family.to_string())
    }

    pub fn set_font_size(&mut self, size: f32) -> Result<(), EditError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(EditError::InvalidFontSize(size));
        }
        self.edit_format(|format| format.font.size = size)
    }

    pub fn set_color(&mut self, color: Color) -> Result<(), EditError> {
        self.edit_format(|format| format.color = color)
    }

    /// Align every paragraph the selection touches.
    pub fn set_alignment(&mut self, alignment: Alignment) -> Result<(), EditError> {
        self.ensure_writable()?;
        let paragraphs = self.content.paragraphs_in(self.selection.range());
        let before = self.snapshot();
        if !self.content.set_alignment(paragraphs, alignment) {
            return Ok(());
        }
        self.history.record(before);
        self.finish_edit(self.selection);
        Ok(())
    }

    /// Apply `edit` to the selection, or to the typing format at a caret.
    fn edit_format<F>(&mut self, mut edit: F) -> Result<(), EditError>
    where
        F: FnMut(&mut CharFormat),
    {
        self.ensure_writable()?;
        let selection = self.selection;

        if selection.is_caret() {
            let mut format = self.insertion_format().clone();
            edit(&mut format);
            self.typing_format = Some(format);
            self.events.push_back(DocumentEvent::SelectionChanged(selection));
            return Ok(());
        }

        self.record();
        self.content.apply(selection.range(), edit);
        self.finish_edit(selection);
        Ok(())
    }

    // ---------------------------------------------------------------
    // Undo / redo
    // ---------------------------------------------------------------

    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditError> {
        self.ensure_writable()?;
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, EditError> {
        self.ensure_writable()?;
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ---------------------------------------------------------------
    // Clipboard fragments
    // ---------------------------------------------------------------

    /// The selected text with its formatting, `None` for a caret.
    pub fn copy_fragment(&self) -> Option<Fragment> {
        let selection = self.selection;
        if selection.is_caret() {
            return None;
        }
        Some(Fragment {
            text: self.content.slice_text(selection.range()),
            spans: self.content.spans_in(selection.range()),
        })
    }

    pub fn cut_fragment(&mut self) -> Result<Option<Fragment>, EditError> {
        self.ensure_writable()?;
        let fragment = self.copy_fragment();
        if fragment.is_some() {
            self.delete_selection()?;
        }
        Ok(fragment)
    }

    /// Replace the selection with `fragment`, keeping its formatting.
    pub fn paste_fragment(&mut self, fragment: &Fragment) -> Result<(), EditError> {
        self.ensure_writable()?;
        let fragment = fragment.normalized(self.insertion_format());
        let selection = self.selection;
        if fragment.is_empty() && selection.is_caret() {
            return Ok(());
        }
        self.record();
        self.content.remove(selection.range());
        let len = fragment.len();
        self.content
            .insert_spans(selection.start, &fragment.text, fragment.spans);
        self.finish_edit(Selection::caret(selection.start + len));
        Ok(())
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    fn ensure_writable(&self) -> Result<(), EditError> {
        if self.read_only {
            return Err(EditError::ReadOnly);
        }
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            content: self.content.clone(),
            selection: self.selection,
        }
    }

    fn record(&mut self) {
        let before = self.snapshot();
        self.history.record(before);
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.content = snapshot.content;
        self.finish_edit(snapshot.selection.clamp(self.content.len()));
    }

    fn finish_edit(&mut self, selection: Selection) {
        self.typing_format = None;
        self.selection = selection;
        self.events.push_back(DocumentEvent::ContentChanged);
        self.events.push_back(DocumentEvent::SelectionChanged(selection));
    }
}

impl FormattedTextBuffer for RichText {
    fn len(&self) -> usize {
        self.content.len()
    }

    fn font_at(&self, position: usize) -> &FontDescriptor {
        &self.content.format_at(position).font
    }

    fn default_font(&self) -> &FontDescriptor {
        &self.default_format.font
    }

    fn insertion_font(&self, position: usize) -> &FontDescriptor {
        &self.insertion_format_at(position).font
    }
}

// ── Builder ─────────────────────────────────────────────────────────

/// Incremental construction of a [`RichText`], used by importers.
pub struct RichTextBuilder {
    text: String,
    spans: Vec<Span>,
    paragraphs: Vec<Alignment>,
    alignment: Alignment,
    default_format: CharFormat,
}

impl RichTextBuilder {
    pub fn new(default_format: CharFormat) -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
            paragraphs: Vec::new(),
            alignment: Alignment::Left,
            default_format,
        }
    }

    /// Alignment for the current paragraph (and following ones until changed).
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Append `text` in `format`. Each `\n` ends a paragraph.
    pub fn push(&mut self, text: &str, format: &CharFormat) {
        let text = normalize_newlines(text);
        let mut pieces = text.split('\n');
        if let Some(first) = pieces.next() {
            self.push_run(first, format);
        }
        for piece in pieces {
            self.end_paragraph(format);
            self.push_run(piece, format);
        }
    }

    /// Append a paragraph break; the finished paragraph takes the current
    /// alignment.
    pub fn end_paragraph(&mut self, format: &CharFormat) {
        self.paragraphs.push(self.alignment);
        self.push_run("\n", format);
    }

    fn push_run(&mut self, text: &str, format: &CharFormat) {
        if text.is_empty() {
            return;
        }
        self.text.push_str(text);
        self.spans.push(Span::new(text.chars().count(), format.clone()));
    }

    pub fn finish(mut self) -> RichText {
        self.paragraphs.push(self.alignment);
        let content = Content::from_parts(&self.text, self.spans, self.paragraphs);
        RichText::from_content(content, self.default_format)
    }
}

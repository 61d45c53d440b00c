//! Checked and enabled states of the toolbar items.

use scribe_core::{
    Alignment, Color, RichText, SelectionStyleResolver, Shared, StyleFlags,
};
use scribe_text::FontCatalog;
use serde::Serialize;

/// What the toolbar shows for the current selection.
///
/// Style buttons are checked only when the style covers the whole
/// selection. Family and size fall back to the document default when the
/// selection mixes several.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ToolbarState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
    pub align_left: bool,
    pub align_center: bool,
    pub align_right: bool,
    /// `None` when the selection mixes colours.
    pub color: Option<Color>,
    /// `None` when the family is not in the font catalog.
    pub font_family: Option<String>,
    pub font_size: f32,
    pub can_undo: bool,
    pub can_redo: bool,
    pub can_cut: bool,
    pub can_copy: bool,
    pub can_paste: bool,
}

impl ToolbarState {
    pub fn capture(document: &RichText, catalog: &FontCatalog, clipboard_filled: bool) -> Self {
        let selection = document.selection();
        let font = SelectionStyleResolver::effective_font(document, selection);
        let alignment = document.selection_alignment().into_uniform();
        let has_selection = !selection.is_caret();
        let writable = !document.is_read_only();

        Self {
            bold: font.flags.is_bold(),
            italic: font.flags.is_italic(),
            underline: font.flags.is_underline(),
            strikeout: font.flags.is_strikeout(),
            align_left: alignment == Some(Alignment::Left),
            align_center: alignment == Some(Alignment::Center),
            align_right: alignment == Some(Alignment::Right),
            color: match document.selection_color() {
                Shared::Uniform(color) => Some(color),
                Shared::Mixed => None,
            },
            font_family: catalog.canonical(&font.family).map(str::to_owned),
            font_size: font.size,
            can_undo: writable && document.can_undo(),
            can_redo: writable && document.can_redo(),
            can_cut: writable && has_selection,
            can_copy: has_selection,
            can_paste: writable && clipboard_filled,
        }
    }

    /// Checked state of the button for `flag`.
    pub fn is_checked(&self, flag: StyleFlags) -> bool {
        (!flag.is_bold() || self.bold)
            && (!flag.is_italic() || self.italic)
            && (!flag.is_underline() || self.underline)
            && (!flag.is_strikeout() || self.strikeout)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

use scribe_core::{Alignment, Color, Selection, StyleFlags};
use std::path::PathBuf;

/// A user action on the editor, from a toolbar item, menu entry or shortcut.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Flip a style relative to the toolbar's checked state.
    ToggleStyle(StyleFlags),
    SetStyle(StyleFlags, bool),
    Align(Alignment),
    SetFontFamily(String),
    /// Raw text from the font-size box; invalid text is ignored.
    SetFontSizeText(String),
    SetColor(Color),
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    /// Replace the selection with text, as if typed.
    InsertText(String),
    Select(Selection),
    SelectAll,
    Open(PathBuf),
    Save(PathBuf),
    /// Click at a character position; follows a link if one is there.
    ClickLink(usize),
}


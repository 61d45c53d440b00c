//! The command language of `--command` arguments.

use scribe_core::{Color, ParseColorError, Selection};
use scribe_toolbar::{Command, Item};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("command '{0}' needs a value, e.g. {0}=...")]
    MissingValue(String),
    #[error("invalid selection '{0}', expected START:LEN")]
    InvalidSelection(String),
    #[error("invalid position '{0}'")]
    InvalidPosition(String),
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
}

/// Parse `START:LEN`.
pub fn parse_selection(text: &str) -> Result<Selection, ScriptError> {
    let invalid = || ScriptError::InvalidSelection(text.to_string());
    let (start, length) = text.split_once(':').ok_or_else(invalid)?;
    let start = start.trim().parse().map_err(|_| invalid())?;
    let length = length.trim().parse().map_err(|_| invalid())?;
    Ok(Selection::new(start, length))
}

/// Parse one command, `name` or `name=value`.
pub fn parse_command(text: &str) -> Result<Command, ScriptError> {
    let (name, value) = match text.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value)),
        None => (text.trim(), None),
    };
    let required = || value.ok_or_else(|| ScriptError::MissingValue(name.to_string()));

    if let Some(command) = toolbar_item(name).and_then(Item::command) {
        return Ok(command);
    }
    let command = match name {
        "select-all" => Command::SelectAll,
        "font" => Command::SetFontFamily(required()?.to_string()),
        "size" => Command::SetFontSizeText(required()?.to_string()),
        "color" => Command::SetColor(required()?.trim().parse::<Color>()?),
        "insert" => Command::InsertText(unescape(required()?)),
        "select" => Command::Select(parse_selection(required()?)?),
        "click" => {
            let position = required()?;
            Command::ClickLink(
                position
                    .trim()
                    .parse()
                    .map_err(|_| ScriptError::InvalidPosition(position.to_string()))?,
            )
        }
        _ => return Err(ScriptError::UnknownCommand(text.to_string())),
    };
    Ok(command)
}

/// Toolbar buttons that can be pressed by name.
fn toolbar_item(name: &str) -> Option<Item> {
    let item = match name {
        "bold" => Item::Bold,
        "italic" => Item::Italic,
        "underline" => Item::Underline,
        "strikeout" => Item::Strikeout,
        "left" => Item::AlignLeft,
        "center" => Item::AlignCenter,
        "right" => Item::AlignRight,
        "undo" => Item::Undo,
        "redo" => Item::Redo,
        "cut" => Item::Cut,
        "copy" => Item::Copy,
        "paste" => Item::Paste,
        _ => return None,
    };
    Some(item)
}

/// Expand `\n`, `\t` and `\\`.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

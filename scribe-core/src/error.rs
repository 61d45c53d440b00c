use thiserror::Error;

/// Errors from editing operations on a [`RichText`](crate::RichText).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("document is read-only")]
    ReadOnly,
    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),
    #[error("font family name is empty")]
    EmptyFontFamily,
}

/// Errors from a [`Clipboard`](crate::Clipboard) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Errors while parsing RTF input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtfError {
    #[error("input is not an RTF document")]
    NotRtf,
    #[error("unbalanced group at offset {0}")]
    UnbalancedGroup(usize),
    #[error("unterminated document")]
    UnexpectedEnd,
    #[error("invalid hex escape at offset {0}")]
    InvalidHexEscape(usize),
}

/// Errors while loading or saving documents.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid file format: {0}")]
    InvalidFormat(#[from] RtfError),
}

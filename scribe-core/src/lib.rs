//! Scribe core: a toolkit-independent rich-text model.
//!
//! ```text
//!  ┌──────────────┐  edits   ┌──────────────────┐  font_at()  ┌─────────────────────────┐
//!  │ caller / UI  │ ───────► │ RichText         │ ──────────► │ SelectionStyleResolver  │
//!  └──────────────┘          │  rope + runs     │             │  → ResolvedStyle        │
//!         ▲                  │  paragraphs      │             └─────────────────────────┘
//!         │ drain_events()   │  History<...>    │
//!         └───────────────── │  DocumentEvent   │ ◄── io::load / io::save (text, RTF)
//!                            └──────────────────┘
//! ```
//!
//! The resolver only needs the [`FormattedTextBuffer`] capability, so it can
//! run against any storage that answers "which font is at position i".

pub mod buffer;
pub mod clipboard;
mod content;
pub mod document;
pub mod error;
pub mod history;
pub mod io;
pub mod links;
pub mod resolver;
pub mod rtf;
pub mod selection;
pub mod style;

pub use buffer::{FormattedTextBuffer, FormattingRun};
pub use clipboard::{Clipboard, Fragment, MemoryClipboard};
pub use content::Span;
pub use document::{DocumentEvent, RichText, RichTextBuilder};
pub use error::{ClipboardError, EditError, FileError, RtfError};
pub use history::History;
pub use io::DocumentFormat;
pub use links::Link;
pub use resolver::{ResolvedStyle, SelectionStyleResolver, Shared, MIXED_SIZE};
pub use selection::Selection;
pub use style::{
    Alignment, CharFormat, Color, FontDescriptor, ParseColorError, StyleFlags, DEFAULT_FAMILY,
    DEFAULT_SIZE,
};

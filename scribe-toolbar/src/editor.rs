//! The rich-text editor: document, clipboard and toolbar kept in step.
//!
//! ```text
//!   Command / KeyPress ──▸ execute() ──▸ RichText ──DocumentEvent──┐
//!                              │                                    │
//!                              ▼                                    ▼
//!                          Clipboard                  collect(): refresh ToolbarState
//!                                                                   │
//!                                   pump() ◂── EditorEvent queue ◂──┘
//! ```
//!
//! Nothing here talks to a window system. Hosts feed commands in, drain
//! [`EditorEvent`]s out, and render [`ToolbarState`] and [`Layout`] however
//! they like.

use crate::command::Command;
use crate::config::ToolbarConfig;
use crate::layout::{Layout, Surface};
use crate::shortcut::{accepts_typed_char, command_for, KeyPress};
use crate::state::ToolbarState;
use scribe_core::io;
use scribe_core::rtf::{read_rtf, write_rtf};
use scribe_core::{
    Clipboard, ClipboardError, DocumentEvent, EditError, FileError, MemoryClipboard, RichText,
    RtfError, Selection,
};
use scribe_text::{parse_size, FontCatalog};
use std::collections::VecDeque;
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------
// Events and errors
// ---------------------------------------------------------------

/// Notifications for the host.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    SelectionChanged(Selection),
    ContentChanged,
    /// A link was clicked; the host decides how to open it.
    LinkClicked(String),
    /// A message for the user, e.g. a failed load.
    Notify(String),
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("invalid RTF: {0}")]
    Rtf(#[from] RtfError),
}

// ---------------------------------------------------------------
// Editor
// ---------------------------------------------------------------

pub struct RichTextEditor<C: Clipboard = MemoryClipboard> {
    document: RichText,
    clipboard: C,
    catalog: FontCatalog,
    config: ToolbarConfig,
    toolbar: ToolbarState,
    events: VecDeque<EditorEvent>,
}

impl RichTextEditor<MemoryClipboard> {
    /// An editor with an in-process clipboard.
    pub fn with_config(config: ToolbarConfig, catalog: FontCatalog) -> Self {
        Self::new(config, catalog, MemoryClipboard::default())
    }
}

impl<C: Clipboard> RichTextEditor<C> {
    pub fn new(config: ToolbarConfig, catalog: FontCatalog, clipboard: C) -> Self {
        let mut document = RichText::new(config.default_format());
        document.set_read_only(config.read_only);
        let mut editor = Self {
            document,
            clipboard,
            catalog,
            config,
            toolbar: ToolbarState::default(),
            events: VecDeque::new(),
        };
        editor.refresh();
        editor
    }

    pub fn document(&self) -> &RichText {
        &self.document
    }

    /// Direct access for hosts that edit the document themselves. Changes
    /// surface on the next [`pump`](Self::pump).
    pub fn document_mut(&mut self) -> &mut RichText {
        &mut self.document
    }

    pub fn toolbar(&self) -> &ToolbarState {
        &self.toolbar
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn layout(&self, surface: Surface) -> Layout {
        Layout::build(&self.config, surface)
    }

    pub fn text(&self) -> String {
        self.document.text()
    }

    pub fn rtf(&self) -> String {
        write_rtf(&self.document)
    }

    /// Replace the whole document with parsed RTF.
    pub fn set_rtf(&mut self, rtf: &str) -> Result<(), EditorError> {
        let document = read_rtf(rtf, self.config.default_format())?;
        self.set_document(document);
        Ok(())
    }

    pub fn set_document(&mut self, mut document: RichText) {
        document.set_read_only(self.config.read_only);
        document.drain_events();
        self.document = document;
        self.events.push_back(EditorEvent::ContentChanged);
        self.events
            .push_back(EditorEvent::SelectionChanged(self.document.selection()));
        self.refresh();
    }

    // ---------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------

    pub fn execute(&mut self, command: Command) -> Result<(), EditorError> {
        log::debug!("Editor: execute {:?}", command);
        match command {
            Command::ToggleStyle(flag) => {
                let on = !self.toolbar.is_checked(flag);
                self.document.set_style(flag, on)?;
            }
            Command::SetStyle(flag, on) => self.document.set_style(flag, on)?,
            Command::Align(alignment) => self.document.set_alignment(alignment)?,
            Command::SetFontFamily(name) => {
                let family = self.catalog.canonical(&name).map(str::to_owned).unwrap_or(name);
                self.document.set_font_family(&family)?;
            }
            Command::SetFontSizeText(text) => match parse_size(&text) {
                Some(size) => self.document.set_font_size(size)?,
                None => log::warn!("Editor: ignoring font size {:?}", text),
            },
            Command::SetColor(color) => self.document.set_color(color)?,
            Command::Undo => {
                self.document.undo()?;
            }
            Command::Redo => {
                self.document.redo()?;
            }
            Command::Cut => self.cut()?,
            Command::Copy => self.copy()?,
            Command::Paste => self.paste(),
            Command::InsertText(text) => self.document.replace_selection(&text)?,
            Command::Select(selection) => {
                self.document.set_selection(selection.start, selection.length)
            }
            Command::SelectAll => self.document.select_all(),
            Command::Open(path) => self.open(&path),
            Command::Save(path) => io::save(&mut self.document, &path)?,
            Command::ClickLink(position) => self.click(position),
        }
        self.collect();
        self.refresh();
        Ok(())
    }

    /// Handle a key press. Returns whether it mapped to a command.
    pub fn key_down(&mut self, press: KeyPress) -> Result<bool, EditorError> {
        match command_for(press, self.config.accepts_tab) {
            Some(command) => {
                self.execute(command)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Type one character at the selection.
    pub fn type_char(&mut self, c: char) -> Result<(), EditorError> {
        if !accepts_typed_char(c) {
            return Ok(());
        }
        self.execute(Command::InsertText(c.to_string()))
    }

    // ---------------------------------------------------------------
    // Output
    // ---------------------------------------------------------------

    /// Take pending events, oldest first.
    pub fn pump(&mut self) -> Vec<EditorEvent> {
        self.collect();
        self.events.drain(..).collect()
    }

    /// Focus left the editor.
    pub fn leave(&mut self) {
        if self.document.is_modified() {
            self.events.push_back(EditorEvent::ContentChanged);
        }
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    fn cut(&mut self) -> Result<(), EditorError> {
        let Some(fragment) = self.document.copy_fragment() else {
            return Ok(());
        };
        if self.document.is_read_only() {
            return Err(EditError::ReadOnly.into());
        }
        self.clipboard.store(fragment)?;
        self.document.delete_selection()?;
        Ok(())
    }

    fn copy(&mut self) -> Result<(), EditorError> {
        if let Some(fragment) = self.document.copy_fragment() {
            self.clipboard.store(fragment)?;
        }
        Ok(())
    }

    fn paste(&mut self) {
        let result = match self.clipboard.fetch() {
            Ok(Some(fragment)) if !fragment.is_empty() => self
                .document
                .paste_fragment(&fragment)
                .map_err(EditorError::from),
            Ok(_) => {
                log::warn!("Editor: paste with an empty clipboard");
                self.notify("Nothing to paste");
                return;
            }
            Err(err) => Err(err.into()),
        };
        if let Err(err) = result {
            log::warn!("Editor: paste failed: {err}");
            self.notify("Paste failed");
        }
    }

    fn open(&mut self, path: &Path) {
        match io::load(path, self.config.default_format()) {
            Ok(document) => self.set_document(document),
            Err(err) => {
                log::warn!("Editor: cannot load {:?}: {err}", path);
                self.notify(format!("There was an error loading the file: {}", path.display()));
            }
        }
    }

    fn click(&mut self, position: usize) {
        if !self.config.detect_urls {
            return;
        }
        if let Some(link) = self.document.link_at(position) {
            log::info!("Editor: link clicked: {}", link.url);
            self.collect();
            self.events.push_back(EditorEvent::LinkClicked(link.url));
        }
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.collect();
        self.events.push_back(EditorEvent::Notify(message.into()));
    }

    /// Move document events into the editor queue.
    fn collect(&mut self) {
        let mut selection_moved = false;
        for event in self.document.drain_events() {
            match event {
                DocumentEvent::SelectionChanged(selection) => {
                    selection_moved = true;
                    self.events.push_back(EditorEvent::SelectionChanged(selection));
                }
                DocumentEvent::ContentChanged => self.events.push_back(EditorEvent::ContentChanged),
            }
        }
        if selection_moved {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let clipboard_filled = matches!(self.clipboard.fetch(), Ok(Some(fragment)) if !fragment.is_empty());
        self.toolbar = ToolbarState::capture(&self.document, &self.catalog, clipboard_filled);
        log::debug!("Editor: toolbar refreshed for {:?}", self.document.selection());
    }
}

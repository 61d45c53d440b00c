//! # scribe-toolbar
//!
//! Presentation logic for a formatting toolbar over a [`scribe_core::RichText`]:
//! which items are shown, which are checked, and what happens when one is
//! used. Rendering is left to the host.
//!
//! - **`config`**: [`ToolbarConfig`], loaded from JSON.
//! - **`layout`**: item groups and separators for the toolbar and context menu.
//! - **`state`**: [`ToolbarState`], the checked/enabled snapshot.
//! - **`command`** / **`shortcut`**: user actions and their key bindings.
//! - **`editor`**: [`RichTextEditor`], tying it all to a document and clipboard.

pub mod command;
pub mod config;
pub mod editor;
pub mod layout;
pub mod shortcut;
pub mod state;

pub use command::Command;
pub use config::{ConfigError, ToolbarConfig};
pub use editor::{EditorError, EditorEvent, RichTextEditor};
pub use layout::{Entry, Group, Item, Layout, Surface};
pub use shortcut::{Key, KeyPress, Modifiers};
pub use state::ToolbarState;

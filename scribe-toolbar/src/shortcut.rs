//! Keyboard shortcuts.

use crate::command::Command;
use bitflags::bitflags;
use scribe_core::StyleFlags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key, lowercase for letters.
    Char(char),
    Tab,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c.to_ascii_lowercase()), Modifiers::CTRL)
    }
}

/// Map a key press to an editor command.
///
/// Style and clipboard shortcuts fire only with Ctrl alone held. Tab
/// inserts a tab character when `accepts_tab` is set.
pub fn command_for(press: KeyPress, accepts_tab: bool) -> Option<Command> {
    if press.key == Key::Tab {
        return (accepts_tab && !press.modifiers.contains(Modifiers::CTRL))
            .then(|| Command::InsertText("\t".to_string()));
    }
    if press.modifiers != Modifiers::CTRL {
        return None;
    }
    let Key::Char(c) = press.key else {
        return None;
    };
    match c.to_ascii_lowercase() {
        'b' => Some(Command::ToggleStyle(StyleFlags::BOLD)),
        'i' => Some(Command::ToggleStyle(StyleFlags::ITALIC)),
        'u' => Some(Command::ToggleStyle(StyleFlags::UNDERLINE)),
        '-' => Some(Command::ToggleStyle(StyleFlags::STRIKEOUT)),
        'z' => Some(Command::Undo),
        'y' => Some(Command::Redo),
        'x' => Some(Command::Cut),
        'c' => Some(Command::Copy),
        'v' => Some(Command::Paste),
        'a' => Some(Command::SelectAll),
        _ => None,
    }
}

/// Whether a typed character reaches the document.
///
/// A raw HT is dropped: Ctrl+I produces one alongside its italic toggle,
/// and real tabs arrive through [`Key::Tab`].
pub fn accepts_typed_char(c: char) -> bool {
    c != '\t' && (!c.is_control() || c == '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_shortcuts() {
        assert_eq!(
            command_for(KeyPress::ctrl('B'), true),
            Some(Command::ToggleStyle(StyleFlags::BOLD))
        );
        assert_eq!(
            command_for(KeyPress::ctrl('-'), true),
            Some(Command::ToggleStyle(StyleFlags::STRIKEOUT))
        );
        assert_eq!(command_for(KeyPress::ctrl('z'), true), Some(Command::Undo));
    }

    #[test]
    fn test_extra_modifiers_do_not_match() {
        let press = KeyPress::new(Key::Char('b'), Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(command_for(press, true), None);
        assert_eq!(command_for(KeyPress::new(Key::Char('b'), Modifiers::empty()), true), None);
    }

    #[test]
    fn test_tab() {
        let tab = KeyPress::new(Key::Tab, Modifiers::empty());
        assert_eq!(command_for(tab, true), Some(Command::InsertText("\t".into())));
        assert_eq!(command_for(tab, false), None);
        assert_eq!(command_for(KeyPress::new(Key::Tab, Modifiers::CTRL), true), None);
    }

    #[test]
    fn test_typed_chars() {
        assert!(accepts_typed_char('a'));
        assert!(accepts_typed_char('\n'));
        assert!(!accepts_typed_char('\t'));
        assert!(!accepts_typed_char('\u{8}'));
    }
}

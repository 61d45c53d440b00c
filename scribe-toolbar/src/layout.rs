//! Toolbar and context-menu layout.
//!
//! Both surfaces are built from the same ordered groups. A separator is
//! placed after a group only when the group shows at least one item and
//! something visible follows it, so hiding items never leaves a dangling or
//! doubled separator.
//!
//! ```text
//!  [label] | [save open] | [font size color] | [B I U S] | [left center right] | [undo redo] | [cut copy paste]
//! ```

use crate::command::Command;
use crate::config::ToolbarConfig;
use scribe_core::{Alignment, StyleFlags};
use serde::Serialize;

/// Where a layout is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    Toolbar,
    ContextMenu,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Group {
    Label,
    File,
    Font,
    Style,
    Alignment,
    History,
    Clipboard,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::Label,
        Group::File,
        Group::Font,
        Group::Style,
        Group::Alignment,
        Group::History,
        Group::Clipboard,
    ];

    pub fn items(self) -> &'static [Item] {
        match self {
            Group::Label => &[Item::Label],
            Group::File => &[Item::Save, Item::Open],
            Group::Font => &[Item::FontFamily, Item::FontSize, Item::Color],
            Group::Style => &[Item::Bold, Item::Italic, Item::Underline, Item::Strikeout],
            Group::Alignment => &[Item::AlignLeft, Item::AlignCenter, Item::AlignRight],
            Group::History => &[Item::Undo, Item::Redo],
            Group::Clipboard => &[Item::Cut, Item::Copy, Item::Paste],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Item {
    Label,
    Save,
    Open,
    FontFamily,
    FontSize,
    Color,
    Bold,
    Italic,
    Underline,
    Strikeout,
    AlignLeft,
    AlignCenter,
    AlignRight,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
}

impl Item {
    pub fn is_visible(self, config: &ToolbarConfig) -> bool {
        match self {
            Item::Label => config.show_label,
            Item::Save => config.show_save,
            Item::Open => config.show_open,
            Item::FontFamily => config.show_font,
            Item::FontSize => config.show_font_size,
            Item::Color => config.show_colors,
            Item::Bold => config.show_bold,
            Item::Italic => config.show_italic,
            Item::Underline => config.show_underline,
            Item::Strikeout => config.show_strikeout,
            Item::AlignLeft => config.show_left_justify,
            Item::AlignCenter => config.show_center_justify,
            Item::AlignRight => config.show_right_justify,
            Item::Undo => config.show_undo,
            Item::Redo => config.show_redo,
            Item::Cut => config.show_cut,
            Item::Copy => config.show_copy,
            Item::Paste => config.show_paste,
        }
    }

    /// The command a click issues. Items that need a value (font, size,
    /// colour) or a file dialog (save, open) have none.
    pub fn command(self) -> Option<Command> {
        match self {
            Item::Bold => Some(Command::ToggleStyle(StyleFlags::BOLD)),
            Item::Italic => Some(Command::ToggleStyle(StyleFlags::ITALIC)),
            Item::Underline => Some(Command::ToggleStyle(StyleFlags::UNDERLINE)),
            Item::Strikeout => Some(Command::ToggleStyle(StyleFlags::STRIKEOUT)),
            Item::AlignLeft => Some(Command::Align(Alignment::Left)),
            Item::AlignCenter => Some(Command::Align(Alignment::Center)),
            Item::AlignRight => Some(Command::Align(Alignment::Right)),
            Item::Undo => Some(Command::Undo),
            Item::Redo => Some(Command::Redo),
            Item::Cut => Some(Command::Cut),
            Item::Copy => Some(Command::Copy),
            Item::Paste => Some(Command::Paste),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Entry {
    Item(Item),
    Separator,
}

/// The visible entries of one surface, in display order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub surface: Surface,
    /// Captions shown next to icons.
    pub show_text: bool,
    /// Text of the label item, present when the label is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub entries: Vec<Entry>,
}

impl Layout {
    pub fn build(config: &ToolbarConfig, surface: Surface) -> Self {
        let show_text = match surface {
            Surface::Toolbar => config.show_toolbar_text,
            Surface::ContextMenu => true,
        };
        let mut layout = Self {
            surface,
            show_text,
            label: None,
            entries: Vec::new(),
        };
        if surface == Surface::Toolbar && !config.toolbar_visible {
            return layout;
        }

        let groups: Vec<Vec<Item>> = Group::ALL
            .iter()
            .filter(|group| surface == Surface::Toolbar || **group != Group::Label)
            .map(|group| {
                group
                    .items()
                    .iter()
                    .copied()
                    .filter(|item| item.is_visible(config))
                    .collect()
            })
            .collect();

        for (index, items) in groups.iter().enumerate() {
            if items.is_empty() {
                continue;
            }
            if items.contains(&Item::Label) {
                layout.label = Some(config.label.clone());
            }
            layout.entries.extend(items.iter().copied().map(Entry::Item));
            let more_follow = groups[index + 1..].iter().any(|rest| !rest.is_empty());
            if more_follow {
                layout.entries.push(Entry::Separator);
            }
        }
        layout
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Item(item) => Some(*item),
            Entry::Separator => None,
        })
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items().any(|i| i == item)
    }

    pub fn separator_count(&self) -> usize {
        self.entries.iter().filter(|e| **e == Entry::Separator).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toolbar_has_every_item() {
        let layout = Layout::build(&ToolbarConfig::default(), Surface::Toolbar);
        assert_eq!(layout.items().count(), 18);
        assert_eq!(layout.separator_count(), 6);
        assert_eq!(layout.entries.first(), Some(&Entry::Item(Item::Label)));
        assert_eq!(layout.entries.last(), Some(&Entry::Item(Item::Paste)));
    }

    #[test]
    fn test_context_menu_omits_label() {
        let layout = Layout::build(&ToolbarConfig::default(), Surface::ContextMenu);
        assert!(!layout.contains(Item::Label));
        assert!(layout.contains(Item::Save));
        assert_eq!(layout.separator_count(), 5);
        assert!(layout.show_text);
    }

    #[test]
    fn test_hidden_group_drops_its_separator() {
        let config = ToolbarConfig {
            show_left_justify: false,
            show_center_justify: false,
            show_right_justify: false,
            ..ToolbarConfig::default()
        };
        let layout = Layout::build(&config, Surface::Toolbar);
        assert_eq!(layout.separator_count(), 5);
        for pair in layout.entries.windows(2) {
            assert!(pair != [Entry::Separator, Entry::Separator]);
        }
    }

    #[test]
    fn test_no_trailing_separator() {
        let config = ToolbarConfig {
            show_cut: false,
            show_copy: false,
            show_paste: false,
            ..ToolbarConfig::default()
        };
        let layout = Layout::build(&config, Surface::Toolbar);
        assert_eq!(layout.entries.last(), Some(&Entry::Item(Item::Redo)));
    }

    #[test]
    fn test_partly_visible_group_keeps_separator() {
        let config = ToolbarConfig {
            show_bold: false,
            show_italic: false,
            ..ToolbarConfig::default()
        };
        let layout = Layout::build(&config, Surface::Toolbar);
        let underline = layout
            .entries
            .iter()
            .position(|e| *e == Entry::Item(Item::Underline))
            .unwrap();
        assert_eq!(layout.entries[underline + 1], Entry::Item(Item::Strikeout));
        assert_eq!(layout.entries[underline + 2], Entry::Separator);
        assert_eq!(layout.separator_count(), 6);
    }

    #[test]
    fn test_hidden_toolbar_is_empty() {
        let config = ToolbarConfig {
            toolbar_visible: false,
            ..ToolbarConfig::default()
        };
        assert!(Layout::build(&config, Surface::Toolbar).entries.is_empty());
        assert!(!Layout::build(&config, Surface::ContextMenu).entries.is_empty());
    }

    #[test]
    fn test_item_commands() {
        assert_eq!(Item::Bold.command(), Some(Command::ToggleStyle(StyleFlags::BOLD)));
        assert_eq!(Item::AlignCenter.command(), Some(Command::Align(Alignment::Center)));
        assert_eq!(Item::FontFamily.command(), None);
    }

    #[test]
    fn test_label_carries_configured_text() {
        let config = ToolbarConfig {
            label: "Notes".to_string(),
            ..ToolbarConfig::default()
        };
        let toolbar = Layout::build(&config, Surface::Toolbar);
        assert_eq!(toolbar.label.as_deref(), Some("Notes"));
        let json = serde_json::to_string(&toolbar).unwrap();
        assert!(json.starts_with(r#"{"surface":"toolbar","show_text":false,"label":"Notes","entries":[{"item":"label"},"separator""#));

        assert_eq!(Layout::build(&config, Surface::ContextMenu).label, None);

        let hidden = ToolbarConfig {
            show_label: false,
            ..config
        };
        assert_eq!(Layout::build(&hidden, Surface::Toolbar).label, None);
    }

    #[test]
    fn test_layout_json() {
        let config = ToolbarConfig {
            show_label: false,
            show_save: false,
            show_open: false,
            show_font: false,
            show_font_size: false,
            show_colors: false,
            show_strikeout: false,
            show_underline: false,
            show_italic: false,
            show_left_justify: false,
            show_center_justify: false,
            show_right_justify: false,
            show_undo: false,
            show_redo: false,
            show_cut: false,
            show_copy: false,
            ..ToolbarConfig::default()
        };
        let layout = Layout::build(&config, Surface::Toolbar);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(
            json,
            r#"{"surface":"toolbar","show_text":false,"entries":[{"item":"bold"},"separator",{"item":"paste"}]}"#
        );
    }
}

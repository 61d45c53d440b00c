//! Toolbar and editor configuration.
//!
//! Every switch defaults to the stock widget: toolbar shown, every item
//! visible, URLs detected, tabs accepted. A JSON file only needs the keys it
//! changes.

use scribe_core::{CharFormat, FontDescriptor, DEFAULT_FAMILY, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("default_font_size must be a positive number, got {0}")]
    InvalidFontSize(f32),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub toolbar_visible: bool,
    /// Show captions next to toolbar icons.
    pub show_toolbar_text: bool,
    /// Caption of the leading label item.
    pub label: String,

    pub show_save: bool,
    pub show_open: bool,
    pub show_colors: bool,
    pub show_undo: bool,
    pub show_redo: bool,
    pub show_bold: bool,
    pub show_italic: bool,
    pub show_underline: bool,
    pub show_strikeout: bool,
    pub show_left_justify: bool,
    pub show_center_justify: bool,
    pub show_right_justify: bool,
    pub show_font: bool,
    pub show_font_size: bool,
    pub show_cut: bool,
    pub show_copy: bool,
    pub show_paste: bool,
    pub show_label: bool,

    /// Point size of the document's default font.
    pub default_font_size: f32,
    pub read_only: bool,
    /// Make URLs in the text clickable.
    pub detect_urls: bool,
    /// Tab inserts a tab character instead of moving focus.
    pub accepts_tab: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            toolbar_visible: true,
            show_toolbar_text: false,
            label: String::new(),
            show_save: true,
            show_open: true,
            show_colors: true,
            show_undo: true,
            show_redo: true,
            show_bold: true,
            show_italic: true,
            show_underline: true,
            show_strikeout: true,
            show_left_justify: true,
            show_center_justify: true,
            show_right_justify: true,
            show_font: true,
            show_font_size: true,
            show_cut: true,
            show_copy: true,
            show_paste: true,
            show_label: true,
            default_font_size: DEFAULT_SIZE,
            read_only: false,
            detect_urls: true,
            accepts_tab: true,
        }
    }
}

impl ToolbarConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded toolbar config from {:?}", path);
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_font_size.is_finite() || self.default_font_size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(self.default_font_size));
        }
        Ok(())
    }

    /// Format of unformatted text: the default family at `default_font_size`.
    pub fn default_format(&self) -> CharFormat {
        CharFormat::from(FontDescriptor::new(DEFAULT_FAMILY, self.default_font_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_show_everything() {
        let config = ToolbarConfig::default();
        assert!(config.toolbar_visible);
        assert!(config.show_bold && config.show_paste && config.show_label);
        assert!(config.detect_urls);
        assert!(!config.read_only);
        assert_eq!(config.default_font_size, DEFAULT_SIZE);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ToolbarConfig::from_json_str(r#"{ "show_bold": false, "label": "Notes" }"#).unwrap();
        assert!(!config.show_bold);
        assert_eq!(config.label, "Notes");
        assert!(config.show_italic);
        assert!(config.accepts_tab);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ToolbarConfig::from_json_str("{}").unwrap(), ToolbarConfig::default());
    }

    #[test]
    fn test_rejects_bad_font_size() {
        let result = ToolbarConfig::from_json_str(r#"{ "default_font_size": 0 }"#);
        assert!(matches!(result, Err(ConfigError::InvalidFontSize(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            ToolbarConfig::from_json_str("{ show_bold: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "read_only": true, "default_font_size": 12.5 }}"#).unwrap();
        let config = ToolbarConfig::from_path(file.path()).unwrap();
        assert!(config.read_only);
        assert_eq!(config.default_format().font.size, 12.5);
        assert_eq!(config.default_format().font.family, DEFAULT_FAMILY);
    }
}

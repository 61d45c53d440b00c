//! Character and paragraph style types.
//!
//! A character's appearance is a [`CharFormat`]: a [`FontDescriptor`]
//! (family, point size, [`StyleFlags`]) plus a [`Color`]. Paragraphs carry
//! an [`Alignment`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family used when nothing else is configured.
pub const DEFAULT_FAMILY: &str = "Arial";

/// Point size used when nothing else is configured.
pub const DEFAULT_SIZE: f32 = 10.0;

// ── Style flags ─────────────────────────────────────────────────────

bitflags! {
    /// Independent character style attributes.
    ///
    /// Flags combine freely; intersecting two sets (`a & b`) keeps only the
    /// attributes present in both.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct StyleFlags: u8 {
        const BOLD = 0b0001;
        const ITALIC = 0b0010;
        const UNDERLINE = 0b0100;
        const STRIKEOUT = 0b1000;
    }
}

impl StyleFlags {
    pub fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    pub fn is_italic(self) -> bool {
        self.contains(Self::ITALIC)
    }

    pub fn is_underline(self) -> bool {
        self.contains(Self::UNDERLINE)
    }

    pub fn is_strikeout(self) -> bool {
        self.contains(Self::STRIKEOUT)
    }
}

// ── Color ───────────────────────────────────────────────────────────

/// 24-bit RGB text colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when a colour string is not `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour '{0}', expected #RRGGBB")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `#RRGGBB` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

// ── Alignment ───────────────────────────────────────────────────────

/// Horizontal paragraph alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

// ── Font descriptor ─────────────────────────────────────────────────

/// Font family, size in points and style flags in effect for a character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    pub size: f32,
    pub flags: StyleFlags,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            flags: StyleFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_SIZE)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)?;
        for (name, _) in self.flags.iter_names() {
            write!(f, " {}", name.to_lowercase())?;
        }
        Ok(())
    }
}

// ── Character format ────────────────────────────────────────────────

/// Complete formatting of one character.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharFormat {
    pub font: FontDescriptor,
    pub color: Color,
}

impl CharFormat {
    pub fn new(font: FontDescriptor, color: Color) -> Self {
        Self { font, color }
    }
}

impl From<FontDescriptor> for CharFormat {
    fn from(font: FontDescriptor) -> Self {
        Self {
            font,
            color: Color::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_intersection_keeps_common_bits() {
        let a = StyleFlags::BOLD | StyleFlags::ITALIC;
        let b = StyleFlags::BOLD | StyleFlags::UNDERLINE;
        assert_eq!(a & b, StyleFlags::BOLD);
        assert!((a & b).is_bold());
        assert!(!(a & b).is_italic());
    }

    #[test]
    fn test_color_hex_parse() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("0000ff".parse::<Color>().unwrap(), Color::BLUE);
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_descriptor_display() {
        let font = FontDescriptor::new("Arial", 12.0)
            .with_flags(StyleFlags::BOLD | StyleFlags::STRIKEOUT);
        assert_eq!(font.to_string(), "Arial 12pt bold strikeout");
    }

    #[test]
    fn test_defaults() {
        let format = CharFormat::default();
        assert_eq!(format.font.family, DEFAULT_FAMILY);
        assert_eq!(format.font.size, DEFAULT_SIZE);
        assert!(format.font.flags.is_empty());
        assert_eq!(format.color, Color::BLACK);
        assert_eq!(Alignment::default(), Alignment::Left);
    }

    #[test]
    fn test_flags_text_form() {
        let mut out = String::new();
        bitflags::parser::to_writer(&(StyleFlags::BOLD | StyleFlags::ITALIC), &mut out).unwrap();
        assert_eq!(out, "BOLD | ITALIC");
        let parsed: StyleFlags = bitflags::parser::from_str("UNDERLINE | STRIKEOUT").unwrap();
        assert!(parsed.is_underline() && parsed.is_strikeout());
    }
}

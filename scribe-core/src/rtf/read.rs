use crate::document::{RichText, RichTextBuilder};
use crate::error::RtfError;
use crate::style::{Alignment, CharFormat, Color, StyleFlags};
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::CharIndices;

/// Destinations whose content is not text.
const SKIPPED_DESTINATIONS: &[&str] = &[
    "author", "buptim", "colorschememapping", "comment", "creatim", "datastore",
    "doccomm", "filetbl", "fldinst", "footer", "footerf", "footerl", "footerr",
    "footnote", "generator", "header", "headerf", "headerl", "headerr", "info",
    "keywords", "latentstyles", "listoverridetable", "listtable", "mmathPr",
    "object", "operator", "pict", "printim", "private", "revtbl", "revtim",
    "rsidtbl", "stylesheet", "subject", "themedata", "title", "xmlnstbl",
];

/// Windows-1252 characters for bytes 0x80..=0x9F.
const CP1252_HIGH: [char; 32] = [
    '€', '\u{81}', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\u{8d}', 'Ž', '\u{8f}',
    '\u{90}', '‘', '’', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\u{9d}', 'ž', 'Ÿ',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Destination {
    Text,
    FontTable,
    ColorTable,
    Skip,
}

#[derive(Clone, Debug)]
struct GroupState {
    format: CharFormat,
    alignment: Alignment,
    destination: Destination,
    /// Fallback characters following a `\u` escape.
    unicode_skip: usize,
}

/// Parse RTF into a document whose fallback format is `default_format`.
pub fn read_rtf(input: &str, default_format: CharFormat) -> Result<RichText, RtfError> {
    let body = input.trim_start_matches('\u{feff}').trim_start();
    if !body.starts_with("{\\rtf") {
        return Err(RtfError::NotRtf);
    }
    let reader = Reader::new(body, default_format);
    reader.run()
}

struct Reader<'a> {
    chars: Peekable<CharIndices<'a>>,
    stack: Vec<GroupState>,
    state: GroupState,
    builder: RichTextBuilder,
    default_format: CharFormat,
    pending: String,

    fonts: HashMap<i32, String>,
    default_font: i32,
    font_number: i32,
    font_name: String,

    /// Index 0 is the "auto" colour.
    colors: Vec<Option<Color>>,
    color_entry: Option<Color>,

    skip_chars: usize,
    high_surrogate: Option<u16>,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str, default_format: CharFormat) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            stack: Vec::new(),
            state: GroupState {
                format: default_format.clone(),
                alignment: Alignment::Left,
                destination: Destination::Text,
                unicode_skip: 1,
            },
            builder: RichTextBuilder::new(default_format.clone()),
            default_format,
            pending: String::new(),
            fonts: HashMap::new(),
            default_font: 0,
            font_number: 0,
            font_name: String::new(),
            colors: Vec::new(),
            color_entry: None,
            skip_chars: 0,
            high_surrogate: None,
        }
    }

    fn run(mut self) -> Result<RichText, RtfError> {
        while let Some((offset, c)) = self.chars.next() {
            match c {
                '{' => {
                    self.flush();
                    self.skip_chars = 0;
                    self.stack.push(self.state.clone());
                }
                '}' => {
                    self.flush();
                    self.skip_chars = 0;
                    self.state = self.stack.pop().ok_or(RtfError::UnbalancedGroup(offset))?;
                    if self.stack.is_empty() {
                        log::debug!("rtf: parsed {} fonts, {} colours", self.fonts.len(), self.colors.len());
                        return Ok(self.builder.finish());
                    }
                }
                '\\' => {
                    self.flush();
                    self.control(offset)?;
                }
                '\r' | '\n' => {}
                _ => self.text_char(c),
            }
        }
        Err(RtfError::UnexpectedEnd)
    }

    // ---------------------------------------------------------------
    // Tokens
    // ---------------------------------------------------------------

    fn control(&mut self, offset: usize) -> Result<(), RtfError> {
        let (_, c) = self.chars.next().ok_or(RtfError::UnexpectedEnd)?;
        match c {
            c if c.is_ascii_alphabetic() => {
                let mut word = String::from(c);
                while let Some(&(_, next)) = self.chars.peek() {
                    if !next.is_ascii_alphabetic() {
                        break;
                    }
                    word.push(next);
                    self.chars.next();
                }
                let param = self.parameter();
                if let Some(&(_, ' ')) = self.chars.peek() {
                    self.chars.next();
                }
                self.keyword(&word, param);
            }
            '\'' => {
                let byte = self.hex_byte().ok_or(RtfError::InvalidHexEscape(offset))?;
                self.text_char(decode_byte(byte));
            }
            '\\' | '{' | '}' => self.text_char(c),
            '~' => self.text_char('\u{a0}'),
            '_' => self.text_char('\u{2011}'),
            '*' => self.state.destination = Destination::Skip,
            '\r' | '\n' => self.keyword("par", None),
            _ => {}
        }
        Ok(())
    }

    fn parameter(&mut self) -> Option<i32> {
        let mut digits = String::new();
        if let Some(&(_, '-')) = self.chars.peek() {
            digits.push('-');
            self.chars.next();
        }
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.chars.next();
        }
        digits.parse().ok()
    }

    fn hex_byte(&mut self) -> Option<u8> {
        let high = self.chars.next()?.1.to_digit(16)?;
        let low = self.chars.next()?.1.to_digit(16)?;
        Some((high * 16 + low) as u8)
    }

    fn keyword(&mut self, word: &str, param: Option<i32>) {
        if word != "u" {
            self.skip_chars = 0;
        }
        let on = param.map_or(true, |p| p != 0);

        match word {
            "fonttbl" => self.state.destination = Destination::FontTable,
            "colortbl" => self.state.destination = Destination::ColorTable,
            w if SKIPPED_DESTINATIONS.contains(&w) => self.state.destination = Destination::Skip,
            "deff" => self.default_font = param.unwrap_or(0),
            "f" if self.state.destination == Destination::FontTable => {
                self.font_number = param.unwrap_or(0);
                self.font_name.clear();
            }
            "red" | "green" | "blue" if self.state.destination == Destination::ColorTable => {
                let value = param.unwrap_or(0).clamp(0, 255) as u8;
                let entry = self.color_entry.get_or_insert(Color::BLACK);
                match word {
                    "red" => entry.r = value,
                    "green" => entry.g = value,
                    _ => entry.b = value,
                }
            }
            "uc" => self.state.unicode_skip = param.unwrap_or(1).max(0) as usize,
            "u" => {
                if let Some(value) = param {
                    self.unicode_char(value);
                }
            }
            _ if self.state.destination != Destination::Text => {}

            "par" | "line" => {
                self.builder.set_alignment(self.state.alignment);
                self.builder.end_paragraph(&self.state.format);
            }
            "pard" => self.state.alignment = Alignment::Left,
            "ql" | "qj" => self.state.alignment = Alignment::Left,
            "qc" => self.state.alignment = Alignment::Center,
            "qr" => self.state.alignment = Alignment::Right,
            "plain" => self.state.format = self.plain_format(),
            "b" => self.state.format.font.flags.set(StyleFlags::BOLD, on),
            "i" => self.state.format.font.flags.set(StyleFlags::ITALIC, on),
            "ul" => self.state.format.font.flags.set(StyleFlags::UNDERLINE, on),
            "ulnone" => self.state.format.font.flags.remove(StyleFlags::UNDERLINE),
            "strike" => self.state.format.font.flags.set(StyleFlags::STRIKEOUT, on),
            "f" => {
                if let Some(name) = param.and_then(|n| self.fonts.get(&n)) {
                    self.state.format.font.family = name.clone();
                }
            }
            "fs" => {
                if let Some(half_points) = param.filter(|&p| p > 0) {
                    self.state.format.font.size = half_points as f32 / 2.0;
                }
            }
            "cf" => {
                let index = param.unwrap_or(0).max(0) as usize;
                self.state.format.color = self
                    .colors
                    .get(index)
                    .copied()
                    .flatten()
                    .unwrap_or(self.default_format.color);
            }
            "tab" => self.text_char('\t'),
            "emdash" => self.text_char('—'),
            "endash" => self.text_char('–'),
            "bullet" => self.text_char('•'),
            "lquote" => self.text_char('‘'),
            "rquote" => self.text_char('’'),
            "ldblquote" => self.text_char('“'),
            "rdblquote" => self.text_char('”'),
            _ => {}
        }
    }

    // ---------------------------------------------------------------
    // Text
    // ---------------------------------------------------------------

    fn unicode_char(&mut self, value: i32) {
        let unit = if value < 0 { value + 0x1_0000 } else { value } as u32;
        match unit {
            0xD800..=0xDBFF => self.high_surrogate = Some(unit as u16),
            0xDC00..=0xDFFF => {
                if let Some(high) = self.high_surrogate.take() {
                    let decoded = char::decode_utf16([high, unit as u16])
                        .next()
                        .and_then(Result::ok)
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    self.push_decoded(decoded);
                }
            }
            _ => self.push_decoded(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)),
        }
        self.skip_chars = self.state.unicode_skip;
    }

    fn push_decoded(&mut self, c: char) {
        self.skip_chars = 0;
        self.text_char(c);
    }

    fn text_char(&mut self, c: char) {
        if self.skip_chars > 0 {
            self.skip_chars -= 1;
            return;
        }
        match self.state.destination {
            Destination::Text => self.pending.push(c),
            Destination::FontTable => {
                if c == ';' {
                    let name = self.font_name.trim().to_string();
                    if !name.is_empty() {
                        self.fonts.insert(self.font_number, name);
                    }
                    self.font_name.clear();
                } else {
                    self.font_name.push(c);
                }
            }
            Destination::ColorTable => {
                if c == ';' {
                    self.colors.push(self.color_entry.take());
                }
            }
            Destination::Skip => {}
        }
    }

    /// Hand buffered text to the builder in the current format.
    fn flush(&mut self) {
        if self.state.destination != Destination::Text {
            return;
        }
        self.builder.set_alignment(self.state.alignment);
        if !self.pending.is_empty() {
            self.builder.push(&self.pending, &self.state.format);
            self.pending.clear();
        }
    }

    fn plain_format(&self) -> CharFormat {
        let mut format = self.default_format.clone();
        if let Some(name) = self.fonts.get(&self.default_font) {
            format.font.family = name.clone();
        }
        format
    }
}

fn decode_byte(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[(byte - 0x80) as usize],
        _ => byte as char,
    }
}

use crate::document::RichText;
use crate::style::{Alignment, CharFormat, Color};
use std::fmt::Write;

/// Serialize `document` as RTF.
pub fn write_rtf(document: &RichText) -> String {
    let mut fonts: Vec<&str> = vec![document.default_format().font.family.as_str()];
    let mut colors: Vec<Color> = Vec::new();
    for run in document.runs() {
        if !fonts.contains(&run.format.font.family.as_str()) {
            fonts.push(&run.format.font.family);
        }
        if !colors.contains(&run.format.color) {
            colors.push(run.format.color);
        }
    }

    let mut out = String::from("{\\rtf1\\ansi\\deff0{\\fonttbl");
    for (index, family) in fonts.iter().enumerate() {
        let _ = write!(out, "{{\\f{index} ");
        escape_into(&mut out, &family.replace(';', ""));
        out.push_str(";}");
    }
    // Index 0 of the colour table is the "auto" colour.
    out.push_str("}{\\colortbl ;");
    for color in &colors {
        let _ = write!(out, "\\red{}\\green{}\\blue{};", color.r, color.g, color.b);
    }
    out.push_str("}\n");

    let mut paragraph = 0;
    write_paragraph_start(&mut out, document.alignment_of(paragraph));
    for run in document.runs() {
        let text = document.slice_text(run.range.clone());
        let mut pieces = text.split('\n');
        if let Some(first) = pieces.next() {
            write_run(&mut out, first, run.format, &fonts, &colors);
        }
        for piece in pieces {
            write_format(&mut out, run.format, &fonts, &colors);
            out.push_str("\\par\n");
            paragraph += 1;
            write_paragraph_start(&mut out, document.alignment_of(paragraph));
            write_run(&mut out, piece, run.format, &fonts, &colors);
        }
    }
    out.push('}');
    out
}

fn write_paragraph_start(out: &mut String, alignment: Alignment) {
    out.push_str(match alignment {
        Alignment::Left => "\\pard\\ql",
        Alignment::Center => "\\pard\\qc",
        Alignment::Right => "\\pard\\qr",
    });
}

fn write_run(out: &mut String, text: &str, format: &CharFormat, fonts: &[&str], colors: &[Color]) {
    if text.is_empty() {
        return;
    }
    write_format(out, format, fonts, colors);
    out.push(' ');
    escape_into(out, text);
}

/// Control words selecting `format`, starting from `\plain`.
fn write_format(out: &mut String, format: &CharFormat, fonts: &[&str], colors: &[Color]) {
    let font = fonts
        .iter()
        .position(|family| *family == format.font.family)
        .unwrap_or(0);
    let color = colors
        .iter()
        .position(|color| *color == format.color)
        .map_or(0, |index| index + 1);
    let half_points = (format.font.size * 2.0).round() as i32;

    let _ = write!(out, "\\plain\\f{font}\\fs{half_points}\\cf{color}");
    let flags = format.font.flags;
    if flags.is_bold() {
        out.push_str("\\b");
    }
    if flags.is_italic() {
        out.push_str("\\i");
    }
    if flags.is_underline() {
        out.push_str("\\ul");
    }
    if flags.is_strikeout() {
        out.push_str("\\strike");
    }
}

fn escape_into(out: &mut String, text: &str) {
    let mut units = [0u16; 2];
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\t' => out.push_str("\\tab "),
            ' '..='~' => out.push(c),
            _ => {
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{}?", *unit as i16);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        let mut out = String::new();
        escape_into(&mut out, "a{b}\\c\té€");
        assert_eq!(out, "a\\{b\\}\\\\c\\tab \\u233?\\u8364?");
    }

    #[test]
    fn test_escape_astral_as_surrogates() {
        let mut out = String::new();
        escape_into(&mut out, "𝄞");
        assert_eq!(out, "\\u-10188?\\u-8930?");
    }
}

//! Rich Text Format import and export.
//!
//! The writer emits a small, self-contained subset: font and colour
//! tables, one `\pard` per paragraph and a `\plain`-reset format per run.
//! The reader accepts that subset plus the constructs word processors
//! commonly add (ignorable destinations, hex and unicode escapes, …);
//! anything it does not model is skipped.

mod read;
mod write;

pub use read::read_rtf;
pub use write::write_rtf;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RichText;
    use crate::style::{Alignment, CharFormat, Color, FontDescriptor, StyleFlags};

    fn sample() -> RichText {
        let mut doc = RichText::from_plain_text(
            "Heading\nBody with {braces} \\ and tab\there\nünïcödé 𝄞 end",
            CharFormat::default(),
        );
        doc.set_selection(0, 7);
        doc.set_style(StyleFlags::BOLD, true).unwrap();
        doc.set_font_size(16.0).unwrap();
        doc.set_alignment(Alignment::Center).unwrap();
        doc.set_selection(8, 4);
        doc.set_font_family("Times New Roman").unwrap();
        doc.set_style(StyleFlags::ITALIC | StyleFlags::UNDERLINE, true).unwrap();
        doc.set_selection(13, 4);
        doc.set_color(Color::rgb(200, 10, 30)).unwrap();
        doc.set_style(StyleFlags::STRIKEOUT, true).unwrap();
        let last = doc.paragraph_range(2);
        doc.set_selection(last.start, 1);
        doc.set_alignment(Alignment::Right).unwrap();
        doc
    }

    #[test]
    fn test_written_document_reads_back() {
        let original = sample();
        let rtf = write_rtf(&original);
        let restored = read_rtf(&rtf, CharFormat::default()).unwrap();

        assert_eq!(restored.text(), original.text());
        assert_eq!(restored.paragraph_count(), 3);
        for paragraph in 0..3 {
            assert_eq!(restored.alignment_of(paragraph), original.alignment_of(paragraph));
        }
        let original_runs: Vec<_> = original.runs().map(|r| (r.range, r.format.clone())).collect();
        let restored_runs: Vec<_> = restored.runs().map(|r| (r.range, r.format.clone())).collect();
        assert_eq!(restored_runs, original_runs);
    }

    #[test]
    fn test_read_word_processor_output() {
        let rtf = r#"{\rtf1\ansi\ansicpg1252\deff0\nouicompat{\fonttbl{\f0\fnil\fcharset0 Calibri;}{\f1\froman Georgia;}}
{\colortbl ;\red255\green0\blue0;}
{\*\generator Riched20 10.0.19041}\viewkind4\uc1
\pard\sa200\sl276\slmult1\qc\f0\fs22\lang9 Caf\'e9 \b bold\b0  \cf1 red\cf0\par
\pard\f1\fs28\i Georgia \u8364? \ul under\ulnone\par
}"#;
        let doc = read_rtf(rtf, CharFormat::default()).unwrap();
        assert_eq!(doc.text(), "Café bold red\nGeorgia € under\n");
        assert_eq!(doc.alignment_of(0), Alignment::Center);
        assert_eq!(doc.alignment_of(1), Alignment::Left);

        let cafe = doc.format_at(0);
        assert_eq!(cafe.font.family, "Calibri");
        assert_eq!(cafe.font.size, 11.0);
        assert!(doc.format_at(5).font.flags.is_bold());
        assert!(!doc.format_at(10).font.flags.is_bold());
        assert_eq!(doc.format_at(10).color, Color::RED);

        let georgia = doc.format_at(14);
        assert_eq!(georgia.font.family, "Georgia");
        assert_eq!(georgia.font.size, 14.0);
        assert!(georgia.font.flags.is_italic());
        assert!(doc.format_at(24).font.flags.is_underline());
    }

    #[test]
    fn test_read_rejects_non_rtf() {
        assert!(read_rtf("plain text", CharFormat::default()).is_err());
    }

    #[test]
    fn test_read_rejects_unbalanced() {
        assert!(read_rtf(r"{\rtf1 abc", CharFormat::default()).is_err());
        assert!(read_rtf(r"{\rtf1 abc}}", CharFormat::default()).is_ok());
        assert!(read_rtf(r"{\rtf1 \'zz}", CharFormat::default()).is_err());
    }

    #[test]
    fn test_writer_header() {
        let doc = RichText::from_plain_text(
            "x",
            CharFormat::from(FontDescriptor::new("Verdana", 9.5)),
        );
        let rtf = write_rtf(&doc);
        assert!(rtf.starts_with(r"{\rtf1\ansi\deff0{\fonttbl{\f0 Verdana;}}"));
        assert!(rtf.contains(r"\fs19"));
        assert!(rtf.ends_with('}'));
    }
}

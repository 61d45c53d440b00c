//! Loading and saving documents.

use crate::document::RichText;
use crate::error::FileError;
use crate::rtf::{read_rtf, write_rtf};
use crate::style::CharFormat;
use std::fs;
use std::path::Path;

/// On-disk representation, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Rtf,
}

impl DocumentFormat {
    /// `.rtf` (any case) is rich text; everything else is plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("rtf") => DocumentFormat::Rtf,
            _ => DocumentFormat::PlainText,
        }
    }
}

/// Read a document from `path`. Plain text takes on `default_format`.
pub fn load(path: &Path, default_format: CharFormat) -> Result<RichText, FileError> {
    let contents = fs::read_to_string(path)?;
    let format = DocumentFormat::from_path(path);
    let document = match format {
        DocumentFormat::Rtf => read_rtf(&contents, default_format)?,
        DocumentFormat::PlainText => RichText::from_plain_text(&contents, default_format),
    };
    log::info!(
        "Loaded {:?} ({:?}, {} chars, {} paragraphs)",
        path,
        format,
        document.len(),
        document.paragraph_count()
    );
    Ok(document)
}

/// Write `document` to `path` and mark it saved.
pub fn save(document: &mut RichText, path: &Path) -> Result<(), FileError> {
    let format = DocumentFormat::from_path(path);
    let contents = match format {
        DocumentFormat::Rtf => write_rtf(document),
        DocumentFormat::PlainText => document.text(),
    };
    fs::write(path, contents)?;
    document.mark_saved();
    log::info!("Saved {:?} ({:?})", path, format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleFlags;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.rtf")), DocumentFormat::Rtf);
        assert_eq!(DocumentFormat::from_path(Path::new("a.RTF")), DocumentFormat::Rtf);
        assert_eq!(DocumentFormat::from_path(Path::new("a.txt")), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::from_path(Path::new("rtf")), DocumentFormat::PlainText);
    }

    #[test]
    fn test_rtf_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.rtf");

        let mut doc = RichText::from_plain_text("bold plain", CharFormat::default());
        doc.set_selection(0, 4);
        doc.set_style(StyleFlags::BOLD, true).unwrap();
        assert!(doc.is_modified());
        save(&mut doc, &path).unwrap();
        assert!(!doc.is_modified());

        let loaded = load(&path, CharFormat::default()).unwrap();
        assert_eq!(loaded.text(), "bold plain");
        assert!(loaded.format_at(0).font.flags.is_bold());
        assert!(!loaded.format_at(5).font.flags.is_bold());
        assert!(!loaded.is_modified());
    }

    #[test]
    fn test_plain_text_drops_formatting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");

        let mut doc = RichText::from_plain_text("line one\nline two", CharFormat::default());
        doc.select_all();
        doc.set_style(StyleFlags::ITALIC, true).unwrap();
        save(&mut doc, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two");
        let loaded = load(&path, CharFormat::default()).unwrap();
        assert!(!loaded.format_at(0).font.flags.is_italic());
        assert_eq!(loaded.paragraph_count(), 2);
    }

    #[test]
    fn test_malformed_rtf_is_invalid_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.rtf");
        fs::write(&path, "just text").unwrap();
        assert!(matches!(
            load(&path, CharFormat::default()),
            Err(FileError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = load(&dir.path().join("absent.txt"), CharFormat::default());
        assert!(matches!(result, Err(FileError::Io(_))));
    }
}

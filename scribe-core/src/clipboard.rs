//! Clipboard capability and formatted fragments.

use crate::content::{normalize_newlines, Span};
use crate::error::ClipboardError;
use crate::style::CharFormat;

/// A formatted slice of text, as cut or copied.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub text: String,
    /// Span lengths sum to the character count of `text`.
    pub spans: Vec<Span>,
}

impl Fragment {
    /// Unformatted text that takes on `format` when pasted.
    pub fn plain(text: &str, format: CharFormat) -> Self {
        let text = normalize_newlines(text).into_owned();
        let len = text.chars().count();
        Self {
            text,
            spans: vec![Span::new(len, format)],
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.spans.iter().map(|s| s.len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A copy with newlines folded to `\n` and spans covering the text
    /// exactly. Characters past the last span take its format, or
    /// `fallback` when there are no spans at all.
    pub(crate) fn normalized(&self, fallback: &CharFormat) -> Fragment {
        let mut text = String::with_capacity(self.text.len());
        let mut spans: Vec<Span> = Vec::new();
        let last = self.spans.last().map_or(fallback, |span| &span.format);
        let mut owners = self
            .spans
            .iter()
            .flat_map(|span| std::iter::repeat(&span.format).take(span.len));
        let mut chars = self.text.chars().peekable();
        while let Some(c) = chars.next() {
            let format = owners.next().unwrap_or(last);
            let c = match c {
                '\r' if chars.peek() == Some(&'\n') => continue,
                '\r' => '\n',
                c => c,
            };
            text.push(c);
            match spans.last_mut() {
                Some(span) if span.format == *format => span.len += 1,
                _ => spans.push(Span::new(1, format.clone())),
            }
        }
        Fragment { text, spans }
    }
}

/// Storage for cut/copied fragments.
pub trait Clipboard {
    fn store(&mut self, fragment: Fragment) -> Result<(), ClipboardError>;

    /// Current contents, `None` when empty.
    fn fetch(&self) -> Result<Option<Fragment>, ClipboardError>;
}

/// In-process clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<Fragment>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn store(&mut self, fragment: Fragment) -> Result<(), ClipboardError> {
        log::debug!("clipboard: stored {} chars", fragment.len());
        self.contents = Some(fragment);
        Ok(())
    }

    fn fetch(&self) -> Result<Option<Fragment>, ClipboardError> {
        Ok(self.contents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.fetch().unwrap(), None);

        let fragment = Fragment::plain("héllo", CharFormat::default());
        assert_eq!(fragment.len(), 5);
        clipboard.store(fragment.clone()).unwrap();
        assert_eq!(clipboard.fetch().unwrap(), Some(fragment));
    }

    #[test]
    fn test_normalized_folds_newlines_within_spans() {
        let bold = CharFormat {
            font: crate::style::FontDescriptor {
                flags: crate::style::StyleFlags::BOLD,
                ..Default::default()
            },
            ..CharFormat::default()
        };
        let fragment = Fragment {
            text: "a\r\nb\rc".to_string(),
            spans: vec![Span::new(3, CharFormat::default()), Span::new(3, bold.clone())],
        };
        let normalized = fragment.normalized(&CharFormat::default());
        assert_eq!(normalized.text, "a\nb\nc");
        assert_eq!(
            normalized.spans,
            vec![Span::new(2, CharFormat::default()), Span::new(3, bold)]
        );
        assert_eq!(normalized.len(), 5);
    }

    #[test]
    fn test_normalized_repairs_span_lengths() {
        let short = Fragment {
            text: "abcd".to_string(),
            spans: vec![Span::new(1, CharFormat::default())],
        };
        assert_eq!(short.normalized(&CharFormat::default()).spans, vec![Span::new(4, CharFormat::default())]);

        let long = Fragment {
            text: "ab".to_string(),
            spans: vec![Span::new(9, CharFormat::default())],
        };
        assert_eq!(long.normalized(&CharFormat::default()).len(), 2);

        let bare = Fragment {
            text: "ab".to_string(),
            spans: Vec::new(),
        };
        assert_eq!(bare.normalized(&CharFormat::default()).spans, vec![Span::new(2, CharFormat::default())]);
    }
}

//! Selection style resolution.
//!
//! Derives one representative font for a selection that may span several
//! formatting runs, the value a toolbar shows as "current".
//!
//! ```text
//!  selection [start, end)
//!      │
//!      ▼
//!  seed ← font_at(start)
//!      │
//!      ▼  for i in start+1..end
//!  flags  ← flags & font_at(i).flags      (running AND)
//!  family ← Mixed once any family differs (sticky)
//!  size   ← Mixed once any size differs   (sticky)
//! ```

use crate::buffer::FormattedTextBuffer;
use crate::selection::Selection;
use crate::style::{FontDescriptor, StyleFlags};
use serde::{Deserialize, Serialize};

/// Scalar stand-in for a mixed size.
pub const MIXED_SIZE: f32 = 0.0;

/// An attribute that is either shared by a whole selection or mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shared<T> {
    Uniform(T),
    Mixed,
}

impl<T> Shared<T> {
    pub fn is_mixed(&self) -> bool {
        matches!(self, Shared::Mixed)
    }

    pub fn as_uniform(&self) -> Option<&T> {
        match self {
            Shared::Uniform(value) => Some(value),
            Shared::Mixed => None,
        }
    }

    pub fn into_uniform(self) -> Option<T> {
        match self {
            Shared::Uniform(value) => Some(value),
            Shared::Mixed => None,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        self.into_uniform().unwrap_or(fallback)
    }
}

impl<T: PartialEq> Shared<T> {
    /// Degrade to `Mixed` if `value` differs. A mixed value stays mixed.
    pub fn merge(&mut self, value: &T) {
        if let Shared::Uniform(current) = self {
            if current != value {
                *self = Shared::Mixed;
            }
        }
    }
}

/// Representative style of a selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub family: Shared<String>,
    pub size: Shared<f32>,
    /// Flags set on every character of the selection.
    pub flags: StyleFlags,
}

impl ResolvedStyle {
    fn uniform(font: &FontDescriptor) -> Self {
        Self {
            family: Shared::Uniform(font.family.clone()),
            size: Shared::Uniform(font.size),
            flags: font.flags,
        }
    }

    /// Size in points, [`MIXED_SIZE`] when mixed.
    pub fn size_points(&self) -> f32 {
        self.size.unwrap_or(MIXED_SIZE)
    }

    /// Concrete font, substituting `default`'s family and size where mixed.
    pub fn to_font(&self, default: &FontDescriptor) -> FontDescriptor {
        FontDescriptor {
            family: self
                .family
                .as_uniform()
                .cloned()
                .unwrap_or_else(|| default.family.clone()),
            size: self.size.unwrap_or(default.size),
            flags: self.flags,
        }
    }
}

/// Computes [`ResolvedStyle`]s over any [`FormattedTextBuffer`].
pub struct SelectionStyleResolver;

impl SelectionStyleResolver {
    /// Resolve the representative style of `selection`.
    ///
    /// The selection must lie within the buffer; callers clamp it first.
    pub fn resolve<B>(buffer: &B, selection: Selection) -> ResolvedStyle
    where
        B: FormattedTextBuffer + ?Sized,
    {
        debug_assert!(
            selection.end() <= buffer.len(),
            "selection {:?} exceeds buffer length {}",
            selection,
            buffer.len()
        );

        match selection.length {
            0 => return ResolvedStyle::uniform(buffer.insertion_font(selection.start)),
            1 => return ResolvedStyle::uniform(buffer.font_at(selection.start)),
            _ => {}
        }

        let mut resolved = ResolvedStyle::uniform(buffer.font_at(selection.start));
        for position in selection.start + 1..selection.end() {
            let font = buffer.font_at(position);
            resolved.flags &= font.flags;
            resolved.family.merge(&font.family);
            resolved.size.merge(&font.size);
        }

        resolved
    }

    /// [`resolve`](Self::resolve) followed by default-font substitution.
    pub fn effective_font<B>(buffer: &B, selection: Selection) -> FontDescriptor
    where
        B: FormattedTextBuffer + ?Sized,
    {
        Self::resolve(buffer, selection).to_font(buffer.default_font())
    }
}

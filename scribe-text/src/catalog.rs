//! Font catalog: installed font families.
//!
//! Wraps `font-kit` for OS-level enumeration. Family names keep their
//! system spelling for display; lookups are case-insensitive through a
//! lowercase index.
//!
//! ```text
//! FontCatalog
//!   ├── families: Vec<String>             (sorted, de-duplicated)
//!   └── index: HashMap<String, usize>     (lowercase name → position)
//! ```

use font_kit::source::SystemSource;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Instant;

// ── Font catalog ────────────────────────────────────────────────────

/// The set of font families offered by a font picker.
#[derive(Clone, Debug, Default)]
pub struct FontCatalog {
    families: Vec<String>,
    index: HashMap<String, usize>,
}

impl FontCatalog {
    /// Enumerate the families installed on this system.
    ///
    /// I/O-bound; call once and keep the result. A system source that
    /// fails to enumerate yields an empty catalog.
    pub fn discover() -> Self {
        let start = Instant::now();
        let source = SystemSource::new();

        let names = match source.all_families() {
            Ok(names) => names,
            Err(err) => {
                log::warn!("FontCatalog: font enumeration failed: {err:?}");
                Vec::new()
            }
        };
        let catalog = Self::from_families(names);

        log::info!(
            "FontCatalog: discovered {} families ({:.1}ms)",
            catalog.len(),
            start.elapsed().as_secs_f64() * 1000.0,
        );
        catalog
    }

    /// Build a catalog from explicit family names.
    ///
    /// Names are trimmed, empty names dropped, and case-insensitive
    /// duplicates collapsed to their first spelling.
    pub fn from_families<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut families: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for name in names {
            let name: String = name.into();
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.to_lowercase()) {
                families.push(name.to_string());
            }
        }
        families.sort_by_key(|name| name.to_lowercase());

        let index = families
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_lowercase(), i))
            .collect();

        Self { families, index }
    }

    /// All family names, sorted case-insensitively.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Whether `name` is a known family (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.trim().to_lowercase())
    }

    /// The catalog's spelling of `name`, if known.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| self.families[i].as_str())
    }
}

impl fmt::Display for FontCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FontCatalog({} families)", self.families.len())
    }
}

// ===================================================================
// Tests
// ===================================================================

//! # scribe-text
//!
//! Font facts the editor needs without rendering anything: which families
//! are installed, and which sizes a font-size box offers and accepts.
//!
//! ```text
//! font-kit SystemSource ──► FontCatalog { sorted families, lowercase index }
//!                                │
//!                                ▼
//!                     contains("arial") / canonical("arial") → "Arial"
//! ```
//!
//! - **`catalog`**: system font family enumeration and lookup.
//! - **`sizes`**: standard point sizes and font-size text parsing.

pub mod catalog;
pub mod sizes;

pub use catalog::FontCatalog;
pub use sizes::{parse_size, STANDARD_SIZES};

//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired markers `**`, `*` and `` ` `` and the span kind each produces
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](url)` bracket bytes
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `](`.

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::{Image, Link};

//! # Inline Parsing
//!
//! Turns a run of block text into a flat sequence of typed [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Inline parsing is a fold of independent passes over a span list. Each pass
//! re-splits only `Plain` spans and passes every other span through untouched:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. bold `**`
//! 4. italic `*`
//! 5. code `` ` ``
//!
//! Passes are not commutative. Images and links come first so their brackets
//! and URLs are never scanned for delimiters; bold precedes italic because its
//! marker contains the italic one.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` / `SpanKind`, and span to leaf-node conversion
//! - **`kinds`**: Inline-specific types with owned delimiters (Delimiter, Link, Image)
//! - **`cursor`**: `Cursor` for byte-by-byte bracket scanning
//! - **`parser`**: `tokenize()` main entry point plus the individual passes
//!
//! Nested emphasis is not supported: a bold span's content is never re-scanned.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{SpanKind, TextSpan};

//! # Block Parsing
//!
//! Two-phase block parsing over whole blocks rather than single lines.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut into blocks on blank lines
//!
//! 2. **Classification** (`classify`): each block gets exactly one `BlockKind`
//!    from an ordered list of rules
//!
//! 3. **Construction** (`builder`): a `BlockBuilder` turns each classified block
//!    into an `HtmlNode`, running inline parsing on its text
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists, Paragraph)
//! - **`segment`**: `segment()` splits on blank lines
//! - **`classify`**: `MarkdownBlockClassifier` with fixed rule precedence
//! - **`builder`**: `BlockBuilder` and `block_to_node`
//!
//! ## Key Invariants
//!
//! - Blocks never nest: lists are single-level, quotes are one deep
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Rule precedence is heading, code, quote, unordered, ordered, paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::{BlockBuilder, block_to_node};
pub use classify::{MarkdownBlockClassifier, classify};
pub use segment::segment;
pub use types::BlockKind;

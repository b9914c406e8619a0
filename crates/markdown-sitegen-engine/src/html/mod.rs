//! # HTML Tree
//!
//! A closed tree of renderable nodes produced by the parser.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered `key="value"` map
//! - **`node`**: `HtmlNode` (`Leaf` / `Parent`) with validating constructors and `to_html()`
//!
//! ## Key Invariants
//!
//! - Nodes are validated when constructed, so rendering cannot fail
//! - A parent exclusively owns its children (no sharing, no cycles)
//! - Attribute order in the output is the order they were inserted

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};

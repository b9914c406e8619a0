pub mod blocks;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use crate::{error::MarkdownError, html::HtmlNode};

use blocks::{BlockBuilder, MarkdownBlockClassifier, segment};

pub use title::extract_title;

/// Parses a whole document into a `div` root holding one child per block.
///
/// Runs segmentation, classification and construction. The first malformed
/// block fails the whole document.
pub fn build_tree(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let classifier = MarkdownBlockClassifier;
    let mut builder = BlockBuilder::new();

    for block in segment(markdown) {
        let kind = classifier.classify(&block);
        builder.push(&block, kind)?;
    }

    log::debug!("Built document tree with {} blocks", builder.len());
    builder.finish()
}

/// Converts markdown to an HTML fragment (no `<html>`/`<body>` wrapper).
pub fn render_document(markdown: &str) -> Result<String, MarkdownError> {
    build_tree(markdown).map(|root| root.to_html())
}

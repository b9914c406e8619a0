use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Assigns a [`BlockKind`] to a whole block.
///
/// Rules are tried in a fixed precedence and the first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph. A quoted
/// line that also looks like a numbered item is therefore a quote.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if block.trim().is_empty() {
            return BlockKind::Paragraph;
        }
        if let Some((level, _)) = Heading::parse(block) {
            return BlockKind::Heading { level };
        }
        if CodeFence::encloses(block) {
            return BlockKind::Code;
        }
        if BlockQuote::matches(block) {
            return BlockKind::Quote;
        }
        if UnorderedList::matches(block) {
            return BlockKind::UnorderedList;
        }
        if OrderedList::matches(block) {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }
}

/// Classifies a single block with the default classifier.
pub fn classify(block: &str) -> BlockKind {
    MarkdownBlockClassifier.classify(block)
}

use crate::{
    error::MarkdownError,
    html::HtmlNode,
    parsing::inline::tokenize,
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockKind,
};

/// Collects one node per classified block under a single `div` root.
pub struct BlockBuilder {
    out: Vec<HtmlNode>,
}

impl BlockBuilder {
    pub const ROOT_TAG: &'static str = "div";

    pub fn new() -> Self {
        Self { out: vec![] }
    }

    /// Converts `block` into a node and appends it.
    ///
    /// Fails on the first malformed block; nothing is dropped silently.
    pub fn push(&mut self, block: &str, kind: BlockKind) -> Result<(), MarkdownError> {
        let node = block_to_node(block, kind)?;
        self.out.push(node);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> Result<HtmlNode, MarkdownError> {
        HtmlNode::parent(Self::ROOT_TAG, self.out)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the node for one block of the given kind.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<HtmlNode, MarkdownError> {
    match kind {
        BlockKind::Heading { level } => {
            let text = Heading::parse(block).map_or(block, |(_, text)| text);
            HtmlNode::parent(&Heading::tag(level), text_to_children(text)?)
        }
        BlockKind::Code => {
            let body = CodeFence::body(block);
            let code_children = if body.is_empty() {
                vec![]
            } else {
                vec![HtmlNode::text(body)?]
            };
            let code = HtmlNode::parent("code", code_children)?;
            HtmlNode::parent("pre", vec![code])
        }
        BlockKind::Quote => {
            let text = BlockQuote::content(block);
            HtmlNode::parent(BlockQuote::TAG, text_to_children(&text)?)
        }
        BlockKind::UnorderedList => list_to_node(
            UnorderedList::TAG,
            block.lines().map(UnorderedList::item_text),
        ),
        BlockKind::OrderedList => {
            list_to_node(OrderedList::TAG, block.lines().map(OrderedList::item_text))
        }
        BlockKind::Paragraph => HtmlNode::parent(Paragraph::TAG, text_to_children(block)?),
    }
}

/// Inline-parses `text` and turns each span into a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    tokenize(text)?
        .iter()
        .map(|span| span.to_html_node())
        .collect()
}

fn list_to_node<'a>(
    tag: &str,
    items: impl Iterator<Item = &'a str>,
) -> Result<HtmlNode, MarkdownError> {
    let children = items
        .map(|item| HtmlNode::parent("li", text_to_children(item)?))
        .collect::<Result<Vec<_>, _>>()?;
    HtmlNode::parent(tag, children)
}

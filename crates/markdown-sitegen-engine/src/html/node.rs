use crate::error::MarkdownError;

use super::attributes::Attributes;

/// A terminal node: an optional tag wrapped around literal text.
///
/// Without a tag the content is emitted verbatim (raw text passthrough).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    content: String,
    attributes: Attributes,
}

/// A node owning an ordered list of children under a required tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

/// A renderable HTML node.
///
/// Both variants are checked when built, so [`HtmlNode::to_html`] is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl LeafNode {
    /// Builds a leaf, rejecting a blank tag or an untagged leaf with no content.
    pub fn new(
        tag: Option<&str>,
        content: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, MarkdownError> {
        let content = content.into();
        match tag {
            Some(t) if t.trim().is_empty() => Err(MarkdownError::MalformedLeaf {
                reason: "tag is present but blank".to_string(),
            }),
            None if content.is_empty() => Err(MarkdownError::MalformedLeaf {
                reason: "untagged leaf has no content".to_string(),
            }),
            _ => Ok(Self {
                tag: tag.map(str::to_string),
                content,
                attributes,
            }),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, out: &mut String) {
        match &self.tag {
            None => out.push_str(&self.content),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push_str(&self.attributes.to_html());
                out.push('>');
                out.push_str(&self.content);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl ParentNode {
    /// Builds a container, rejecting a blank tag.
    ///
    /// An empty child list is allowed and renders as `<tag></tag>`.
    pub fn new(
        tag: &str,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    ) -> Result<Self, MarkdownError> {
        if tag.trim().is_empty() {
            return Err(MarkdownError::MalformedContainer {
                reason: "tag is blank".to_string(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(&self.attributes.to_html());
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl HtmlNode {
    /// Untagged leaf holding raw text.
    pub fn text(content: impl Into<String>) -> Result<Self, MarkdownError> {
        LeafNode::new(None, content, Attributes::new()).map(Self::Leaf)
    }

    pub fn leaf(
        tag: &str,
        content: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, MarkdownError> {
        LeafNode::new(Some(tag), content, attributes).map(Self::Leaf)
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self, MarkdownError> {
        ParentNode::new(tag, children, Attributes::new()).map(Self::Parent)
    }

    /// The node's tag, `None` for raw text leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes(),
            HtmlNode::Parent(parent) => parent.attributes(),
        }
    }

    /// Serializes the tree depth-first with no whitespace between children.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn untagged_leaf_is_raw_text() {
        let node = HtmlNode::text("Just text").unwrap();
        assert_eq!(node.to_html(), "Just text");
    }

    #[test]
    fn tagged_leaf_wraps_content() {
        let node = HtmlNode::leaf("p", "Hello, world!", Attributes::new()).unwrap();
        assert_eq!(node.to_html(), "<p>Hello, world!</p>");
    }

    #[test]
    fn leaf_with_attributes() {
        let attrs = Attributes::new().with("href", "https://www.google.com");
        let node = HtmlNode::leaf("a", "Click me!", attrs).unwrap();
        assert_eq!(
            node.to_html(),
            r#"<a href="https://www.google.com">Click me!</a>"#
        );
    }

    #[test]
    fn tagged_leaf_may_be_empty() {
        let attrs = Attributes::new().with("src", "a.png").with("alt", "");
        let node = HtmlNode::leaf("img", "", attrs).unwrap();
        assert_eq!(node.to_html(), r#"<img src="a.png" alt=""></img>"#);
    }

    #[test]
    fn untagged_empty_leaf_is_rejected() {
        assert!(matches!(
            HtmlNode::text(""),
            Err(MarkdownError::MalformedLeaf { .. })
        ));
    }

    #[test]
    fn blank_leaf_tag_is_rejected() {
        assert!(matches!(
            HtmlNode::leaf("  ", "x", Attributes::new()),
            Err(MarkdownError::MalformedLeaf { .. })
        ));
    }

    #[test]
    fn blank_parent_tag_is_rejected() {
        assert!(matches!(
            HtmlNode::parent("", vec![]),
            Err(MarkdownError::MalformedContainer { .. })
        ));
    }

    #[test]
    fn parent_renders_children_in_order() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::leaf("b", "Bold text", Attributes::new()).unwrap(),
                HtmlNode::text("Normal text").unwrap(),
                HtmlNode::leaf("i", "italic text", Attributes::new()).unwrap(),
                HtmlNode::text("Normal text").unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(
            node.to_html(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn nested_parents() {
        let inner = HtmlNode::parent("code", vec![HtmlNode::text("x = 1").unwrap()]).unwrap();
        let outer = HtmlNode::parent("pre", vec![inner]).unwrap();
        assert_eq!(outer.to_html(), "<pre><code>x = 1</code></pre>");
        assert_eq!(outer.children().len(), 1);
        assert_eq!(outer.children()[0].tag(), Some("code"));
    }

    #[test]
    fn empty_parent_renders_open_and_close() {
        let node = HtmlNode::parent("div", vec![]).unwrap();
        assert_eq!(node.to_html(), "<div></div>");
    }

    #[test]
    fn parent_attributes_are_serialized() {
        let node = ParentNode::new(
            "div",
            vec![HtmlNode::text("x").unwrap()],
            Attributes::new().with("class", "content"),
        )
        .map(HtmlNode::Parent)
        .unwrap();
        assert_eq!(node.to_html(), r#"<div class="content">x</div>"#);
    }
}

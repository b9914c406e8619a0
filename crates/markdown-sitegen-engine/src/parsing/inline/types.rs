use crate::{
    error::MarkdownError,
    html::{Attributes, HtmlNode},
};

/// What a [`TextSpan`] is, with the URL carried only by the kinds that have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A typed run of inline text.
///
/// Equality is structural: content, kind and target must all match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Code)
    }

    /// `url` must be non-empty.
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        debug_assert!(!url.is_empty(), "link target must not be empty");
        Self::new(content, SpanKind::Link { url })
    }

    /// `url` must be non-empty.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        debug_assert!(!url.is_empty(), "image target must not be empty");
        Self::new(alt, SpanKind::Image { url })
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }

    /// The URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }

    /// Converts the span into a leaf node.
    ///
    /// Plain text becomes an untagged leaf. An image leaf carries its alt
    /// text as an attribute and has no content of its own.
    pub fn to_html_node(&self) -> Result<HtmlNode, MarkdownError> {
        match &self.kind {
            SpanKind::Plain => HtmlNode::text(self.content.as_str()),
            SpanKind::Bold => HtmlNode::leaf("b", self.content.as_str(), Attributes::new()),
            SpanKind::Italic => HtmlNode::leaf("i", self.content.as_str(), Attributes::new()),
            SpanKind::Code => HtmlNode::leaf("code", self.content.as_str(), Attributes::new()),
            SpanKind::Link { url } => HtmlNode::leaf(
                "a",
                self.content.as_str(),
                Attributes::new().with("href", url.as_str()),
            ),
            SpanKind::Image { url } => HtmlNode::leaf(
                "img",
                "",
                Attributes::new()
                    .with("src", url.as_str())
                    .with("alt", self.content.as_str()),
            ),
        }
    }
}

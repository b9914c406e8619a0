/// The kind of a block, assigned by [`MarkdownBlockClassifier`](super::MarkdownBlockClassifier).
///
/// Exactly six kinds; every consumer matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` then a space.
    Heading {
        /// 1 to 6.
        level: u8,
    },
    /// A block fenced with triple backticks.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line is a `*` or `-` item.
    UnorderedList,
    /// Every line is numbered 1, 2, 3, ... in order.
    OrderedList,
    /// Default when no other rule matches.
    Paragraph,
}

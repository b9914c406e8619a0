/// Errors raised while converting markdown into an HTML tree.
///
/// All of these are local and deterministic: the same input always fails the
/// same way, so there is nothing to retry and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    /// A bold, italic or code marker appears an odd number of times in a text run.
    #[error("Unbalanced delimiter `{delimiter}` in: {text:?}")]
    UnbalancedDelimiter { delimiter: &'static str, text: String },

    /// A leaf node that could never render meaningful HTML.
    #[error("Malformed leaf node: {reason}")]
    MalformedLeaf { reason: String },

    /// A container node without a usable tag.
    #[error("Malformed container node: {reason}")]
    MalformedContainer { reason: String },

    /// The document has no line of the form `# Title`.
    #[error("No level-1 heading found")]
    NoTitleFound,
}

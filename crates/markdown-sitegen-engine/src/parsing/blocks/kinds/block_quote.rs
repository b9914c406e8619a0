/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code. Only a single level of quoting is recognised.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    pub const TAG: &'static str = "blockquote";

    /// True when every line of the block starts with `>`.
    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one `>` and the surrounding whitespace from a line.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    /// The quoted text with every line unprefixed, joined by newlines.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

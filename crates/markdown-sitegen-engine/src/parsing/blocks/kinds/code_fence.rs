/// Fenced code block type with owned fence constant.
///
/// A block is code when its first line starts with the fence and its last
/// line ends with it. Content inside is a raw zone: no inline parsing.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn encloses(block: &str) -> bool {
        match (block.lines().next(), block.lines().last()) {
            (Some(first), Some(last)) => {
                first.starts_with(Self::BACKTICKS) && last.ends_with(Self::BACKTICKS)
            }
            _ => false,
        }
    }

    /// The code between the fences.
    ///
    /// Drops exactly the first and last line and joins the rest verbatim. A
    /// single-line block yields the text between its opening and closing fence;
    /// when the two fences overlap, whatever follows the opening fence is kept.
    pub fn body(block: &str) -> String {
        let lines: Vec<&str> = block.lines().collect();
        match lines.as_slice() {
            [] => String::new(),
            [only] => {
                let rest = only.strip_prefix(Self::BACKTICKS).unwrap_or(only);
                rest.strip_suffix(Self::BACKTICKS).unwrap_or(rest).to_string()
            }
            [_, inner @ .., _] => inner.join("\n"),
        }
    }
}

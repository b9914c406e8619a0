use crate::error::MarkdownError;

/// Prefix of a level-1 heading line.
const TITLE_PREFIX: &str = "# ";

/// Returns the trimmed text of the first level-1 heading line.
///
/// Only `# ` qualifies; `## Sub` and `#NoSpace` are skipped. Lines are scanned
/// regardless of block structure.
///
/// # Errors
/// [`MarkdownError::NoTitleFound`] when no line qualifies.
pub fn extract_title(document: &str) -> Result<String, MarkdownError> {
    document
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(MarkdownError::NoTitleFound)
}

use std::sync::OnceLock;

use regex::Regex;

/// Unordered list: every line is `*` or `-` then a space, optionally indented.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [char; 2] = ['*', '-'];
    pub const TAG: &'static str = "ul";

    fn pattern() -> &'static Regex {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        ITEM_REGEX.get_or_init(|| Regex::new(r"^\s*[*-] ").expect("Invalid list item regex"))
    }

    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| Self::pattern().is_match(line))
    }

    /// Removes the leading marker and surrounding whitespace from one item line.
    pub fn item_text(line: &str) -> &str {
        let trimmed = line.trim_start();
        trimmed
            .strip_prefix(Self::MARKERS)
            .unwrap_or(trimmed)
            .trim()
    }
}

/// Ordered list: lines numbered `1.`, `2.`, ... `N.` with no gaps or repeats.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: char = '.';
    pub const TAG: &'static str = "ol";

    /// The item number of a line: the digits before its first `.`.
    pub fn number(line: &str) -> Option<usize> {
        let (digits, _) = line.split_once(Self::SEPARATOR)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// True when the lines are numbered exactly 1, 2, 3, ... in order.
    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| Self::number(line) == Some(i + 1))
    }

    /// Removes the number and its `.` from one item line, then trims.
    pub fn item_text(line: &str) -> &str {
        match line.split_once(Self::SEPARATOR) {
            Some((_, rest)) => rest.trim(),
            None => line.trim(),
        }
    }
}

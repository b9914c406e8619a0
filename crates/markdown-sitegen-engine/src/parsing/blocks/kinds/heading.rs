use std::sync::OnceLock;

use regex::Regex;

/// ATX heading type: one to six `#` then a single space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6}) ").expect("Invalid heading regex"))
    }

    /// Returns the heading level and the text after the marker, if `block` is a heading.
    ///
    /// Seven or more `#` before the space is not a heading.
    pub fn parse(block: &str) -> Option<(u8, &str)> {
        let caps = Self::pattern().captures(block)?;
        let marker = caps.get(1)?;
        let level = u8::try_from(marker.len()).ok()?;
        Some((level, &block[marker.end() + 1..]))
    }

    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}

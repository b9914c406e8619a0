/// Link syntax: `[text](url)`.
///
/// The label may not contain brackets and the url may not contain
/// parentheses; there is no nesting and no escaping.
pub struct Link;

impl Link {
    pub const OPEN: &'static [u8; 1] = b"[";
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// Image syntax: `![alt](url)`. Shares the bracket layout of [`Link`].
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
    pub const BANG: u8 = b'!';
}

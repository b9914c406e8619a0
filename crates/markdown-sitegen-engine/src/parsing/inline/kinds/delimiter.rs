use crate::parsing::inline::types::SpanKind;

/// A paired inline marker, split out of plain text by one delimiter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Pass order. Bold must run before italic since `**` contains `*`.
    pub const PASSES: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    pub fn kind(self) -> SpanKind {
        match self {
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
            Delimiter::Code => SpanKind::Code,
        }
    }
}

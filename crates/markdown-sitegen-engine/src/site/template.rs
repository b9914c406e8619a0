use std::path::Path;

use crate::io::{self, IoError};

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE_PLACEHOLDER: &'static str = "{{ Title }}";
    pub const CONTENT_PLACEHOLDER: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        io::read_file(path).map(Self::new)
    }

    /// Substitutes every occurrence of both placeholders.
    ///
    /// The title is replaced first, so a literal `{{ Title }}` inside the
    /// rendered content survives.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE_PLACEHOLDER, title)
            .replace(Self::CONTENT_PLACEHOLDER, content)
    }
}

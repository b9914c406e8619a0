pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode};
pub use parsing::{
    blocks::{BlockKind, classify, segment},
    build_tree, extract_title,
    inline::{SpanKind, TextSpan, tokenize},
    render_document,
};
pub use site::{BuildOptions, BuildReport, SiteError, Template, build_site};

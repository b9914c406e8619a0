use crate::error::MarkdownError;

use super::{
    cursor::Cursor,
    kinds::{Delimiter, Image, Link},
    types::TextSpan,
};

/// Splits a run of text into typed spans.
///
/// Passes run in a fixed order, each a pure function from spans to spans:
/// images, links, then the bold, italic and code delimiter passes. Images and
/// links are lifted out whole before any delimiter scanning can touch their
/// brackets. Only `Plain` spans are ever re-split.
///
/// Empty input yields no spans.
///
/// # Errors
/// [`MarkdownError::UnbalancedDelimiter`] when a plain run holds an odd
/// number of some marker.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, MarkdownError> {
    if text.is_empty() {
        return Ok(vec![]);
    }
    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    Delimiter::PASSES
        .into_iter()
        .try_fold(spans, split_delimiter)
}

/// Lifts every `![alt](url)` out of plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, Bracketed::Image)
}

/// Lifts every `[text](url)` out of plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, Bracketed::Link)
}

/// One delimiter pass: splits plain spans on alternating `delimiter` markers.
///
/// Text outside markers stays plain (dropped when empty); text between a pair
/// takes the delimiter's kind.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, MarkdownError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(marker).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnbalancedDelimiter {
                delimiter: marker,
                text: span.content.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(TextSpan::new(part, delimiter.kind()));
            } else if !part.is_empty() {
                out.push(TextSpan::plain(part));
            }
        }
    }

    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracketed {
    Image,
    Link,
}

impl Bracketed {
    fn open(self) -> &'static [u8] {
        match self {
            Bracketed::Image => &Image::OPEN[..],
            Bracketed::Link => &Link::OPEN[..],
        }
    }

    fn span(self, label: &str, url: &str) -> TextSpan {
        match self {
            Bracketed::Image => TextSpan::image(label, url),
            Bracketed::Link => TextSpan::link(label, url),
        }
    }
}

/// A matched `[label](url)` with byte offsets into the scanned text.
struct Match<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

fn split_bracketed(spans: Vec<TextSpan>, which: Bracketed) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() {
            scan_bracketed(&span.content, which, &mut out);
        } else {
            out.push(span);
        }
    }
    out
}

fn scan_bracketed(s: &str, which: Bracketed, out: &mut Vec<TextSpan>) {
    fn flush_text(out: &mut Vec<TextSpan>, text: &str) {
        if !text.is_empty() {
            out.push(TextSpan::plain(text));
        }
    }

    let mut cur = Cursor::new(s);
    let mut text_start = 0;

    while !cur.eof() {
        if let Some(m) = try_parse_bracketed(&mut cur, which) {
            flush_text(out, &s[text_start..m.start]);
            out.push(which.span(m.label, m.url));
            text_start = m.end;
            continue;
        }
        cur.bump_char();
    }

    flush_text(out, &s[text_start..]);
}

/// Attempts to parse `[label](url)` (or `![label](url)`) at the cursor.
///
/// The url must be non-empty. A link opener directly after `!` belongs to
/// image syntax and is skipped. On failure, cursor position is restored.
fn try_parse_bracketed<'a>(cur: &mut Cursor<'a>, which: Bracketed) -> Option<Match<'a>> {
    if !cur.starts_with(which.open()) {
        return None;
    }
    if which == Bracketed::Link && cur.prev() == Some(Image::BANG) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(which.open().len());

    let label_start = cur.pos();
    cur.bump_until(&[Link::OPEN[0], Link::LABEL_CLOSE]);
    let label_end = cur.pos();
    if cur.peek() != Some(Link::LABEL_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    if cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (

    let url_start = cur.pos();
    cur.bump_until(&[Link::URL_OPEN, Link::URL_CLOSE]);
    let url_end = cur.pos();
    if cur.peek() != Some(Link::URL_CLOSE) || url_start == url_end {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(Match {
        start,
        end: cur.pos(),
        label: cur.slice(label_start, label_end),
        url: cur.slice(url_start, url_end),
    })
}

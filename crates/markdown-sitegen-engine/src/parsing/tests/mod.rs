//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their expected output (.html) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;

use crate::{
    error::MarkdownError,
    parsing::{blocks::segment, build_tree, extract_title, render_document},
};

// Fixture-based tests

#[test]
fn fixture_mixed_content() {
    assert_fixture("mixed_content");
}

#[test]
fn fixture_inline_formatting() {
    assert_fixture("inline_formatting");
}

#[test]
fn fixture_code_and_lists() {
    assert_fixture("code_and_lists");
}

#[test]
fn fixture_quotes_and_numbers() {
    assert_fixture("quotes_and_numbers");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let root = build_tree(&md).unwrap();
    invariants::check(&root);

    assert_eq!(root.to_html(), expected.trim_end_matches('\n'));
}

// Invariant tests

#[test]
fn one_root_child_per_block() {
    let md = "# A\n\ntext\n\n> q\n\n```\ncode\n```\n\n1. x\n2. y";
    let root = build_tree(md).unwrap();
    invariants::check(&root);
    assert_eq!(root.children().len(), segment(md).len());
}

#[test]
fn rendering_is_deterministic() {
    let md = std::fs::read_to_string(format!(
        "{}/src/parsing/tests/fixtures/inline_formatting.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    assert_eq!(render_document(&md).unwrap(), render_document(&md).unwrap());
}

#[test]
fn heading_then_paragraph() {
    let root = build_tree("# Heading\n\nParagraph").unwrap();
    let tags: Vec<_> = root.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p")]);
}

#[test]
fn list_has_two_items() {
    let root = build_tree("* a\n* b").unwrap();
    assert_eq!(root.children().len(), 1);
    let ul = &root.children()[0];
    assert_eq!(ul.tag(), Some("ul"));
    assert_eq!(ul.children().len(), 2);
    assert!(ul.children().iter().all(|li| li.tag() == Some("li")));
}

#[test]
fn empty_document_is_empty_div() {
    insta::assert_snapshot!(render_document("").unwrap(), @"<div></div>");
    insta::assert_snapshot!(render_document("\n\n  \n").unwrap(), @"<div></div>");
}

#[test]
fn headings_of_every_level() {
    insta::assert_snapshot!(
        render_document("# One\n\n## Two\n\n###### Six\n\n####### Seven").unwrap(),
        @"<div><h1>One</h1><h2>Two</h2><h6>Six</h6><p>####### Seven</p></div>"
    );
}

#[test]
fn link_inside_list_item() {
    insta::assert_snapshot!(
        render_document("- see [docs](https://docs.rs)\n- `cargo doc`").unwrap(),
        @r#"<div><ul><li>see <a href="https://docs.rs">docs</a></li><li><code>cargo doc</code></li></ul></div>"#
    );
}

#[test]
fn link_query_ampersand_is_escaped_in_href() {
    // Only attribute values are escaped; the link text stays verbatim.
    insta::assert_snapshot!(
        render_document("Search [a & b](/search?a=1&b=2)").unwrap(),
        @r#"<div><p>Search <a href="/search?a=1&amp;b=2">a & b</a></p></div>"#
    );
}

#[test]
fn overlapping_single_line_fence_keeps_backtick() {
    insta::assert_snapshot!(
        render_document("````").unwrap(),
        @"<div><pre><code>`</code></pre></div>"
    );
}

#[test]
fn one_bad_block_fails_the_document() {
    let err = render_document("# Fine\n\nThis is **unterminated").unwrap_err();
    assert!(matches!(err, MarkdownError::UnbalancedDelimiter { delimiter: "**", .. }));
}

#[test]
fn code_block_with_blank_line_is_split() {
    // Segmentation happens before classification, so the fence is broken
    // apart and the stray backticks are unbalanced.
    let err = render_document("```\na\n\nb\n```").unwrap_err();
    assert!(matches!(err, MarkdownError::UnbalancedDelimiter { delimiter: "`", .. }));
}

#[test]
fn title_comes_from_level_one_heading() {
    let md = "## Intro\n\n# The Title\n\nBody";
    assert_eq!(extract_title(md).unwrap(), "The Title");
}

//! Document-level tests for the parsing module.
//!
//! Each test parses a whole document with deterministic ids and checks the
//! output against the invariants before asserting on specifics.

use pretty_assertions::assert_eq;

use crate::{
    ids::SequentialIds,
    models::{InlineSegment, TextAlignment},
    options::{LineEndings, ParseOptions},
    parsing::{Parser, parse, snapshot},
};

fn parse_checked(md: &str, options: ParseOptions) -> Vec<crate::Block> {
    let parser = Parser::with_id_generator(options.clone(), SequentialIds::default());
    let blocks = parser.parse(md);
    snapshot::invariants(md, &options, &blocks);
    blocks
}

fn texts(blocks: &[crate::Block]) -> Vec<String> {
    blocks.iter().map(|b| b.plain_text()).collect()
}

#[test]
fn each_line_becomes_a_paragraph() {
    let md = "Rounaks Company signedup on 2025-10-07T18:31:00.162Z
This is the first outreach call. Capture Company type if known
https://github.com/twentyhq/twenty/issues/14879 - This link is for the issue of next line
This is in next line";

    let blocks = parse_checked(md, ParseOptions::default());

    assert_eq!(blocks.len(), 4);
    assert_eq!(
        blocks[0].content,
        vec![InlineSegment::text(
            "Rounaks Company signedup on 2025-10-07T18:31:00.162Z"
        )]
    );
    assert_eq!(
        blocks[1].content,
        vec![InlineSegment::text(
            "This is the first outreach call. Capture Company type if known"
        )]
    );
    assert_eq!(
        blocks[2].content,
        vec![
            InlineSegment::link("https://github.com/twentyhq/twenty/issues/14879"),
            InlineSegment::text(" - This link is for the issue of next line"),
        ]
    );
    assert_eq!(
        blocks[3].content,
        vec![InlineSegment::text("This is in next line")]
    );
}

#[test]
fn blank_lines_are_skipped() {
    let blocks = parse_checked("Line 1\n\nLine 2\n\nLine 3", ParseOptions::default());
    assert_eq!(texts(&blocks), vec!["Line 1", "Line 2", "Line 3"]);
}

#[test]
fn link_inside_text() {
    let blocks = parse_checked(
        "Check out this link: https://example.com for more info",
        ParseOptions::default(),
    );
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].content,
        vec![
            InlineSegment::text("Check out this link: "),
            InlineSegment::link("https://example.com"),
            InlineSegment::text(" for more info"),
        ]
    );
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn whitespace_only_document() {
    assert!(parse("   \n  \n  ").is_empty());
}

#[test]
fn absent_document() {
    assert!(parse(None::<&str>).is_empty());
}

#[test]
fn ids_are_unique_per_block() {
    let blocks = parse("Line 1\nLine 2");
    assert_eq!(blocks.len(), 2);
    assert!(!blocks[0].id.as_str().is_empty());
    assert_ne!(blocks[0].id, blocks[1].id);
}

#[test]
fn identical_lines_get_distinct_ids() {
    let blocks = parse_checked("same\nsame\nsame", ParseOptions::default());
    let ids: Vec<_> = blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2", "b3"]);
}

#[test]
fn leading_and_trailing_whitespace_is_preserved() {
    let blocks = parse_checked("  padded line\t\n\nnext", ParseOptions::default());
    assert_eq!(texts(&blocks), vec!["  padded line\t", "next"]);
}

#[test]
fn crlf_matches_lf_by_default() {
    let lf = parse_checked("one\ntwo https://x.test\n\nthree", ParseOptions::default());
    let crlf = parse_checked(
        "one\r\ntwo https://x.test\r\n\r\nthree\r\n",
        ParseOptions::default(),
    );
    assert_eq!(texts(&lf), texts(&crlf));
    for (a, b) in lf.iter().zip(&crlf) {
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn lf_mode_keeps_carriage_returns() {
    let options = ParseOptions {
        line_endings: LineEndings::Lf,
        ..ParseOptions::default()
    };
    let blocks = parse_checked("plain\r\nsee https://x.test after\r\n\r\n", options);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].content, vec![InlineSegment::text("plain\r")]);
    assert_eq!(
        blocks[1].content,
        vec![
            InlineSegment::text("see "),
            InlineSegment::link("https://x.test"),
            InlineSegment::text(" after\r"),
        ]
    );
}

#[test]
fn custom_props_apply_to_every_block() {
    let mut options = ParseOptions::default();
    options.props.text_alignment = TextAlignment::Center;
    options.props.text_color = "blue".to_string();

    let blocks = parse_checked("a\nb https://c.test", options.clone());
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.props == options.props));
}

#[test]
fn shared_generator_continues_across_parses() {
    let ids = SequentialIds::new("n");
    let parser = Parser::with_id_generator(ParseOptions::default(), &ids);
    let first = parser.parse("a\nb");
    let second = parser.parse("c");
    assert_eq!(first[1].id.as_str(), "n2");
    assert_eq!(second[0].id.as_str(), "n3");
}

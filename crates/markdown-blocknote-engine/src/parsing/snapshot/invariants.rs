use std::collections::HashSet;

use crate::{
    models::{Block, BlockType, InlineSegment},
    options::ParseOptions,
    parsing::lines::lines_with_spans,
};

/// Validates parser output against its source document.
///
/// Asserts that:
/// - There is exactly one block per non-blank line
/// - Block ids are pairwise distinct
/// - Every block is a childless paragraph carrying `options.props`
/// - Every link's label equals its href
/// - Each block's segments occur in its source line, in order
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, options: &ParseOptions, blocks: &[Block]) {
    let lines: Vec<_> = lines_with_spans(source, options.line_endings)
        .filter(|l| !l.is_blank())
        .collect();
    assert_eq!(
        blocks.len(),
        lines.len(),
        "block count {} does not match non-blank line count {}",
        blocks.len(),
        lines.len()
    );

    let mut seen = HashSet::new();
    for (block, line) in blocks.iter().zip(&lines) {
        assert!(seen.insert(&block.id), "duplicate block id: {}", block.id);
        assert_eq!(block.kind, BlockType::Paragraph, "block {} is not a paragraph", block.id);
        assert!(block.children.is_empty(), "block {} has children", block.id);
        assert_eq!(block.props, options.props, "block {} has unexpected props", block.id);
        assert!(!block.content.is_empty(), "block {} has no content", block.id);

        let mut cursor = 0usize;
        for seg in &block.content {
            if let InlineSegment::Link(link) = seg {
                assert!(
                    link.content.len() == 1 && link.content[0].text == link.href,
                    "link label does not mirror href {:?}",
                    link.href
                );
            }
            let surface = seg.surface_text();
            let found = line.text[cursor..].find(surface);
            assert!(
                found.is_some(),
                "segment {:?} not found in order in line {:?}",
                surface,
                line.text
            );
            cursor += found.unwrap_or_default() + surface.len();
        }
    }
}

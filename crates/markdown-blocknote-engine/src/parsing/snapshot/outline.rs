use crate::models::{Block, BlockType, InlineSegment};

/// Renders blocks one per line with their segments indented beneath.
///
/// Ids and props are left out so the output only changes when structure or
/// text changes:
///
/// ```text
/// Paragraph
///   Text "Check out "
///   Link "https://example.com"
/// ```
pub fn outline(blocks: &[Block]) -> String {
    let mut lines = Vec::new();
    for block in blocks {
        lines.push(
            match block.kind {
                BlockType::Paragraph => "Paragraph",
            }
            .to_string(),
        );
        for seg in &block.content {
            lines.push(match seg {
                InlineSegment::Text(t) => format!("  Text {:?}", t.text),
                InlineSegment::Link(l) => format!("  Link {:?}", l.href),
            });
        }
    }
    lines.join("\n")
}

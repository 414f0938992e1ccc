pub mod block;
pub mod inline;

pub use block::{Block, BlockId, BlockProps, BlockType, TextAlignment};
pub use inline::{InlineSegment, Link, StyledText, Styles};

/// Serializes blocks to the compact BlockNote JSON document shape.
pub fn to_json(blocks: &[Block]) -> serde_json::Result<String> {
    serde_json::to_string(blocks)
}

/// Serializes blocks to indented BlockNote JSON.
pub fn to_json_pretty(blocks: &[Block]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(blocks)
}

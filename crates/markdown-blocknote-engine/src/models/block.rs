use std::fmt;

use serde::{Deserialize, Serialize};

use super::inline::InlineSegment;

/// Identifier of a single block, unique across everything a generator emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Block discriminator. Only paragraphs are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Paragraph,
}

/// Horizontal alignment of a block's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Styling attributes attached to every block.
///
/// Field names serialize in camelCase to match the editor's schema, and the
/// defaults are the editor's own defaults (`"default"` colors, left aligned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockProps {
    pub text_color: String,
    pub background_color: String,
    pub text_alignment: TextAlignment,
}

impl Default for BlockProps {
    fn default() -> Self {
        Self {
            text_color: "default".to_string(),
            background_color: "default".to_string(),
            text_alignment: TextAlignment::Left,
        }
    }
}

/// One top-level unit of the output document, built from one non-blank line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockType,
    pub props: BlockProps,
    /// Inline segments in left-to-right reading order.
    pub content: Vec<InlineSegment>,
    /// Always empty: nested blocks are never produced.
    pub children: Vec<Block>,
}

impl Block {
    /// Creates a paragraph block with no children.
    pub fn paragraph(id: BlockId, props: BlockProps, content: Vec<InlineSegment>) -> Self {
        Self {
            id,
            kind: BlockType::Paragraph,
            props,
            content,
            children: vec![],
        }
    }

    /// Concatenated surface text of all segments (link hrefs included).
    pub fn plain_text(&self) -> String {
        self.content.iter().map(InlineSegment::surface_text).collect()
    }
}

//! # markdown-blocknote engine
//!
//! Converts line-oriented markdown into BlockNote paragraph blocks.
//!
//! Every non-blank line becomes one paragraph [`Block`]. Within a line,
//! `http://` and `https://` URLs are split out into [`InlineSegment::Link`]
//! runs so the editor renders them as links; everything else stays as
//! [`InlineSegment::Text`].
//!
//! ```rust
//! use markdown_blocknote_engine::{InlineSegment, parse};
//!
//! let blocks = parse("See https://example.com\n\nsecond line");
//! assert_eq!(blocks.len(), 2);
//! assert!(matches!(blocks[0].content[1], InlineSegment::Link(_)));
//! ```
//!
//! ## Modules
//!
//! - **`models`**: `Block`, `BlockProps` and the `InlineSegment` union
//! - **`ids`**: `IdGenerator` trait with UUID and sequential generators
//! - **`options`**: `ParseOptions` and `LineEndings`
//! - **`parsing`**: line segmentation, inline tokenization and the `Parser`

pub mod ids;
pub mod models;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use models::{
    Block, BlockId, BlockProps, BlockType, InlineSegment, Link, StyledText, Styles,
    TextAlignment, to_json, to_json_pretty,
};
pub use options::{LineEndings, ParseOptions};
pub use parsing::{Parser, inline::find_urls, parse, span::Span, tokenize};

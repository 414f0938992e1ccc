//! # Parsing
//!
//! Two layers, applied per document:
//!
//! 1. **Line segmentation** (`lines`, `blocks`): the document is split on
//!    `\n`, blank lines are dropped and every other line becomes one
//!    paragraph [`Block`] via `BlockBuilder`.
//! 2. **Inline tokenizing** (`inline`): each surviving line, untrimmed, is
//!    split into text and link segments.
//!
//! Lines are independent: nothing carries over from one line to the next.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use inline::tokenize;

use crate::{
    ids::{IdGenerator, UuidIds},
    models::Block,
    options::ParseOptions,
};

use blocks::BlockBuilder;
use lines::lines_with_spans;

/// Converts documents into blocks using fixed options and an id generator.
///
/// A `Parser` holds no per-document state and can be shared between threads
/// whenever its generator can.
#[derive(Debug, Default)]
pub struct Parser<G = UuidIds> {
    options: ParseOptions,
    ids: G,
}

impl Parser<UuidIds> {
    /// A parser with default options and random UUID ids.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ids: UuidIds,
        }
    }
}

impl<G: IdGenerator> Parser<G> {
    pub fn with_id_generator(options: ParseOptions, ids: G) -> Self {
        Self { options, ids }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a document into one paragraph block per non-blank line.
    ///
    /// `None`, the empty string and whitespace-only documents all produce an
    /// empty vector. This never fails.
    pub fn parse<'a>(&self, markdown: impl Into<Option<&'a str>>) -> Vec<Block> {
        let Some(markdown) = markdown.into() else {
            return vec![];
        };
        if markdown.trim().is_empty() {
            return vec![];
        }

        let mut builder = BlockBuilder::new(&self.ids, &self.options.props);
        let mut line_count = 0usize;
        for line in lines_with_spans(markdown, self.options.line_endings) {
            line_count += 1;
            builder.push(&line);
        }

        let blocks = builder.finish();
        log::debug!(
            "parsed {} blocks from {} lines ({} bytes)",
            blocks.len(),
            line_count,
            markdown.len()
        );
        blocks
    }
}

/// Parses a document with default options and random UUID ids.
///
/// Accepts `&str` or `Option<&str>`; `None` is treated as an empty document.
pub fn parse<'a>(markdown: impl Into<Option<&'a str>>) -> Vec<Block> {
    Parser::new().parse(markdown)
}

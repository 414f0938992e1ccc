use crate::{
    ids::IdGenerator,
    models::{Block, BlockProps},
};

use super::{inline::tokenize, lines::LineRef};

/// Accumulates one paragraph block per non-blank line.
pub struct BlockBuilder<'a, G: IdGenerator + ?Sized> {
    ids: &'a G,
    props: &'a BlockProps,
    out: Vec<Block>,
}

impl<'a, G: IdGenerator + ?Sized> BlockBuilder<'a, G> {
    pub fn new(ids: &'a G, props: &'a BlockProps) -> Self {
        Self {
            ids,
            props,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineRef<'_>) {
        if line.is_blank() {
            log::trace!("skipping blank line at {}..{}", line.span.start, line.span.end);
            return;
        }

        self.out.push(Block::paragraph(
            self.ids.next_id(),
            self.props.clone(),
            tokenize(line.text),
        ));
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }
}

use crate::options::LineEndings;

use super::span::Span;

/// A single line of the document with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line text in the document, excluding the terminator.
    pub span: Span,
    /// The line text, with `\r` removed according to the [`LineEndings`] mode.
    pub text: &'a str,
}

impl LineRef<'_> {
    /// Whether the line is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Returns an iterator over the `\n`-separated lines of `doc`.
///
/// A document always has at least one line, and a trailing `\n` yields a
/// final empty line.
pub fn lines_with_spans(doc: &str, endings: LineEndings) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = 0usize;
    doc.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let text = endings.strip(raw);
        LineRef {
            span: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    })
}

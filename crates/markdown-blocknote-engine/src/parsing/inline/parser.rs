use crate::{models::InlineSegment, parsing::span::Span};

use super::kinds::Url;

/// Returns the byte spans of every URL in `line`, leftmost first and
/// non-overlapping.
pub fn find_urls(line: &str) -> Vec<Span> {
    Url::regex()
        .find_iter(line)
        .map(|m| Span {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Splits one line into text and link segments.
///
/// - Each URL becomes an [`InlineSegment::Link`] carrying the exact matched text.
/// - Text before, between and after URLs is kept untrimmed, unless it is
///   whitespace only, in which case it is dropped.
/// - A line with no URL comes back as a single text segment holding the whole
///   line, whitespace or not.
///
/// Never fails and never returns an empty vector.
pub fn tokenize(line: &str) -> Vec<InlineSegment> {
    let urls = find_urls(line);
    if urls.is_empty() {
        return vec![InlineSegment::text(line)];
    }

    let mut out = Vec::with_capacity(urls.len() * 2 + 1);
    let mut text_start = 0;

    // Helper to flush the text run between links
    fn flush_text(out: &mut Vec<InlineSegment>, line: &str, start: usize, end: usize) {
        let run = &line[start..end];
        if !run.trim().is_empty() {
            out.push(InlineSegment::text(run));
        }
    }

    for url in urls {
        flush_text(&mut out, line, text_start, url.start);
        out.push(InlineSegment::link(url.slice(line)));
        text_start = url.end;
    }

    flush_text(&mut out, line, text_start, line.len());
    log::trace!("tokenized {} bytes into {} segments", line.len(), out.len());
    out
}

use serde::{Deserialize, Serialize};

/// Text styles applied to a run.
///
/// Styling is never inferred from the source, so this is always empty and
/// serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Styles {}

/// A plain text run, serialized as `{"type": "text", "text": ..., "styles": {}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct StyledText {
    pub text: String,
    pub styles: Styles,
}

impl StyledText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Styles::default(),
        }
    }
}

/// A hyperlink run whose visible label is the URL itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "link")]
pub struct Link {
    pub href: String,
    pub content: Vec<StyledText>,
}

/// A contiguous run of one kind within a block's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InlineSegment {
    Text(StyledText),
    Link(Link),
}

impl InlineSegment {
    pub fn text(text: impl Into<String>) -> Self {
        InlineSegment::Text(StyledText::new(text))
    }

    /// Builds a link whose single label run mirrors `href`.
    pub fn link(href: impl Into<String>) -> Self {
        let href = href.into();
        InlineSegment::Link(Link {
            content: vec![StyledText::new(href.clone())],
            href,
        })
    }

    /// The source text this segment was cut from: the text of a run, or the
    /// href of a link.
    pub fn surface_text(&self) -> &str {
        match self {
            InlineSegment::Text(t) => &t.text,
            InlineSegment::Link(l) => &l.href,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InlineSegment::Text(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, InlineSegment::Link(_))
    }
}

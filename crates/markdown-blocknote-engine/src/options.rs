use serde::{Deserialize, Serialize};

use crate::models::BlockProps;

/// How carriage returns in the input are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Accept both `\n` and `\r\n`: one `\r` directly before a line break
    /// (or at the very end of the input) is dropped.
    #[default]
    Auto,
    /// Split on `\n` only; any `\r` stays part of the line text.
    Lf,
}

impl LineEndings {
    /// Removes the line terminator residue this mode does not keep.
    pub fn strip<'a>(self, line: &'a str) -> &'a str {
        match self {
            LineEndings::Auto => line.strip_suffix('\r').unwrap_or(line),
            LineEndings::Lf => line,
        }
    }
}

/// Knobs for a [`Parser`](crate::Parser).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub line_endings: LineEndings,
    /// Props stamped onto every produced block.
    pub props: BlockProps,
}

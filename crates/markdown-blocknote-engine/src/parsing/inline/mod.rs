//! # Inline Tokenizing
//!
//! Splits one line into text runs and link runs.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline constructs that own their match grammar (`Url`)
//! - **`parser`**: `tokenize()` and `find_urls()` entry points
//!
//! ## Whitespace Runs
//!
//! Text between or around links is dropped when it is whitespace only. A line
//! without any link is always returned verbatim as a single text run, even
//! when that line is whitespace only. The line segmenter never passes blank
//! lines here, so the difference only shows when tokenizing directly.

pub mod kinds;
pub mod parser;

pub use parser::{find_urls, tokenize};

//! Inline-specific types that own their syntax.
//!
//! The parser asks these types for their grammar; it never hardcodes a scheme
//! or pattern itself.

pub mod url;

pub use url::Url;

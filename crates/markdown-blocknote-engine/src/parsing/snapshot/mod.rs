//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders blocks as stable text (ids elided) for `insta`
//!   inline snapshots
//! - **`invariants`**: Runtime checks for parser correctness (one block per
//!   non-blank line, unique ids, paragraph shape, segments in source order)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;

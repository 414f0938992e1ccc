//! Block identifier generation.
//!
//! The parser never derives ids from content; it asks an [`IdGenerator`] for
//! a fresh one per block. Production code uses [`UuidIds`], tests usually
//! inject [`SequentialIds`] to get stable output.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::models::BlockId;

/// Source of fresh, unique block identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns an id that has not been handed out before.
    fn next_id(&self) -> BlockId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> BlockId {
        (**self).next_id()
    }
}

/// Random UUID v4 ids, e.g. `"9b2c5f8e-0d8e-4b5e-a4a4-3f0c2d7e1a6b"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> BlockId {
        BlockId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids of the form `{prefix}{n}`, counting from 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("b")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> BlockId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        BlockId::new(format!("{}{n}", self.prefix))
    }
}

//! Concurrency-safe store for the exported menu tree.
//!
//! Owns the root [`Node`] behind a whole-tree reader/writer lock and the
//! revision counter that tells remote readers when their cached view is
//! stale. Mutation always goes through [`TreeStore`] primitives so locking
//! and (caller-side) notification stay centralized.
//!
//! [`Node`]: traymenu_model::Node

mod project;
mod revision;
mod tree;

pub use revision::Revision;
pub use tree::{TreeStore, UpsertOutcome};

/// Errors produced by the tree store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("menu node {0} not found")]
    NotFound(i32),
}

//! Error types for the ordering pipeline.

use thiserror::Error;

use lattice_order_core::{BlockError, BlockId, SortError};

use crate::source::SourceError;

/// Errors that can occur while ordering a lattice.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The block source failed to produce the working set.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// A block failed structural validation on ingest.
    #[error("invalid block: {0}")]
    Block(#[from] BlockError),

    /// The working set violates the id uniqueness invariant.
    #[error("duplicate block id {0} in working set")]
    DuplicateBlockId(BlockId),

    /// The dependency graph could not be linearized.
    #[error("sort failed: {0}")]
    Sort(#[from] SortError),
}

/// Result type for ordering operations.
pub type Result<T> = std::result::Result<T, OrderError>;

//! Block source: the abstract input contract.
//!
//! The persistent block store lives outside this system; whatever it is,
//! it hands the pipeline a finite, enumerable set of block records with
//! references already resolved to concrete ids (hash-to-id resolution is
//! the source's responsibility, not the core's).

use thiserror::Error;

use lattice_order_core::Block;

/// Error surfaced by a block source.
///
/// Sources wrap whatever their backend raises; the pipeline only needs
/// something displayable.
#[derive(Debug, Error)]
#[error("block source error: {0}")]
pub struct SourceError(pub String);

impl SourceError {
    /// Create a source error from any displayable cause.
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

/// A finite, enumerable supplier of block records.
pub trait BlockSource {
    /// Return every block in the working set.
    ///
    /// Ids must be unique across the returned set; the orderer rejects
    /// duplicates.
    fn blocks(&self) -> Result<Vec<Block>, SourceError>;
}

/// In-memory block source.
///
/// Primarily for tests and embedding; wraps a plain vector of blocks.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    blocks: Vec<Block>,
}

impl MemorySource {
    /// Create a source over the given blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Number of blocks held.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the source holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockSource for MemorySource {
    fn blocks(&self) -> Result<Vec<Block>, SourceError> {
        Ok(self.blocks.clone())
    }
}

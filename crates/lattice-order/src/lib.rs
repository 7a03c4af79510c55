//! # Lattice Order
//!
//! Deterministic causal ordering for block-lattice ledgers.
//!
//! In a block-lattice, every account owns an independent chain of blocks
//! (open, send, receive, change). References across chains - a send
//! funding a receive, a representative's open block gating another
//! account's open - imply "must happen before" dependencies. This crate
//! reconstructs those dependencies as a directed graph, confirms the
//! graph is acyclic, and emits one deterministic linear order over all
//! blocks.
//!
//! ## Key Concepts
//!
//! - **Block**: one immutable ledger entry with resolved references.
//! - **Dependency edge** `u -> v`: u must be ordered before v.
//! - **Dangling reference**: an edge endpoint outside the working set;
//!   warned about, never fatal.
//! - **Cycle**: fatal to the sort call; the diagnostic names a cycle
//!   member and the edge that closed it.
//!
//! ## Usage
//!
//! ```rust
//! use lattice_order::{MemorySource, Orderer};
//! use lattice_order::core::{AccountId, Block, BlockId};
//!
//! let blocks = vec![
//!     Block::open(BlockId::new(0), AccountId::new(0)).build(),
//!     Block::send(BlockId::new(1), AccountId::new(0))
//!         .previous(BlockId::new(0))
//!         .destination(AccountId::new(1))
//!         .build(),
//!     Block::open(BlockId::new(2), AccountId::new(1))
//!         .source(BlockId::new(1))
//!         .build(),
//! ];
//!
//! let ordering = Orderer::new().order(&MemorySource::new(blocks)).unwrap();
//! assert_eq!(ordering.sequence.len(), 3);
//! ```

pub mod error;
pub mod orderer;
pub mod source;

// Re-export the core crate
pub use lattice_order_core as core;

// Re-export main types for convenience
pub use error::{OrderError, Result};
pub use orderer::{Algorithm, Orderer, OrdererConfig, Ordering};
pub use source::{BlockSource, MemorySource, SourceError};

// Re-export commonly used core types
pub use lattice_order_core::{
    AccountId, Block, BlockBuilder, BlockId, BlockKind, BuilderConfig, DanglingReference,
    DependencyGraph, GraphBuilder, SortError,
};

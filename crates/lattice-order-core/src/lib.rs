//! # Lattice Order Core
//!
//! Pure computation for ordering a block-lattice ledger: every account
//! owns its own chain of blocks, and cross-chain references (a send
//! funding a receive, a representative's open block gating another
//! account's open) imply "must happen before" dependencies between
//! chains. This crate derives the dependency graph, checks it is
//! acyclic, and produces a deterministic linear order over all blocks.
//!
//! This crate contains no I/O, no storage, no networking. Blocks are
//! read once, immutable for the run; the graph is built once and
//! consumed by the sorter.
//!
//! ## Key Types
//!
//! - [`Block`] - One ledger entry with resolved references
//! - [`DependencyGraph`] - Node set plus adjacency over block ids
//! - [`GraphBuilder`] - Applies per-kind edge rules, reports dangling
//!   references without aborting
//! - [`topological_sort`] / [`kahn_sort`] - Cycle-checked deterministic
//!   ordering
//!
//! ## Depth Safety
//!
//! Chains can be arbitrarily deep, so the depth-first sorter runs on an
//! explicit frame stack rather than the call stack. See [`sort`].

pub mod block;
pub mod builder;
pub mod error;
pub mod graph;
pub mod sort;
pub mod types;
pub mod validation;

pub use block::{Block, BlockBuilder, BlockKind};
pub use builder::{BuilderConfig, DanglingReference, GraphBuild, GraphBuilder};
pub use error::{BlockError, SortError};
pub use graph::DependencyGraph;
pub use sort::{
    kahn_sort, sort_from, sort_from_with, topological_sort, topological_sort_with, NoopObserver,
    SortEvent, SortObserver,
};
pub use types::{AccountId, BlockId};
pub use validation::validate_block;

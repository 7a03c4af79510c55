//! The Orderer: the batch pipeline tying source, builder and sorter
//! together.
//!
//! One call runs the whole transformation: load the working set, check
//! the id uniqueness invariant, optionally validate block structure,
//! build the dependency graph, sort. Nothing is persisted and nothing is
//! reusable after a failure; rebuilding from the source is the only way
//! to retry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use lattice_order_core::{
    kahn_sort, topological_sort, validate_block, Block, BlockId, BuilderConfig,
    DanglingReference, GraphBuilder,
};

use crate::error::{OrderError, Result};
use crate::source::BlockSource;

/// Which sorting algorithm the pipeline runs.
///
/// Both satisfy the same contract (complete, edge-respecting,
/// deterministic); they differ in the concrete sequence they pick among
/// the valid orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Iterative depth-first sort with post-order emission.
    #[default]
    DepthFirst,
    /// In-degree (Kahn) sort.
    InDegree,
}

/// Configuration for the ordering pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdererConfig {
    /// Whether to validate block structure on ingest.
    pub validate_on_ingest: bool,
    /// Graph construction options.
    pub builder: BuilderConfig,
    /// Sorting algorithm.
    pub algorithm: Algorithm,
}

impl Default for OrdererConfig {
    fn default() -> Self {
        Self {
            validate_on_ingest: true,
            builder: BuilderConfig::default(),
            algorithm: Algorithm::default(),
        }
    }
}

/// The result of a successful ordering run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    /// All block ids, each edge's source strictly before its target.
    pub sequence: Vec<BlockId>,
    /// Non-fatal consistency findings from graph construction.
    pub warnings: Vec<DanglingReference>,
}

/// Runs the ordering pipeline.
#[derive(Debug, Clone, Default)]
pub struct Orderer {
    config: OrdererConfig,
}

impl Orderer {
    /// Create an orderer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orderer with an explicit configuration.
    pub fn with_config(config: OrdererConfig) -> Self {
        Self { config }
    }

    /// Order every block the source provides.
    pub fn order<S: BlockSource>(&self, source: &S) -> Result<Ordering> {
        let blocks = source.blocks()?;
        self.order_blocks(&blocks)
    }

    /// Order an already-loaded working set.
    pub fn order_blocks(&self, blocks: &[Block]) -> Result<Ordering> {
        let mut seen = HashSet::with_capacity(blocks.len());
        for block in blocks {
            if !seen.insert(block.id) {
                return Err(OrderError::DuplicateBlockId(block.id));
            }
        }

        if self.config.validate_on_ingest {
            for block in blocks {
                validate_block(block)?;
            }
        }

        let build = GraphBuilder::with_config(self.config.builder).build(blocks);
        let sequence = match self.config.algorithm {
            Algorithm::DepthFirst => topological_sort(&build.graph)?,
            Algorithm::InDegree => kahn_sort(&build.graph)?,
        };

        tracing::debug!(
            blocks = blocks.len(),
            edges = build.graph.edge_count(),
            warnings = build.warnings.len(),
            "lattice ordered"
        );

        Ok(Ordering {
            sequence,
            warnings: build.warnings,
        })
    }
}

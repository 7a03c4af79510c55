//! The dependency graph: node set plus adjacency mapping over block ids.
//!
//! An edge `u -> v` means "u must be ordered before v". Ordered
//! collections back both the node set and the adjacency targets, so
//! ascending-id iteration (the determinism contract of the sorter) is
//! intrinsic rather than enforced at each call site.

use serde::{Deserialize, Serialize};
use std::collections::{btree_set, BTreeMap, BTreeSet};

use crate::types::BlockId;

static EMPTY_TARGETS: BTreeSet<BlockId> = BTreeSet::new();

/// A directed graph over block ids.
///
/// Every key in the adjacency map is expected to also be a node; an edge
/// endpoint missing from the node set is a dangling reference, reported
/// by the builder and skipped by the sorter (the working set may
/// intentionally be partial).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    nodes: BTreeSet<BlockId>,
    edges: BTreeMap<BlockId, BTreeSet<BlockId>>,
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph. Idempotent.
    pub fn insert_node(&mut self, id: BlockId) {
        self.nodes.insert(id);
        self.edges.entry(id).or_default();
    }

    /// Add the edge `src -> dst` ("src must be ordered before dst").
    ///
    /// Neither endpoint is required to be a node; the builder records the
    /// edge as written and reports missing endpoints separately.
    pub fn add_edge(&mut self, src: BlockId, dst: BlockId) {
        self.edges.entry(src).or_default().insert(dst);
    }

    /// Whether `id` is in the node set.
    pub fn contains(&self, id: BlockId) -> bool {
        self.nodes.contains(&id)
    }

    /// Iterate over all nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.nodes.iter().copied()
    }

    /// Iterate over the targets of `id` in ascending id order.
    ///
    /// Empty for ids with no outgoing edges, including ids absent from
    /// the graph entirely.
    pub fn targets(&self, id: BlockId) -> btree_set::Iter<'_, BlockId> {
        self.edges.get(&id).unwrap_or(&EMPTY_TARGETS).iter()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

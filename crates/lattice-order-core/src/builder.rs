//! Graph builder: turns block semantics into dependency edges.
//!
//! Edge rules per block kind (`src -> dst` reads "src before dst"):
//!
//! | dst kind | rule                                             | edge |
//! |----------|--------------------------------------------------|------|
//! | open     | `source` on a different account                  | `source -> this` |
//! | open     | `representative_open_block` present              | `representative_open_block -> this` |
//! | send     | `previous` present                               | `previous -> this` |
//! | receive  | `source` present                                 | `source -> this` |
//! | receive  | `previous` present                               | `previous -> this` |
//! | change   | `previous` present                               | `previous -> this` |
//!
//! An open block funded by a send on its own account adds no source edge:
//! the account's own chain already orders the two. A send's destination
//! account is deliberately never ordered against the destination's open
//! block; a send can indirectly fund its own account's opening chain, and
//! that edge would make the cycle real.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::block::{Block, BlockKind};
use crate::graph::DependencyGraph;
use crate::types::{AccountId, BlockId};

/// Configuration for graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Add a `representative_open_block -> change` edge, analogous to the
    /// open-block rule. Off by default: the reference rule set orders a
    /// change block only against its own chain.
    pub change_representative_edges: bool,
}

/// A non-fatal consistency finding: an edge endpoint absent from the
/// working node set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingReference {
    /// The id referenced but not present in the working set.
    pub missing: BlockId,
    /// The block whose rule produced the edge.
    pub referenced_by: BlockId,
}

/// The result of graph construction: the graph plus any consistency
/// warnings. Warnings never abort construction.
#[derive(Debug, Clone, Default)]
pub struct GraphBuild {
    pub graph: DependencyGraph,
    pub warnings: Vec<DanglingReference>,
}

/// Builds a [`DependencyGraph`] from a set of block records.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: BuilderConfig,
}

impl GraphBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Build the dependency graph covering exactly the ids in `blocks`.
    ///
    /// Blocks are read once and never mutated. Fields outside a kind's
    /// rule set are ignored even if populated.
    pub fn build(&self, blocks: &[Block]) -> GraphBuild {
        let mut build = GraphBuild::default();

        // First pass: the node set, and the account owning each block
        // (needed to resolve the open-block self-funding exception).
        let mut accounts: HashMap<BlockId, AccountId> = HashMap::with_capacity(blocks.len());
        for block in blocks {
            build.graph.insert_node(block.id);
            accounts.insert(block.id, block.account);
        }

        // Second pass: per-kind edge rules.
        for block in blocks {
            match block.kind {
                BlockKind::Open => {
                    if let Some(source) = block.source {
                        // Self-funded opens are already ordered by the
                        // account's own chain; a missing source block has
                        // an unknown account and keeps the edge.
                        if accounts.get(&source) != Some(&block.account) {
                            add_edge(&mut build, source, block);
                        }
                    }
                    if let Some(rep) = block.representative_open_block {
                        add_edge(&mut build, rep, block);
                    }
                }
                BlockKind::Send => {
                    if let Some(prev) = block.previous {
                        add_edge(&mut build, prev, block);
                    }
                    // The send -> receive dependency is recorded on the
                    // receive side.
                }
                BlockKind::Receive => {
                    if let Some(source) = block.source {
                        add_edge(&mut build, source, block);
                    }
                    if let Some(prev) = block.previous {
                        add_edge(&mut build, prev, block);
                    }
                }
                BlockKind::Change => {
                    if let Some(prev) = block.previous {
                        add_edge(&mut build, prev, block);
                    }
                    if self.config.change_representative_edges {
                        if let Some(rep) = block.representative_open_block {
                            add_edge(&mut build, rep, block);
                        }
                    }
                }
            }
        }

        build
    }
}

/// Record `src -> block.id`, warning when `src` is not in the working set.
fn add_edge(build: &mut GraphBuild, src: BlockId, block: &Block) {
    if !build.graph.contains(src) {
        tracing::warn!(
            missing = %src,
            referenced_by = %block.id,
            kind = block.kind.as_str(),
            "edge references a block outside the working set"
        );
        build.warnings.push(DanglingReference {
            missing: src,
            referenced_by: block.id,
        });
    }
    build.graph.add_edge(src, block.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountId, BlockId};

    fn id(n: u64) -> BlockId {
        BlockId::new(n)
    }

    fn acct(n: u64) -> AccountId {
        AccountId::new(n)
    }

    fn has_edge(graph: &DependencyGraph, src: u64, dst: u64) -> bool {
        graph.targets(id(src)).any(|&t| t == id(dst))
    }

    #[test]
    fn test_open_with_cross_account_source() {
        // Send on account 0 funds the open of account 1.
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::send(id(1), acct(0))
                .previous(id(0))
                .destination(acct(1))
                .build(),
            Block::open(id(2), acct(1)).source(id(1)).build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert!(has_edge(&build.graph, 1, 2));
        assert_eq!(build.graph.edge_count(), 2); // previous edge + source edge
        assert!(build.warnings.is_empty());
    }

    #[test]
    fn test_open_self_funded_adds_no_source_edge() {
        // A send whose destination is its own account, received by the
        // open block of that same account.
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::send(id(1), acct(0))
                .previous(id(0))
                .destination(acct(0))
                .build(),
            Block::open(id(2), acct(0)).source(id(1)).build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert!(!has_edge(&build.graph, 1, 2));
    }

    #[test]
    fn test_open_representative_edge() {
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::open(id(1), acct(1)).representative_open_block(id(0)).build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert!(has_edge(&build.graph, 0, 1));
    }

    #[test]
    fn test_send_previous_edge() {
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::send(id(1), acct(0))
                .previous(id(0))
                .destination(acct(1))
                .build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert!(has_edge(&build.graph, 0, 1));
        assert_eq!(build.graph.edge_count(), 1);
    }

    #[test]
    fn test_receive_source_and_previous_edges() {
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::send(id(1), acct(0))
                .previous(id(0))
                .destination(acct(1))
                .build(),
            Block::open(id(2), acct(1)).source(id(1)).build(),
            Block::receive(id(3), acct(1))
                .previous(id(2))
                .source(id(1))
                .build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert!(has_edge(&build.graph, 1, 3));
        assert!(has_edge(&build.graph, 2, 3));
    }

    #[test]
    fn test_change_previous_edge_only_by_default() {
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::open(id(1), acct(1)).build(),
            Block::change(id(2), acct(1))
                .previous(id(1))
                .representative_open_block(id(0))
                .build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert!(has_edge(&build.graph, 1, 2));
        assert!(!has_edge(&build.graph, 0, 2));
    }

    #[test]
    fn test_change_representative_edge_when_enabled() {
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::open(id(1), acct(1)).build(),
            Block::change(id(2), acct(1))
                .previous(id(1))
                .representative_open_block(id(0))
                .build(),
        ];

        let config = BuilderConfig {
            change_representative_edges: true,
        };
        let build = GraphBuilder::with_config(config).build(&blocks);
        assert!(has_edge(&build.graph, 0, 2));
    }

    #[test]
    fn test_send_destination_never_creates_edge() {
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::open(id(1), acct(1)).build(),
            Block::send(id(2), acct(0))
                .previous(id(0))
                .destination(acct(1))
                .build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        // Only the previous edge; nothing orders the send against the
        // destination's open block.
        assert_eq!(build.graph.edge_count(), 1);
        assert!(has_edge(&build.graph, 0, 2));
    }

    #[test]
    fn test_dangling_reference_warns_without_aborting() {
        let blocks = vec![
            Block::open(id(0), acct(1)).build(),
            Block::receive(id(1), acct(1))
                .previous(id(0))
                .source(id(42)) // not in the working set
                .build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert_eq!(build.warnings.len(), 1);
        assert_eq!(
            build.warnings[0],
            DanglingReference {
                missing: id(42),
                referenced_by: id(1),
            }
        );
        // The edge is still recorded; the endpoint is simply not a node.
        assert!(has_edge(&build.graph, 42, 1));
        assert!(!build.graph.contains(id(42)));
    }

    #[test]
    fn test_nodes_cover_exactly_the_input() {
        let blocks = vec![
            Block::open(id(3), acct(0)).build(),
            Block::open(id(7), acct(1)).build(),
        ];
        let build = GraphBuilder::new().build(&blocks);
        let nodes: Vec<_> = build.graph.nodes().collect();
        assert_eq!(nodes, vec![id(3), id(7)]);
    }

    #[test]
    fn test_fields_outside_rule_set_are_ignored() {
        // A send carrying a bogus representative reference: no rule reads
        // it, so no edge appears.
        let blocks = vec![
            Block::open(id(0), acct(0)).build(),
            Block::send(id(1), acct(0))
                .previous(id(0))
                .destination(acct(0))
                .representative_open_block(id(0))
                .build(),
        ];

        let build = GraphBuilder::new().build(&blocks);
        assert_eq!(build.graph.edge_count(), 1);
        assert!(has_edge(&build.graph, 0, 1));
    }
}

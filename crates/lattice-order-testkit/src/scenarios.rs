//! Named, deterministic scenarios shared across test suites.
//!
//! Graph-level scenarios pin the exact node/edge shapes the sorter
//! contract is specified against; block-level scenarios exercise the
//! builder's edge rules through realistic lattices.

use lattice_order_core::{AccountId, Block, BlockId, DependencyGraph};

use crate::fixtures::LatticeFixture;

/// Two nodes `{10, 11}` pointing at each other. Not a DAG.
pub fn cycle_pair() -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    graph.insert_node(BlockId::new(10));
    graph.insert_node(BlockId::new(11));
    graph.add_edge(BlockId::new(10), BlockId::new(11));
    graph.add_edge(BlockId::new(11), BlockId::new(10));
    graph
}

/// Nodes `{0..3}`, edges `0->1, 0->2, 1->3, 2->3`: genesis funds two
/// chains that both feed a third.
pub fn diamond() -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for n in 0..4 {
        graph.insert_node(BlockId::new(n));
    }
    graph.add_edge(BlockId::new(0), BlockId::new(1));
    graph.add_edge(BlockId::new(0), BlockId::new(2));
    graph.add_edge(BlockId::new(1), BlockId::new(3));
    graph.add_edge(BlockId::new(2), BlockId::new(3));
    graph
}

/// Nodes `{0..5}`, two independent chains `0->1->2` and `3->4->5`.
pub fn two_chains() -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for n in 0..6 {
        graph.insert_node(BlockId::new(n));
    }
    graph.add_edge(BlockId::new(0), BlockId::new(1));
    graph.add_edge(BlockId::new(1), BlockId::new(2));
    graph.add_edge(BlockId::new(3), BlockId::new(4));
    graph.add_edge(BlockId::new(4), BlockId::new(5));
    graph
}

/// A three-account lattice exercising every builder rule: a self-opened
/// genesis, two funded opens with representatives, a cross-account
/// receive, and a change block.
pub fn genesis_lattice() -> Vec<Block> {
    let mut fx = LatticeFixture::new();

    let genesis = fx.account();
    fx.open(genesis);

    let fund = fx.account();
    let send_to_fund = fx.send(genesis, fund);
    fx.open_funded_with_representative(fund, send_to_fund, genesis);

    let user = fx.account();
    let send_to_user = fx.send(fund, user);
    fx.open_funded_with_representative(user, send_to_user, fund);

    let second_send = fx.send(fund, user);
    fx.receive(user, second_send);
    fx.change_with_representative(user, genesis);

    fx.into_blocks()
}

/// A send whose destination is its own account, funding an open on that
/// same account. The source edge must not appear: the account's own
/// chain already orders the pair.
pub fn self_funded_open() -> Vec<Block> {
    let account = AccountId::new(0);
    vec![
        Block::open(BlockId::new(0), account).build(),
        Block::send(BlockId::new(1), account)
            .previous(BlockId::new(0))
            .destination(account)
            .build(),
        Block::open(BlockId::new(2), account).source(BlockId::new(1)).build(),
    ]
}

/// A receive whose source lies outside the working set.
pub fn dangling_source() -> Vec<Block> {
    let mut fx = LatticeFixture::new();
    let account = fx.account();
    fx.open(account);

    let mut blocks = fx.into_blocks();
    blocks.push(
        Block::receive(BlockId::new(1), account)
            .previous(BlockId::new(0))
            .source(BlockId::new(999))
            .build(),
    );
    blocks
}

/// One account whose chain is `depth` blocks long: an open followed by
/// sends back to itself.
pub fn deep_chain(depth: u64) -> Vec<Block> {
    let mut fx = LatticeFixture::new();
    let account = fx.account();
    fx.open(account);
    for _ in 1..depth {
        fx.send(account, account);
    }
    fx.into_blocks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_order_core::{topological_sort, GraphBuilder, SortError};

    #[test]
    fn test_cycle_pair_is_not_a_dag() {
        let graph = cycle_pair();
        assert!(matches!(
            topological_sort(&graph),
            Err(SortError::Cycle { .. })
        ));
    }

    #[test]
    fn test_genesis_lattice_orders_cleanly() {
        let blocks = genesis_lattice();
        let build = GraphBuilder::new().build(&blocks);
        assert!(build.warnings.is_empty());

        let order = topological_sort(&build.graph).unwrap();
        assert_eq!(order.len(), blocks.len());
    }

    #[test]
    fn test_self_funded_open_has_no_source_edge() {
        let blocks = self_funded_open();
        let build = GraphBuilder::new().build(&blocks);

        // The open (last block) depends on nothing: its source is a send
        // on the same account.
        let open_id = blocks.last().map(|b| b.id).unwrap();
        let incoming = build
            .graph
            .nodes()
            .filter(|&n| build.graph.targets(n).any(|&t| t == open_id))
            .count();
        assert_eq!(incoming, 0);
    }

    #[test]
    fn test_dangling_source_warns() {
        let blocks = dangling_source();
        let build = GraphBuilder::new().build(&blocks);
        assert_eq!(build.warnings.len(), 1);
    }

    #[test]
    fn test_deep_chain_block_count() {
        let blocks = deep_chain(50);
        assert_eq!(blocks.len(), 50);
    }
}

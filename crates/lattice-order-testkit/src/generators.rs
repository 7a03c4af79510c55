//! Proptest generators for property-based testing.
//!
//! Lattices are generated as operation scripts interpreted against a
//! [`LatticeFixture`]. Every reference points at an already-created
//! block, so block ids strictly increase along every edge and the
//! resulting dependency graph is acyclic by construction.

use proptest::prelude::*;

use lattice_order_core::{AccountId, Block, BlockId};

use crate::fixtures::LatticeFixture;

/// One raw script step. The two operands are interpreted modulo the
/// current state (account lists, pending sends), so any values are
/// valid.
type RawOp = (u8, u16, u16);

/// Strategy producing random acyclic lattices of up to `max_ops` blocks.
pub fn lattice(max_ops: usize) -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec(raw_op(), 1..=max_ops.max(1)).prop_map(materialize)
}

fn raw_op() -> impl Strategy<Value = RawOp> {
    (0u8..5, any::<u16>(), any::<u16>())
}

/// Interpret a script into blocks. Ops that are impossible in the
/// current state (a send with no opened account, a receive with no
/// pending send) degrade to opening a fresh account.
fn materialize(script: Vec<RawOp>) -> Vec<Block> {
    let mut fx = LatticeFixture::new();
    let mut opened: Vec<AccountId> = Vec::new();
    // Sends not yet consumed by a receive or funded open, with their
    // destination account.
    let mut pending: Vec<(BlockId, AccountId)> = Vec::new();
    let mut unopened: Vec<AccountId> = Vec::new();

    for (op, a, b) in script {
        let a = a as usize;
        let b = b as usize;

        match op {
            // Self-opened account, sometimes with a representative.
            0 => {
                let account = fx.account();
                if b % 3 == 0 && !opened.is_empty() {
                    let rep = opened[a % opened.len()];
                    fx.open_with_representative(account, rep);
                } else {
                    fx.open(account);
                }
                opened.push(account);
            }
            // Send from an opened account, either to another opened
            // account or to a fresh unopened one.
            1 if !opened.is_empty() => {
                let from = opened[a % opened.len()];
                let to = if b % 2 == 0 {
                    let fresh = fx.account();
                    unopened.push(fresh);
                    fresh
                } else {
                    opened[b % opened.len()]
                };
                let send = fx.send(from, to);
                pending.push((send, to));
            }
            // Funded open: consume a pending send aimed at an unopened
            // account.
            2 => {
                let slot = pending
                    .iter()
                    .position(|(_, to)| unopened.contains(to));
                match slot {
                    Some(i) => {
                        let (send, to) = pending.remove(i);
                        fx.open_funded(to, send);
                        unopened.retain(|&acct| acct != to);
                        opened.push(to);
                    }
                    None => {
                        let account = fx.account();
                        fx.open(account);
                        opened.push(account);
                    }
                }
            }
            // Receive: consume a pending send aimed at an opened account.
            3 => {
                let eligible: Vec<usize> = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, to))| opened.contains(to))
                    .map(|(i, _)| i)
                    .collect();
                match eligible.get(a % eligible.len().max(1)) {
                    Some(&i) => {
                        let (send, to) = pending.remove(i);
                        fx.receive(to, send);
                    }
                    None => {
                        let account = fx.account();
                        fx.open(account);
                        opened.push(account);
                    }
                }
            }
            // Change, sometimes naming a representative.
            4 if !opened.is_empty() => {
                let account = opened[a % opened.len()];
                if b % 3 == 0 {
                    let rep = opened[b % opened.len()];
                    fx.change_with_representative(account, rep);
                } else {
                    fx.change(account);
                }
            }
            // Fallback for ops whose preconditions are unmet.
            _ => {
                let account = fx.account();
                fx.open(account);
                opened.push(account);
            }
        }
    }

    fx.into_blocks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_order_core::{topological_sort, validate_block, GraphBuilder};

    proptest! {
        #[test]
        fn test_generated_lattices_are_structurally_valid(blocks in lattice(40)) {
            for block in &blocks {
                prop_assert!(validate_block(block).is_ok(), "invalid block {:?}", block);
            }
        }

        #[test]
        fn test_generated_lattices_are_acyclic(blocks in lattice(40)) {
            let build = GraphBuilder::new().build(&blocks);
            prop_assert!(build.warnings.is_empty());

            let order = topological_sort(&build.graph).unwrap();
            prop_assert_eq!(order.len(), blocks.len());
        }

        #[test]
        fn test_generated_edges_point_forward(blocks in lattice(40)) {
            let build = GraphBuilder::new().build(&blocks);
            for src in build.graph.nodes() {
                for &dst in build.graph.targets(src) {
                    prop_assert!(src < dst, "edge {src} -> {dst} points backward");
                }
            }
        }
    }
}

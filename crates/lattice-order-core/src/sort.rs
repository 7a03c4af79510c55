//! Topological ordering with cycle detection.
//!
//! Two interchangeable algorithms over the same contract: an iterative
//! depth-first sort with post-order emission ([`topological_sort`]), and
//! an in-degree sort ([`kahn_sort`]). Both produce a deterministic linear
//! order in which every edge's source precedes its target, or fail with
//! [`SortError::Cycle`].
//!
//! Per-account chains can run to tens of thousands of blocks, and
//! cross-chain paths compound that depth, so the depth-first walk keeps
//! its own frame stack. Depth is bounded by memory, not by the call
//! stack.

use std::collections::{btree_set, BTreeMap, BTreeSet, HashMap};

use crate::error::SortError;
use crate::graph::DependencyGraph;
use crate::types::BlockId;

/// A traversal event delivered to a [`SortObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    /// The node was reached and marked in-progress.
    Discovered,
    /// All of the node's targets are finished; the node is ordered.
    Finished,
}

/// Hook for inspecting the traversal of specific nodes during debugging.
///
/// Injected per sort call; there is no process-wide trace state. The
/// default [`NoopObserver`] compiles away.
pub trait SortObserver {
    fn on_event(&mut self, node: BlockId, event: SortEvent);
}

/// The default observer: does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SortObserver for NoopObserver {
    fn on_event(&mut self, _node: BlockId, _event: SortEvent) {}
}

/// Per-node traversal state.
///
/// Unvisited -> InProgress (on the current exploration path) -> Done
/// (ordered, terminal). Reaching an InProgress node again means the
/// exploration path loops back on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

fn state_of(states: &HashMap<BlockId, VisitState>, id: BlockId) -> VisitState {
    states.get(&id).copied().unwrap_or(VisitState::Unvisited)
}

/// One frame of the explicit exploration stack: a node and the cursor
/// into its outgoing-edge list.
struct Frame<'g> {
    node: BlockId,
    targets: btree_set::Iter<'g, BlockId>,
}

/// Sort the whole graph, ascending-id roots, no observer.
///
/// Returns a permutation of the node set in which every edge's source
/// precedes its target. Two calls on an identical graph return identical
/// sequences.
pub fn topological_sort(graph: &DependencyGraph) -> Result<Vec<BlockId>, SortError> {
    topological_sort_with(graph, &mut NoopObserver)
}

/// Sort the whole graph, delivering traversal events to `observer`.
pub fn topological_sort_with<O: SortObserver>(
    graph: &DependencyGraph,
    observer: &mut O,
) -> Result<Vec<BlockId>, SortError> {
    let mut states = HashMap::with_capacity(graph.node_count());
    let mut out = Vec::with_capacity(graph.node_count());

    // There is no single universal root; independent chains coexist.
    // Ascending id order fixes the starting points deterministically.
    for root in graph.nodes() {
        if state_of(&states, root) == VisitState::Unvisited {
            visit(graph, root, &mut states, &mut out, observer)?;
        }
    }

    out.reverse();
    debug_assert_eq!(out.len(), graph.node_count());
    Ok(out)
}

/// Sort only the sub-lattice reachable from `seeds`.
///
/// Seeds are explored in the order given; a seed outside the node set is
/// [`SortError::UnknownNode`].
pub fn sort_from(graph: &DependencyGraph, seeds: &[BlockId]) -> Result<Vec<BlockId>, SortError> {
    sort_from_with(graph, seeds, &mut NoopObserver)
}

/// Seeded sort with an observer.
pub fn sort_from_with<O: SortObserver>(
    graph: &DependencyGraph,
    seeds: &[BlockId],
    observer: &mut O,
) -> Result<Vec<BlockId>, SortError> {
    for &seed in seeds {
        if !graph.contains(seed) {
            return Err(SortError::UnknownNode(seed));
        }
    }

    let mut states = HashMap::new();
    let mut out = Vec::new();
    for &seed in seeds {
        visit(graph, seed, &mut states, &mut out, observer)?;
    }

    out.reverse();
    Ok(out)
}

/// Depth-first exploration from `root` on an explicit frame stack.
///
/// Finished nodes are pushed to `out` in post-order; the caller reverses
/// once at the end, which is equivalent to prepending each node as it
/// finishes.
fn visit<O: SortObserver>(
    graph: &DependencyGraph,
    root: BlockId,
    states: &mut HashMap<BlockId, VisitState>,
    out: &mut Vec<BlockId>,
    observer: &mut O,
) -> Result<(), SortError> {
    if state_of(states, root) == VisitState::Done {
        return Ok(());
    }

    states.insert(root, VisitState::InProgress);
    observer.on_event(root, SortEvent::Discovered);
    let mut stack = vec![Frame {
        node: root,
        targets: graph.targets(root),
    }];

    loop {
        let (node, next) = match stack.last_mut() {
            Some(frame) => (frame.node, frame.targets.next().copied()),
            None => break,
        };

        match next {
            Some(target) => {
                if !graph.contains(target) {
                    // Dangling reference, reported at build time.
                    continue;
                }
                match state_of(states, target) {
                    VisitState::Done => {}
                    VisitState::InProgress => {
                        return Err(SortError::Cycle {
                            node: target,
                            from: node,
                        });
                    }
                    VisitState::Unvisited => {
                        states.insert(target, VisitState::InProgress);
                        observer.on_event(target, SortEvent::Discovered);
                        stack.push(Frame {
                            node: target,
                            targets: graph.targets(target),
                        });
                    }
                }
            }
            None => {
                states.insert(node, VisitState::Done);
                observer.on_event(node, SortEvent::Finished);
                out.push(node);
                stack.pop();
            }
        }
    }

    Ok(())
}

/// In-degree (Kahn) sort: the naturally iterative alternative.
///
/// Repeatedly removes the smallest-id zero-in-degree node. When nodes
/// remain and none has zero in-degree, a cycle is present among them;
/// the diagnostic names the smallest remaining node and one of its
/// unprocessed incoming edges.
pub fn kahn_sort(graph: &DependencyGraph) -> Result<Vec<BlockId>, SortError> {
    let mut in_degree: BTreeMap<BlockId, usize> = graph.nodes().map(|n| (n, 0)).collect();
    for node in graph.nodes() {
        for &target in graph.targets(node) {
            if let Some(degree) = in_degree.get_mut(&target) {
                *degree += 1;
            }
        }
    }

    let mut ready: BTreeSet<BlockId> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&node, _)| node)
        .collect();

    let mut out = Vec::with_capacity(graph.node_count());
    while let Some(&node) = ready.iter().next() {
        ready.remove(&node);
        out.push(node);
        for &target in graph.targets(node) {
            if let Some(degree) = in_degree.get_mut(&target) {
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(target);
                }
            }
        }
    }

    if out.len() == graph.node_count() {
        return Ok(out);
    }

    // out.len() < node_count guarantees a node with nonzero remaining
    // in-degree; report the smallest, plus one unprocessed incoming edge.
    let remaining: BTreeSet<BlockId> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree > 0)
        .map(|(&node, _)| node)
        .collect();

    let node = remaining
        .iter()
        .next()
        .copied()
        .unwrap_or_else(|| unreachable!("removal stalled with no remaining nodes"));
    let from = remaining
        .iter()
        .find(|&&pred| graph.targets(pred).any(|&t| t == node))
        .copied()
        // A remaining node always has an unprocessed predecessor.
        .unwrap_or(node);
    Err(SortError::Cycle { node, from })
}

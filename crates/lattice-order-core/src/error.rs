//! Error types for the lattice order core.

use thiserror::Error;

use crate::block::BlockKind;
use crate::types::BlockId;

/// Structural errors raised by block validation.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("block {id}: {kind} block requires {field}")]
    MissingField {
        id: BlockId,
        kind: BlockKind,
        field: &'static str,
    },

    #[error("block {id}: {kind} block must not carry {field}")]
    UnexpectedField {
        id: BlockId,
        kind: BlockKind,
        field: &'static str,
    },
}

/// Errors raised by a topological sort call.
///
/// A failed sort leaves nothing reusable behind: all traversal state is
/// local to the call and dropped on return.
#[derive(Debug, Error)]
pub enum SortError {
    /// The node set does not form a DAG under the constructed edges.
    /// `node` is part of a cycle; the edge `from -> node` closed it.
    #[error("dependency cycle detected at block {node} (edge {from} -> {node})")]
    Cycle { node: BlockId, from: BlockId },

    /// A seed id passed to a seeded sort is not in the node set. Caller
    /// usage error, never silently ignored.
    #[error("unknown block id {0} passed as sort seed")]
    UnknownNode(BlockId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_names_edge() {
        let err = SortError::Cycle {
            node: BlockId::new(10),
            from: BlockId::new(11),
        };
        let msg = err.to_string();
        assert!(msg.contains("block 10"));
        assert!(msg.contains("11 -> 10"));
    }

    #[test]
    fn test_block_error_names_field() {
        let err = BlockError::MissingField {
            id: BlockId::new(3),
            kind: BlockKind::Send,
            field: "destination",
        };
        assert!(err.to_string().contains("send block requires destination"));
    }
}

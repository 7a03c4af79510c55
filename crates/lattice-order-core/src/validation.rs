//! Block validation: per-kind structural checks.
//!
//! The graph builder tolerates any field combination and simply ignores
//! fields outside a kind's rule set. Validation is the stricter opt-in
//! integrity check run before construction when the caller wants
//! malformed records rejected instead of skipped.

use crate::block::{Block, BlockKind};
use crate::error::BlockError;

/// Validate a block's structure against its kind.
///
/// This performs:
/// - Required-field checks (send needs `previous` and `destination`,
///   receive needs `previous` and `source`, change needs `previous`)
/// - Forbidden-field checks (an open block has no chain predecessor,
///   only sends name a destination, only receives and opens a source)
pub fn validate_block(block: &Block) -> Result<(), BlockError> {
    let missing = |field| BlockError::MissingField {
        id: block.id,
        kind: block.kind,
        field,
    };
    let unexpected = |field| BlockError::UnexpectedField {
        id: block.id,
        kind: block.kind,
        field,
    };

    match block.kind {
        BlockKind::Open => {
            // 1. An open block starts its chain: no predecessor.
            if block.previous.is_some() {
                return Err(unexpected("previous"));
            }
            // 2. Only sends name a destination.
            if block.destination.is_some() {
                return Err(unexpected("destination"));
            }
            // `source` and `representative_open_block` are both optional:
            // a self-opened account has neither.
        }
        BlockKind::Send => {
            // 1. A send always extends an existing chain.
            if block.previous.is_none() {
                return Err(missing("previous"));
            }
            // 2. A send always names its recipient.
            if block.destination.is_none() {
                return Err(missing("destination"));
            }
            // 3. Sends supply funds, they do not receive them.
            if block.source.is_some() {
                return Err(unexpected("source"));
            }
        }
        BlockKind::Receive => {
            // 1. A receive always extends an existing chain.
            if block.previous.is_none() {
                return Err(missing("previous"));
            }
            // 2. A receive always names the send that funds it.
            if block.source.is_none() {
                return Err(missing("source"));
            }
            // 3. Only sends name a destination.
            if block.destination.is_some() {
                return Err(unexpected("destination"));
            }
        }
        BlockKind::Change => {
            // 1. A change always extends an existing chain.
            if block.previous.is_none() {
                return Err(missing("previous"));
            }
            // 2. A change moves no funds.
            if block.source.is_some() {
                return Err(unexpected("source"));
            }
            if block.destination.is_some() {
                return Err(unexpected("destination"));
            }
        }
    }

    Ok(())
}

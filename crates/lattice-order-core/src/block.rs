//! Block: one entry in an account's chain.
//!
//! Every account owns an independent chain of blocks. A block is immutable
//! for the duration of a run; the core never mutates or stores blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{AccountId, BlockId};

/// The kind of block, determining which optional fields carry meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// First block of an account's chain. May record initial funding
    /// (`source`) and the representative's open block.
    Open,
    /// Moves funds from the owning account to a destination account.
    Send,
    /// Records funds arriving from a prior send block.
    Receive,
    /// Changes the owning account's representative without moving funds.
    Change,
}

impl BlockKind {
    /// The lowercase wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Send => "send",
            Self::Receive => "receive",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single block record from the block source.
///
/// All references are resolved ids. `kind` determines which optional
/// fields are meaningful; the graph builder ignores fields outside a
/// kind's rule set even if populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Unique id within the working set.
    pub id: BlockId,

    /// The kind of block.
    pub kind: BlockKind,

    /// The account whose chain this block belongs to.
    pub account: AccountId,

    /// The preceding block in the same chain. Absent only for a chain's
    /// open block.
    pub previous: Option<BlockId>,

    /// The block supplying funds. Present on receive; on open, present
    /// when the account was funded by a send rather than self-opened.
    pub source: Option<BlockId>,

    /// The recipient account. Present on send only.
    pub destination: Option<AccountId>,

    /// The open block of the account named as representative. Present on
    /// open when the representative already has a chain; change blocks
    /// may carry it as well.
    pub representative_open_block: Option<BlockId>,
}

impl Block {
    /// Start building a block of the given kind.
    pub fn builder(id: BlockId, kind: BlockKind, account: AccountId) -> BlockBuilder {
        BlockBuilder::new(id, kind, account)
    }

    /// Start building an open block.
    pub fn open(id: BlockId, account: AccountId) -> BlockBuilder {
        Self::builder(id, BlockKind::Open, account)
    }

    /// Start building a send block.
    pub fn send(id: BlockId, account: AccountId) -> BlockBuilder {
        Self::builder(id, BlockKind::Send, account)
    }

    /// Start building a receive block.
    pub fn receive(id: BlockId, account: AccountId) -> BlockBuilder {
        Self::builder(id, BlockKind::Receive, account)
    }

    /// Start building a change block.
    pub fn change(id: BlockId, account: AccountId) -> BlockBuilder {
        Self::builder(id, BlockKind::Change, account)
    }
}

/// Builder for block records.
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    id: BlockId,
    kind: BlockKind,
    account: AccountId,
    previous: Option<BlockId>,
    source: Option<BlockId>,
    destination: Option<AccountId>,
    representative_open_block: Option<BlockId>,
}

impl BlockBuilder {
    /// Start building a block.
    pub fn new(id: BlockId, kind: BlockKind, account: AccountId) -> Self {
        Self {
            id,
            kind,
            account,
            previous: None,
            source: None,
            destination: None,
            representative_open_block: None,
        }
    }

    /// Set the preceding block in the same chain.
    pub fn previous(mut self, prev: BlockId) -> Self {
        self.previous = Some(prev);
        self
    }

    /// Set the funding source block.
    pub fn source(mut self, source: BlockId) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the destination account.
    pub fn destination(mut self, destination: AccountId) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Set the representative's open block.
    pub fn representative_open_block(mut self, open_block: BlockId) -> Self {
        self.representative_open_block = Some(open_block);
        self
    }

    /// Finish building the block.
    pub fn build(self) -> Block {
        Block {
            id: self.id,
            kind: self.kind,
            account: self.account,
            previous: self.previous,
            source: self.source,
            destination: self.destination,
            representative_open_block: self.representative_open_block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(BlockKind::Open.as_str(), "open");
        assert_eq!(BlockKind::Send.as_str(), "send");
        assert_eq!(BlockKind::Receive.as_str(), "receive");
        assert_eq!(BlockKind::Change.as_str(), "change");
    }

    #[test]
    fn test_block_builder() {
        let block = Block::send(BlockId::new(5), AccountId::new(1))
            .previous(BlockId::new(4))
            .destination(AccountId::new(2))
            .build();

        assert_eq!(block.id, BlockId::new(5));
        assert_eq!(block.kind, BlockKind::Send);
        assert_eq!(block.account, AccountId::new(1));
        assert_eq!(block.previous, Some(BlockId::new(4)));
        assert_eq!(block.destination, Some(AccountId::new(2)));
        assert_eq!(block.source, None);
    }

    #[test]
    fn test_open_block_defaults() {
        let block = Block::open(BlockId::new(0), AccountId::new(0)).build();
        assert_eq!(block.previous, None);
        assert_eq!(block.source, None);
        assert_eq!(block.representative_open_block, None);
    }
}

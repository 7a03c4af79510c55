//! Test fixtures and helpers.
//!
//! `LatticeFixture` grows a block-lattice one block at a time, keeping
//! per-account chain heads so callers never wire `previous` references
//! by hand. Ids are handed out in creation order, which keeps generated
//! lattices acyclic by construction.

use std::collections::BTreeMap;

use lattice_order_core::{AccountId, Block, BlockId};

/// A growing block-lattice for tests.
#[derive(Debug, Clone, Default)]
pub struct LatticeFixture {
    next_block: u64,
    next_account: u64,
    blocks: Vec<Block>,
    heads: BTreeMap<AccountId, BlockId>,
    opens: BTreeMap<AccountId, BlockId>,
}

impl LatticeFixture {
    /// Create an empty lattice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh account id. The account has no chain until one
    /// of the `open*` methods is called for it.
    pub fn account(&mut self) -> AccountId {
        let account = AccountId::new(self.next_account);
        self.next_account += 1;
        account
    }

    /// Open an account with no funding source (self-opened).
    pub fn open(&mut self, account: AccountId) -> BlockId {
        let id = self.alloc_block();
        self.push_open(Block::open(id, account).build())
    }

    /// Open an account funded by an existing send block.
    pub fn open_funded(&mut self, account: AccountId, source: BlockId) -> BlockId {
        let id = self.alloc_block();
        self.push_open(Block::open(id, account).source(source).build())
    }

    /// Open an account naming an already-opened representative.
    pub fn open_with_representative(
        &mut self,
        account: AccountId,
        representative: AccountId,
    ) -> BlockId {
        let rep_open = self.open_block_of(representative);
        let id = self.alloc_block();
        self.push_open(
            Block::open(id, account)
                .representative_open_block(rep_open)
                .build(),
        )
    }

    /// Open an account funded by a send, naming a representative.
    pub fn open_funded_with_representative(
        &mut self,
        account: AccountId,
        source: BlockId,
        representative: AccountId,
    ) -> BlockId {
        let rep_open = self.open_block_of(representative);
        let id = self.alloc_block();
        self.push_open(
            Block::open(id, account)
                .source(source)
                .representative_open_block(rep_open)
                .build(),
        )
    }

    /// Append a send from `from` to `to`. `to` does not need a chain yet.
    pub fn send(&mut self, from: AccountId, to: AccountId) -> BlockId {
        let previous = self.head_of(from);
        let id = self.alloc_block();
        self.push_chained(
            from,
            Block::send(id, from).previous(previous).destination(to).build(),
        )
    }

    /// Append a receive of `source` on `account`'s chain.
    pub fn receive(&mut self, account: AccountId, source: BlockId) -> BlockId {
        let previous = self.head_of(account);
        let id = self.alloc_block();
        self.push_chained(
            account,
            Block::receive(id, account).previous(previous).source(source).build(),
        )
    }

    /// Append a change block on `account`'s chain.
    pub fn change(&mut self, account: AccountId) -> BlockId {
        let previous = self.head_of(account);
        let id = self.alloc_block();
        self.push_chained(account, Block::change(id, account).previous(previous).build())
    }

    /// Append a change block naming an already-opened representative.
    pub fn change_with_representative(
        &mut self,
        account: AccountId,
        representative: AccountId,
    ) -> BlockId {
        let rep_open = self.open_block_of(representative);
        let previous = self.head_of(account);
        let id = self.alloc_block();
        self.push_chained(
            account,
            Block::change(id, account)
                .previous(previous)
                .representative_open_block(rep_open)
                .build(),
        )
    }

    /// The current head of an account's chain, if it has one.
    pub fn head(&self, account: AccountId) -> Option<BlockId> {
        self.heads.get(&account).copied()
    }

    /// The open block of an account, if it has one.
    pub fn open_block(&self, account: AccountId) -> Option<BlockId> {
        self.opens.get(&account).copied()
    }

    /// All blocks in creation order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the fixture, returning the blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    fn alloc_block(&mut self) -> BlockId {
        let id = BlockId::new(self.next_block);
        self.next_block += 1;
        id
    }

    fn head_of(&self, account: AccountId) -> BlockId {
        self.head(account)
            .unwrap_or_else(|| panic!("account {account} has no chain yet"))
    }

    fn open_block_of(&self, account: AccountId) -> BlockId {
        self.open_block(account)
            .unwrap_or_else(|| panic!("representative {account} has no open block yet"))
    }

    fn push_open(&mut self, block: Block) -> BlockId {
        assert!(
            !self.opens.contains_key(&block.account),
            "account {} already has a chain",
            block.account
        );
        let id = block.id;
        self.opens.insert(block.account, id);
        self.heads.insert(block.account, id);
        self.blocks.push(block);
        id
    }

    fn push_chained(&mut self, account: AccountId, block: Block) -> BlockId {
        let id = block.id;
        self.heads.insert(account, id);
        self.blocks.push(block);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_order_core::BlockKind;

    #[test]
    fn test_fixture_tracks_chain_heads() {
        let mut fx = LatticeFixture::new();
        let genesis = fx.account();
        let open = fx.open(genesis);
        assert_eq!(fx.head(genesis), Some(open));

        let other = fx.account();
        let send = fx.send(genesis, other);
        assert_eq!(fx.head(genesis), Some(send));
        assert_eq!(fx.open_block(genesis), Some(open));

        let blocks = fx.blocks();
        assert_eq!(blocks[1].kind, BlockKind::Send);
        assert_eq!(blocks[1].previous, Some(open));
        assert_eq!(blocks[1].destination, Some(other));
    }

    #[test]
    fn test_fixture_funded_open() {
        let mut fx = LatticeFixture::new();
        let genesis = fx.account();
        fx.open(genesis);

        let other = fx.account();
        let send = fx.send(genesis, other);
        let open = fx.open_funded(other, send);

        let block = &fx.blocks()[2];
        assert_eq!(block.id, open);
        assert_eq!(block.source, Some(send));
        assert_eq!(block.previous, None);
    }

    #[test]
    fn test_fixture_representative_references_open_block() {
        let mut fx = LatticeFixture::new();
        let rep = fx.account();
        let rep_open = fx.open(rep);

        let account = fx.account();
        fx.open_with_representative(account, rep);

        let block = &fx.blocks()[1];
        assert_eq!(block.representative_open_block, Some(rep_open));
    }

    #[test]
    #[should_panic(expected = "has no chain yet")]
    fn test_fixture_rejects_send_before_open() {
        let mut fx = LatticeFixture::new();
        let a = fx.account();
        let b = fx.account();
        fx.send(a, b);
    }

    #[test]
    fn test_fixture_ids_are_creation_ordered() {
        let mut fx = LatticeFixture::new();
        let genesis = fx.account();
        fx.open(genesis);
        let other = fx.account();
        fx.send(genesis, other);
        fx.change(genesis);

        let ids: Vec<_> = fx.blocks().iter().map(|b| b.id.as_u64()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}

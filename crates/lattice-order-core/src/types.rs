//! Identifier newtypes for the lattice order core.
//!
//! Identifiers are integers already resolved by the block source
//! (hash-to-id resolution happens upstream). Newtypes keep block and
//! account ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique block identifier.
///
/// Unique across one working set, dense enough to index. Assigned by the
/// block source, stable for the duration of a run.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
pub struct BlockId(pub u64);

impl BlockId {
    /// Create a new BlockId from a raw integer.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An account identifier.
///
/// Each account owns its own chain of blocks in the lattice.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
pub struct AccountId(pub u64);

impl AccountId {
    /// Create a new AccountId from a raw integer.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_ordering() {
        let a = BlockId::new(1);
        let b = BlockId::new(2);
        assert!(a < b);
        assert_eq!(a, BlockId::from(1));
    }

    #[test]
    fn test_block_id_display() {
        assert_eq!(format!("{}", BlockId::new(42)), "42");
        assert_eq!(format!("{}", AccountId::new(7)), "7");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property; just exercise the conversions.
        let block: BlockId = 3u64.into();
        let account: AccountId = 3u64.into();
        assert_eq!(block.as_u64(), account.as_u64());
    }
}

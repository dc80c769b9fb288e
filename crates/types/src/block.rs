use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Per-block facts needed to enrich a matched log.
///
/// Fetched on demand by block number and immutable once fetched, so values
/// may be cached freely within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockMeta {
    /// The block timestamp (seconds since Unix epoch).
    pub timestamp: u64,
    /// The hash of the parent block.
    pub parent_hash: B256,
}

impl BlockMeta {
    /// Creates a new [`BlockMeta`] from a timestamp and parent hash.
    pub const fn new(timestamp: u64, parent_hash: B256) -> Self {
        Self { timestamp, parent_hash }
    }
}

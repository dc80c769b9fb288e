use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// The unit of persistence: one matched log enriched with block metadata.
///
/// Constructed once per [`RawLog`](crate::RawLog) and never mutated
/// afterwards. The serialized form becomes durable the moment its enclosing
/// store transaction commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct L1InfoEvent {
    /// The timestamp of the containing block (seconds since Unix epoch).
    pub block_time: u64,
    /// The parent hash of the containing block.
    pub parent_hash: B256,
    /// The L1 info root carried in the log's data payload.
    pub l1_info_root: B256,
}

impl L1InfoEvent {
    /// Creates a new [`L1InfoEvent`] from its three fields.
    pub const fn new(block_time: u64, parent_hash: B256, l1_info_root: B256) -> Self {
        Self { block_time, parent_hash, l1_info_root }
    }
}

use alloy_primitives::{Address, B256, Bytes};
use serde::{Deserialize, Serialize};

/// The filter selecting which on-chain logs the indexer ingests.
///
/// Matches logs emitted by `address` whose first topic equals `topic`.
/// Both values are injected configuration, not embedded constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    /// The contract address that emitted the event.
    pub address: Address,
    /// The event signature hash (topic0) to match.
    pub topic: B256,
}

impl LogFilter {
    /// Creates a new [`LogFilter`] for the given contract and topic.
    pub const fn new(address: Address, topic: B256) -> Self {
        Self { address, topic }
    }
}

/// A single on-chain log entry matched by a [`LogFilter`].
///
/// Only the fields the pipeline consumes are carried: the containing block
/// number (for metadata enrichment) and the opaque data payload (interpreted
/// downstream as a 32-byte root). Topic and address are already constrained
/// by the filter and are not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLog {
    /// The number of the block containing this log.
    pub block_number: u64,
    /// The opaque event data payload.
    pub data: Bytes,
}

impl RawLog {
    /// Creates a new [`RawLog`] from a block number and data payload.
    pub const fn new(block_number: u64, data: Bytes) -> Self {
        Self { block_number, data }
    }
}

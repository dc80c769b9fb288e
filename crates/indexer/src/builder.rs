use crate::IndexerError;
use alloy_primitives::B256;
use l1info_types::{BlockMeta, L1InfoEvent, RawLog};

/// Builds the enriched [`L1InfoEvent`] for one matched log.
///
/// Deterministic and side-effect free: the block timestamp and parent hash
/// are copied verbatim, and the log's data payload is interpreted as a
/// big-endian 32-byte root. Payloads shorter than 32 bytes are
/// zero-left-padded; payloads longer than 32 bytes are rejected.
pub fn build_event(raw: &RawLog, meta: &BlockMeta) -> Result<L1InfoEvent, IndexerError> {
    if raw.data.len() > 32 {
        return Err(IndexerError::OversizedLogData {
            block_number: raw.block_number,
            len: raw.data.len(),
        });
    }

    let l1_info_root = B256::left_padding_from(&raw.data);
    Ok(L1InfoEvent::new(meta.timestamp, meta.parent_hash, l1_info_root))
}

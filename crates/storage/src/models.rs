//! Table schema for the event store.
//!
//! Defines the stored value model, the ordinal-keyed table, and the table
//! set used for database initialization via Reth's storage-api.

use alloy_primitives::B256;
use l1info_types::L1InfoEvent;
use reth_codecs::Compact;
use reth_db::table::Table;
use reth_db_api::{
    DatabaseError, TableSet,
    table::{Compress, Decompress, TableInfo},
};
use serde::{Deserialize, Serialize};

/// The stored form of one enriched event.
///
/// Mirrors [`L1InfoEvent`] field for field; kept as a separate type so the
/// database codec traits can be implemented locally. It is stored as the
/// value in the [`L1InfoEvents`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Compact)]
pub struct L1InfoEntry {
    /// The timestamp of the containing block (seconds since Unix epoch).
    pub block_time: u64,
    /// The parent hash of the containing block.
    pub parent_hash: B256,
    /// The L1 info root carried in the log's data payload.
    pub l1_info_root: B256,
}

impl From<L1InfoEvent> for L1InfoEntry {
    fn from(event: L1InfoEvent) -> Self {
        Self {
            block_time: event.block_time,
            parent_hash: event.parent_hash,
            l1_info_root: event.l1_info_root,
        }
    }
}

impl From<L1InfoEntry> for L1InfoEvent {
    fn from(entry: L1InfoEntry) -> Self {
        Self {
            block_time: entry.block_time,
            parent_hash: entry.parent_hash,
            l1_info_root: entry.l1_info_root,
        }
    }
}

impl Compress for L1InfoEntry {
    type Compressed = Vec<u8>;

    fn compress_to_buf<B: bytes::BufMut + AsMut<[u8]>>(&self, buf: &mut B) {
        let _ = Compact::to_compact(self, buf);
    }
}

impl Decompress for L1InfoEntry {
    fn decompress(value: &[u8]) -> Result<Self, DatabaseError> {
        let (entry, _) = Compact::from_compact(value, value.len());
        Ok(entry)
    }
}

/// The table holding enriched events keyed by ordinal.
///
/// A standard table (not dup-sorted) where:
/// - **Key**: `u64` — the zero-based ordinal, big-endian on disk so byte
///   order equals numeric order.
/// - **Value**: [`L1InfoEntry`] — the enriched event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct L1InfoEvents;

impl Table for L1InfoEvents {
    const NAME: &'static str = "l1_info_events";
    const DUPSORT: bool = false;

    type Key = u64;
    type Value = L1InfoEntry;
}

impl TableInfo for L1InfoEvents {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_dupsort(&self) -> bool {
        Self::DUPSORT
    }
}

/// The full set of tables backing the event store.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tables;

impl TableSet for Tables {
    fn tables() -> Box<dyn Iterator<Item = Box<dyn TableInfo>>> {
        Box::new(vec![Box::new(L1InfoEvents) as Box<dyn TableInfo>].into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_compact_roundtrip() {
        let entry = L1InfoEntry {
            block_time: 1_700_000_000,
            parent_hash: B256::from([0xAA; 32]),
            l1_info_root: B256::from([0x3E; 32]),
        };

        let mut buffer = Vec::new();
        let bytes_written = entry.to_compact(&mut buffer);
        assert_eq!(bytes_written, buffer.len(), "Bytes written should match buffer length");

        let (decoded, remaining) = L1InfoEntry::from_compact(&buffer, bytes_written);
        assert_eq!(entry, decoded, "Original and decoded entries should be equal");
        assert!(remaining.is_empty(), "Remaining buffer should be empty after decoding");
    }

    #[test]
    fn test_entry_event_conversion_roundtrip() {
        let event = L1InfoEvent::new(1000, B256::from([0x01; 32]), B256::from([0x02; 32]));
        let entry = L1InfoEntry::from(event);
        assert_eq!(L1InfoEvent::from(entry), event);
    }
}

use crate::StorageError;
use l1info_types::L1InfoEvent;
use std::fmt::Debug;

/// Write access to the event store.
///
/// A record is considered persisted only once the enclosing transaction has
/// committed; implementations must commit each write before returning so a
/// failure mid-run leaves a prefix of independently durable records.
pub trait L1InfoWriter: Debug + Send + Sync {
    /// Persists `event` under the given ordinal key in its own transaction.
    ///
    /// # Arguments
    /// * `ordinal` - The zero-based sequence number assigned to the event.
    /// * `event` - The enriched event to persist.
    ///
    /// # Returns
    /// * `Ok(())` once the transaction holding the record has committed.
    /// * `Err(StorageError)` if the write or commit fails; nothing is
    ///   persisted for this ordinal in that case.
    fn store_event(&self, ordinal: u64, event: &L1InfoEvent) -> Result<(), StorageError>;

    /// Removes all stored events.
    ///
    /// Used to reset the keyspace before a fresh run so stale ordinals from
    /// a previous, larger run cannot survive.
    fn clear_events(&self) -> Result<(), StorageError>;
}

/// Read access to the event store.
///
/// Not a query API; exists to support tests and restart inspection.
pub trait L1InfoReader: Debug + Send + Sync {
    /// Gets the event stored under the given ordinal, if any.
    fn event(&self, ordinal: u64) -> Result<Option<L1InfoEvent>, StorageError>;

    /// Returns the number of stored events.
    fn event_count(&self) -> Result<u64, StorageError>;
}

use l1info_providers::ChainReaderError;
use l1info_storage::StorageError;
use thiserror::Error;

/// Error type for the ingestion pipeline.
///
/// Every pipeline stage surfaces its failure here instead of aborting the
/// process; the caller decides whether to halt or retry. Records committed
/// before the failure remain in the store.
#[derive(Error, Debug)]
pub enum IndexerError {
    /// The chain reader failed for the log query or a block lookup.
    #[error(transparent)]
    Source(#[from] ChainReaderError),

    /// The event store could not be written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A log carried a data payload wider than the 32-byte root it is
    /// interpreted as. Rejected rather than silently truncated.
    #[error("Log data of {len} bytes in block {block_number} exceeds the 32-byte root width")]
    OversizedLogData {
        /// The block containing the offending log.
        block_number: u64,
        /// The payload length in bytes.
        len: usize,
    },
}

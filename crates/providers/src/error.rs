use thiserror::Error;

/// An error that occurred while reading from the chain.
#[derive(Error, Debug)]
pub enum ChainReaderError {
    /// An error occurred while fetching logs
    #[error("Failed to fetch logs: {0}")]
    LogFetch(String),

    /// An error occurred while fetching a block
    #[error("Failed to fetch block: {0}")]
    BlockFetch(String),

    /// Block not found
    #[error("Block {0} not found")]
    BlockNotFound(u64),

    /// A returned log carried no block number
    #[error("Log is pending and has no block number")]
    PendingLog,
}

use reth_db::DatabaseError;
use thiserror::Error;

/// Errors that may occur while interacting with the event store.
///
/// This enum is shared by all implementations of the storage traits.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database environment could not be opened or initialized.
    #[error("Failed to initialize database: {0}")]
    Initialization(eyre::Report),

    /// A database operation failed.
    #[error("Database error")]
    Database(#[from] DatabaseError),

    /// The expected entry was not found in the database.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
}

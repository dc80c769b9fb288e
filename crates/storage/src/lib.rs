//! MDBX-backed durable store for enriched L1 info events.
//!
//! Events are persisted under a zero-based `u64` ordinal key. The backend
//! encodes `u64` keys big-endian, so key-byte order equals numeric order and
//! an ordered walk of the table yields events in ingestion order.

mod error;
pub use error::StorageError;

mod traits;
pub use traits::{L1InfoReader, L1InfoWriter};

mod models;
pub use models::{L1InfoEntry, L1InfoEvents};

mod eventdb;
pub use eventdb::EventDb;

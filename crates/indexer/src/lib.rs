//! Ingestion pipeline for L1 info events.
//!
//! Fetches all logs matching a configured filter once, enriches each with
//! metadata from its containing block, and persists the enriched records
//! under zero-based ordinal keys, one committed transaction per record.

mod config;
pub use config::IndexerConfig;

mod error;
pub use error::IndexerError;

mod builder;
pub use builder::build_event;

mod sequencer;
pub use sequencer::Sequencer;

mod indexer;
pub use indexer::L1InfoIndexer;

use alloy_primitives::{Address, B256};
use l1info_types::LogFilter;
use std::path::PathBuf;
use url::Url;

/// Configuration for one indexer run.
///
/// The endpoint, contract address, and event topic are injected here rather
/// than embedded as constants so deployments against other networks or
/// contracts need no code change.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// URL of the L1 execution client RPC API.
    pub l1_rpc_url: Url,
    /// Address of the contract emitting the tracked event.
    pub contract_address: Address,
    /// Signature hash (topic0) of the tracked event.
    pub event_topic: B256,
    /// Path of the database directory.
    pub db_path: PathBuf,
}

impl IndexerConfig {
    /// Returns the log filter selecting the tracked event.
    pub const fn log_filter(&self) -> LogFilter {
        LogFilter::new(self.contract_address, self.event_topic)
    }
}

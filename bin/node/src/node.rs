//! Contains the indexer CLI.

use alloy_primitives::{Address, B256};
use anyhow::Result;
use clap::Parser;
use l1info_indexer::{IndexerConfig, L1InfoIndexer};
use l1info_providers::OnlineChainReader;
use l1info_storage::EventDb;
use std::{path::PathBuf, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Contract address of the reference deployment on Sepolia.
const DEFAULT_CONTRACT_ADDRESS: &str = "0x761d53b47334bee6612c0bd1467fb881435375b2";

/// Signature hash (topic0) of the tracked L1 info tree update event.
const DEFAULT_EVENT_TOPIC: &str =
    "0x3e54d0825ed78523037d00a81759237eb436ce774bd546993ee67a1b67b6e766";

/// The L1 Info Event Indexer CLI.
///
/// Runs one ingestion pass: fetches all matching logs from the configured
/// endpoint, enriches them with block metadata, and persists them into the
/// local database.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// URL of the L1 execution client RPC API.
    #[clap(long, visible_alias = "l1", env = "L1_ETH_RPC")]
    pub l1_eth_rpc: Url,
    /// Address of the contract emitting the tracked event.
    #[clap(long, env = "CONTRACT_ADDRESS", default_value = DEFAULT_CONTRACT_ADDRESS)]
    pub contract_address: Address,
    /// Signature hash (topic0) of the tracked event.
    #[clap(long, env = "EVENT_TOPIC", default_value = DEFAULT_EVENT_TOPIC)]
    pub event_topic: B256,
    /// Path of the database directory.
    #[clap(long, default_value = "l1info_db")]
    pub db_path: PathBuf,
    /// Verbosity level (-v debug, -vv trace).
    #[clap(short, action = clap::ArgAction::Count)]
    pub v: u8,
}

impl Cli {
    /// Runs the CLI.
    pub(crate) fn run(self) -> Result<()> {
        init_tracing_subscriber(self.v);
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.start())
    }

    /// Starts one ingestion run.
    async fn start(self) -> Result<()> {
        let config = IndexerConfig {
            l1_rpc_url: self.l1_eth_rpc,
            contract_address: self.contract_address,
            event_topic: self.event_topic,
            db_path: self.db_path,
        };

        let chain_reader = Arc::new(OnlineChainReader::new_http(config.l1_rpc_url.clone()));
        let event_db = Arc::new(EventDb::new(&config.db_path)?);
        let indexer = L1InfoIndexer::new(chain_reader, event_db, config.log_filter());

        let count = indexer.run().await?;
        info!(target: "l1info_node", count, "Indexing run finished");
        Ok(())
    }
}

/// Initializes the tracing subscriber, honoring `RUST_LOG` when set.
fn init_tracing_subscriber(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_parse() {
        let cli = Cli::parse_from(["l1info-node", "--l1-eth-rpc", "http://localhost:8545"]);
        assert_eq!(
            cli.contract_address,
            DEFAULT_CONTRACT_ADDRESS.parse::<Address>().expect("valid address")
        );
        assert_eq!(cli.event_topic, DEFAULT_EVENT_TOPIC.parse::<B256>().expect("valid topic"));
        assert_eq!(cli.db_path, PathBuf::from("l1info_db"));
    }
}

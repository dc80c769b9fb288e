//! HTTP chain reader backed by an alloy [`RootProvider`].

use crate::{ChainReader, ChainReaderError};
use alloy_eips::BlockNumberOrTag;
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types_eth::{Filter, Log};
use async_trait::async_trait;
use l1info_types::{BlockMeta, LogFilter, RawLog};
use tracing::debug;
use url::Url;

/// A [`ChainReader`] that queries an execution-layer JSON-RPC endpoint
/// over HTTP.
#[derive(Clone, Debug)]
pub struct OnlineChainReader {
    /// The execution layer provider for log and block queries.
    provider: RootProvider,
}

impl OnlineChainReader {
    /// Creates a new [`OnlineChainReader`] for the given HTTP endpoint.
    pub fn new_http(url: Url) -> Self {
        Self { provider: RootProvider::new_http(url) }
    }
}

#[async_trait]
impl ChainReader for OnlineChainReader {
    async fn logs_by_filter(&self, filter: &LogFilter) -> Result<Vec<RawLog>, ChainReaderError> {
        let query = Filter::new().address(filter.address).event_signature(filter.topic);

        let logs = self
            .provider
            .get_logs(&query)
            .await
            .map_err(|e| ChainReaderError::LogFetch(e.to_string()))?;
        debug!(
            target: "l1info_providers",
            count = logs.len(),
            address = %filter.address,
            "Fetched matching logs"
        );

        logs.into_iter().map(raw_log_from_rpc).collect()
    }

    async fn block_meta_by_number(&self, number: u64) -> Result<BlockMeta, ChainReaderError> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .await
            .map_err(|e| ChainReaderError::BlockFetch(e.to_string()))?
            .ok_or(ChainReaderError::BlockNotFound(number))?;

        Ok(BlockMeta::new(block.header.timestamp, block.header.parent_hash))
    }
}

/// Converts an RPC log into the pipeline's [`RawLog`], rejecting pending
/// logs that carry no block number.
fn raw_log_from_rpc(log: Log) -> Result<RawLog, ChainReaderError> {
    let block_number = log.block_number.ok_or(ChainReaderError::PendingLog)?;
    Ok(RawLog::new(block_number, log.inner.data.data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, Bytes, LogData};

    fn rpc_log(block_number: Option<u64>, data: &[u8]) -> Log {
        let inner = alloy_primitives::Log {
            address: Address::from([0x11; 20]),
            data: LogData::new_unchecked(vec![B256::from([0x3E; 32])], Bytes::copy_from_slice(data)),
        };
        Log { inner, block_number, ..Default::default() }
    }

    #[test]
    fn test_raw_log_from_rpc() {
        let raw = raw_log_from_rpc(rpc_log(Some(42), &[0xAB, 0xCD])).expect("convert log");
        assert_eq!(raw.block_number, 42);
        assert_eq!(raw.data.as_ref(), &[0xAB, 0xCD]);
    }

    #[test]
    fn test_raw_log_from_rpc_rejects_pending() {
        let err = raw_log_from_rpc(rpc_log(None, &[])).unwrap_err();
        assert!(matches!(err, ChainReaderError::PendingLog));
    }
}

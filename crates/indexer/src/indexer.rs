//! The pipeline driver: fetch, enrich, and persist in order.

use crate::{IndexerError, Sequencer, build_event};
use l1info_providers::ChainReader;
use l1info_storage::L1InfoWriter;
use l1info_types::{BlockMeta, LogFilter};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info};

/// The [`L1InfoIndexer`] drives one ingestion run: it queries the chain
/// reader once for all matching logs, enriches each with its block
/// metadata, and persists the records under consecutive ordinal keys.
///
/// Each record commits in its own transaction, so a failure mid-run leaves
/// a prefix of valid, durable records rather than an all-or-nothing batch.
#[derive(Debug)]
pub struct L1InfoIndexer {
    /// Component that reads logs and block metadata from the chain.
    chain_reader: Arc<dyn ChainReader>,
    /// Component that persists enriched events to storage.
    event_writer: Arc<dyn L1InfoWriter>,
    /// The filter selecting which logs to ingest.
    filter: LogFilter,
}

impl L1InfoIndexer {
    /// Creates a new [`L1InfoIndexer`] with the given reader, writer, and
    /// filter.
    pub fn new(
        chain_reader: Arc<dyn ChainReader>,
        event_writer: Arc<dyn L1InfoWriter>,
        filter: LogFilter,
    ) -> Self {
        Self { chain_reader, event_writer, filter }
    }

    /// Runs the pipeline once and returns the number of records committed.
    ///
    /// Steps, strictly sequential:
    /// 1. Fetch all matching logs. On failure nothing is written and any
    ///    previously stored events are left untouched.
    /// 2. Clear the event table, so the run's keys are exactly `0..N-1`
    ///    regardless of what an earlier run left behind.
    /// 3. For each log in return order: look up its block metadata
    ///    (cached per block within the run), build the enriched record,
    ///    and commit it under the next ordinal. The first failure halts
    ///    the run; records committed before it remain.
    pub async fn run(&self) -> Result<u64, IndexerError> {
        let logs = self.chain_reader.logs_by_filter(&self.filter).await?;
        info!(target: "l1info_indexer", count = logs.len(), "Fetched matching logs");

        self.event_writer.clear_events()?;

        let mut sequencer = Sequencer::new();
        // BlockMeta is immutable once fetched, so logs sharing a block can
        // share one lookup.
        let mut block_cache: HashMap<u64, BlockMeta> = HashMap::new();

        for raw in &logs {
            let meta = match block_cache.get(&raw.block_number) {
                Some(meta) => *meta,
                None => {
                    let meta = self.chain_reader.block_meta_by_number(raw.block_number).await?;
                    block_cache.insert(raw.block_number, meta);
                    meta
                }
            };

            let event = build_event(raw, &meta)?;
            let ordinal = sequencer.next();
            self.event_writer.store_event(ordinal, &event)?;
            debug!(
                target: "l1info_indexer",
                ordinal,
                block_number = raw.block_number,
                "Stored enriched event"
            );
        }

        info!(target: "l1info_indexer", count = sequencer.count(), "Ingestion run complete");
        Ok(sequencer.count())
    }
}

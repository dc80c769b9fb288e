use crate::ChainReaderError;
use async_trait::async_trait;
use l1info_types::{BlockMeta, LogFilter, RawLog};
use std::fmt::Debug;

/// Read access to the source chain.
///
/// Two capabilities: a one-shot log query by filter and a point lookup of
/// block metadata by number. The main reason this trait exists is for
/// mocking and unit testing the pipeline.
#[async_trait]
pub trait ChainReader: Debug + Send + Sync {
    /// Fetches all logs matching the given filter.
    ///
    /// Returns the finite sequence of matched logs in the order the RPC
    /// endpoint returned them; that order determines the ordinal keys the
    /// pipeline assigns.
    ///
    /// # Arguments
    /// * `filter` - The contract address and topic to match.
    ///
    /// # Returns
    /// Returns the matched [`RawLog`]s, or an error if the query fails or
    /// a returned log has no block number.
    async fn logs_by_filter(&self, filter: &LogFilter) -> Result<Vec<RawLog>, ChainReaderError>;

    /// Fetches the metadata of the block with the given number.
    ///
    /// # Arguments
    /// * `number` - The block number to look up.
    ///
    /// # Returns
    /// Returns the [`BlockMeta`] for the requested block, or an error if
    /// the block cannot be fetched or does not exist.
    async fn block_meta_by_number(&self, number: u64) -> Result<BlockMeta, ChainReaderError>;
}

//! Chain-facing providers for the L1 info indexer.
//!
//! Exposes the [`ChainReader`] seam the pipeline consumes plus an HTTP
//! implementation backed by an alloy [`RootProvider`](alloy_provider::RootProvider).

mod error;
pub use error::ChainReaderError;

mod traits;
pub use traits::ChainReader;

mod online;
pub use online::OnlineChainReader;

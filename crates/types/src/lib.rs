//! Core types shared across the L1 info indexer components.
//!
//! This crate defines the fundamental data structures passed between the
//! chain-facing provider, the pipeline, and the storage layer.

mod log;
pub use log::{LogFilter, RawLog};

mod block;
pub use block::BlockMeta;

mod event;
pub use event::L1InfoEvent;

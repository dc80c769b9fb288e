//! Main database access structure for the event store.

use crate::{
    StorageError,
    models::{L1InfoEvents, Tables},
    traits::{L1InfoReader, L1InfoWriter},
};
use l1info_types::L1InfoEvent;
use reth_db::{
    DatabaseEnv,
    mdbx::{DatabaseArguments, init_db_for},
};
use reth_db_api::{
    database::Database,
    transaction::{DbTx, DbTxMut},
};
use std::path::Path;
use tracing::{debug, error};

/// Manages the MDBX environment holding the event table.
///
/// Each write runs in its own transaction, committed before the call
/// returns, so a failed run leaves a durable prefix rather than an
/// all-or-nothing batch.
#[derive(Debug)]
pub struct EventDb {
    env: DatabaseEnv,
}

impl EventDb {
    /// Creates or opens a database environment at the given path.
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let env = init_db_for::<_, Tables>(path, DatabaseArguments::default())
            .map_err(StorageError::Initialization)?;
        Ok(Self { env })
    }
}

impl L1InfoWriter for EventDb {
    fn store_event(&self, ordinal: u64, event: &L1InfoEvent) -> Result<(), StorageError> {
        self.env.update(|tx| {
            tx.put::<L1InfoEvents>(ordinal, (*event).into()).inspect_err(|err| {
                error!(target: "l1info_storage", ordinal, ?err, "Failed to write event");
            })
        })??;
        debug!(target: "l1info_storage", ordinal, "Stored event");
        Ok(())
    }

    fn clear_events(&self) -> Result<(), StorageError> {
        self.env.update(|tx| {
            tx.clear::<L1InfoEvents>().inspect_err(|err| {
                error!(target: "l1info_storage", ?err, "Failed to clear event table");
            })
        })??;
        Ok(())
    }
}

impl L1InfoReader for EventDb {
    fn event(&self, ordinal: u64) -> Result<Option<L1InfoEvent>, StorageError> {
        let entry = self.env.view(|tx| tx.get::<L1InfoEvents>(ordinal))??;
        Ok(entry.map(Into::into))
    }

    fn event_count(&self) -> Result<u64, StorageError> {
        let count = self.env.view(|tx| tx.entries::<L1InfoEvents>())??;
        Ok(count as u64)
    }
}

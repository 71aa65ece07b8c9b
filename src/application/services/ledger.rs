use std::sync::Arc;

use crate::application::ports::{KeyValueStore, StoreError};
use crate::domain::Entry;

const LEDGER_KEY: &str = "complaintItems";

/// Ordered collection of complaint entries persisted under a single store
/// key. Newest entries sit at the front.
pub struct Ledger<S>
where
    S: KeyValueStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> Ledger<S>
where
    S: KeyValueStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// An unreadable or corrupt blob yields an empty ledger rather than an
    /// error; the next append overwrites it.
    pub fn entries(&self) -> Result<Vec<Entry>, LedgerError> {
        let Some(raw) = self.store.get(LEDGER_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable ledger blob");
                Ok(Vec::new())
            }
        }
    }

    pub fn append(&self, entry: Entry) -> Result<Vec<Entry>, LedgerError> {
        let mut entries = self.entries()?;
        entries.insert(0, entry);
        self.persist(&entries)?;
        Ok(entries)
    }

    pub fn remove(&self, index: usize) -> Result<Vec<Entry>, LedgerError> {
        let mut entries = self.entries()?;
        if index >= entries.len() {
            return Err(LedgerError::NoSuchEntry { index });
        }
        entries.remove(index);
        self.persist(&entries)?;
        Ok(entries)
    }

    fn persist(&self, entries: &[Entry]) -> Result<(), LedgerError> {
        let raw = serde_json::to_string(entries).map_err(LedgerError::Encode)?;
        self.store.set(LEDGER_KEY, &raw)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("store: {0}")]
    Store(#[from] StoreError),
    #[error("encoding ledger: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("no entry at index {index}")]
    NoSuchEntry { index: usize },
}

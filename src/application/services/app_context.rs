use std::sync::Arc;

use crate::application::ports::KeyValueStore;

use super::{Ledger, SessionStore};

/// Shared handle to the client's persisted state. Views hand out the same
/// underlying store, so a ledger write is visible to a session read.
pub struct AppContext<S>
where
    S: KeyValueStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> AppContext<S>
where
    S: KeyValueStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn ledger(&self) -> Ledger<S> {
        Ledger::new(Arc::clone(&self.store))
    }

    pub fn session(&self) -> SessionStore<S> {
        SessionStore::new(Arc::clone(&self.store))
    }
}

impl<S> Clone for AppContext<S>
where
    S: KeyValueStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

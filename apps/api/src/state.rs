use std::sync::Arc;

use crate::layout::PageConfig;
use crate::progress::ledger::ProgressLedger;
use crate::resume::store::RecordStore;
use crate::store::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for the record and the ledger. Memory, Postgres or Redis.
    pub store: Arc<dyn KeyValueStore>,
    /// Page geometry and font family used by every export.
    pub page_config: PageConfig,
}

impl AppState {
    pub fn records(&self) -> RecordStore {
        RecordStore::new(self.store.clone())
    }

    pub fn ledger(&self) -> ProgressLedger {
        ProgressLedger::new(self.store.clone())
    }
}

use std::sync::Arc;

use tracing::{debug, warn};

use crate::resume::models::ResumeDraft;
use crate::store::{KeyValueStore, Saved, StoreError, PROGRESS_KEY, RESUME_KEY};

/// The résumé record kept under [`RESUME_KEY`].
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the stored record.
    pub async fn try_load(&self) -> Result<ResumeDraft, StoreError> {
        match self.store.get(RESUME_KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(ResumeDraft::default()),
        }
    }

    /// Reads the stored record; an unreadable record is logged and treated as empty.
    pub async fn load(&self) -> ResumeDraft {
        self.try_load().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load resume data, starting from an empty record");
            ResumeDraft::default()
        })
    }

    /// Writes the record as-is.
    pub async fn save(&self, draft: &ResumeDraft) -> Result<(), StoreError> {
        let value = serde_json::to_value(draft)?;
        self.store.set(RESUME_KEY, value).await
    }

    /// Merges `patch` over the stored record and saves the result.
    ///
    /// If the stored record cannot be read, nothing is written: the patch is returned
    /// unsaved so the existing record is never replaced by a partial one.
    pub async fn merge(&self, patch: ResumeDraft) -> Saved<ResumeDraft> {
        let existing = match self.try_load().await {
            Ok(existing) => existing,
            Err(e) => {
                warn!(error = %e, "Failed to load resume data, merge not saved");
                return Saved {
                    value: ResumeDraft::default().merge(patch),
                    persisted: false,
                };
            }
        };
        let merged = existing.merge(patch);
        let persisted = match self.save(&merged).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to save resume data");
                false
            }
        };
        debug!(persisted, "Resume record merged");
        Saved {
            value: merged,
            persisted,
        }
    }

    /// Clears the record and the progress ledger together.
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.store.remove(RESUME_KEY).await?;
        self.store.remove(PROGRESS_KEY).await
    }
}

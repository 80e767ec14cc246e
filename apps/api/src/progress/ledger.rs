use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::progress::models::{Section, UserProgress};
use crate::store::{KeyValueStore, Saved, StoreError, PROGRESS_KEY};

/// The progress ledger kept under [`PROGRESS_KEY`].
///
/// Storage failures never fail a ledger operation: reads fall back to "no progress
/// yet" and writes report `persisted: false`.
#[derive(Clone)]
pub struct ProgressLedger {
    store: Arc<dyn KeyValueStore>,
}

impl ProgressLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn try_load(&self) -> Result<Option<UserProgress>, StoreError> {
        match self.store.get(PROGRESS_KEY).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Stored progress, or `None` if nothing was saved or it could not be read.
    pub async fn load(&self) -> Option<UserProgress> {
        self.try_load().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to get user progress");
            None
        })
    }

    /// Stored progress, or a fresh empty ledger.
    pub async fn load_or_new(&self) -> UserProgress {
        self.load().await.unwrap_or_else(|| UserProgress::new(Utc::now()))
    }

    pub async fn save(&self, progress: &UserProgress) -> Result<(), StoreError> {
        let value = serde_json::to_value(progress)?;
        self.store.set(PROGRESS_KEY, value).await
    }

    /// Marks `section` complete and appends `achievement` when given.
    pub async fn mark_complete(
        &self,
        section: Section,
        achievement: Option<String>,
    ) -> Saved<UserProgress> {
        let saved = self.update(section, true, achievement).await;
        info!(
            section = %section,
            completed = saved.value.completed_sections.len(),
            "Section marked complete"
        );
        saved
    }

    /// Moves the current-section pointer without completing anything.
    pub async fn visit(&self, section: Section) -> Saved<UserProgress> {
        self.update(section, false, None).await
    }

    async fn update(
        &self,
        section: Section,
        completed: bool,
        achievement: Option<String>,
    ) -> Saved<UserProgress> {
        let now = Utc::now();
        let mut progress = match self.try_load().await {
            Ok(stored) => stored.unwrap_or_else(|| UserProgress::new(now)),
            Err(e) => {
                // Stored ledger is unreadable right now; keep it intact and report unsaved.
                warn!(error = %e, section = %section, "Failed to get user progress, update not saved");
                let mut progress = UserProgress::new(now);
                progress.record(section, completed, achievement, now);
                return Saved {
                    value: progress,
                    persisted: false,
                };
            }
        };
        progress.record(section, completed, achievement, now);

        let persisted = match self.save(&progress).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, section = %section, "Failed to save user progress");
                false
            }
        };
        Saved {
            value: progress,
            persisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicBool, Ordering};

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Backend("connection refused".to_string()))
        }
        async fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Backend("connection refused".to_string()))
        }
        async fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("connection refused".to_string()))
        }
        fn backend(&self) -> &'static str {
            "broken"
        }
    }

    /// Memory store whose first read fails; later calls go through.
    struct FlakyStore {
        inner: MemoryStore,
        failed_once: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for FlakyStore {
        async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
            if !self.failed_once.swap(true, Ordering::SeqCst) {
                return Err(StoreError::Backend("timeout".to_string()));
            }
            self.inner.get(key).await
        }
        async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
            self.inner.set(key, value).await
        }
        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key).await
        }
        fn backend(&self) -> &'static str {
            "flaky"
        }
    }

    #[tokio::test]
    async fn test_first_use_starts_empty() {
        let ledger = ProgressLedger::new(Arc::new(MemoryStore::new()));
        assert!(ledger.load().await.is_none());
        let fresh = ledger.load_or_new().await;
        assert!(fresh.completed_sections.is_empty());
        assert!(fresh.achievements.is_empty());
    }

    #[tokio::test]
    async fn test_mark_complete_twice_is_idempotent_for_sections() {
        let ledger = ProgressLedger::new(Arc::new(MemoryStore::new()));
        ledger
            .mark_complete(Section::PersonalInfo, Some("personal-complete".into()))
            .await;
        ledger.mark_complete(Section::PersonalInfo, None).await;

        let stored = ledger.load().await.unwrap();
        assert_eq!(stored.completed_sections, vec![Section::PersonalInfo]);
        assert_eq!(stored.achievements, vec!["personal-complete"]);
        assert_eq!(stored.current_section, Some(Section::PersonalInfo));
    }

    #[tokio::test]
    async fn test_completion_percentage_through_ledger() {
        let ledger = ProgressLedger::new(Arc::new(MemoryStore::new()));
        ledger.mark_complete(Section::PersonalInfo, None).await;
        let saved = ledger.mark_complete(Section::Education, None).await;
        assert!(saved.persisted);
        assert_eq!(saved.value.completion_percentage(), 40);
    }

    #[tokio::test]
    async fn test_visit_updates_pointer_only() {
        let ledger = ProgressLedger::new(Arc::new(MemoryStore::new()));
        ledger.visit(Section::Projects).await;
        let stored = ledger.load().await.unwrap();
        assert_eq!(stored.current_section, Some(Section::Projects));
        assert!(stored.completed_sections.is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_is_swallowed() {
        let ledger = ProgressLedger::new(Arc::new(BrokenStore));
        assert!(ledger.load().await.is_none());

        let saved = ledger
            .mark_complete(Section::Skills, Some("skills-complete".into()))
            .await;
        assert!(!saved.persisted);
        assert_eq!(saved.value.completed_sections, vec![Section::Skills]);
    }

    #[tokio::test]
    async fn test_reads_ledger_blob_with_missing_optional_fields() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                PROGRESS_KEY,
                json!({
                    "completedSections": ["personalInfo"],
                    "lastActivity": "2026-01-02T03:04:05Z"
                }),
            )
            .await
            .unwrap();
        let ledger = ProgressLedger::new(store);
        let progress = ledger.load().await.unwrap();
        assert_eq!(progress.completion_percentage(), 20);
        assert!(progress.current_section.is_none());
    }

    #[tokio::test]
    async fn test_failed_read_keeps_stored_ledger() {
        let inner = MemoryStore::new();
        inner
            .set(
                PROGRESS_KEY,
                json!({
                    "completedSections": ["personalInfo", "skills"],
                    "achievements": ["first-step"],
                    "lastActivity": "2026-01-02T03:04:05Z"
                }),
            )
            .await
            .unwrap();
        let ledger = ProgressLedger::new(Arc::new(FlakyStore {
            inner,
            failed_once: AtomicBool::new(false),
        }));

        let saved = ledger.mark_complete(Section::Projects, None).await;
        assert!(!saved.persisted);

        let stored = ledger.load().await.unwrap();
        assert_eq!(
            stored.completed_sections,
            vec![Section::PersonalInfo, Section::Skills]
        );
        assert_eq!(stored.achievements, vec!["first-step"]);
    }
}

//! Key-value document store backing the résumé record and the progress ledger.
//!
//! Both documents are opaque JSON blobs under fixed keys. Every operation returns an
//! explicit `Result`; callers decide whether a failure is fatal (it never is for the
//! record or ledger, which log and carry on with in-memory state).

pub mod memory;
pub mod postgres;
pub mod redis;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use redis::RedisStore;

/// Storage key of the merged résumé record.
pub const RESUME_KEY: &str = "resume-ai-builder-data";
/// Storage key of the progress ledger.
pub const PROGRESS_KEY: &str = "resume-ai-builder-progress";

/// Outcome of a write that may not have reached the store.
///
/// The updated value is always returned; `persisted` tells the caller whether the
/// store accepted it.
#[derive(Debug, Clone)]
pub struct Saved<T> {
    pub value: T,
    pub persisted: bool,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Minimal document store. Implementations must be safe to share across handlers.
///
/// Carried in `AppState` as `Arc<dyn KeyValueStore>`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Short backend name used in startup logs.
    fn backend(&self) -> &'static str;
}

use async_trait::async_trait;
use thiserror::Error;

use crate::trends::record::{NewTrendRecord, TrendRecord};

/// Errors from the document backend. Never shown to the user.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Document store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Document store returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode document store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Document store setting '{field}' is not configured")]
    NotConfigured { field: &'static str },

    #[error("Document '{id}' not found")]
    NotFound { id: String },
}

/// Operations the trend store needs from a document collection.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// First document whose search term equals `term` exactly.
    async fn find_by_term(&self, term: &str) -> Result<Option<TrendRecord>, StoreError>;

    /// Up to `limit` documents ordered by descending count.
    async fn list_top(&self, limit: usize) -> Result<Vec<TrendRecord>, StoreError>;

    async fn create(&self, record: NewTrendRecord) -> Result<TrendRecord, StoreError>;

    /// Atomically adds `by` to the count of document `id`, leaving the other
    /// fields untouched.
    async fn increment(&self, id: &str, by: u64) -> Result<TrendRecord, StoreError>;
}

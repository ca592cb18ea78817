use std::sync::Arc;

use crate::catalog::{poster_url, Movie};
use crate::trends::backend::{DocumentBackend, StoreError};
use crate::trends::record::{NewTrendRecord, TrendRecord};

/// What `record_search` did for a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Created,
    Incremented { count: u64 },
}

/// Popularity counters keyed by search term.
///
/// Backend failures never escape: they are logged under the
/// `moviescout::trends` target and the operation degrades to a no-op or an
/// empty listing.
pub struct TrendStore {
    backend: Arc<dyn DocumentBackend>,
    image_base_url: String,
}

impl TrendStore {
    pub fn new(backend: Arc<dyn DocumentBackend>, image_base_url: impl Into<String>) -> Self {
        Self {
            backend,
            image_base_url: image_base_url.into(),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Counts one search for `term`, creating its record on first sight.
    ///
    /// The first movie seen for a term is the one stored; later calls only
    /// bump the count.
    pub async fn record_search(&self, term: &str, movie: &Movie) {
        if term.is_empty() {
            tracing::debug!("Skipping trend update for empty search term");
            return;
        }
        match self.try_record(term, movie).await {
            Ok(outcome) => tracing::debug!(
                term = %term,
                outcome = ?outcome,
                backend = self.backend.name(),
                "Recorded search"
            ),
            Err(err) => tracing::warn!(
                target: "moviescout::trends",
                term = %term,
                backend = self.backend.name(),
                error = %err,
                "Failed to record search"
            ),
        }
    }

    /// Up to `limit` records by descending count. Empty on failure.
    pub async fn top_trending(&self, limit: usize) -> Vec<TrendRecord> {
        if limit == 0 {
            return Vec::new();
        }
        match self.backend.list_top(limit).await {
            Ok(mut records) => {
                // Backends are asked for this order; enforce it anyway.
                records.sort_by(|a, b| b.count.cmp(&a.count));
                records.truncate(limit);
                records
            }
            Err(err) => {
                tracing::warn!(
                    target: "moviescout::trends",
                    limit,
                    backend = self.backend.name(),
                    error = %err,
                    "Failed to load trending searches"
                );
                Vec::new()
            }
        }
    }

    async fn try_record(&self, term: &str, movie: &Movie) -> Result<RecordOutcome, StoreError> {
        if let Some(existing) = self.backend.find_by_term(term).await? {
            let updated = self.backend.increment(&existing.id, 1).await?;
            return Ok(RecordOutcome::Incremented {
                count: updated.count,
            });
        }

        let poster = poster_url(&self.image_base_url, movie.poster_path.as_deref());
        self.backend
            .create(NewTrendRecord::first_seen(term, movie.id, poster))
            .await?;
        Ok(RecordOutcome::Created)
    }
}

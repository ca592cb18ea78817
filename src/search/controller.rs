use std::sync::Arc;

use crate::catalog::MovieCatalog;
use crate::trends::TrendStore;
use crate::ui::events::{AppEvent, AppEventSender};
use crate::ui::search::{FetchOutcome, RequestId, SearchIntent};

/// Runs fetch cycles and trend updates on the tokio runtime.
///
/// Each cycle gets a fresh `RequestId`; completions are posted back to the
/// UI loop, where results of superseded cycles are dropped. Nothing is
/// cancelled in flight.
pub struct SearchController {
    catalog: Arc<dyn MovieCatalog>,
    trends: Arc<TrendStore>,
    events: AppEventSender,
    next_request: RequestId,
}

impl SearchController {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        trends: Arc<TrendStore>,
        events: AppEventSender,
    ) -> Self {
        Self {
            catalog,
            trends,
            events,
            next_request: 1,
        }
    }

    /// Issues one fetch cycle for `query` and returns the intent that marks
    /// it as started. Must be called within a tokio runtime.
    pub fn start_fetch(&mut self, query: String) -> SearchIntent {
        let request_id = self.next_request;
        self.next_request += 1;

        let catalog = Arc::clone(&self.catalog);
        let trends = Arc::clone(&self.trends);
        let events = self.events.clone();
        let task_query = query.clone();

        tokio::spawn(async move {
            let result = catalog.search(Some(&task_query)).await;
            match &result {
                Ok(movies) => {
                    tracing::debug!(
                        request_id,
                        query = %task_query,
                        results = movies.len(),
                        "Fetched movies"
                    );
                    if let Some(first) = movies.first() {
                        if !task_query.is_empty() {
                            // Detached: the result view never waits on this.
                            let term = task_query.clone();
                            let movie = first.clone();
                            tokio::spawn(async move {
                                trends.record_search(&term, &movie).await;
                            });
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(request_id, query = %task_query, error = %err, "Error fetching movies");
                }
            }

            let outcome = FetchOutcome::from_result(result);
            if events
                .send(AppEvent::SearchFinished {
                    request_id,
                    outcome,
                })
                .is_err()
            {
                tracing::trace!(request_id, "Search result dropped (UI loop gone)");
            }
        });

        SearchIntent::FetchStarted { request_id, query }
    }

    /// Loads the top `limit` trending searches and posts them to the UI loop.
    pub fn refresh_trending(&self, limit: usize) {
        let trends = Arc::clone(&self.trends);
        let events = self.events.clone();
        tokio::spawn(async move {
            let records = trends.top_trending(limit).await;
            if events.send(AppEvent::TrendingLoaded(records)).is_err() {
                tracing::trace!("Trending result dropped (UI loop gone)");
            }
        });
    }
}

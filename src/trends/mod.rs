//! Search popularity tracking.
//!
//! Every successful query-driven search bumps a counter keyed by the search
//! term in a remote document collection. The counters feed the trending
//! panel.

mod appwrite;
mod backend;
mod memory;
mod record;
mod store;

pub use appwrite::AppwriteBackend;
pub use backend::{DocumentBackend, StoreError};
pub use memory::MemoryBackend;
pub use record::{NewTrendRecord, TrendRecord};
pub use store::{RecordOutcome, TrendStore};

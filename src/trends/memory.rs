use async_trait::async_trait;
use parking_lot::Mutex;

use crate::trends::backend::{DocumentBackend, StoreError};
use crate::trends::record::{NewTrendRecord, TrendRecord};

/// In-process collection used when no remote store is configured.
///
/// Counts live only as long as the process.
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<Vec<TrendRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored records in insertion order.
    pub fn records(&self) -> Vec<TrendRecord> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<TrendRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .iter()
            .find(|r| r.search_term == term)
            .cloned())
    }

    async fn list_top(&self, limit: usize) -> Result<Vec<TrendRecord>, StoreError> {
        let mut records = self.records.lock().clone();
        // Stable sort keeps insertion order among equal counts.
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records.truncate(limit);
        Ok(records)
    }

    async fn create(&self, record: NewTrendRecord) -> Result<TrendRecord, StoreError> {
        let record = record.into_record(uuid::Uuid::new_v4().simple().to_string());
        self.records.lock().push(record.clone());
        Ok(record)
    }

    async fn increment(&self, id: &str, by: u64) -> Result<TrendRecord, StoreError> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        record.count += by;
        Ok(record.clone())
    }
}

use crate::trends::TrendRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TrendingIntent {
    LoadStarted,
    /// Empty when the store failed; the panel cannot tell the difference.
    Loaded { records: Vec<TrendRecord> },
}

impl Intent for TrendingIntent {}

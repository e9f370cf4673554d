use crate::errors::Result;
use crate::model::StoredRecord;
use async_trait::async_trait;

/// Windowed read over the record set, ordered ascending by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowQuery {
    pub skip: u64,
    pub limit: u64,
}

/// Read capability the page engine needs from the backing store.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Count every record in the store.
    async fn count_records(&self) -> Result<u64>;

    /// Fetch one window, sorted by `created_at` then `id`, ascending.
    async fn fetch_window(&self, query: &WindowQuery) -> Result<Vec<StoredRecord>>;
}

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::content::domain::{ContentRecord, ContentSource};
use crate::shared::errors::AppResult;

/// Content source backed by a snapshot held in memory
///
/// The snapshot can be swapped at runtime; every listing returns a copy so
/// callers never observe a replacement half-way through.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    records: Arc<RwLock<Vec<ContentRecord>>>,
}

impl InMemoryContentSource {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Replace the current snapshot
    pub async fn replace(&self, records: Vec<ContentRecord>) {
        let mut guard = self.records.write().await;
        debug!("Replacing in-memory snapshot: {} -> {} records", guard.len(), records.len());
        *guard = records;
    }

    /// Append one record to the end of the snapshot
    pub async fn push(&self, record: ContentRecord) {
        self.records.write().await.push(record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn list_content(&self) -> AppResult<Vec<ContentRecord>> {
        Ok(self.records.read().await.clone())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

use crate::modules::content::domain::entities::ContentRecord;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Upstream collaborator that materialises content records in memory
///
/// Where the records come from (storage, HTTP, a cache) is up to the
/// implementation; consumers only ever see a complete snapshot.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Return the current snapshot of content records, in listing order
    async fn list_content(&self) -> AppResult<Vec<ContentRecord>>;

    /// Short name used in log lines
    fn name(&self) -> &str {
        "content-source"
    }
}

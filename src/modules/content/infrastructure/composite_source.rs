use async_trait::async_trait;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::content::domain::{ContentRecord, ContentSource};
use crate::shared::errors::AppResult;

/// Fans a listing out to several sources and concatenates the snapshots
///
/// Sources are queried concurrently; records keep the order of the source
/// list, then the order each source returned them in. A single failing
/// source fails the whole listing.
#[derive(Clone, Default)]
pub struct CompositeContentSource {
    sources: Vec<Arc<dyn ContentSource>>,
}

impl CompositeContentSource {
    pub fn new(sources: Vec<Arc<dyn ContentSource>>) -> Self {
        Self { sources }
    }

    pub fn with_source(mut self, source: Arc<dyn ContentSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

#[async_trait]
impl ContentSource for CompositeContentSource {
    async fn list_content(&self) -> AppResult<Vec<ContentRecord>> {
        let listings = self.sources.iter().map(|source| async move {
            source.list_content().await.inspect_err(|e| {
                warn!("Source '{}' failed: {}", source.name(), e);
            })
        });

        let snapshots = try_join_all(listings).await?;
        let records: Vec<ContentRecord> = snapshots.into_iter().flatten().collect();

        debug!(
            "Composite listing merged {} sources into {} records",
            self.sources.len(),
            records.len()
        );
        Ok(records)
    }

    fn name(&self) -> &str {
        "composite"
    }
}

impl std::fmt::Debug for CompositeContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeContentSource")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name().to_string()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

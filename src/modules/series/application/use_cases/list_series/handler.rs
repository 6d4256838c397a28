use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::series::application::service::SeriesService;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::query::{ListSeriesQuery, ListSeriesResult};

/// Query handler for listing series
pub struct ListSeriesHandler {
    service: Arc<SeriesService>,
}

impl ListSeriesHandler {
    pub fn new(service: Arc<SeriesService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Query<ListSeriesQuery, ListSeriesResult> for ListSeriesHandler {
    async fn execute(&self, query: ListSeriesQuery) -> AppResult<ListSeriesResult> {
        let mut series = self.service.list_series().await?;
        if query.multi_season_only {
            series.retain(|s| !s.is_singleton());
        }
        Ok(series)
    }
}

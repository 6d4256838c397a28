use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::series::application::service::SeriesService;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::query::{GetSeriesSeasonsQuery, GetSeriesSeasonsResult, SeasonEntry};

/// Query handler for the season list of one series
pub struct GetSeriesSeasonsHandler {
    service: Arc<SeriesService>,
}

impl GetSeriesSeasonsHandler {
    pub fn new(service: Arc<SeriesService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Query<GetSeriesSeasonsQuery, GetSeriesSeasonsResult> for GetSeriesSeasonsHandler {
    async fn execute(&self, query: GetSeriesSeasonsQuery) -> AppResult<GetSeriesSeasonsResult> {
        query.validate()?;

        let seasons = self.service.get_series_seasons(&query.series_key).await?;
        Ok(seasons
            .into_iter()
            .map(|content| SeasonEntry {
                label: self.service.season_label(&content),
                content,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::ContentRecord;
    use crate::modules::content::infrastructure::InMemoryContentSource;
    use crate::shared::errors::AppError;

    fn handler(records: Vec<ContentRecord>) -> GetSeriesSeasonsHandler {
        let source = Arc::new(InMemoryContentSource::new(records));
        GetSeriesSeasonsHandler::new(Arc::new(SeriesService::new(source)))
    }

    #[tokio::test]
    async fn test_blank_key_is_rejected() {
        let err = handler(vec![])
            .execute(GetSeriesSeasonsQuery::new("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_entries_are_labelled() {
        let records = vec![
            ContentRecord::anime("4", "AoT Final Season")
                .with_series_key("aot")
                .with_season_number(4)
                .with_season_title("Final Season"),
            ContentRecord::anime("1", "AoT").with_series_key("aot"),
            ContentRecord::anime("2", "AoT Season 2")
                .with_series_key("aot")
                .with_season_number(2),
        ];

        let entries = handler(records)
            .execute(GetSeriesSeasonsQuery::new("aot"))
            .await
            .unwrap();

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Season 1", "Season 2", "Final Season"]);
    }
}

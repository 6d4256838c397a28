use std::sync::Arc;

use crate::modules::content::domain::{ContentRecord, ContentSource};
use crate::modules::series::domain::{Series, SeriesGrouper, SeriesGroupingConfig};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Facade the view layer talks to: fetches a snapshot and groups it
///
/// Every call works on a fresh snapshot; nothing is cached between calls.
pub struct SeriesService {
    source: Arc<dyn ContentSource>,
    grouper: Arc<SeriesGrouper>,
}

impl SeriesService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self::with_grouper(source, Arc::new(SeriesGrouper::default()))
    }

    pub fn with_grouper(source: Arc<dyn ContentSource>, grouper: Arc<SeriesGrouper>) -> Self {
        Self { source, grouper }
    }

    pub fn from_config(source: Arc<dyn ContentSource>, config: &SeriesGroupingConfig) -> AppResult<Self> {
        let grouper = SeriesGrouper::from_config(config)?;
        Ok(Self::with_grouper(source, Arc::new(grouper)))
    }

    /// All series in the current snapshot
    pub async fn list_series(&self) -> AppResult<Vec<Series>> {
        let timer = TimedOperation::new("list_series");
        let records = self.fetch().await?;
        let series = self.grouper.group(&records);
        timer.finish_with_info(&format!("{} series", series.len()));
        Ok(series)
    }

    /// One series by key
    pub async fn get_series(&self, series_key: &str) -> AppResult<Series> {
        self.list_series()
            .await?
            .into_iter()
            .find(|series| series.series_key == series_key)
            .ok_or_else(|| AppError::NotFound(format!("Series '{}' not found", series_key)))
    }

    /// Seasons of one series, ordered by season number; empty for unknown keys
    pub async fn get_series_seasons(&self, series_key: &str) -> AppResult<Vec<ContentRecord>> {
        let records = self.fetch().await?;
        Ok(self.grouper.seasons_for_series_key(&records, series_key))
    }

    /// Label for a single season row
    pub fn season_label(&self, record: &ContentRecord) -> String {
        self.grouper.format_season_title(record)
    }

    async fn fetch(&self) -> AppResult<Vec<ContentRecord>> {
        LogContext::source_listing(self.source.name(), None);
        match self.source.list_content().await {
            Ok(records) => {
                LogContext::source_listing(self.source.name(), Some(records.len()));
                Ok(records)
            }
            Err(e) => {
                LogContext::error_with_context(&e, "Failed to list content");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::ContentType;
    use crate::modules::content::infrastructure::InMemoryContentSource;
    use crate::modules::series::domain::SeriesGroupingConfigBuilder;

    fn service(records: Vec<ContentRecord>) -> SeriesService {
        SeriesService::new(Arc::new(InMemoryContentSource::new(records)))
    }

    fn catalog() -> Vec<ContentRecord> {
        vec![
            ContentRecord::anime("2", "Show Season 2")
                .with_series_key("show")
                .with_season_number(2),
            ContentRecord::new(ContentType::Movie, "m", "Perfect Blue"),
            ContentRecord::anime("1", "Show")
                .with_series_key("show")
                .with_season_number(1),
            ContentRecord::anime("9", "Solo").with_season_number(1),
        ]
    }

    #[tokio::test]
    async fn test_list_series_groups_snapshot() {
        let series = service(catalog()).list_series().await.unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].series_key, "show");
        assert_eq!(series[0].title, "Show");
        assert_eq!(series[1].series_key, "series:9");
    }

    #[tokio::test]
    async fn test_get_series_by_key() {
        let service = service(catalog());

        let series = service.get_series("show").await.unwrap();
        assert_eq!(series.season_count(), 2);

        let missing = service.get_series("nope").await.unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_series_seasons_sorted() {
        let seasons = service(catalog()).get_series_seasons("show").await.unwrap();
        let ids: Vec<&str> = seasons.iter().map(|s| s.source_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_configured_service_uses_label_prefix() {
        let config = SeriesGroupingConfigBuilder::new()
            .season_label_prefix("Cour")
            .build()
            .unwrap();
        let service =
            SeriesService::from_config(Arc::new(InMemoryContentSource::default()), &config).unwrap();

        let record = ContentRecord::anime("1", "x").with_season_number(3);
        assert_eq!(service.season_label(&record), "Cour 3");
    }
}

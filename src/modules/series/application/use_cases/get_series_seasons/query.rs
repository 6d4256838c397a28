use serde::{Deserialize, Serialize};

use crate::modules::content::domain::ContentRecord;
use crate::shared::errors::{AppError, AppResult};

/// Query for the seasons of one series
#[derive(Debug, Clone)]
pub struct GetSeriesSeasonsQuery {
    pub series_key: String,
}

impl GetSeriesSeasonsQuery {
    pub fn new(series_key: impl Into<String>) -> Self {
        Self {
            series_key: series_key.into(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.series_key.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Series key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A season row ready for a detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonEntry {
    pub label: String,
    pub content: ContentRecord,
}

/// Result of fetching seasons, in season order
pub type GetSeriesSeasonsResult = Vec<SeasonEntry>;

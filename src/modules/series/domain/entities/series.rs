//! Logical anime series derived from a flat content listing

use crate::modules::content::domain::ContentRecord;
use crate::modules::series::domain::services::series_grouping::season_defaults::effective_season_number;
use serde::{Deserialize, Serialize};

/// A root show plus its sequel seasons
///
/// Built fresh by the grouper for every snapshot and never mutated
/// afterwards. `seasons` is sorted by effective season number and always
/// contains `representative_content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_key: String,
    pub series_root_source_id: String,
    /// Series-level title with season markers stripped
    pub title: String,
    pub seasons: Vec<ContentRecord>,
    pub representative_content: ContentRecord,
}

impl Series {
    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.seasons.len() == 1
    }

    /// Season with the highest effective number; the last one on ties
    pub fn latest_season(&self) -> Option<&ContentRecord> {
        self.seasons.last()
    }

    pub fn contains_source_id(&self, source_id: &str) -> bool {
        self.seasons.iter().any(|season| season.source_id == source_id)
    }

    /// Effective season numbers in display order
    pub fn season_numbers(&self) -> Vec<i32> {
        self.seasons.iter().map(effective_season_number).collect()
    }
}

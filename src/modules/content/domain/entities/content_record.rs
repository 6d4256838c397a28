//! Catalog entry as handed over by the content listing layer

use crate::modules::content::domain::value_objects::ContentType;
use serde::{Deserialize, Serialize};

/// A single movie, TV or anime entry
///
/// Records are read-only inputs: grouping and labelling never mutate them.
/// Every optional field has a documented fallback in
/// [`season_defaults`](crate::modules::series::domain::services::series_grouping::season_defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Identifier from the originating catalog
    pub source_id: String,
    /// Pre-assigned grouping key shared by all seasons of a series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_key: Option<String>,
    /// Source identifier of the season-1 entry of the series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_root_source_id: Option<String>,
    /// Raw display title, possibly with a season suffix
    pub title: String,
    /// 1-based position in the sequel chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_number: Option<i32>,
    /// Human label for the season, e.g. "Final Season"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_title: Option<String>,

    // Listing-row fields; not used for grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
}

impl ContentRecord {
    /// Create a record with only the required fields set
    pub fn new(
        content_type: ContentType,
        source_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            content_type,
            source_id: source_id.into(),
            series_key: None,
            series_root_source_id: None,
            title: title.into(),
            season_number: None,
            season_title: None,
            poster_url: None,
            release_year: None,
            episode_count: None,
        }
    }

    /// Shorthand for an anime record
    pub fn anime(source_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(ContentType::Anime, source_id, title)
    }

    pub fn with_series_key(mut self, key: impl Into<String>) -> Self {
        self.series_key = Some(key.into());
        self
    }

    pub fn with_series_root_source_id(mut self, root: impl Into<String>) -> Self {
        self.series_root_source_id = Some(root.into());
        self
    }

    pub fn with_season_number(mut self, season: i32) -> Self {
        self.season_number = Some(season);
        self
    }

    pub fn with_season_title(mut self, season_title: impl Into<String>) -> Self {
        self.season_title = Some(season_title.into());
        self
    }

    pub fn is_anime(&self) -> bool {
        self.content_type.is_anime()
    }
}

use super::season_defaults::{SEASON_LABEL_PREFIX, SYNTHETIC_KEY_PREFIX};
use super::title_cleaner::SeasonMarkerRule;
use crate::shared::errors::{AppError, AppResult};

/// Configuration for series grouping
///
/// Externalizes the prefixes and the extra season markers so callers can
/// adapt grouping to their catalog without touching the grouper.
#[derive(Debug, Clone)]
pub struct SeriesGroupingConfig {
    /// Prefix for keys synthesised from a record's source id
    pub synthetic_key_prefix: String,

    /// Word used when generating season labels ("Season 2")
    pub season_label_prefix: String,

    /// Additional marker patterns, tried after the built-in table
    pub extra_marker_patterns: Vec<String>,
}

impl SeriesGroupingConfig {
    /// Creates a configuration with the stock behaviour
    pub fn new() -> Self {
        Self {
            synthetic_key_prefix: SYNTHETIC_KEY_PREFIX.to_string(),
            season_label_prefix: SEASON_LABEL_PREFIX.to_string(),
            extra_marker_patterns: Vec::new(),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.synthetic_key_prefix.is_empty() {
            return Err(AppError::ValidationError(
                "synthetic_key_prefix must not be empty".to_string(),
            ));
        }

        if self.season_label_prefix.trim().is_empty() {
            return Err(AppError::ValidationError(
                "season_label_prefix must not be blank".to_string(),
            ));
        }

        for (index, pattern) in self.extra_marker_patterns.iter().enumerate() {
            SeasonMarkerRule::new(format!("extra-{}", index), pattern)?;
        }

        Ok(())
    }
}

impl Default for SeriesGroupingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for SeriesGroupingConfig
#[derive(Default)]
pub struct SeriesGroupingConfigBuilder {
    config: SeriesGroupingConfig,
}

impl SeriesGroupingConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SeriesGroupingConfig::new(),
        }
    }

    pub fn synthetic_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.synthetic_key_prefix = prefix.into();
        self
    }

    pub fn season_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.season_label_prefix = prefix.into();
        self
    }

    pub fn extra_marker_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.extra_marker_patterns.push(pattern.into());
        self
    }

    pub fn build(self) -> AppResult<SeriesGroupingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

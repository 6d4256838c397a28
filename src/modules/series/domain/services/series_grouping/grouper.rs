use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::config::SeriesGroupingConfig;
use super::season_defaults::{
    effective_root_source_id, effective_season_number, effective_series_key_with_prefix,
    format_season_title_with_label, SEASON_LABEL_PREFIX, SYNTHETIC_KEY_PREFIX,
};
use super::title_cleaner::TitleCleaner;
use crate::modules::content::domain::ContentRecord;
use crate::modules::series::domain::entities::Series;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

static DEFAULT_GROUPER: Lazy<SeriesGrouper> = Lazy::new(SeriesGrouper::default);

/// Partitions anime records into series and picks a representative per series
///
/// Grouping is a pure function of its input: records are borrowed, never
/// mutated, and non-anime records are ignored.
#[derive(Debug, Clone)]
pub struct SeriesGrouper {
    cleaner: TitleCleaner,
    synthetic_key_prefix: String,
    season_label_prefix: String,
}

impl SeriesGrouper {
    pub fn new(cleaner: TitleCleaner) -> Self {
        Self {
            cleaner,
            synthetic_key_prefix: SYNTHETIC_KEY_PREFIX.to_string(),
            season_label_prefix: SEASON_LABEL_PREFIX.to_string(),
        }
    }

    /// Build a grouper from a configuration, validating it first
    pub fn from_config(config: &SeriesGroupingConfig) -> AppResult<Self> {
        config.validate()?;

        let mut cleaner = TitleCleaner::standard();
        for (index, pattern) in config.extra_marker_patterns.iter().enumerate() {
            cleaner = cleaner.with_rule(&format!("extra-{}", index), pattern)?;
        }

        Ok(Self {
            cleaner,
            synthetic_key_prefix: config.synthetic_key_prefix.clone(),
            season_label_prefix: config.season_label_prefix.clone(),
        })
    }

    /// Group records into series, in order of first appearance
    pub fn group(&self, records: &[ContentRecord]) -> Vec<Series> {
        let mut index_by_key: HashMap<String, usize> = HashMap::new();
        let mut accumulators: Vec<SeriesAccumulator<'_>> = Vec::new();

        for record in records.iter().filter(|r| r.is_anime()) {
            let key = self.series_key_for(record);
            match index_by_key.get(&key).copied() {
                Some(index) => accumulators[index].absorb(record),
                None => {
                    index_by_key.insert(key.clone(), accumulators.len());
                    accumulators.push(SeriesAccumulator::start(key, record));
                }
            }
        }

        let anime_count: usize = accumulators.iter().map(|acc| acc.members.len()).sum();
        let series: Vec<Series> = accumulators
            .into_iter()
            .map(|acc| acc.finish(&self.cleaner))
            .collect();

        LogContext::grouping_summary(records.len(), anime_count, series.len());
        series
    }

    /// All anime seasons sharing `key`, sorted by effective season number
    pub fn seasons_for_series_key(&self, records: &[ContentRecord], key: &str) -> Vec<ContentRecord> {
        let mut seasons: Vec<ContentRecord> = records
            .iter()
            .filter(|r| r.is_anime() && self.series_key_for(r) == key)
            .cloned()
            .collect();
        seasons.sort_by_key(effective_season_number);
        seasons
    }

    /// Effective grouping key of a record under this grouper's prefix
    pub fn series_key_for(&self, record: &ContentRecord) -> String {
        effective_series_key_with_prefix(record, &self.synthetic_key_prefix)
    }

    /// Season-level label under this grouper's label prefix
    pub fn format_season_title(&self, record: &ContentRecord) -> String {
        format_season_title_with_label(record, &self.season_label_prefix)
    }

    pub fn clean_title(&self, title: &str) -> String {
        self.cleaner.clean(title)
    }
}

impl Default for SeriesGrouper {
    fn default() -> Self {
        Self::new(TitleCleaner::standard())
    }
}

/// In-progress series while records are being folded in
struct SeriesAccumulator<'a> {
    series_key: String,
    series_root_source_id: String,
    members: Vec<&'a ContentRecord>,
    representative: usize,
}

impl<'a> SeriesAccumulator<'a> {
    fn start(series_key: String, record: &'a ContentRecord) -> Self {
        Self {
            series_key,
            series_root_source_id: effective_root_source_id(record).to_string(),
            members: vec![record],
            representative: 0,
        }
    }

    fn absorb(&mut self, record: &'a ContentRecord) {
        let current = effective_season_number(self.members[self.representative]);
        self.members.push(record);

        if should_replace_representative(current, effective_season_number(record)) {
            self.representative = self.members.len() - 1;
        }
    }

    fn finish(mut self, cleaner: &TitleCleaner) -> Series {
        let representative = self.members[self.representative].clone();
        // Stable: equal season numbers keep their arrival order
        self.members.sort_by_key(|record| effective_season_number(record));

        Series {
            title: cleaner.clean(&representative.title),
            series_key: self.series_key,
            series_root_source_id: self.series_root_source_id,
            seasons: self.members.into_iter().cloned().collect(),
            representative_content: representative,
        }
    }
}

/// Season 1 always takes over; otherwise the later season wins while no
/// season 1 has been seen.
fn should_replace_representative(current: i32, candidate: i32) -> bool {
    candidate == 1 || (current != 1 && candidate > current)
}

/// Group records with the default grouper
pub fn group_into_series(records: &[ContentRecord]) -> Vec<Series> {
    DEFAULT_GROUPER.group(records)
}

/// Seasons for one key with the default grouper
pub fn seasons_for_series_key(records: &[ContentRecord], key: &str) -> Vec<ContentRecord> {
    DEFAULT_GROUPER.seasons_for_series_key(records, key)
}

//! Fallback rules for the optional fields of a content record
//!
//! Every optional field used by grouping resolves through exactly one
//! function here. Empty strings count as absent.

use crate::modules::content::domain::ContentRecord;

/// Prefix of keys synthesised for records without a series key
pub const SYNTHETIC_KEY_PREFIX: &str = "series:";

/// Season number assumed when a record carries none
pub const DEFAULT_SEASON_NUMBER: i32 = 1;

/// Word used in generated season labels
pub const SEASON_LABEL_PREFIX: &str = "Season";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The record's season number, or 1 when absent
pub fn effective_season_number(record: &ContentRecord) -> i32 {
    record.season_number.unwrap_or(DEFAULT_SEASON_NUMBER)
}

/// Grouping key, synthesised as `"series:" + sourceId` when absent
pub fn effective_series_key(record: &ContentRecord) -> String {
    effective_series_key_with_prefix(record, SYNTHETIC_KEY_PREFIX)
}

/// Grouping key using a custom prefix for synthesised keys
pub fn effective_series_key_with_prefix(record: &ContentRecord, prefix: &str) -> String {
    match non_empty(&record.series_key) {
        Some(key) => key.to_string(),
        None => format!("{}{}", prefix, record.source_id),
    }
}

/// Source id of the series root, defaulting to the record's own id
pub fn effective_root_source_id(record: &ContentRecord) -> &str {
    non_empty(&record.series_root_source_id).unwrap_or(&record.source_id)
}

/// Season-level label for detail views
pub fn format_season_title(record: &ContentRecord) -> String {
    format_season_title_with_label(record, SEASON_LABEL_PREFIX)
}

/// Season-level label using a custom word for generated labels
pub fn format_season_title_with_label(record: &ContentRecord, label: &str) -> String {
    if let Some(season_title) = non_empty(&record.season_title) {
        return season_title.to_string();
    }

    format!("{} {}", label, effective_season_number(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_season_number_defaults_to_one() {
        let record = ContentRecord::anime("1", "Mushishi");
        assert_eq!(effective_season_number(&record), 1);
        assert_eq!(effective_season_number(&record.with_season_number(3)), 3);
    }

    #[test]
    fn test_series_key_is_synthesised_when_absent() {
        let record = ContentRecord::anime("42", "Ping Pong the Animation");
        assert_eq!(effective_series_key(&record), "series:42");
    }

    #[test]
    fn test_empty_series_key_counts_as_absent() {
        let record = ContentRecord::anime("42", "Ping Pong the Animation").with_series_key("");
        assert_eq!(effective_series_key(&record), "series:42");
    }

    #[test]
    fn test_present_series_key_wins() {
        let record = ContentRecord::anime("42", "x").with_series_key("pingpong");
        assert_eq!(effective_series_key(&record), "pingpong");
        assert_eq!(effective_series_key_with_prefix(&record, "group/"), "pingpong");
    }

    #[test]
    fn test_custom_prefix_for_synthesised_key() {
        let record = ContentRecord::anime("7", "x");
        assert_eq!(effective_series_key_with_prefix(&record, "group/"), "group/7");
    }

    #[test]
    fn test_root_source_id_fallback() {
        let record = ContentRecord::anime("5", "x");
        assert_eq!(effective_root_source_id(&record), "5");

        let record = record.with_series_root_source_id("1");
        assert_eq!(effective_root_source_id(&record), "1");

        let record = ContentRecord::anime("5", "x").with_series_root_source_id("");
        assert_eq!(effective_root_source_id(&record), "5");
    }

    #[test]
    fn test_format_season_title_for_first_season() {
        let record = ContentRecord::anime("1", "x").with_season_number(1);
        assert_eq!(format_season_title(&record), "Season 1");
        assert_eq!(format_season_title(&ContentRecord::anime("1", "x")), "Season 1");
    }

    #[test]
    fn test_format_season_title_prefers_season_title() {
        let record = ContentRecord::anime("6", "x")
            .with_season_number(6)
            .with_season_title("Final Season");
        assert_eq!(format_season_title(&record), "Final Season");
    }

    #[test]
    fn test_format_season_title_numbers_later_seasons() {
        let record = ContentRecord::anime("3", "x").with_season_number(3);
        assert_eq!(format_season_title(&record), "Season 3");

        let record = record.with_season_title("");
        assert_eq!(format_season_title(&record), "Season 3");
    }

    #[test]
    fn test_format_season_title_with_custom_label() {
        let record = ContentRecord::anime("3", "x").with_season_number(2);
        assert_eq!(format_season_title_with_label(&record, "Cour"), "Cour 2");
    }
}

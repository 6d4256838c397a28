pub mod series_grouping;

pub use series_grouping::{
    format_season_title, group_into_series, seasons_for_series_key, SeriesGrouper,
    SeriesGroupingConfig, SeriesGroupingConfigBuilder, TitleCleaner,
};

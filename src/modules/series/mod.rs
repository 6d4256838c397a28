pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::use_cases::{
    GetSeriesSeasonsHandler, GetSeriesSeasonsQuery, ListSeriesHandler, ListSeriesQuery,
    SeasonEntry,
};
pub use application::SeriesService;
pub use domain::{
    format_season_title, group_into_series, seasons_for_series_key, Series, SeriesGrouper,
    SeriesGroupingConfig, SeriesGroupingConfigBuilder, TitleCleaner,
};

pub mod entities;
pub mod services;

// Re-exports for easy access
pub use entities::Series;
pub use services::{
    format_season_title, group_into_series, seasons_for_series_key, SeriesGrouper,
    SeriesGroupingConfig, SeriesGroupingConfigBuilder, TitleCleaner,
};

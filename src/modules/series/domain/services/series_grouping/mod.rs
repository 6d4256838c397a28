//! Series grouping: folds a flat anime listing into logical series.
//!
//! # Architecture
//!
//! - `season_defaults`: one fallback function per optional record field
//! - `title_cleaner`: ordered, first-match-wins table of season-marker rules
//! - `config`: externalized prefixes and extra marker patterns
//! - `grouper`: the single-pass grouping itself
//!
//! # Usage
//!
//! ```rust,ignore
//! use seenit_lib::modules::series::domain::services::series_grouping::*;
//!
//! let series = group_into_series(&records);
//! for s in &series {
//!     println!("{} ({} seasons)", s.title, s.season_count());
//! }
//! ```
pub mod config;
pub mod grouper;
pub mod season_defaults;
pub mod title_cleaner;

// Re-export main types
pub use config::{SeriesGroupingConfig, SeriesGroupingConfigBuilder};
pub use grouper::{group_into_series, seasons_for_series_key, SeriesGrouper};
pub use season_defaults::{
    effective_root_source_id, effective_season_number, effective_series_key, format_season_title,
};
pub use title_cleaner::{clean_series_title, SeasonMarkerRule, TitleCleaner};

pub mod get_series_seasons;
pub mod list_series;

pub use get_series_seasons::{
    GetSeriesSeasonsHandler, GetSeriesSeasonsQuery, GetSeriesSeasonsResult, SeasonEntry,
};
pub use list_series::{ListSeriesHandler, ListSeriesQuery, ListSeriesResult};

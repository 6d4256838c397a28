//! Series grouping and season labelling for the Seenit media tracker.
//!
//! The view layer hands over (or lets a [`ContentSource`] fetch) a flat list
//! of content records; this crate folds the anime entries into logical
//! series, picks a representative season for list views and produces
//! season labels for detail views.
//!
//! [`ContentSource`]: modules::content::ContentSource

pub mod modules;
pub mod shared;

pub use modules::content::{ContentRecord, ContentSource, ContentType};
pub use modules::series::{
    format_season_title, group_into_series, seasons_for_series_key, Series, SeriesGrouper,
    SeriesService,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;

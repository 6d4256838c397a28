mod handler;
mod query;

pub use handler::GetSeriesSeasonsHandler;
pub use query::{GetSeriesSeasonsQuery, GetSeriesSeasonsResult, SeasonEntry};

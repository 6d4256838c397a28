mod handler;
mod query;

pub use handler::ListSeriesHandler;
pub use query::{ListSeriesQuery, ListSeriesResult};

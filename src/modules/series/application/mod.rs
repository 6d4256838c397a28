pub mod service;
pub mod use_cases;

pub use service::SeriesService;

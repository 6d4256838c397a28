//! Base trait for read-side handlers
//!
//! Each handler answers exactly one query type, which keeps the
//! facade services thin and lets handlers be exercised on their own.
//!
//! # Example
//!
//! ```rust,ignore
//! struct ListSeriesQuery;
//!
//! struct ListSeriesHandler {
//!     service: Arc<SeriesService>,
//! }
//!
//! #[async_trait]
//! impl Query<ListSeriesQuery, Vec<Series>> for ListSeriesHandler {
//!     async fn execute(&self, query: ListSeriesQuery) -> AppResult<Vec<Series>> {
//!         self.service.list_series().await
//!     }
//! }
//! ```
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}

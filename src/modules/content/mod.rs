pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{ContentRecord, ContentSource, ContentType};
pub use infrastructure::{CompositeContentSource, InMemoryContentSource, JsonContentSource};

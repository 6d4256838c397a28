pub mod composite_source;
pub mod in_memory_source;
pub mod json_source;

pub use composite_source::CompositeContentSource;
pub use in_memory_source::InMemoryContentSource;
pub use json_source::JsonContentSource;

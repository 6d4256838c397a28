pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::ContentRecord;
pub use repositories::ContentSource;
pub use value_objects::ContentType;

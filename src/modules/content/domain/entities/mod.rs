pub mod content_record;

pub use content_record::ContentRecord;

pub mod content;
pub mod series;

// Shared Kernel
// Cross-cutting pieces used by every bounded context

pub mod application; // Shared application layer patterns
pub mod errors; // Shared error types
pub mod utils; // Logging utilities

// Re-exports for convenience
pub use errors::{AppError, AppResult};

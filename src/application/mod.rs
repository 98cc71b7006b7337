// Application layer - use cases and orchestration.
// Validates input, pulls holidays from the upstream source and
// classifies every failure into `AppError`.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;

//! Error handling infrastructure.

mod types;

pub use types::{InitializationError, ValidationError};

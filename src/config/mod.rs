//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, hop limits, throttling policy)
//! - HTTP header name constants
//! - CLI option types and the library `AuditConfig`

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{AuditConfig, LogFormat, LogLevel};

//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The redirect-following HTTP client (redirects disabled, manual tracking)
//! - The logger

mod client;
mod logger;

// Re-export public API
pub use client::init_audit_client;
pub use logger::init_logger_with;

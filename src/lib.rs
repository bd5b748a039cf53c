//! redirect_audit library: redirect chain auditing and country validation
//!
//! This library provides high-level APIs for auditing the redirect behavior
//! of a site's sitemap URLs: each URL's HTTP redirect chain is walked
//! manually, classified for SEO impact, attributed to a likely source, and
//! paired with remediation recommendations. A static project auditor covers
//! the redirects HTTP walking cannot see (route configuration, meta
//! refresh, JavaScript). A small country-code validation library guarantees
//! that shipping/structured-data output only ever contains verified ISO
//! 3166-1 alpha-2 codes.
//!
//! # Example
//!
//! ```no_run
//! use redirect_audit::{run_sitemap_audit, AuditConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuditConfig::default();
//! let report = run_sitemap_audit(
//!     &config,
//!     "https://example.com/sitemap.xml",
//!     CancellationToken::new(),
//! )
//! .await?;
//! println!(
//!     "{} URLs: {} clean, {} issues",
//!     report.total_urls,
//!     report.clean_urls.len(),
//!     report.redirect_issues.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The audit functions require a Tokio runtime. Use `#[tokio::main]` in
//! your application or call them from an async context.

#![warn(missing_docs)]

pub mod advice;
pub mod attribution;
pub mod audit;
pub mod chain;
pub mod classify;
pub mod config;
pub mod country;
mod error_handling;
pub mod initialization;
pub mod local_scan;
pub mod report;
pub mod sitemap;

// Re-export public API
pub use audit::{run_audit, run_sitemap_audit};
pub use config::{AuditConfig, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ValidationError};
pub use local_scan::{run_local_audit, write_local_report_files, LocalAuditReport};
pub use report::{write_report_files, AuditReport};

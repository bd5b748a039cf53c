//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, limits, and the throttling policy.

use std::time::Duration;

// Redirect handling
/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Per-request timeout in milliseconds.
/// A hop that takes longer than this is aborted and the chain terminates
/// in a TIMEOUT sub-state.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Delay between consecutive URL audits.
///
/// URLs are audited one at a time with this pause between them so the audit
/// does not trip rate limiting or abuse detection on the target host. This
/// is a politeness policy; do not parallelize the driver without also adding
/// a per-host concurrency cap.
pub const INTER_REQUEST_DELAY: Duration = Duration::from_millis(500);

// Country validation
/// Maximum number of country codes accepted in a single list.
pub const MAX_COUNTRY_CODES: usize = 50;

// Report rendering
/// Width of the divider lines in the text report.
pub const REPORT_DIVIDER_WIDTH: usize = 70;

/// User-Agent sent with every audit request.
///
/// Deliberately descriptive rather than browser-mimicking: the audit
/// identifies itself so site operators can tell these requests apart from
/// organic traffic.
pub const DEFAULT_USER_AGENT: &str = "redirect-audit/0.1 (+seo redirect chain analyzer)";

// Local scan limits
/// Maximum file size scanned by the local auditor in bytes (1MB).
/// Larger HTML/JS files are skipped to keep the static scan fast.
pub const MAX_SCAN_FILE_SIZE: u64 = 1024 * 1024;

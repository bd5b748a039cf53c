//! HTTP redirect chain walking.
//!
//! Follows a URL's redirect chain manually with HEAD requests, recording
//! every hop, so the full path from initial URL to final destination is
//! visible rather than only the end state.

mod types;

pub use types::{ChainResult, FinalStatus, RedirectStep};

use std::collections::HashMap;

use log::{debug, warn};
use reqwest::Url;

use crate::config::{ACCEPT_HEADER_VALUE, HEADER_LOCATION};

/// Options for a single chain walk.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Maximum number of redirect hops followed before the walk terminates
    /// in a "too many redirects" error state.
    pub max_redirects: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_redirects: crate::config::MAX_REDIRECT_HOPS,
        }
    }
}

/// Walks the redirect chain for a URL.
///
/// Issues a HEAD request to the current URL, records a [`RedirectStep`], and
/// follows the Location header while the response status is 3xx, resolving
/// relative Locations against the current URL. The walk is an explicit
/// bounded loop, never retried: a failed hop ends the walk so the result
/// stays deterministic.
///
/// Terminal states:
/// - non-3xx response, or 3xx without a Location header: normal termination
/// - more than `max_redirects` hops: `FinalStatus::Error` with a
///   "too many redirects" message, without appending a further step
/// - request timeout: `FinalStatus::Timeout`, the in-flight request aborted
/// - any other network failure: `FinalStatus::Error` with the error message
///
/// The partial chain built so far is always returned.
pub async fn walk_chain(
    client: &reqwest::Client,
    start_url: &str,
    options: &WalkOptions,
) -> ChainResult {
    let mut chain: Vec<RedirectStep> = Vec::new();
    let mut current = start_url.to_string();
    let mut redirect_count = 0usize;

    loop {
        let response = match client
            .head(&current)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER_VALUE)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let (final_status, error) = if e.is_timeout() {
                    debug!("Timeout while requesting {current}");
                    (FinalStatus::Timeout, format!("Request timed out: {e}"))
                } else {
                    debug!("Request to {current} failed: {e}");
                    (FinalStatus::Error, e.to_string())
                };
                return ChainResult {
                    url: start_url.to_string(),
                    final_status,
                    final_url: current,
                    redirect_count,
                    chain,
                    error: Some(error),
                };
            }
        };

        let status_code = response.status().as_u16();
        let headers = header_map(response.headers());
        let is_redirect = (300..400).contains(&status_code);
        let location = if is_redirect {
            headers
                .get(HEADER_LOCATION)
                .and_then(|loc| resolve_location(&current, loc))
        } else {
            None
        };

        chain.push(RedirectStep {
            url: current.clone(),
            status_code,
            headers,
            location: location.clone(),
        });

        let Some(next_url) = location else {
            if is_redirect {
                warn!("Redirect status {status_code} for {current} but no usable Location header");
            }
            // Non-3xx, or 3xx without Location: the chain terminates here
            return ChainResult {
                url: start_url.to_string(),
                final_status: FinalStatus::Status(status_code),
                final_url: current,
                redirect_count,
                chain,
                error: None,
            };
        };

        if redirect_count >= options.max_redirects {
            warn!(
                "Stopping chain walk for {start_url}: exceeded {} redirects",
                options.max_redirects
            );
            return ChainResult {
                url: start_url.to_string(),
                final_status: FinalStatus::Error,
                final_url: current,
                redirect_count,
                chain,
                error: Some(format!(
                    "Too many redirects (exceeded {})",
                    options.max_redirects
                )),
            };
        }

        redirect_count += 1;
        current = next_url;
    }
}

/// Resolves a Location header value against the current URL, handling
/// relative redirects.
fn resolve_location(current: &str, location: &str) -> Option<String> {
    match Url::parse(location) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(_) => Url::parse(current)
            .and_then(|base| base.join(location))
            .map(|joined| joined.to_string())
            .ok(),
    }
}

fn header_map(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_lowercase(),
                value.to_str().unwrap_or("").to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_location_absolute() {
        assert_eq!(
            resolve_location("https://example.com/a", "https://other.com/b"),
            Some("https://other.com/b".to_string())
        );
    }

    #[test]
    fn test_resolve_location_relative() {
        assert_eq!(
            resolve_location("https://example.com/a/b", "/c"),
            Some("https://example.com/c".to_string())
        );
        assert_eq!(
            resolve_location("https://example.com/a/", "c"),
            Some("https://example.com/a/c".to_string())
        );
    }

    #[test]
    fn test_resolve_location_garbage_base() {
        assert_eq!(resolve_location("not a url", "/c"), None);
    }

    #[test]
    fn test_walk_options_default() {
        assert_eq!(WalkOptions::default().max_redirects, 10);
    }
}

//! Sitemap URL extraction.
//!
//! The audit treats the sitemap as an opaque URL source: `<loc>` values in
//! document order, nothing else. Works against a live sitemap URL or a
//! local `sitemap.xml` file.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{info, warn};
use regex::Regex;

static LOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<loc>\s*([^<]+?)\s*</loc>").expect("valid loc regex"));

/// Extracts absolute http(s) URLs from sitemap XML, in document order.
pub fn extract_loc_urls(xml: &str) -> Vec<String> {
    LOC_RE
        .captures_iter(xml)
        .filter_map(|cap| {
            let loc = cap.get(1)?.as_str().trim();
            if loc.starts_with("http://") || loc.starts_with("https://") {
                Some(loc.to_string())
            } else {
                warn!("Skipping non-absolute sitemap entry: {loc}");
                None
            }
        })
        .collect()
}

/// Fetches a sitemap over HTTP and returns its URLs.
///
/// # Errors
///
/// Returns an error if the request fails, the response status is not
/// success, or the body cannot be read.
pub async fn fetch_sitemap_urls(client: &reqwest::Client, sitemap_url: &str) -> Result<Vec<String>> {
    let response = client
        .get(sitemap_url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch sitemap: {sitemap_url}"))?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Sitemap request returned HTTP {status} for {sitemap_url}");
    }
    let body = response
        .text()
        .await
        .context("Failed to read sitemap body")?;
    let urls = extract_loc_urls(&body);
    info!("Sitemap {sitemap_url} yielded {} URLs", urls.len());
    Ok(urls)
}

/// Reads a sitemap file from disk and returns its URLs.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_sitemap_file(path: &Path) -> Result<Vec<String>> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sitemap file: {}", path.display()))?;
    Ok(extract_loc_urls(&xml))
}

/// Derives the report domain from a sitemap URL (host part, or the raw
/// input when it does not parse).
pub fn domain_of(sitemap_url: &str) -> String {
    url::Url::parse(sitemap_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| sitemap_url.to_string())
}

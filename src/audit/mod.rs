//! Audit orchestration.
//!
//! Drives the full per-URL pipeline (walk, classify, attribute, advise) over
//! a URL set, accumulating an [`AuditReport`].
//!
//! URLs are processed strictly sequentially with a fixed delay between
//! them. This is a politeness policy toward the audited host, not a
//! performance limitation; do not parallelize without adding a per-host
//! concurrency cap. Cancellation is honored between URLs, never mid-walk: a
//! single chain walk is short-lived (bounded by max_redirects x timeout).

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::advice::recommend_fixes;
use crate::attribution::attribute_source;
use crate::chain::{walk_chain, WalkOptions};
use crate::classify::classify;
use crate::config::AuditConfig;
use crate::initialization::init_audit_client;
use crate::report::{AuditRecord, AuditReport};
use crate::sitemap;

/// Runs the live audit over an explicit URL list.
///
/// Every URL is isolated: an unexpected failure while processing one is
/// recorded in `report.errors` and the run continues with the next. The
/// returned report is always complete for the URLs that were attempted.
///
/// # Errors
///
/// Returns an error only if the HTTP client itself cannot be constructed;
/// per-URL failures never propagate.
pub async fn run_audit(
    config: &AuditConfig,
    domain: &str,
    urls: &[String],
    cancel: CancellationToken,
) -> Result<AuditReport> {
    let client = init_audit_client(config).context("Failed to initialize HTTP client")?;
    Ok(audit_urls(&client, config, domain, urls, cancel).await)
}

/// Drives the per-URL pipeline over a URL set with an already-built client.
async fn audit_urls(
    client: &Arc<reqwest::Client>,
    config: &AuditConfig,
    domain: &str,
    urls: &[String],
    cancel: CancellationToken,
) -> AuditReport {
    let walk_options = WalkOptions {
        max_redirects: config.max_redirects,
    };
    let delay = Duration::from_millis(config.delay_ms);

    let mut report = AuditReport::new(domain);
    info!("Auditing {} URLs for {domain}", urls.len());

    for (index, url) in urls.iter().enumerate() {
        if cancel.is_cancelled() {
            warn!(
                "Audit cancelled after {} of {} URLs",
                index,
                urls.len()
            );
            break;
        }
        if index > 0 {
            // Politeness delay between consecutive requests
            tokio::time::sleep(delay).await;
        }

        match audit_one(client, url, &walk_options).await {
            Ok(record) => {
                debug!(
                    "{url}: {} ({} hops)",
                    record.classification.classification.label(),
                    record.redirect_count
                );
                report.append(record);
            }
            Err(e) => {
                warn!("Failed to audit {url}: {e:#}");
                report.append_error(url, &format!("{e:#}"));
            }
        }
    }

    info!(
        "Audit complete: {} clean, {} issues, {} errors",
        report.clean_urls.len(),
        report.redirect_issues.len(),
        report.errors.len()
    );
    report
}

/// Fetches the sitemap and audits every URL in it.
///
/// # Errors
///
/// Returns an error if the sitemap cannot be fetched or the client cannot
/// be built; per-URL audit failures are captured in the report instead.
pub async fn run_sitemap_audit(
    config: &AuditConfig,
    sitemap_url: &str,
    cancel: CancellationToken,
) -> Result<AuditReport> {
    // One client serves both the sitemap fetch and the chain walks
    let client = init_audit_client(config).context("Failed to initialize HTTP client")?;
    let urls = sitemap::fetch_sitemap_urls(&client, sitemap_url).await?;
    let domain = sitemap::domain_of(sitemap_url);
    Ok(audit_urls(&client, config, &domain, &urls, cancel).await)
}

/// Audits a single URL: walk the chain, classify, attribute, recommend.
async fn audit_one(
    client: &Arc<reqwest::Client>,
    url: &str,
    walk_options: &WalkOptions,
) -> Result<AuditRecord> {
    let result = walk_chain(client, url, walk_options).await;
    if result.chain.is_empty() {
        // No response at all: this belongs in the report's errors list,
        // not in the classified buckets
        let message = result
            .error
            .unwrap_or_else(|| "No response data".to_string());
        anyhow::bail!("{message}");
    }
    // The live HEAD walker cannot observe client-side redirects; the static
    // scanner feeds that flag separately
    let verdict = classify(&result, false);
    let source = attribute_source(&result, &verdict);
    let fixes = recommend_fixes(&verdict, &source);
    Ok(AuditRecord::new(&result, verdict, source, fixes))
}

//! Static project audit.
//!
//! The local counterpart to the live crawler: instead of walking HTTP
//! chains, it scans a project directory for redirect configuration (route
//! config), client-side redirects (meta refresh, JavaScript), and sitemap
//! protocol problems, and emits the same dual JSON/text report format with
//! a prioritized recommendation list.

mod content;
mod routes;

pub use content::{collect_files, scan_html, scan_js, scan_sitemap};
pub use routes::scan_route_config;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

use crate::config::REPORT_DIVIDER_WIDTH;

/// Priority of a static finding or recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Must be addressed (blocks indexing or breaks pages)
    High,
    /// Should be reviewed
    Medium,
    /// Informational
    Low,
}

/// What kind of problem a static finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// A route rule that redirects with an explicit 3xx status
    ExplicitRedirectRoute,
    /// A route matching every path
    CatchAllRoute,
    /// An HTML meta-refresh redirect
    MetaRefresh,
    /// A JavaScript location assignment
    JsRedirect,
    /// A sitemap `<loc>` that is not HTTPS
    InsecureSitemapEntry,
}

/// One static finding.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// File the finding was made in
    pub file: String,
    /// Kind of problem
    pub category: FindingCategory,
    /// Human-readable description
    pub detail: String,
    /// Severity
    pub priority: Priority,
}

/// A remediation recommendation derived from the findings.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Severity
    pub priority: Priority,
    /// What to do
    pub message: String,
}

/// Report produced by a static project audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAuditReport {
    /// When the scan ran
    pub timestamp: DateTime<Utc>,
    /// Project directory scanned
    pub project_dir: String,
    /// Number of files scanned
    pub files_scanned: usize,
    /// All findings, in scan order
    pub findings: Vec<Finding>,
    /// Prioritized recommendations
    pub recommendations: Vec<Recommendation>,
}

impl LocalAuditReport {
    /// Number of HIGH-priority findings.
    pub fn high_priority_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.priority == Priority::High)
            .count()
    }
}

/// Runs the static audit over a project directory.
///
/// Scans, in order: the route configuration (`vercel.json`), every HTML
/// file for meta-refresh tags, every JS file for location assignments, and
/// any `sitemap.xml` for non-HTTPS entries. A missing or unparseable route
/// config is logged and skipped; it does not abort the scan.
///
/// # Errors
///
/// Returns an error only if the project directory does not exist.
pub fn run_local_audit(project_dir: &Path) -> Result<LocalAuditReport> {
    if !project_dir.is_dir() {
        anyhow::bail!("Not a directory: {}", project_dir.display());
    }
    info!("Scanning project: {}", project_dir.display());

    let mut findings = Vec::new();
    let mut files_scanned = 0usize;

    let route_config = project_dir.join("vercel.json");
    if route_config.is_file() {
        files_scanned += 1;
        match scan_route_config(&route_config) {
            Ok(mut route_findings) => findings.append(&mut route_findings),
            Err(e) => warn!("Skipping route config: {e:#}"),
        }
    }

    for path in collect_files(project_dir, "html") {
        if let Some(content) = read_scannable(&path) {
            files_scanned += 1;
            findings.append(&mut scan_html(&content, &relative_name(project_dir, &path)));
        }
    }

    for path in collect_files(project_dir, "js") {
        if let Some(content) = read_scannable(&path) {
            files_scanned += 1;
            findings.append(&mut scan_js(&content, &relative_name(project_dir, &path)));
        }
    }

    for path in collect_files(project_dir, "xml") {
        if !path.file_name().is_some_and(|n| n == "sitemap.xml") {
            continue;
        }
        if let Some(content) = read_scannable(&path) {
            files_scanned += 1;
            findings.append(&mut scan_sitemap(
                &content,
                &relative_name(project_dir, &path),
            ));
        }
    }

    let recommendations = build_recommendations(&findings);
    info!(
        "Static scan complete: {} findings across {} files",
        findings.len(),
        files_scanned
    );

    Ok(LocalAuditReport {
        timestamp: Utc::now(),
        project_dir: project_dir.display().to_string(),
        files_scanned,
        findings,
        recommendations,
    })
}

fn read_scannable(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Skipping unreadable file {}: {e}", path.display());
            None
        }
    }
}

fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Aggregates findings into one recommendation per category, sorted by
/// priority (HIGH first).
fn build_recommendations(findings: &[Finding]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let count_of = |category: FindingCategory| {
        findings.iter().filter(|f| f.category == category).count()
    };

    let meta_refresh = count_of(FindingCategory::MetaRefresh);
    if meta_refresh > 0 {
        recommendations.push(Recommendation {
            priority: Priority::High,
            message: format!(
                "Replace {meta_refresh} meta-refresh redirect(s) with server-side 301 redirects; \
                 search engines may not follow meta refresh"
            ),
        });
    }

    let js_redirects = count_of(FindingCategory::JsRedirect);
    if js_redirects > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!(
                "Review {js_redirects} JavaScript redirect(s); unconditional ones should become \
                 server-side 301 redirects"
            ),
        });
    }

    let redirect_routes = count_of(FindingCategory::ExplicitRedirectRoute);
    if redirect_routes > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!(
                "Verify {redirect_routes} configured redirect route(s) still point at live URLs"
            ),
        });
    }

    let insecure = count_of(FindingCategory::InsecureSitemapEntry);
    if insecure > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!("Switch {insecure} sitemap entr(ies) from http:// to https://"),
        });
    }

    let catch_alls = count_of(FindingCategory::CatchAllRoute);
    if catch_alls > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Low,
            message: format!(
                "Check that the {catch_alls} catch-all route(s) return 404 for invalid URLs \
                 instead of 200"
            ),
        });
    }

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

/// Renders the static report as a divider-delimited narrative.
pub fn render_local_text(report: &LocalAuditReport) -> String {
    let div = "=".repeat(REPORT_DIVIDER_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "LOCAL REDIRECT AUDIT REPORT");
    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "Generated: {}", report.timestamp.to_rfc3339());
    let _ = writeln!(out, "Project:   {}", report.project_dir);
    let _ = writeln!(out, "Files scanned: {}", report.files_scanned);
    let _ = writeln!(out, "Findings: {}", report.findings.len());
    let _ = writeln!(out);

    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "FINDINGS");
    let _ = writeln!(out, "{div}");
    if report.findings.is_empty() {
        let _ = writeln!(out, "None.");
    }
    for finding in &report.findings {
        let _ = writeln!(
            out,
            "[{:?}] {} ({:?})",
            finding.priority, finding.detail, finding.category
        );
        let _ = writeln!(out, "    in {}", finding.file);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "RECOMMENDATIONS");
    let _ = writeln!(out, "{div}");
    if report.recommendations.is_empty() {
        let _ = writeln!(out, "None.");
    }
    for rec in &report.recommendations {
        let _ = writeln!(out, "[{:?}] {}", rec.priority, rec.message);
    }
    let _ = writeln!(out, "{div}");

    out
}

/// Writes the JSON and text files for a static report; returns both paths.
///
/// # Errors
///
/// Returns an error if either file cannot be written.
pub fn write_local_report_files(
    report: &LocalAuditReport,
    output_dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let stamp = report.timestamp.format("%Y%m%d-%H%M%S");
    let json_path = output_dir.join(format!("local-audit-{stamp}.json"));
    let text_path = output_dir.join(format!("local-audit-{stamp}.txt"));

    let json = serde_json::to_string_pretty(report).context("Failed to serialize local report")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("Failed to write JSON report: {}", json_path.display()))?;
    std::fs::write(&text_path, render_local_text(report))
        .with_context(|| format!("Failed to write text report: {}", text_path.display()))?;

    info!(
        "Reports written: {} and {}",
        json_path.display(),
        text_path.display()
    );
    Ok((json_path, text_path))
}

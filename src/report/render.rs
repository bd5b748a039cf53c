//! Report rendering and file output.
//!
//! Every audit emits two files: a JSON report mirroring the `AuditReport`
//! structure exactly, and a divider-delimited narrative text report.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::config::REPORT_DIVIDER_WIDTH;
use crate::report::{AuditRecord, AuditReport};

fn divider() -> String {
    "=".repeat(REPORT_DIVIDER_WIDTH)
}

/// Renders the report as a fixed-width narrative text document.
pub fn render_text(report: &AuditReport) -> String {
    let mut out = String::new();
    let div = divider();

    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "REDIRECT AUDIT REPORT");
    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "Generated: {}", report.timestamp.to_rfc3339());
    let _ = writeln!(out, "Domain:    {}", report.domain);
    let _ = writeln!(out, "Total URLs audited: {}", report.total_urls);
    let _ = writeln!(out, "Clean: {}", report.clean_urls.len());
    let _ = writeln!(out, "Issues: {}", report.redirect_issues.len());
    let _ = writeln!(out, "Errors: {}", report.errors.len());
    let _ = writeln!(out);
    for (classification, count) in report.classification_tallies() {
        if count > 0 {
            let _ = writeln!(out, "  {}: {count}", classification.label());
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "REDIRECT ISSUES FOUND");
    let _ = writeln!(out, "{div}");
    if report.redirect_issues.is_empty() {
        let _ = writeln!(out, "None.");
    }
    for record in &report.redirect_issues {
        render_issue(&mut out, record);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "CLEAN URLs");
    let _ = writeln!(out, "{div}");
    if report.clean_urls.is_empty() {
        let _ = writeln!(out, "None.");
    }
    for record in &report.clean_urls {
        let _ = writeln!(out, "  {}", record.url);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{div}");
    let _ = writeln!(out, "ERRORS");
    let _ = writeln!(out, "{div}");
    if report.errors.is_empty() {
        let _ = writeln!(out, "None.");
    }
    for error in &report.errors {
        let _ = writeln!(out, "  {}: {}", error.url, error.error);
    }
    let _ = writeln!(out, "{div}");

    out
}

fn render_issue(out: &mut String, record: &AuditRecord) {
    let _ = writeln!(out);
    let _ = writeln!(out, "URL: {}", record.url);
    let _ = writeln!(
        out,
        "  Classification: {}",
        record.classification.classification.label()
    );
    let _ = writeln!(out, "  Reason: {}", record.classification.reason);
    let _ = writeln!(out, "  Redirects: {}", record.redirect_count);
    let _ = writeln!(out, "  Final URL: {}", record.final_url);
    if let Some(impact) = &record.classification.seo_impact {
        let _ = writeln!(out, "  SEO impact: {impact}");
    }
    if let Some(action) = &record.classification.action_required {
        let _ = writeln!(out, "  Action required: {action}");
    }
    let _ = writeln!(
        out,
        "  Likely source: {:?} ({})",
        record.source_attribution.source, record.source_attribution.fix_location
    );
    for fix in &record.fix_recommendation {
        let _ = writeln!(out, "  Fix [{:?}]: {}", fix.risk, fix.description);
    }
}

/// Writes the JSON and text report files into `output_dir`.
///
/// Filenames are timestamped (`<prefix>-<YYYYmmdd-HHMMSS>.json/.txt`) so
/// successive runs never clobber each other. Returns both paths.
///
/// # Errors
///
/// Returns an error if either file cannot be written.
pub fn write_report_files(
    report: &AuditReport,
    output_dir: &Path,
    prefix: &str,
) -> Result<(PathBuf, PathBuf)> {
    let stamp = report.timestamp.format("%Y%m%d-%H%M%S");
    let json_path = output_dir.join(format!("{prefix}-{stamp}.json"));
    let text_path = output_dir.join(format!("{prefix}-{stamp}.txt"));

    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("Failed to write JSON report: {}", json_path.display()))?;

    std::fs::write(&text_path, render_text(report))
        .with_context(|| format!("Failed to write text report: {}", text_path.display()))?;

    info!(
        "Reports written: {} and {}",
        json_path.display(),
        text_path.display()
    );
    Ok((json_path, text_path))
}

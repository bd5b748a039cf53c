//! Audit report accumulation.
//!
//! The report is an explicit value created per run and threaded through the
//! driver, never a process-wide singleton. It is mutated by appending as
//! each URL completes and treated as read-only once the run finishes.

mod render;

pub use render::{render_text, write_report_files};

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::advice::FixAction;
use crate::attribution::SourceAttribution;
use crate::chain::{ChainResult, FinalStatus};
use crate::classify::{Classification, Verdict};

/// One hop of a chain as stored in the report (summarized).
#[derive(Debug, Clone, Serialize)]
pub struct ChainHop {
    /// URL requested at this hop
    pub url: String,
    /// Response status code
    pub status: u16,
    /// Redirect target, if this hop redirected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The per-URL audit aggregate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    /// Origin URL
    pub url: String,
    /// Final URL after following the chain
    pub final_url: String,
    /// Terminal state of the walk
    pub final_status: FinalStatus,
    /// Number of redirect hops followed
    pub redirect_count: usize,
    /// Summarized chain hops in traversal order
    pub chain: Vec<ChainHop>,
    /// Classification verdict
    pub classification: Verdict,
    /// Likely source of the redirect
    pub source_attribution: SourceAttribution,
    /// Proposed remediation actions
    pub fix_recommendation: Vec<FixAction>,
    /// When this URL was audited
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    /// Builds a record from the walk result and derived analyses.
    pub fn new(
        result: &ChainResult,
        verdict: Verdict,
        source: SourceAttribution,
        fixes: Vec<FixAction>,
    ) -> Self {
        let chain = result
            .chain
            .iter()
            .map(|step| ChainHop {
                url: step.url.clone(),
                status: step.status_code,
                location: step.location.clone(),
            })
            .collect();
        Self {
            url: result.url.clone(),
            final_url: result.final_url.clone(),
            final_status: result.final_status.clone(),
            redirect_count: result.redirect_count,
            chain,
            classification: verdict,
            source_attribution: source,
            fix_recommendation: fixes,
            timestamp: Utc::now(),
        }
    }
}

/// An unexpected failure while auditing one URL.
#[derive(Debug, Clone, Serialize)]
pub struct ReportError {
    /// The URL that failed
    pub url: String,
    /// What went wrong
    pub error: String,
}

/// Run-level audit report.
///
/// Created once per audit invocation; finalized (read-only) once all URLs
/// are processed or the run is cancelled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// When the run started
    pub timestamp: DateTime<Utc>,
    /// Domain the audited URLs belong to
    pub domain: String,
    /// Number of URLs the run attempted
    pub total_urls: usize,
    /// URLs that resolved directly with no redirection
    pub clean_urls: Vec<AuditRecord>,
    /// URLs with a redirect or accessibility issue
    pub redirect_issues: Vec<AuditRecord>,
    /// Per-URL failures that could not produce a record
    pub errors: Vec<ReportError>,
}

impl AuditReport {
    /// Creates an empty report for a domain.
    pub fn new(domain: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            domain: domain.to_string(),
            total_urls: 0,
            clean_urls: Vec::new(),
            redirect_issues: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Appends a completed record to the appropriate bucket.
    pub fn append(&mut self, record: AuditRecord) {
        self.total_urls += 1;
        if record.classification.classification == Classification::Clean {
            self.clean_urls.push(record);
        } else {
            self.redirect_issues.push(record);
        }
    }

    /// Records a per-URL failure; the run continues past it.
    pub fn append_error(&mut self, url: &str, error: &str) {
        self.total_urls += 1;
        self.errors.push(ReportError {
            url: url.to_string(),
            error: error.to_string(),
        });
    }

    /// Per-classification counts across both buckets, one entry per
    /// variant including zero counts.
    pub fn classification_tallies(&self) -> Vec<(Classification, usize)> {
        Classification::iter()
            .map(|classification| {
                let count = self
                    .clean_urls
                    .iter()
                    .chain(self.redirect_issues.iter())
                    .filter(|record| record.classification.classification == classification)
                    .count();
                (classification, count)
            })
            .collect()
    }

    /// Number of issues with a HIGH or CRITICAL SEO impact.
    pub fn high_priority_count(&self) -> usize {
        self.redirect_issues
            .iter()
            .filter(|record| {
                record
                    .classification
                    .seo_impact
                    .as_deref()
                    .is_some_and(|impact| impact.contains("HIGH") || impact.contains("CRITICAL"))
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::{RedirectSource, SourceAttribution};
    use crate::classify::{Intentionality, Verdict};

    fn record_with(classification: Classification, seo_impact: Option<&str>) -> AuditRecord {
        AuditRecord {
            url: "https://example.com/a".to_string(),
            final_url: "https://example.com/a".to_string(),
            final_status: FinalStatus::Status(200),
            redirect_count: 0,
            chain: vec![],
            classification: Verdict {
                classification,
                reason: "test".to_string(),
                intentional: Intentionality::Unknown,
                seo_impact: seo_impact.map(|s| s.to_string()),
                action_required: None,
            },
            source_attribution: SourceAttribution {
                source: RedirectSource::Unknown,
                config_file: None,
                fix_location: "Unknown".to_string(),
            },
            fix_recommendation: vec![],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_append_routes_clean_and_issues() {
        let mut report = AuditReport::new("example.com");
        report.append(record_with(Classification::Clean, None));
        report.append(record_with(Classification::IntentionalPermanent, None));
        assert_eq!(report.total_urls, 2);
        assert_eq!(report.clean_urls.len(), 1);
        assert_eq!(report.redirect_issues.len(), 1);
    }

    #[test]
    fn test_append_error_counts_toward_total() {
        let mut report = AuditReport::new("example.com");
        report.append_error("https://example.com/x", "connection refused");
        assert_eq!(report.total_urls, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.clean_urls.is_empty());
    }

    #[test]
    fn test_classification_tallies_cover_every_variant() {
        let mut report = AuditReport::new("example.com");
        report.append(record_with(Classification::Clean, None));
        report.append(record_with(Classification::Error, Some("CRITICAL - down")));
        let tallies = report.classification_tallies();
        assert_eq!(tallies.len(), 7);
        let clean = tallies
            .iter()
            .find(|(c, _)| *c == Classification::Clean)
            .unwrap();
        assert_eq!(clean.1, 1);
    }

    #[test]
    fn test_high_priority_count() {
        let mut report = AuditReport::new("example.com");
        report.append(record_with(
            Classification::UnintentionalClientSide,
            Some("HIGH - Google may not follow"),
        ));
        report.append(record_with(Classification::IntentionalTemporary, None));
        assert_eq!(report.high_priority_count(), 1);
    }

    #[test]
    fn test_report_json_field_names() {
        let report = AuditReport::new("example.com");
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("totalUrls").is_some());
        assert!(value.get("cleanUrls").is_some());
        assert!(value.get("redirectIssues").is_some());
        assert!(value.get("errors").is_some());
        assert_eq!(value["domain"], "example.com");
    }
}

//! Fix recommendations.
//!
//! Pure mapping from a classification verdict (plus source attribution) to
//! a list of proposed remediation actions. Exhaustive over
//! [`Classification`] so adding a variant forces a decision here.

use serde::Serialize;

use crate::attribution::{RedirectSource, SourceAttribution};
use crate::classify::{Classification, Verdict};

/// Risk level of applying a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Risk {
    /// No change needed
    None,
    /// Safe, routine change
    Low,
    /// Needs review before applying
    Medium,
    /// Potentially breaking change
    High,
}

/// Kind of remediation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixKind {
    /// Nothing to do
    NoAction,
    /// Point the sitemap at the final URL
    UpdateSitemap,
    /// Point the canonical tag at the final URL
    UpdateCanonical,
    /// Re-evaluate whether the temporary redirect should be permanent
    ReviewTemporaryRedirect,
    /// Remove a meta-refresh/JS redirect from page content
    RemoveClientSideRedirect,
    /// Add a server-side 301 in its place
    AddServerRedirect,
    /// Drop an unreachable URL from the sitemap
    RemoveFromSitemap,
    /// Fix or restore a broken page
    RestorePage,
    /// Generic configuration review
    ReviewConfiguration,
}

/// One proposed remediation action.
#[derive(Debug, Clone, Serialize)]
pub struct FixAction {
    /// What to do
    pub action: FixKind,
    /// Human-readable description
    pub description: String,
    /// Risk of applying the fix
    pub risk: Risk,
    /// File to edit, when the attribution pinpoints one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Example snippet, when one helps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Derives remediation actions from a verdict and its source attribution.
pub fn recommend_fixes(verdict: &Verdict, attribution: &SourceAttribution) -> Vec<FixAction> {
    match verdict.classification {
        Classification::Clean => vec![FixAction {
            action: FixKind::NoAction,
            description: "URL resolves directly; no fix needed".to_string(),
            risk: Risk::None,
            file: None,
            example: None,
        }],
        Classification::IntentionalPermanent => vec![
            FixAction {
                action: FixKind::UpdateSitemap,
                description: "Update the sitemap entry to point at the final URL".to_string(),
                risk: Risk::Low,
                file: None,
                example: None,
            },
            FixAction {
                action: FixKind::UpdateCanonical,
                description: "Ensure the canonical tag points at the final URL".to_string(),
                risk: Risk::Low,
                file: None,
                example: None,
            },
        ],
        Classification::IntentionalTemporary => vec![FixAction {
            action: FixKind::ReviewTemporaryRedirect,
            description:
                "Review whether a permanent (301) redirect is more appropriate than 302/307"
                    .to_string(),
            risk: Risk::Medium,
            file: None,
            example: None,
        }],
        Classification::UnintentionalClientSide => vec![
            FixAction {
                action: FixKind::RemoveClientSideRedirect,
                description: format!(
                    "Remove the client-side redirect; search: {}",
                    attribution.fix_location
                ),
                risk: Risk::Medium,
                file: attribution.config_file.clone(),
                example: None,
            },
            FixAction {
                action: FixKind::AddServerRedirect,
                description: "Replace it with a server-side 301 redirect".to_string(),
                risk: Risk::High,
                file: platform_config_file(attribution),
                example: Some(
                    r#"{ "redirects": [{ "source": "/old-path", "destination": "/new-path", "permanent": true }] }"#
                        .to_string(),
                ),
            },
        ],
        Classification::Error => vec![
            FixAction {
                action: FixKind::RemoveFromSitemap,
                description: "Remove the unreachable URL from the sitemap".to_string(),
                risk: Risk::High,
                file: None,
                example: None,
            },
            FixAction {
                action: FixKind::RestorePage,
                description: "Fix or restore the broken page if it should still exist".to_string(),
                risk: Risk::High,
                file: None,
                example: None,
            },
        ],
        Classification::RedirectOther | Classification::Unknown => vec![FixAction {
            action: FixKind::ReviewConfiguration,
            description: "Review the redirect configuration for this URL".to_string(),
            risk: Risk::Medium,
            file: platform_config_file(attribution),
            example: None,
        }],
    }
}

fn platform_config_file(attribution: &SourceAttribution) -> Option<String> {
    match attribution.source {
        RedirectSource::PlatformEdge => attribution.config_file.clone(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Intentionality, Verdict};
    use strum::IntoEnumIterator;

    fn verdict_of(classification: Classification) -> Verdict {
        Verdict {
            classification,
            reason: String::new(),
            intentional: Intentionality::Unknown,
            seo_impact: None,
            action_required: None,
        }
    }

    fn unknown_attribution() -> SourceAttribution {
        SourceAttribution {
            source: RedirectSource::Unknown,
            config_file: None,
            fix_location: "Unknown".to_string(),
        }
    }

    #[test]
    fn test_clean_has_single_no_risk_action() {
        let fixes = recommend_fixes(&verdict_of(Classification::Clean), &unknown_attribution());
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].action, FixKind::NoAction);
        assert_eq!(fixes[0].risk, Risk::None);
    }

    #[test]
    fn test_permanent_redirect_gets_two_low_risk_fixes() {
        let fixes = recommend_fixes(
            &verdict_of(Classification::IntentionalPermanent),
            &unknown_attribution(),
        );
        assert_eq!(fixes.len(), 2);
        assert!(fixes.iter().all(|f| f.risk == Risk::Low));
        assert_eq!(fixes[0].action, FixKind::UpdateSitemap);
        assert_eq!(fixes[1].action, FixKind::UpdateCanonical);
    }

    #[test]
    fn test_temporary_redirect_gets_medium_risk_review() {
        let fixes = recommend_fixes(
            &verdict_of(Classification::IntentionalTemporary),
            &unknown_attribution(),
        );
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].risk, Risk::Medium);
    }

    #[test]
    fn test_client_side_redirect_carries_platform_file_and_example() {
        let attribution = SourceAttribution {
            source: RedirectSource::PlatformEdge,
            config_file: Some("vercel.json".to_string()),
            fix_location: "Vercel edge configuration".to_string(),
        };
        let fixes = recommend_fixes(
            &verdict_of(Classification::UnintentionalClientSide),
            &attribution,
        );
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[1].action, FixKind::AddServerRedirect);
        assert_eq!(fixes[1].file.as_deref(), Some("vercel.json"));
        assert!(fixes[1].example.as_deref().unwrap().contains("redirects"));
    }

    #[test]
    fn test_error_fixes_are_high_risk() {
        let fixes = recommend_fixes(&verdict_of(Classification::Error), &unknown_attribution());
        assert_eq!(fixes.len(), 2);
        assert!(fixes.iter().all(|f| f.risk == Risk::High));
    }

    #[test]
    fn test_every_classification_yields_at_least_one_fix() {
        for classification in Classification::iter() {
            let fixes = recommend_fixes(&verdict_of(classification), &unknown_attribution());
            assert!(!fixes.is_empty(), "{classification:?} produced no fixes");
        }
    }
}

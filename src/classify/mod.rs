//! Redirect chain classification.
//!
//! Maps a completed chain walk to exactly one [`Classification`] using an
//! ordered rule list. The ordering is policy, not accident:
//! permanent/temporary redirect detection takes priority over generic 3xx
//! handling, and CLEAN is only assigned when there is zero redirection.
//! Classification is total: every chain state maps to some variant, falling
//! through to `Unknown` rather than failing.

use serde::Serialize;
use strum_macros::EnumIter;

use crate::chain::{ChainResult, RedirectStep};

/// SEO classification of a redirect chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Direct 200 response, no redirection
    Clean,
    /// 301 permanent redirect
    IntentionalPermanent,
    /// 302/307 temporary redirect
    IntentionalTemporary,
    /// Meta-refresh or JavaScript redirect invisible to the HTTP layer
    UnintentionalClientSide,
    /// 4xx/5xx first response
    Error,
    /// Other 3xx response (303, 308, ...)
    RedirectOther,
    /// Nothing else matched (including an empty chain)
    Unknown,
}

impl Classification {
    /// Stable report label for this classification.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Clean => "CLEAN",
            Classification::IntentionalPermanent => "INTENTIONAL_PERMANENT",
            Classification::IntentionalTemporary => "INTENTIONAL_TEMPORARY",
            Classification::UnintentionalClientSide => "UNINTENTIONAL_CLIENT_SIDE",
            Classification::Error => "ERROR",
            Classification::RedirectOther => "REDIRECT_OTHER",
            Classification::Unknown => "UNKNOWN",
        }
    }
}

/// Whether a redirect looks deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intentionality {
    /// Deliberately configured
    Yes,
    /// Not configured on purpose
    No,
    /// Cannot tell from the response alone
    Unknown,
}

/// Full classification verdict for one chain.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// The classification tag
    pub classification: Classification,
    /// Human-readable explanation
    pub reason: String,
    /// Whether the redirect looks deliberate
    pub intentional: Intentionality,
    /// SEO impact severity, when the classification implies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_impact: Option<String>,
    /// Remediation hint, when one is warranted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,
}

/// URL-normalization patterns that fully explain a 301.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Normalization {
    WwwToggle,
    HttpsUpgrade,
    TrailingSlash,
}

impl Normalization {
    fn describe(&self) -> &'static str {
        match self {
            Normalization::WwwToggle => "www prefix",
            Normalization::HttpsUpgrade => "http to https",
            Normalization::TrailingSlash => "trailing slash",
        }
    }
}

/// Classifies a walked chain.
///
/// `client_side_detected` feeds findings from the static HTML/JS scanner
/// into the same rule list: live HEAD walking can never observe a
/// client-side redirect (a 200 terminates the chain immediately), so the
/// static scanner sets this flag instead of using a separate classifier.
pub fn classify(result: &ChainResult, client_side_detected: bool) -> Verdict {
    let Some(first) = result.first_step() else {
        // Rule 1: nothing was received at all
        return Verdict {
            classification: Classification::Unknown,
            reason: "No response data".to_string(),
            intentional: Intentionality::Unknown,
            seo_impact: None,
            action_required: None,
        };
    };

    let status = first.status_code;

    // Rule 2: direct 200, no redirection of any kind
    if status == 200 && result.redirect_count == 0 && !client_side_detected {
        return Verdict {
            classification: Classification::Clean,
            reason: "Direct 200 response".to_string(),
            intentional: Intentionality::Yes,
            seo_impact: None,
            action_required: None,
        };
    }

    // Rule 3: permanent redirect, sub-classified by URL normalization
    if status == 301 {
        return match detect_normalization(first) {
            Some(normalization) => Verdict {
                classification: Classification::IntentionalPermanent,
                reason: format!("URL normalization ({})", normalization.describe()),
                intentional: Intentionality::Yes,
                seo_impact: None,
                action_required: None,
            },
            None => Verdict {
                classification: Classification::IntentionalPermanent,
                reason: "301 redirect to different resource".to_string(),
                intentional: Intentionality::Yes,
                seo_impact: None,
                action_required: Some("Update sitemap and internal links".to_string()),
            },
        };
    }

    // Rule 4: temporary redirect
    if status == 302 || status == 307 {
        return Verdict {
            classification: Classification::IntentionalTemporary,
            reason: format!("{status} temporary redirect"),
            intentional: Intentionality::Yes,
            seo_impact: Some("May not pass PageRank".to_string()),
            action_required: Some("Verify if temporary redirect is still needed".to_string()),
        };
    }

    // Rule 5: the HTTP layer shows 200 but redirection happened anyway,
    // either further down the chain or detected in page content
    if status == 200 && (result.redirect_count > 0 || client_side_detected) {
        return Verdict {
            classification: Classification::UnintentionalClientSide,
            reason: "Client-side redirect (meta refresh or JavaScript)".to_string(),
            intentional: Intentionality::No,
            seo_impact: Some("HIGH - Google may not follow, indexing blocked".to_string()),
            action_required: Some("Replace with server-side 301 redirect".to_string()),
        };
    }

    // Rule 6: broken page
    if status >= 400 {
        return Verdict {
            classification: Classification::Error,
            reason: format!("HTTP {status} response"),
            intentional: Intentionality::No,
            seo_impact: Some("CRITICAL - Page not accessible".to_string()),
            action_required: Some("Fix broken page or remove from sitemap".to_string()),
        };
    }

    // Rule 7: remaining 3xx (303, 308, 300, ...)
    if (300..400).contains(&status) {
        return Verdict {
            classification: Classification::RedirectOther,
            reason: format!("{status} redirect"),
            intentional: Intentionality::Unknown,
            seo_impact: None,
            action_required: Some("Review redirect configuration".to_string()),
        };
    }

    // Rule 8: fall through rather than fail
    Verdict {
        classification: Classification::Unknown,
        reason: format!("Unhandled response status {status}"),
        intentional: Intentionality::Unknown,
        seo_impact: None,
        action_required: None,
    }
}

/// Checks whether toggling `www.`, switching to https, or adding/removing a
/// trailing slash fully explains the difference between a step's URL and
/// its redirect target.
fn detect_normalization(step: &RedirectStep) -> Option<Normalization> {
    let location = step.location.as_deref()?;
    let from = url::Url::parse(&step.url).ok()?;
    let to = url::Url::parse(location).ok()?;

    let from_host = from.host_str().unwrap_or("");
    let to_host = to.host_str().unwrap_or("");
    let hosts_match_modulo_www = from_host == to_host
        || from_host.strip_prefix("www.") == Some(to_host)
        || to_host.strip_prefix("www.") == Some(from_host);

    if !hosts_match_modulo_www {
        return None;
    }

    let paths_match = from.path() == to.path()
        && from.query() == to.query();
    let paths_match_modulo_slash = from.path().trim_end_matches('/') == to.path().trim_end_matches('/')
        && from.query() == to.query();

    if from.scheme() == "http" && to.scheme() == "https" && paths_match_modulo_slash {
        return Some(Normalization::HttpsUpgrade);
    }
    if from.scheme() != to.scheme() {
        return None;
    }
    if from_host != to_host && paths_match_modulo_slash {
        return Some(Normalization::WwwToggle);
    }
    if from_host == to_host && !paths_match && paths_match_modulo_slash {
        return Some(Normalization::TrailingSlash);
    }

    None
}

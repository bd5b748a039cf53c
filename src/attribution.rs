//! Redirect source attribution.
//!
//! Best-effort heuristic guessing *where* a redirect is configured, based on
//! response headers and status codes. Advisory only: callers (and tests)
//! must not treat the attribution as authoritative.

use serde::Serialize;

use crate::chain::ChainResult;
use crate::classify::{Classification, Verdict};
use crate::config::ATTRIBUTION_HEADERS;

/// Likely layer where a redirect is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectSource {
    /// Edge/CDN platform (Vercel, Cloudflare, CloudFront, Fastly)
    PlatformEdge,
    /// Meta refresh or JavaScript in page content
    ClientSide,
    /// Origin server configuration
    ServerConfiguration,
    /// No attribution possible
    Unknown,
}

/// Attribution of a redirect to the layer that likely configured it.
#[derive(Debug, Clone, Serialize)]
pub struct SourceAttribution {
    /// Likely configuration layer
    pub source: RedirectSource,
    /// Configuration file to look at, when one is implied by the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    /// Human-readable hint for where to apply a fix
    pub fix_location: String,
}

/// Known edge-platform markers looked for in attribution headers.
const EDGE_PLATFORM_MARKERS: &[(&str, &str, &str)] = &[
    ("vercel", "Vercel", "vercel.json"),
    ("cloudflare", "Cloudflare", "Cloudflare dashboard rules"),
    ("cloudfront", "CloudFront", "CloudFront distribution behaviors"),
    ("fastly", "Fastly", "Fastly VCL configuration"),
];

/// Attributes a redirect to its likely source.
///
/// Checks the first hop's headers for edge-platform markers; failing that,
/// falls back on the status code and the classification verdict.
pub fn attribute_source(result: &ChainResult, verdict: &Verdict) -> SourceAttribution {
    if let Some(first) = result.first_step() {
        for header_name in ATTRIBUTION_HEADERS {
            let Some(value) = first.headers.get(*header_name) else {
                continue;
            };
            let value_lower = value.to_lowercase();
            for (marker, platform, config_file) in EDGE_PLATFORM_MARKERS {
                if value_lower.contains(marker) || is_platform_header(header_name, marker) {
                    return SourceAttribution {
                        source: RedirectSource::PlatformEdge,
                        config_file: Some((*config_file).to_string()),
                        fix_location: format!("{platform} edge configuration"),
                    };
                }
            }
        }

        let status = first.status_code;
        if status == 200 && verdict.classification == Classification::UnintentionalClientSide {
            return SourceAttribution {
                source: RedirectSource::ClientSide,
                config_file: None,
                fix_location: "Page HTML/JavaScript (meta refresh or location assignment)"
                    .to_string(),
            };
        }
        if (300..400).contains(&status) {
            return SourceAttribution {
                source: RedirectSource::ServerConfiguration,
                config_file: None,
                fix_location: "Server or hosting-platform redirect rules".to_string(),
            };
        }
    }

    SourceAttribution {
        source: RedirectSource::Unknown,
        config_file: None,
        fix_location: "Unknown".to_string(),
    }
}

/// A platform-specific request-id header implies the platform even when the
/// header value itself carries no marker text.
fn is_platform_header(header_name: &str, marker: &str) -> bool {
    match marker {
        "vercel" => header_name == crate::config::HEADER_X_VERCEL_ID,
        "cloudflare" => header_name == crate::config::HEADER_CF_RAY,
        "cloudfront" => header_name == crate::config::HEADER_X_AMZ_CF_ID,
        _ => false,
    }
}

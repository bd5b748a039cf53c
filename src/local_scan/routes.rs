//! Routing/redirect configuration scanning.
//!
//! Parses a vercel-style route configuration and flags explicit redirect
//! rules and catch-all routes as potential issues, using the same severity
//! vocabulary as the live crawler.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Finding, FindingCategory, Priority};

/// Vercel-style deployment configuration (only the routing parts).
#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    /// Legacy `routes` rules
    #[serde(default)]
    pub routes: Vec<RouteRule>,
    /// Declarative `redirects` rules
    #[serde(default)]
    pub redirects: Vec<RedirectRule>,
}

/// One entry of the legacy `routes` array.
#[derive(Debug, Deserialize)]
pub struct RouteRule {
    /// Source pattern
    pub src: Option<String>,
    /// Destination path
    pub dest: Option<String>,
    /// Explicit response status (3xx makes the route a redirect)
    pub status: Option<u16>,
}

/// One entry of the `redirects` array.
#[derive(Debug, Deserialize)]
pub struct RedirectRule {
    /// Source pattern
    pub source: String,
    /// Redirect target
    pub destination: String,
    /// Whether the redirect is permanent (308/301 family)
    #[serde(default)]
    pub permanent: bool,
}

/// Patterns that match every path.
const CATCH_ALL_PATTERNS: &[&str] = &["/(.*)", "/(.*)/", "(.*)", "/.*", "^/(.*)$"];

/// Scans a route configuration file for redirect rules and catch-alls.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn scan_route_config(path: &Path) -> Result<Vec<Finding>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route config: {}", path.display()))?;
    let config: RouteConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse route config: {}", path.display()))?;
    Ok(findings_for(&config, &path.display().to_string()))
}

fn findings_for(config: &RouteConfig, file: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for route in &config.routes {
        let src = route.src.as_deref().unwrap_or("");
        if let Some(status) = route.status {
            if (300..400).contains(&status) {
                findings.push(Finding {
                    file: file.to_string(),
                    category: FindingCategory::ExplicitRedirectRoute,
                    detail: format!(
                        "Route {src:?} redirects with status {status} to {:?}",
                        route.dest.as_deref().unwrap_or("<none>")
                    ),
                    priority: Priority::Medium,
                });
            }
        }
        if CATCH_ALL_PATTERNS.contains(&src) {
            findings.push(Finding {
                file: file.to_string(),
                category: FindingCategory::CatchAllRoute,
                detail: format!(
                    "Catch-all route {src:?}; verify invalid URLs return 404 rather than 200"
                ),
                priority: Priority::Low,
            });
        }
    }

    for redirect in &config.redirects {
        findings.push(Finding {
            file: file.to_string(),
            category: FindingCategory::ExplicitRedirectRoute,
            detail: format!(
                "Declared {} redirect {:?} -> {:?}",
                if redirect.permanent {
                    "permanent"
                } else {
                    "temporary"
                },
                redirect.source,
                redirect.destination
            ),
            priority: if redirect.permanent {
                Priority::Low
            } else {
                Priority::Medium
            },
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_flags_redirect_routes_and_catch_alls() {
        let config: RouteConfig = serde_json::from_str(
            r#"{
                "routes": [
                    { "src": "/old", "dest": "/new", "status": 301 },
                    { "src": "/(.*)", "dest": "/index.html" }
                ],
                "redirects": [
                    { "source": "/a", "destination": "/b", "permanent": true },
                    { "source": "/c", "destination": "/d" }
                ]
            }"#,
        )
        .unwrap();
        let findings = findings_for(&config, "vercel.json");
        assert_eq!(findings.len(), 4);
        assert_eq!(findings[0].category, FindingCategory::ExplicitRedirectRoute);
        assert_eq!(findings[0].priority, Priority::Medium);
        assert_eq!(findings[1].category, FindingCategory::CatchAllRoute);
        assert_eq!(findings[1].priority, Priority::Low);
        assert_eq!(findings[2].priority, Priority::Low);
        assert_eq!(findings[3].priority, Priority::Medium);
    }

    #[test]
    fn test_scan_accepts_config_without_routes() {
        let config: RouteConfig =
            serde_json::from_str(r#"{ "buildCommand": "npm run build" }"#).unwrap();
        assert!(findings_for(&config, "vercel.json").is_empty());
    }
}

//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::AuditConfig;

/// Initializes the HTTP client used for chain walking.
///
/// Creates a `reqwest::Client` with redirects disabled so the walker can
/// manually track the redirect chain, capturing every intermediate hop
/// rather than only the final response.
///
/// The per-request timeout from `config.timeout_ms` bounds each hop; a hop
/// exceeding it is aborted and surfaces as a TIMEOUT chain sub-state.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_audit_client(config: &AuditConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_audit_client_builds() {
        let config = AuditConfig::default();
        let client = init_audit_client(&config);
        assert!(client.is_ok());
    }
}

//! End-to-end tests for the audit orchestrator.
//!
//! Exercise the full pipeline (sitemap -> walk -> classify -> attribute ->
//! advise -> report) against a mock HTTP server.

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use redirect_audit::classify::Classification;
use redirect_audit::{run_audit, run_sitemap_audit, write_report_files, AuditConfig};

fn fast_config() -> AuditConfig {
    AuditConfig {
        delay_ms: 10,
        timeout_ms: 5_000,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_two_url_audit_buckets_clean_and_issue() {
    let server = Server::run();
    let b2 = format!("http://{}/b2", server.addr());
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/a")).respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/b"))
            .respond_with(status_code(301).append_header("Location", b2.as_str())),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/b2")).respond_with(status_code(200)),
    );

    let urls = vec![
        format!("http://{}/a", server.addr()),
        format!("http://{}/b", server.addr()),
    ];
    let report = run_audit(&fast_config(), "x", &urls, CancellationToken::new())
        .await
        .expect("audit completes");

    assert_eq!(report.total_urls, 2);
    assert_eq!(report.clean_urls.len(), 1);
    assert_eq!(report.redirect_issues.len(), 1);
    assert!(report.errors.is_empty());

    let issue = &report.redirect_issues[0];
    assert_eq!(
        issue.classification.classification,
        Classification::IntentionalPermanent
    );
    assert_eq!(issue.final_url, b2);
    assert_eq!(issue.redirect_count, 1);
    // Permanent redirects come with the two low-risk fixes
    assert_eq!(issue.fix_recommendation.len(), 2);
}

#[tokio::test]
async fn test_one_bad_url_does_not_abort_the_batch() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/first"))
            .respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/third"))
            .respond_with(status_code(200)),
    );

    let urls = vec![
        format!("http://{}/first", server.addr()),
        // Nothing listens on port 1; this URL fails at the connection level
        "http://127.0.0.1:1/second".to_string(),
        format!("http://{}/third", server.addr()),
    ];
    let report = run_audit(&fast_config(), "x", &urls, CancellationToken::new())
        .await
        .expect("audit completes");

    // Processing reached the 3rd URL despite the 2nd failing
    assert_eq!(report.total_urls, 3);
    assert_eq!(report.clean_urls.len(), 2);
    assert_eq!(report.redirect_issues.len(), 0);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].url.contains("/second"));
}

#[tokio::test]
async fn test_cancellation_stops_before_next_url() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    // With a pre-cancelled token nothing is attempted, so no server needed
    let urls = vec!["http://127.0.0.1:1/never".to_string()];
    let report = run_audit(&fast_config(), "x", &urls, cancel)
        .await
        .expect("audit completes");

    assert_eq!(report.total_urls, 0);
    assert!(report.errors.is_empty());
}

#[tokio::test]
async fn test_sitemap_audit_end_to_end_with_report_files() {
    let server = Server::run();
    let page_a = format!("http://{}/a", server.addr());
    let page_b = format!("http://{}/b", server.addr());
    let sitemap = format!(
        "<urlset><url><loc>{page_a}</loc></url><url><loc>{page_b}</loc></url></urlset>"
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap.xml"))
            .respond_with(status_code(200).body(sitemap)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/a")).respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/b")).respond_with(status_code(404)),
    );

    let sitemap_url = format!("http://{}/sitemap.xml", server.addr());
    let report = run_sitemap_audit(&fast_config(), &sitemap_url, CancellationToken::new())
        .await
        .expect("audit completes");

    assert_eq!(report.total_urls, 2);
    assert_eq!(report.clean_urls.len(), 1);
    assert_eq!(report.redirect_issues.len(), 1);
    assert_eq!(
        report.redirect_issues[0].classification.classification,
        Classification::Error
    );
    // The broken page counts as high priority (CRITICAL impact)
    assert_eq!(report.high_priority_count(), 1);

    let dir = TempDir::new().unwrap();
    let (json_path, text_path) =
        write_report_files(&report, dir.path(), "redirect-audit").unwrap();
    assert!(json_path.exists());
    assert!(text_path.exists());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["totalUrls"], 2);
    assert_eq!(json["cleanUrls"].as_array().unwrap().len(), 1);
    assert_eq!(
        json["redirectIssues"][0]["classification"]["classification"],
        "ERROR"
    );

    let text = std::fs::read_to_string(&text_path).unwrap();
    assert!(text.contains("REDIRECT ISSUES FOUND"));
    assert!(text.contains("CLEAN URLs"));
}

#[tokio::test]
async fn test_sitemap_fetch_failure_propagates() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap.xml"))
            .respond_with(status_code(500)),
    );

    let sitemap_url = format!("http://{}/sitemap.xml", server.addr());
    let result = run_sitemap_audit(&fast_config(), &sitemap_url, CancellationToken::new()).await;
    assert!(result.is_err());
}

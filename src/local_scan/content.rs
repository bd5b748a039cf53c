//! Static page-content scanning.
//!
//! Detects redirects that are invisible to HTTP-layer chain following:
//! meta-refresh tags in HTML and unconditional location assignments in
//! JavaScript. Also checks the on-disk sitemap for non-HTTPS entries.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{Html, Selector};

use crate::config::MAX_SCAN_FILE_SIZE;
use crate::sitemap::extract_loc_urls;

use super::{Finding, FindingCategory, Priority};

static JS_REDIRECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:window\.)?location\.(?:href\s*=|replace\s*\()"#)
        .expect("valid js redirect regex")
});

/// Scans an HTML document for meta-refresh redirects.
pub fn scan_html(content: &str, file: &str) -> Vec<Finding> {
    let document = Html::parse_document(content);
    let Ok(selector) = Selector::parse("meta[http-equiv]") else {
        return Vec::new();
    };

    let mut findings = Vec::new();
    for element in document.select(&selector) {
        let http_equiv = element.value().attr("http-equiv").unwrap_or("");
        if !http_equiv.eq_ignore_ascii_case("refresh") {
            continue;
        }
        let content_attr = element.value().attr("content").unwrap_or("");
        findings.push(Finding {
            file: file.to_string(),
            category: FindingCategory::MetaRefresh,
            detail: format!("Meta refresh tag (content={content_attr:?})"),
            priority: Priority::High,
        });
    }
    findings
}

/// Scans JavaScript source for unconditional top-level redirects.
///
/// Heuristic: a `location.href =` or `location.replace(` at statement
/// position. Conditional redirects inside handlers produce the same match,
/// so findings are advisory.
pub fn scan_js(content: &str, file: &str) -> Vec<Finding> {
    JS_REDIRECT_RE
        .find_iter(content)
        .map(|m| Finding {
            file: file.to_string(),
            category: FindingCategory::JsRedirect,
            detail: format!("JavaScript redirect: {}", m.as_str().trim()),
            priority: Priority::Medium,
        })
        .collect()
}

/// Checks an on-disk sitemap for entries that are not HTTPS.
pub fn scan_sitemap(content: &str, file: &str) -> Vec<Finding> {
    extract_loc_urls(content)
        .into_iter()
        .filter(|url| !url.starts_with("https://"))
        .map(|url| Finding {
            file: file.to_string(),
            category: FindingCategory::InsecureSitemapEntry,
            detail: format!("Sitemap entry is not HTTPS: {url}"),
            priority: Priority::Medium,
        })
        .collect()
}

/// Collects scannable files (by extension) under a directory.
///
/// Skips hidden directories, `node_modules`, and files over the scan size
/// limit.
pub fn collect_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_into(root, extension, &mut files);
    files.sort();
    files
}

fn collect_into(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        debug!("Skipping unreadable directory: {}", dir.display());
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if path.is_dir() {
            if name.starts_with('.') || name == "node_modules" || name == "target" {
                continue;
            }
            collect_into(&path, extension, files);
        } else if path.extension().is_some_and(|e| e == extension) {
            let size_ok = entry
                .metadata()
                .map(|m| m.len() <= MAX_SCAN_FILE_SIZE)
                .unwrap_or(false);
            if size_ok {
                files.push(path);
            } else {
                debug!("Skipping oversized file: {}", path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_html_finds_meta_refresh() {
        let html = r#"<html><head>
            <meta charset="utf-8">
            <meta http-equiv="Refresh" content="0; url=https://example.com/new">
        </head><body></body></html>"#;
        let findings = scan_html(html, "index.html");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FindingCategory::MetaRefresh);
        assert_eq!(findings[0].priority, Priority::High);
        assert!(findings[0].detail.contains("example.com/new"));
    }

    #[test]
    fn test_scan_html_ignores_other_meta_tags() {
        let html = r#"<html><head>
            <meta http-equiv="content-type" content="text/html">
            <meta name="description" content="hello">
        </head></html>"#;
        assert!(scan_html(html, "index.html").is_empty());
    }

    #[test]
    fn test_scan_js_finds_location_assignments() {
        let js = "console.log('hi');\nwindow.location.href = '/new-page';\n";
        let findings = scan_js(js, "main.js");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FindingCategory::JsRedirect);

        let js = "location.replace('https://example.com');";
        assert_eq!(scan_js(js, "app.js").len(), 1);
    }

    #[test]
    fn test_scan_js_ignores_reads() {
        let js = "const here = window.location.href;\nconsole.log(here);\n";
        assert!(scan_js(js, "main.js").is_empty());
    }

    #[test]
    fn test_scan_sitemap_flags_http_entries() {
        let xml = "<urlset><url><loc>https://x/a</loc></url><url><loc>http://x/b</loc></url></urlset>";
        let findings = scan_sitemap(xml, "sitemap.xml");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].detail.contains("http://x/b"));
    }

    #[test]
    fn test_collect_files_skips_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        std::fs::write(root.join("src/a.js"), "x").unwrap();
        std::fs::write(root.join("node_modules/pkg/b.js"), "x").unwrap();
        std::fs::write(root.join("index.html"), "x").unwrap();

        let js_files = collect_files(root, "js");
        assert_eq!(js_files.len(), 1);
        assert!(js_files[0].ends_with("src/a.js"));
        assert_eq!(collect_files(root, "html").len(), 1);
    }
}

//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C handling (stop before the next URL, still write reports)
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use redirect_audit::initialization::init_logger_with;
use redirect_audit::{
    run_local_audit, run_sitemap_audit, write_local_report_files, write_report_files, AuditConfig,
    LogFormat, LogLevel,
};

#[derive(Parser)]
#[command(name = "redirect_audit", version, about)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Audit every URL in a live sitemap for redirect chains
    Analyze {
        /// Sitemap URL to fetch URLs from
        sitemap_url: String,

        /// Maximum redirect hops followed per URL
        #[arg(long, default_value_t = redirect_audit::config::MAX_REDIRECT_HOPS)]
        max_redirects: usize,

        /// Per-request timeout in milliseconds
        #[arg(long, default_value_t = redirect_audit::config::REQUEST_TIMEOUT_MS)]
        timeout_ms: u64,

        /// Delay between consecutive URL audits in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Directory where the report files are written
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Statically audit a project directory for redirect configuration
    AuditLocal {
        /// Project directory to scan
        project_dir: PathBuf,

        /// Directory where the report files are written
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match cli.command {
        Command::Analyze {
            sitemap_url,
            max_redirects,
            timeout_ms,
            delay_ms,
            output_dir,
        } => {
            let config = AuditConfig {
                max_redirects,
                timeout_ms,
                delay_ms,
                output_dir: output_dir.clone(),
                ..Default::default()
            };

            // Ctrl-C stops before the next URL; the partial report is still written
            let cancel = CancellationToken::new();
            let cancel_on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::warn!("Interrupt received; finishing current URL then stopping");
                    cancel_on_signal.cancel();
                }
            });

            let report = run_sitemap_audit(&config, &sitemap_url, cancel).await?;
            let (json_path, text_path) =
                write_report_files(&report, &output_dir, "redirect-audit")?;

            // Issues are reported, not treated as process failure
            println!(
                "Audited {} URL{}: {} clean, {} with issues, {} errors ({} high priority)",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.clean_urls.len(),
                report.redirect_issues.len(),
                report.errors.len(),
                report.high_priority_count()
            );
            println!(
                "Reports: {} / {}",
                json_path.display(),
                text_path.display()
            );
        }
        Command::AuditLocal {
            project_dir,
            output_dir,
        } => {
            let report = run_local_audit(&project_dir)?;
            let (json_path, text_path) = write_local_report_files(&report, &output_dir)?;

            println!(
                "Scanned {} file{}: {} finding{} ({} high priority)",
                report.files_scanned,
                if report.files_scanned == 1 { "" } else { "s" },
                report.findings.len(),
                if report.findings.len() == 1 { "" } else { "s" },
                report.high_priority_count()
            );
            println!(
                "Reports: {} / {}",
                json_path.display(),
                text_path.display()
            );
        }
    }

    Ok(())
}

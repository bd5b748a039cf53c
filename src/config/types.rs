//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and library configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_USER_AGENT, INTER_REQUEST_DELAY, MAX_REDIRECT_HOPS, REQUEST_TIMEOUT_MS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration for a live redirect audit (no CLI dependencies).
///
/// Can be constructed programmatically without any CLI involvement.
///
/// # Examples
///
/// ```no_run
/// use redirect_audit::AuditConfig;
///
/// let config = AuditConfig {
///     max_redirects: 5,
///     delay_ms: 1000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Maximum redirect hops followed per URL
    pub max_redirects: usize,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Delay between consecutive URL audits in milliseconds
    pub delay_ms: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Directory where the JSON and text report files are written
    pub output_dir: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_redirects: MAX_REDIRECT_HOPS,
            timeout_ms: REQUEST_TIMEOUT_MS,
            delay_ms: INTER_REQUEST_DELAY.as_millis() as u64,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

//! Redirect chain data structures.
//!
//! Response metadata is captured as well-typed records (status, headers map,
//! location) rather than passing raw response objects around.

use serde::Serialize;
use std::collections::HashMap;

/// One hop in a redirect chain.
///
/// Created by the walker after each network round-trip; ordered by traversal
/// sequence and owned by the chain that contains it.
#[derive(Debug, Clone, Serialize)]
pub struct RedirectStep {
    /// URL this hop requested
    pub url: String,
    /// HTTP status code of the response
    pub status_code: u16,
    /// Response headers (lowercased names)
    pub headers: HashMap<String, String>,
    /// Resolved Location target, present only for a 3xx response that
    /// carried a Location header
    pub location: Option<String>,
}

/// Terminal state of a chain walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalStatus {
    /// The chain ended on a real HTTP response with this status code
    Status(u16),
    /// The chain ended on a network failure or the hop limit
    Error,
    /// The chain ended because a hop exceeded the request timeout
    Timeout,
}

// Mirrors the report format: a bare status code for real responses, the
// string tags "ERROR"/"TIMEOUT" otherwise.
impl Serialize for FinalStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FinalStatus::Status(code) => serializer.serialize_u16(*code),
            FinalStatus::Error => serializer.serialize_str("ERROR"),
            FinalStatus::Timeout => serializer.serialize_str("TIMEOUT"),
        }
    }
}

impl FinalStatus {
    /// Status code of the terminating response, if one was received.
    pub fn code(&self) -> Option<u16> {
        match self {
            FinalStatus::Status(code) => Some(*code),
            FinalStatus::Error | FinalStatus::Timeout => None,
        }
    }
}

/// A complete walked redirect chain for one origin URL.
///
/// Invariant: whenever at least one response was received,
/// `chain.len() == redirect_count + 1`.
#[derive(Debug, Clone, Serialize)]
pub struct ChainResult {
    /// The origin URL the walk started from
    pub url: String,
    /// Terminal state of the walk
    pub final_status: FinalStatus,
    /// Last URL reached (the origin itself if nothing redirected)
    pub final_url: String,
    /// Number of redirect hops actually followed
    pub redirect_count: usize,
    /// Every hop in traversal order
    pub chain: Vec<RedirectStep>,
    /// Underlying error message for ERROR/TIMEOUT terminals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChainResult {
    /// First hop of the chain, if any response was received.
    pub fn first_step(&self) -> Option<&RedirectStep> {
        self.chain.first()
    }

    /// Last hop of the chain, if any response was received.
    pub fn last_step(&self) -> Option<&RedirectStep> {
        self.chain.last()
    }
}

//! Curated country-code presets.
//!
//! Hand-curated shipping market lists used as safe fallbacks when caller
//! input fails validation. Every entry must pass `validate_code` and be
//! unique within its preset (enforced by tests).

use crate::country::registry::ISO_3166_ALPHA2;

/// Primary storefront markets (default fallback).
pub const CORE_MARKETS: &[&str] = &[
    "US", "CA", "GB", "AU", "DE", "FR", "SA", "AE", "EG", "TN",
];

/// Gulf Cooperation Council members.
pub const GCC: &[&str] = &["SA", "AE", "QA", "KW", "BH", "OM"];

/// European Union members.
pub const EU: &[&str] = &[
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT",
    "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
];

/// Arab League members.
pub const ARAB_WORLD: &[&str] = &[
    "DZ", "BH", "KM", "DJ", "EG", "IQ", "JO", "KW", "LB", "LY", "MR", "MA", "OM", "PS", "QA",
    "SA", "SO", "SD", "SY", "TN", "AE", "YE",
];

/// Core markets plus the GCC and the larger European and Asian markets.
pub const EXTENDED_MARKETS: &[&str] = &[
    "US", "CA", "GB", "AU", "DE", "FR", "SA", "AE", "EG", "TN", "QA", "KW", "BH", "OM", "IT",
    "ES", "NL", "SE", "MY", "ID", "SG", "TR",
];

/// Every assigned ISO 3166-1 alpha-2 code (worldwide shipping).
pub const FULL_COVERAGE: &[&str] = &ISO_3166_ALPHA2;

/// All presets by canonical name, used for iteration and round-trip tests.
pub const PRESETS: &[(&str, &[&str])] = &[
    ("CORE_MARKETS", CORE_MARKETS),
    ("GCC", GCC),
    ("EU", EU),
    ("ARAB_WORLD", ARAB_WORLD),
    ("EXTENDED_MARKETS", EXTENDED_MARKETS),
    ("FULL_COVERAGE", FULL_COVERAGE),
];

/// Looks up a preset by name, case-insensitively.
///
/// Returns `None` for unknown names; callers that need a guaranteed list
/// should fall back to [`CORE_MARKETS`].
pub fn preset_by_name(name: &str) -> Option<&'static [&'static str]> {
    let wanted = name.trim().to_uppercase();
    PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == wanted)
        .map(|(_, codes)| *codes)
}

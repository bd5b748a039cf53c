//! Country-code validation and sanitization.
//!
//! Guarantees that any country value exposed in shipping/schema output is
//! either a verified ISO 3166-1 alpha-2 code (or list thereof) or a safe
//! curated fallback. The motivating defect was a literal wildcard `"*"`
//! being emitted as a country code, which breaks downstream structured-data
//! consumers.

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::config::MAX_COUNTRY_CODES;
use crate::country::presets::{preset_by_name, CORE_MARKETS};
use crate::country::registry::is_iso_country;
use crate::error_handling::ValidationError;

/// Options for [`validate_codes`].
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Maximum number of codes accepted in one list.
    pub max_count: usize,
    /// Whether an empty list is valid.
    pub allow_empty: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            max_count: MAX_COUNTRY_CODES,
            allow_empty: false,
        }
    }
}

/// A schema.org `DefinedRegion` restricted to verified country codes.
///
/// This is the hard guarantee point for structured-data output: its
/// `addressCountry` list never contains a non-ISO token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingDestination {
    /// Always `"DefinedRegion"`.
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    /// Verified ISO 3166-1 alpha-2 codes.
    #[serde(rename = "addressCountry")]
    pub address_country: Vec<String>,
}

/// Validates a single country code.
///
/// Normalizes the input (trim, uppercase), then checks that it is exactly
/// two characters and a member of the ISO 3166-1 alpha-2 registry.
///
/// # Errors
///
/// - [`ValidationError::InvalidLength`] if the normalized input is not 2
///   characters (the message carries the offending length and raw value)
/// - [`ValidationError::UnknownCode`] if the code is not in the registry
pub fn validate_code(input: &str) -> Result<String, ValidationError> {
    let normalized = input.trim().to_uppercase();
    let length = normalized.chars().count();
    if length != 2 {
        return Err(ValidationError::InvalidLength {
            length,
            raw: input.to_string(),
        });
    }
    if !is_iso_country(&normalized) {
        return Err(ValidationError::UnknownCode { code: normalized });
    }
    Ok(normalized)
}

/// Validates an ordered list of country codes.
///
/// Collects *all* errors rather than stopping at the first: an over-long
/// list still has each element validated so the caller gets full
/// diagnostics. Duplicates are detected case-insensitively after
/// normalization and reported with their index.
///
/// On success returns the normalized, order-preserving list.
///
/// # Errors
///
/// Returns the ordered list of every [`ValidationError`] encountered.
pub fn validate_codes<S: AsRef<str>>(
    input: &[S],
    options: &ValidateOptions,
) -> Result<Vec<String>, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if input.is_empty() {
        if options.allow_empty {
            return Ok(Vec::new());
        }
        return Err(vec![ValidationError::EmptyInput]);
    }

    if input.len() > options.max_count {
        errors.push(ValidationError::TooMany {
            count: input.len(),
            max: options.max_count,
        });
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut normalized = Vec::with_capacity(input.len());
    for (index, raw) in input.iter().enumerate() {
        match validate_code(raw.as_ref()) {
            Ok(code) => {
                if seen.contains(&code) {
                    errors.push(ValidationError::Duplicate { code, index });
                } else {
                    seen.insert(code.clone());
                    normalized.push(code);
                }
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(errors)
    }
}

/// Resolves a fallback preset name, defaulting to CORE_MARKETS for unknown names.
fn fallback_codes(fallback_preset: &str) -> Vec<String> {
    let codes = preset_by_name(fallback_preset).unwrap_or(CORE_MARKETS);
    codes.iter().map(|c| (*c).to_string()).collect()
}

/// Sanitizes arbitrary country input into a guaranteed-valid code list.
///
/// Never fails:
/// - a string is validated as a single code
/// - an array is validated with [`validate_codes`]
/// - anything else (or any validation failure) falls back to the named
///   preset, or CORE_MARKETS if the preset name is unknown
///
/// Input is a `serde_json::Value` because the callers feeding this function
/// (structured-data generators) work with JSON-shaped config values of
/// unknown type.
pub fn sanitize(input: &Value, fallback_preset: &str) -> Vec<String> {
    match input {
        Value::String(s) => match validate_code(s) {
            Ok(code) => vec![code],
            Err(e) => {
                warn!("Invalid country code {s:?} ({e}); falling back to {fallback_preset}");
                fallback_codes(fallback_preset)
            }
        },
        Value::Array(items) => {
            let mut strings: Vec<&str> = Vec::with_capacity(items.len());
            let mut type_errors: Vec<ValidationError> = Vec::new();
            for item in items {
                match item.as_str() {
                    Some(s) => strings.push(s),
                    None => type_errors.push(ValidationError::NotAString {
                        found: json_type_name(item),
                    }),
                }
            }
            if !type_errors.is_empty() {
                for e in &type_errors {
                    warn!("Country list validation: {e}");
                }
                warn!("Invalid country list; falling back to {fallback_preset}");
                return fallback_codes(fallback_preset);
            }
            match validate_codes(&strings, &ValidateOptions::default()) {
                Ok(codes) => codes,
                Err(errors) => {
                    for e in &errors {
                        warn!("Country list validation: {e}");
                    }
                    warn!("Invalid country list; falling back to {fallback_preset}");
                    fallback_codes(fallback_preset)
                }
            }
        }
        other => {
            let e = ValidationError::NotAString {
                found: json_type_name(other),
            };
            debug!("{e}; using {fallback_preset} preset");
            fallback_codes(fallback_preset)
        }
    }
}

/// Builds a schema.org shipping destination from arbitrary country input.
///
/// A string that names a preset (case-insensitively) substitutes the
/// preset's list; anything else goes through [`sanitize`]. The result is
/// always well-formed and never contains a non-ISO token.
pub fn to_shipping_destination(input: &Value) -> ShippingDestination {
    let address_country = match input.as_str().and_then(preset_by_name) {
        Some(preset) => preset.iter().map(|c| (*c).to_string()).collect(),
        None => sanitize(input, "CORE_MARKETS"),
    };
    ShippingDestination {
        schema_type: "DefinedRegion",
        address_country,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

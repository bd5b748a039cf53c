//! Country-code validation library.
//!
//! This module provides:
//! - The ISO 3166-1 alpha-2 registry (249 codes)
//! - Curated shipping-market presets
//! - Validation, sanitization, and schema.org shipping-destination output
//!
//! Pure functions, no I/O; the only side effect is a `warn!` on fallback.

mod presets;
mod registry;
mod validate;

// Re-export public API
pub use presets::{
    preset_by_name, ARAB_WORLD, CORE_MARKETS, EU, EXTENDED_MARKETS, FULL_COVERAGE, GCC, PRESETS,
};
pub use registry::{is_iso_country, ISO_3166_ALPHA2};
pub use validate::{
    sanitize, to_shipping_destination, validate_code, validate_codes, ShippingDestination,
    ValidateOptions,
};

#[cfg(test)]
mod tests;

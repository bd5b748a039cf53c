//! Country module tests.

use super::*;
use crate::error_handling::ValidationError;
use serde_json::json;

#[test]
fn test_validate_code_normalizes() {
    assert_eq!(validate_code("us").unwrap(), "US");
    assert_eq!(validate_code(" tn ").unwrap(), "TN");
    assert_eq!(validate_code("SA").unwrap(), "SA");
}

#[test]
fn test_validate_code_rejects_wrong_length() {
    match validate_code("USA") {
        Err(ValidationError::InvalidLength { length, raw }) => {
            assert_eq!(length, 3);
            assert_eq!(raw, "USA");
        }
        other => panic!("expected InvalidLength, got {other:?}"),
    }
    // The wildcard that motivated this module
    assert!(matches!(
        validate_code("*"),
        Err(ValidationError::InvalidLength { length: 1, .. })
    ));
    assert!(matches!(
        validate_code(""),
        Err(ValidationError::InvalidLength { length: 0, .. })
    ));
}

#[test]
fn test_validate_code_length_counts_characters_not_bytes() {
    // "é" is one character but two bytes
    match validate_code("é") {
        Err(ValidationError::InvalidLength { length, raw }) => {
            assert_eq!(length, 1);
            assert_eq!(raw, "é");
        }
        other => panic!("expected InvalidLength, got {other:?}"),
    }
    // Two non-ASCII characters pass the length check and fail membership
    assert!(matches!(
        validate_code("éé"),
        Err(ValidationError::UnknownCode { .. })
    ));
}

#[test]
fn test_not_a_string_error_names_the_json_type() {
    let e = ValidationError::NotAString { found: "number" };
    assert_eq!(
        e.to_string(),
        "expected a country code string, got number"
    );
}

#[test]
fn test_validate_code_rejects_unknown() {
    match validate_code("ZQ") {
        Err(ValidationError::UnknownCode { code }) => assert_eq!(code, "ZQ"),
        other => panic!("expected UnknownCode, got {other:?}"),
    }
}

#[test]
fn test_validate_code_idempotent_over_registry() {
    for code in ISO_3166_ALPHA2 {
        let once = validate_code(code).expect("registry code must validate");
        let twice = validate_code(&once).expect("normalized code must validate");
        assert_eq!(once, twice);
        assert_eq!(twice, code);
    }
}

#[test]
fn test_validate_codes_detects_case_insensitive_duplicate() {
    let errors = validate_codes(&["US", "us"], &ValidateOptions::default()).unwrap_err();
    assert_eq!(
        errors,
        vec![ValidationError::Duplicate {
            code: "US".to_string(),
            index: 1
        }]
    );
}

#[test]
fn test_validate_codes_empty_input() {
    let errors = validate_codes::<&str>(&[], &ValidateOptions::default()).unwrap_err();
    assert_eq!(errors, vec![ValidationError::EmptyInput]);

    let options = ValidateOptions {
        allow_empty: true,
        ..Default::default()
    };
    assert_eq!(validate_codes::<&str>(&[], &options).unwrap(), Vec::<String>::new());
}

#[test]
fn test_validate_codes_too_many_still_validates_elements() {
    let options = ValidateOptions {
        max_count: 2,
        ..Default::default()
    };
    let errors = validate_codes(&["US", "GB", "bogus"], &options).unwrap_err();
    // TooMany is recorded without short-circuiting, so the bad element
    // still gets its own diagnostic
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        errors[0],
        ValidationError::TooMany { count: 3, max: 2 }
    ));
    assert!(matches!(errors[1], ValidationError::InvalidLength { .. }));
}

#[test]
fn test_validate_codes_preserves_order() {
    let codes = validate_codes(&["tn", "sa", "ae"], &ValidateOptions::default()).unwrap();
    assert_eq!(codes, vec!["TN", "SA", "AE"]);
}

#[test]
fn test_sanitize_wildcard_falls_back_to_core_markets() {
    let result = sanitize(&json!(["*"]), "CORE_MARKETS");
    assert_eq!(result.len(), 10);
    assert_eq!(
        result,
        CORE_MARKETS.iter().map(|c| c.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_sanitize_valid_array_passes_through() {
    let result = sanitize(&json!(["us", "GB"]), "CORE_MARKETS");
    assert_eq!(result, vec!["US", "GB"]);
}

#[test]
fn test_sanitize_scalar_string() {
    assert_eq!(sanitize(&json!("sa"), "GCC"), vec!["SA"]);
    // Invalid scalar falls back to the named preset
    assert_eq!(
        sanitize(&json!("*"), "GCC"),
        GCC.iter().map(|c| c.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_sanitize_unknown_fallback_preset_uses_core_markets() {
    let result = sanitize(&json!(42), "NO_SUCH_PRESET");
    assert_eq!(
        result,
        CORE_MARKETS.iter().map(|c| c.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_sanitize_non_string_array_entry_falls_back() {
    let result = sanitize(&json!(["US", 7]), "GCC");
    assert_eq!(
        result,
        GCC.iter().map(|c| c.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_to_shipping_destination_preset_name() {
    let dest = to_shipping_destination(&json!("GCC"));
    assert_eq!(dest.schema_type, "DefinedRegion");
    assert_eq!(dest.address_country, vec!["SA", "AE", "QA", "KW", "BH", "OM"]);

    let rendered = serde_json::to_value(&dest).unwrap();
    assert_eq!(
        rendered,
        json!({
            "@type": "DefinedRegion",
            "addressCountry": ["SA", "AE", "QA", "KW", "BH", "OM"]
        })
    );
}

#[test]
fn test_to_shipping_destination_never_emits_non_iso_tokens() {
    for input in [
        json!("*"),
        json!(["*", "??"]),
        json!(null),
        json!({"country": "US"}),
        json!(["US", "US"]),
    ] {
        let dest = to_shipping_destination(&input);
        assert!(!dest.address_country.is_empty());
        for code in &dest.address_country {
            assert!(is_iso_country(code), "{input} produced non-ISO {code:?}");
        }
    }
}

#[test]
fn test_every_preset_round_trips_through_validate_codes() {
    for (name, codes) in PRESETS {
        let result = validate_codes(
            codes,
            &ValidateOptions {
                // FULL_COVERAGE is far larger than the default list cap
                max_count: codes.len(),
                allow_empty: false,
            },
        );
        assert!(result.is_ok(), "preset {name} failed validation");
        let normalized = result.unwrap();
        assert_eq!(normalized.len(), codes.len(), "preset {name} lost entries");
    }
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_validate_code_never_panics(input in ".{0,16}") {
        let _ = validate_code(&input);
    }

    #[test]
    fn test_validate_code_output_is_always_registry_member(input in "[a-zA-Z]{2}") {
        if let Ok(code) = validate_code(&input) {
            prop_assert!(is_iso_country(&code));
            prop_assert_eq!(code.clone(), input.to_uppercase());
            // Idempotence: validating the normalized output is a fixpoint
            prop_assert_eq!(validate_code(&code).unwrap(), code);
        }
    }

    #[test]
    fn test_sanitize_is_total_and_safe(input in "[a-zA-Z*]{0,4}") {
        let result = sanitize(&serde_json::Value::String(input), "CORE_MARKETS");
        prop_assert!(!result.is_empty());
        for code in &result {
            prop_assert!(is_iso_country(code));
        }
    }
}

// crates/review-prompt-config/tests/load_validation.rs
// ============================================================================
// Module: Settings Load and Validation Tests
// Description: TOML parsing, defaults, validation rules, and file loading.
// Purpose: Validate settings handling for well-formed and hostile documents.
// ============================================================================

//! Settings loading and validation tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::io::Write;

use review_prompt_config::ConfigError;
use review_prompt_config::PrompterSettings;
use review_prompt_core::PrompterConfig;
use time::Duration;

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn empty_document_yields_the_stock_catalog() {
    let settings = PrompterSettings::from_toml_str("").unwrap();
    let config = settings.into_config().unwrap();
    assert_eq!(config, PrompterConfig::formworks().unwrap());
}

#[test]
fn sections_override_independently() {
    let document = r#"
        [review]
        entry_threshold = 25
        activation_delay_days = 7
    "#;
    let config = PrompterSettings::from_toml_str(document).unwrap().into_config().unwrap();
    assert_eq!(config.entry_threshold, 25);
    assert_eq!(config.activation_delay, Duration::days(7));
    assert_eq!(config.review_delay, Duration::days(1));
    assert_eq!(config.product_name, "FormWorks");
}

#[test]
fn product_identity_overrides_flow_through() {
    let document = r#"
        [product]
        name = "AcmeForms"
        namespace = "acmeforms"
        form_content_type = "acme_form"
    "#;
    let config = PrompterSettings::from_toml_str(document).unwrap().into_config().unwrap();
    assert_eq!(config.product_name, "AcmeForms");
    assert_eq!(config.namespace, "acmeforms");
    assert_eq!(config.form_content_type.as_str(), "acme_form");
}

// ============================================================================
// SECTION: Validation
// ============================================================================

#[test]
fn zero_entry_threshold_is_rejected() {
    let document = r#"
        [review]
        entry_threshold = 0
    "#;
    let error = PrompterSettings::from_toml_str(document).unwrap().into_config().unwrap_err();
    assert!(matches!(error, ConfigError::Validation(_)));
}

#[test]
fn zero_delays_are_rejected() {
    for section in ["review_delay_days = 0", "activation_delay_days = 0"] {
        let document = format!("[review]\n{section}\n");
        let error = PrompterSettings::from_toml_str(&document).unwrap().validate().unwrap_err();
        assert!(matches!(error, ConfigError::Validation(_)));
    }
}

#[test]
fn empty_namespace_is_rejected() {
    let document = r#"
        [product]
        namespace = "  "
    "#;
    let error = PrompterSettings::from_toml_str(document).unwrap().validate().unwrap_err();
    assert!(matches!(error, ConfigError::Validation(_)));
}

#[test]
fn unparsable_urls_are_rejected() {
    let document = r#"
        [links]
        review = "not a url"
    "#;
    let error = PrompterSettings::from_toml_str(document).unwrap().into_config().unwrap_err();
    assert!(matches!(error, ConfigError::Validation(message) if message.contains("links.review")));
}

#[test]
fn empty_promotion_allow_list_is_rejected() {
    let document = r#"
        [pages]
        promoted = []
    "#;
    let error = PrompterSettings::from_toml_str(document).unwrap().validate().unwrap_err();
    assert!(matches!(error, ConfigError::Validation(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    let document = r#"
        [review]
        entry_treshold = 50
    "#;
    let error = PrompterSettings::from_toml_str(document).unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
}

// ============================================================================
// SECTION: File Loading
// ============================================================================

#[test]
fn settings_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[product]\nname = \"DiskForms\"").unwrap();
    let settings = PrompterSettings::load(file.path()).unwrap();
    assert_eq!(settings.product.name, "DiskForms");
}

#[test]
fn missing_settings_file_reports_io_error() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("missing.toml");
    let error = PrompterSettings::load(&path).unwrap_err();
    assert!(matches!(error, ConfigError::Io(_)));
}

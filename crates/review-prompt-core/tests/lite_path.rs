// crates/review-prompt-core/tests/lite_path.rs
// ============================================================================
// Module: Lite Path Unit Tests
// Description: Activation grace, form-count, and competing-notice guards.
// Purpose: Validate the lite-edition prompt path end to end.
// ============================================================================

//! Lite-edition path tests for activation and engagement guards.

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

mod common;

use common::Host;
use review_prompt_core::Edition;
use review_prompt_core::NoticeSlug;
use review_prompt_core::PromptDecision;
use review_prompt_core::REVIEW_LITE_REQUEST_SLUG;
use review_prompt_core::REVIEW_REQUEST_SLUG;
use review_prompt_core::SETTING_ACTIVATION;
use review_prompt_core::SETTING_INTEGRATION_NOTICE;
use review_prompt_core::SettingsStore;
use review_prompt_core::SuppressReason;
use review_prompt_core::Timestamp;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed evaluation time for deterministic assertions.
const NOW: Timestamp = Timestamp::from_unix_seconds(1_700_000_000);

/// Seconds in one day.
const DAY: i64 = 86_400;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a lite host whose notice grace period has already elapsed.
fn eligible_lite_host(published_forms: u64) -> Host {
    let host = Host::new(published_forms, None);
    host.seed_notice(REVIEW_REQUEST_SLUG, NOW.unix_seconds() - 2 * DAY, false);
    host
}

// ============================================================================
// SECTION: Guard Tests
// ============================================================================

#[test]
fn entries_page_blocks_the_lite_prompt() {
    let host = eligible_lite_host(3);
    host.seed_activation(NOW.unix_seconds() - 15 * DAY);
    host.pages.set_page(Some("formworks-entries"));
    let prompter = host.prompter(Edition::Lite);

    let decision = prompter.evaluate(NOW).unwrap();

    assert_eq!(
        decision,
        PromptDecision::Suppressed {
            reason: SuppressReason::BlockedPage
        }
    );
}

#[test]
fn missing_activation_record_starts_grace() {
    let host = eligible_lite_host(3);
    let prompter = host.prompter(Edition::Lite);

    let decision = prompter.evaluate(NOW).unwrap();

    assert_eq!(
        decision,
        PromptDecision::GraceStarted {
            slug: NoticeSlug::new(REVIEW_LITE_REQUEST_SLUG)
        }
    );
    let stored = host.settings.get(SETTING_ACTIVATION).unwrap().unwrap();
    assert_eq!(stored, json!({ "lite": NOW.unix_seconds() }));
    assert!(host.notices.shown.lock().unwrap().is_empty());
}

#[test]
fn activation_timestamp_is_never_overwritten() {
    let host = eligible_lite_host(3);
    let installed = NOW.unix_seconds() - 3 * DAY;
    host.seed_activation(installed);
    let prompter = host.prompter(Edition::Lite);

    prompter.evaluate(NOW).unwrap();
    prompter.evaluate(Timestamp::from_unix_seconds(NOW.unix_seconds() + DAY)).unwrap();

    let stored = host.settings.get(SETTING_ACTIVATION).unwrap().unwrap();
    assert_eq!(stored, json!({ "lite": installed }));
}

#[test]
fn activation_grace_below_fourteen_days_suppresses() {
    let host = eligible_lite_host(3);
    host.seed_activation(NOW.unix_seconds() - 13 * DAY);
    let prompter = host.prompter(Edition::Lite);

    let decision = prompter.evaluate(NOW).unwrap();

    assert_eq!(
        decision,
        PromptDecision::Suppressed {
            reason: SuppressReason::Pending
        }
    );
}

#[test]
fn no_published_forms_suppresses() {
    let host = eligible_lite_host(0);
    host.seed_activation(NOW.unix_seconds() - 15 * DAY);
    let prompter = host.prompter(Edition::Lite);

    let decision = prompter.evaluate(NOW).unwrap();

    assert_eq!(
        decision,
        PromptDecision::Suppressed {
            reason: SuppressReason::NoPublishedForms
        }
    );
}

#[test]
fn active_integration_notice_wins_over_the_prompt() {
    let host = eligible_lite_host(3);
    host.seed_activation(NOW.unix_seconds() - 15 * DAY);
    host.settings.set(SETTING_INTEGRATION_NOTICE, json!(true)).unwrap();
    let prompter = host.prompter(Edition::Lite);

    let decision = prompter.evaluate(NOW).unwrap();

    assert_eq!(
        decision,
        PromptDecision::Suppressed {
            reason: SuppressReason::CompetingNotice
        }
    );
}

// ============================================================================
// SECTION: Prompt Tests
// ============================================================================

#[test]
fn lite_prompt_shows_once_all_guards_pass() {
    let host = eligible_lite_host(3);
    host.seed_activation(NOW.unix_seconds() - 15 * DAY);
    let prompter = host.prompter(Edition::Lite);

    let decision = prompter.evaluate(NOW).unwrap();

    assert_eq!(
        decision,
        PromptDecision::Prompted {
            slug: NoticeSlug::new(REVIEW_LITE_REQUEST_SLUG)
        }
    );
    let shown = host.notices.shown.lock().unwrap();
    assert_eq!(shown.len(), 1);
    let notice = &shown[0];
    assert_eq!(notice.options.slug, NoticeSlug::new(REVIEW_LITE_REQUEST_SLUG));
    assert_eq!(notice.body.matches("formworks-notice-dismiss").count(), 3);
    assert_eq!(notice.body.matches("formworks-review-out").count(), 1);
}

#[test]
fn falsy_integration_flag_values_do_not_compete() {
    for falsy in [json!(false), json!(0), json!(""), json!("0"), Value::Null] {
        let host = eligible_lite_host(3);
        host.seed_activation(NOW.unix_seconds() - 15 * DAY);
        host.settings.set(SETTING_INTEGRATION_NOTICE, falsy).unwrap();
        let prompter = host.prompter(Edition::Lite);

        let decision = prompter.evaluate(NOW).unwrap();

        assert_eq!(
            decision,
            PromptDecision::Prompted {
                slug: NoticeSlug::new(REVIEW_LITE_REQUEST_SLUG)
            }
        );
    }
}

#[test]
fn truthy_string_integration_flag_competes() {
    let host = eligible_lite_host(3);
    host.seed_activation(NOW.unix_seconds() - 15 * DAY);
    host.settings.set(SETTING_INTEGRATION_NOTICE, json!("configured")).unwrap();
    let prompter = host.prompter(Edition::Lite);

    let decision = prompter.evaluate(NOW).unwrap();

    assert_eq!(
        decision,
        PromptDecision::Suppressed {
            reason: SuppressReason::CompetingNotice
        }
    );
}

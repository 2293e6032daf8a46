// crates/review-prompt-core/src/core/state.rs
// ============================================================================
// Module: Notice and Activation Ledgers
// Description: Persisted per-slug notice records and per-edition install times.
// Purpose: Capture the first-seen timestamps that anchor prompt eligibility.
// Dependencies: crate::core::{identifiers, time}, serde
// ============================================================================

//! ## Overview
//! Two small ledgers back the review prompt engine. The notice ledger maps
//! notice slugs to a first-seen timestamp plus a dismissed flag; the
//! activation ledger maps editions to install timestamps. Both are flat
//! key-value records with no schema version. Eligibility is always derived
//! from the stored values and the caller-supplied current time; no "should
//! show" flag is ever persisted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use time::Duration;

use crate::core::identifiers::Edition;
use crate::core::identifiers::NoticeSlug;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Settings Keys
// ============================================================================

/// Settings key holding the notice ledger.
pub const SETTING_ADMIN_NOTICES: &str = "admin_notices";

/// Settings key holding the activation ledger.
pub const SETTING_ACTIVATION: &str = "activation";

/// Host-owned settings key suppressing all product announcements.
pub const SETTING_HIDE_ANNOUNCEMENTS: &str = "hide_announcements";

/// Host-owned settings key flagging an active third-party integration notice.
pub const SETTING_INTEGRATION_NOTICE: &str = "integration_notice";

/// Settings keys written by the engine.
///
/// # Invariants
/// - Keys are lowercase ASCII strings and remain stable across releases.
pub const ENGINE_WRITTEN_KEYS: [&str; 2] = [SETTING_ADMIN_NOTICES, SETTING_ACTIVATION];

/// Returns true when the engine may write to the given settings key.
#[must_use]
pub fn is_engine_written_key(key: &str) -> bool {
    ENGINE_WRITTEN_KEYS.iter().any(|candidate| candidate == &key)
}

// ============================================================================
// SECTION: Notice Ledger
// ============================================================================

/// Canonical notice slug for the full-edition review request.
pub const REVIEW_REQUEST_SLUG: &str = "review_request";

/// Canonical notice slug for the lite-edition review request.
pub const REVIEW_LITE_REQUEST_SLUG: &str = "review_lite_request";

/// Per-slug notice record.
///
/// # Invariants
/// - `time` is set exactly once, at first eligibility check, and never
///   overwritten by the engine afterwards.
/// - `dismissed` is mutated only by the host's notice-dismissal handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRecord {
    /// Timestamp of first eligibility (start of the grace period).
    pub time: Timestamp,
    /// True once the host recorded a dismissal for this slug.
    pub dismissed: bool,
}

impl NoticeRecord {
    /// Creates a fresh, undismissed record anchored at `now`.
    #[must_use]
    pub const fn fresh(now: Timestamp) -> Self {
        Self {
            time: now,
            dismissed: false,
        }
    }

    /// Returns true when the record is undismissed and `delay` has elapsed.
    #[must_use]
    pub const fn is_eligible(&self, delay: Duration, now: Timestamp) -> bool {
        !self.dismissed && self.time.delay_elapsed(delay, now)
    }
}

/// Notice ledger keyed by slug.
///
/// # Invariants
/// - Entries are created lazily and never deleted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct NoticeLedger {
    /// Notice records keyed by slug.
    entries: BTreeMap<NoticeSlug, NoticeRecord>,
}

impl NoticeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the record for the slug, if present.
    #[must_use]
    pub fn record(&self, slug: &NoticeSlug) -> Option<&NoticeRecord> {
        self.entries.get(slug)
    }

    /// Starts the grace period for `slug` if no record exists yet.
    ///
    /// Returns true when a fresh record was inserted. An existing record is
    /// left untouched, keeping the first-write idempotent.
    pub fn begin_grace(&mut self, slug: NoticeSlug, now: Timestamp) -> bool {
        if self.entries.contains_key(&slug) {
            return false;
        }
        self.entries.insert(slug, NoticeRecord::fresh(now));
        true
    }

    /// Returns the number of recorded slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no slugs are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SECTION: Prompt Decisions
// ============================================================================

/// Reason a prompt evaluation was suppressed.
///
/// # Invariants
/// - Variants are stable for serialization and telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressReason {
    /// Current user lacks top-level admin privilege.
    NotAdmin,
    /// Installation opted out of product announcements.
    AnnouncementsHidden,
    /// Current page never carries review prompts.
    BlockedPage,
    /// Grace period has not elapsed yet.
    Pending,
    /// Notice was dismissed by an administrator.
    Dismissed,
    /// Too few stored entries to justify asking.
    LowEngagement,
    /// No published forms exist yet.
    NoPublishedForms,
    /// A competing third-party integration notice is active.
    CompetingNotice,
}

/// Outcome of a single prompt evaluation pass.
///
/// # Invariants
/// - Variants are stable for serialization and telemetry labeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromptDecision {
    /// No notice this load; a guard short-circuited.
    Suppressed {
        /// Guard that stopped the evaluation.
        reason: SuppressReason,
    },
    /// A first-seen timestamp was persisted; the grace period starts now.
    GraceStarted {
        /// Slug whose grace period began.
        slug: NoticeSlug,
    },
    /// A review-request notice was queued for display.
    Prompted {
        /// Slug of the queued notice.
        slug: NoticeSlug,
    },
}

// ============================================================================
// SECTION: Activation Ledger
// ============================================================================

/// Activation ledger keyed by edition.
///
/// # Invariants
/// - Install timestamps are written once and never mutated again by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ActivationLedger {
    /// Install timestamps keyed by edition.
    entries: BTreeMap<Edition, Timestamp>,
}

impl ActivationLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the install timestamp for the edition, if present.
    #[must_use]
    pub fn installed_at(&self, edition: Edition) -> Option<Timestamp> {
        self.entries.get(&edition).copied()
    }

    /// Records the install timestamp for `edition` if absent.
    ///
    /// Returns true when a timestamp was inserted; an existing entry wins.
    pub fn begin_grace(&mut self, edition: Edition, now: Timestamp) -> bool {
        if self.entries.contains_key(&edition) {
            return false;
        }
        self.entries.insert(edition, now);
        true
    }

    /// Returns true when no editions are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions and helpers are permitted."
    )]

    use serde_json::json;

    use super::ActivationLedger;
    use super::NoticeLedger;
    use super::SETTING_ADMIN_NOTICES;
    use super::SETTING_HIDE_ANNOUNCEMENTS;
    use super::is_engine_written_key;
    use crate::core::identifiers::Edition;
    use crate::core::identifiers::NoticeSlug;
    use crate::core::time::Timestamp;

    #[test]
    fn engine_only_writes_its_own_keys() {
        assert!(is_engine_written_key(SETTING_ADMIN_NOTICES));
        assert!(!is_engine_written_key(SETTING_HIDE_ANNOUNCEMENTS));
    }

    #[test]
    fn notice_grace_keeps_the_first_timestamp() {
        let mut ledger = NoticeLedger::new();
        assert!(ledger.is_empty());
        let slug = NoticeSlug::new("review_request");
        assert!(ledger.begin_grace(slug.clone(), Timestamp::from_unix_seconds(10)));
        assert!(!ledger.begin_grace(slug.clone(), Timestamp::from_unix_seconds(99)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.record(&slug).unwrap().time, Timestamp::from_unix_seconds(10));
    }

    #[test]
    fn activation_ledger_serializes_flat() {
        let mut ledger = ActivationLedger::new();
        assert!(ledger.is_empty());
        ledger.begin_grace(Edition::Lite, Timestamp::from_unix_seconds(42));
        assert_eq!(serde_json::to_value(&ledger).unwrap(), json!({ "lite": 42 }));
        assert_eq!(Edition::Lite.to_string(), "lite");
    }
}

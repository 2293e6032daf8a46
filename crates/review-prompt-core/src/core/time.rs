// crates/review-prompt-core/src/core/time.rs
// ============================================================================
// Module: Review Prompt Time Model
// Description: Canonical timestamp representation for notice ledgers.
// Purpose: Provide deterministic, replayable time values across prompt decisions.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The engine uses explicit time values supplied by callers to keep
//! evaluation deterministic. The core never reads wall-clock time directly;
//! host adapters must pass the current time into each evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::Duration;

// ============================================================================
// SECTION: Timestamp
// ============================================================================

/// Canonical timestamp stored in notice and activation ledgers.
///
/// # Invariants
/// - Values are unix seconds explicitly provided by callers; the core never
///   reads wall-clock time.
/// - Arithmetic saturates at the representable range instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix seconds.
    #[must_use]
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the timestamp as unix seconds.
    #[must_use]
    pub const fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Returns this timestamp advanced by the given duration, saturating.
    #[must_use]
    pub const fn advanced_by(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.whole_seconds()))
    }

    /// Returns true when `delay` has fully elapsed between `self` and `now`.
    #[must_use]
    pub const fn delay_elapsed(self, delay: Duration, now: Self) -> bool {
        self.advanced_by(delay).0 <= now.0
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

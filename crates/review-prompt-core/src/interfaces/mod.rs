// crates/review-prompt-core/src/interfaces/mod.rs
// ============================================================================
// Module: Review Prompt Interfaces
// Description: Host-agnostic interfaces for settings, notices, and counters.
// Purpose: Define the contract surfaces used by the review prompt engine.
// Dependencies: crate::core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the review prompt engine integrates with a host
//! admin console without embedding host-specific details. Implementations
//! must be deterministic with respect to their backing state; absent values
//! mean "not yet initialized", never failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::content::PromotionBlock;
use crate::core::identifiers::ContentTypeId;
use crate::core::identifiers::NoticeSlug;
use crate::core::identifiers::PageId;
use crate::core::identifiers::ScreenId;
use crate::core::state::PromptDecision;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Settings Store
// ============================================================================

/// Settings store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Store I/O error.
    #[error("settings store io error: {0}")]
    Io(String),
    /// Store data is invalid.
    #[error("settings store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("settings store error: {0}")]
    Store(String),
}

/// Flat key-value settings store shared with the host.
pub trait SettingsStore {
    /// Loads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when loading fails. Absence of a key is
    /// `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<Value>, SettingsError>;

    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when saving fails.
    fn set(&self, key: &str, value: Value) -> Result<(), SettingsError>;

    /// Reports store readiness for liveness/readiness probes.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the store is unavailable.
    fn readiness(&self) -> Result<(), SettingsError> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Notice Renderer
// ============================================================================

/// Scope of a notice dismissal.
///
/// # Invariants
/// - Variants are stable for serialization and host contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissScope {
    /// Dismissal applies to every administrator of the installation.
    Global,
    /// Dismissal applies to the current user only.
    User,
}

/// Options controlling how a notice is rendered and dismissed.
///
/// # Invariants
/// - `slug` keys the host's dismissal record; it must be unique per notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeOptions {
    /// Dismissal scope.
    pub dismiss: DismissScope,
    /// Notice slug keying the dismissal record.
    pub slug: NoticeSlug,
    /// True when the host should auto-wrap the body in paragraphs.
    pub autop: bool,
    /// CSS class applied to the notice container.
    pub class: String,
}

/// Notice renderer errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum NoticeError {
    /// Renderer reported an error.
    #[error("notice renderer error: {0}")]
    Render(String),
}

/// Host notice subsystem that queues dismissible admin notices.
pub trait NoticeRenderer {
    /// Queues an informational notice with the given HTML body.
    ///
    /// # Errors
    ///
    /// Returns [`NoticeError`] when the notice cannot be queued.
    fn info(&self, body: &str, options: &NoticeOptions) -> Result<(), NoticeError>;
}

// ============================================================================
// SECTION: Counters
// ============================================================================

/// Counter errors shared by entry and content type counters.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum CounterError {
    /// Counter backend reported an error.
    #[error("counter error: {0}")]
    Backend(String),
}

/// Filter applied to entry counting queries.
///
/// # Invariants
/// - `limit` caps the scan; `None` means the backend default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryFilter {
    /// Maximum number of entries the backend needs to scan.
    pub limit: Option<u64>,
}

/// Counter over stored form submissions. Absent on Lite installs.
pub trait EntryCounter {
    /// Counts stored entries matching the filter.
    ///
    /// With `total_only` the backend may return a capped total without
    /// materializing rows.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError`] when counting fails.
    fn count(&self, filter: &EntryFilter, total_only: bool) -> Result<u64, CounterError>;
}

/// Counter over host-registered content types.
pub trait ContentTypeCounter {
    /// Counts published posts of the given content type.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError`] when counting fails.
    fn count_published(&self, content_type: &ContentTypeId) -> Result<u64, CounterError>;
}

// ============================================================================
// SECTION: Page Identity and Privileges
// ============================================================================

/// Host view of the current admin request.
pub trait PageIdentity {
    /// Returns the current admin screen identifier, if any.
    fn screen_id(&self) -> Option<ScreenId>;

    /// Returns the current page query parameter, if any.
    fn current_page(&self) -> Option<PageId>;
}

/// Host privilege check for the current user.
pub trait PrivilegeCheck {
    /// Returns true when the current user holds top-level admin privilege.
    fn is_top_level_admin(&self) -> bool;
}

// ============================================================================
// SECTION: Template Renderer
// ============================================================================

/// Template renderer errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Requested template is unknown to the host.
    #[error("unknown template: {0}")]
    Unknown(String),
    /// Renderer reported an error.
    #[error("template render error: {0}")]
    Render(String),
}

/// Host templating layer rendering named templates with structured data.
pub trait TemplateRenderer {
    /// Renders `template` with the promotion block as data.
    ///
    /// With `return_string` the rendered markup is returned instead of being
    /// emitted into the host's output stream.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    fn render(
        &self,
        template: &str,
        data: &PromotionBlock,
        return_string: bool,
    ) -> Result<String, TemplateError>;
}

// ============================================================================
// SECTION: Prompt Observer
// ============================================================================

/// Prompt evaluation event payload.
///
/// # Invariants
/// - `evaluated_at` is the caller-supplied evaluation time, not wall-clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEvent {
    /// Decision taken by the evaluation pass.
    pub decision: PromptDecision,
    /// Evaluation timestamp supplied by the caller.
    pub evaluated_at: Timestamp,
}

/// Observer for prompt evaluation decisions.
///
/// Deliberately dependency-light so downstream deployments can plug in their
/// metrics or logging pipeline without redesign.
pub trait PromptObserver {
    /// Records a prompt evaluation event.
    fn record(&self, event: &PromptEvent);
}

// crates/review-prompt-core/src/core/mod.rs
// ============================================================================
// Module: Review Prompt Core Model
// Description: Identifiers, ledgers, time values, and content structures.
// Purpose: Group the persistent data model shared across the engine.
// Dependencies: serde, time, url
// ============================================================================

//! ## Overview
//! Core data model: strongly typed identifiers, the notice and activation
//! ledgers, caller-supplied timestamps, and structured prompt/footer content.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod content;
pub mod identifiers;
pub mod state;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use content::FooterLink;
pub use content::PromotionBlock;
pub use content::PromptAction;
pub use content::ReviewPrompt;
pub use content::campaign_url;
pub use content::rating_footer_text;
pub use content::render_notice_body;
pub use identifiers::ContentTypeId;
pub use identifiers::Edition;
pub use identifiers::NoticeSlug;
pub use identifiers::PageId;
pub use identifiers::ScreenId;
pub use state::ActivationLedger;
pub use state::ENGINE_WRITTEN_KEYS;
pub use state::NoticeLedger;
pub use state::NoticeRecord;
pub use state::PromptDecision;
pub use state::REVIEW_LITE_REQUEST_SLUG;
pub use state::REVIEW_REQUEST_SLUG;
pub use state::SETTING_ACTIVATION;
pub use state::SETTING_ADMIN_NOTICES;
pub use state::SETTING_HIDE_ANNOUNCEMENTS;
pub use state::SETTING_INTEGRATION_NOTICE;
pub use state::SuppressReason;
pub use state::is_engine_written_key;
pub use time::Timestamp;

// crates/review-prompt-core/src/lib.rs
// ============================================================================
// Module: Review Prompt Core Library
// Description: Data model, host interfaces, and the review prompter engine.
// Purpose: Decide when an admin install should be asked for a product review.
// Dependencies: serde, serde_json, thiserror, time, url
// ============================================================================

//! ## Overview
//! This crate decides, per admin page load, whether to ask an administrator
//! for a product review, and decorates admin footers with a rating line and
//! promotional links on product pages. Persistence, notice display, counting,
//! and templating are injected host collaborators; the engine is
//! deterministic with respect to the supplied state and current time.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::ActivationLedger;
pub use crate::core::ContentTypeId;
pub use crate::core::Edition;
pub use crate::core::FooterLink;
pub use crate::core::NoticeLedger;
pub use crate::core::NoticeRecord;
pub use crate::core::NoticeSlug;
pub use crate::core::PageId;
pub use crate::core::PromotionBlock;
pub use crate::core::PromptAction;
pub use crate::core::PromptDecision;
pub use crate::core::REVIEW_LITE_REQUEST_SLUG;
pub use crate::core::REVIEW_REQUEST_SLUG;
pub use crate::core::ReviewPrompt;
pub use crate::core::SETTING_ACTIVATION;
pub use crate::core::SETTING_ADMIN_NOTICES;
pub use crate::core::SETTING_HIDE_ANNOUNCEMENTS;
pub use crate::core::SETTING_INTEGRATION_NOTICE;
pub use crate::core::ScreenId;
pub use crate::core::SuppressReason;
pub use crate::core::Timestamp;
pub use crate::interfaces::ContentTypeCounter;
pub use crate::interfaces::CounterError;
pub use crate::interfaces::DismissScope;
pub use crate::interfaces::EntryCounter;
pub use crate::interfaces::EntryFilter;
pub use crate::interfaces::NoticeError;
pub use crate::interfaces::NoticeOptions;
pub use crate::interfaces::NoticeRenderer;
pub use crate::interfaces::PageIdentity;
pub use crate::interfaces::PrivilegeCheck;
pub use crate::interfaces::PromptEvent;
pub use crate::interfaces::PromptObserver;
pub use crate::interfaces::SettingsError;
pub use crate::interfaces::SettingsStore;
pub use crate::interfaces::TemplateError;
pub use crate::interfaces::TemplateRenderer;
pub use crate::runtime::InMemorySettingsStore;
pub use crate::runtime::PrompterCollaborators;
pub use crate::runtime::PrompterConfig;
pub use crate::runtime::PrompterError;
pub use crate::runtime::PrompterLinks;
pub use crate::runtime::PrompterPages;
pub use crate::runtime::ReviewPrompter;

// crates/review-prompt-store-sqlite/src/lib.rs
// ============================================================================
// Module: Review Prompt SQLite Store Library
// Description: Durable settings store backed by SQLite.
// Purpose: Persist engine and host settings across admin requests.
// Dependencies: review-prompt-core, rusqlite, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate implements the [`review_prompt_core::SettingsStore`] interface
//! on top of `SQLite` for hosts without their own options table.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::MAX_VALUE_BYTES;
pub use store::SqliteSettingsStore;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteStoreMode;
pub use store::SqliteSyncMode;

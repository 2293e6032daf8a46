// crates/review-prompt-core/src/core/identifiers.rs
// ============================================================================
// Module: Review Prompt Identifiers
// Description: Canonical opaque identifiers for notices, pages, and screens.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers used throughout the review
//! prompt engine. Identifiers are opaque and serialize as strings on the
//! wire. No normalization is applied; hosts own the identifier vocabulary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Notice slug identifying a dismissible admin notice.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoticeSlug(String);

impl NoticeSlug {
    /// Creates a new notice slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoticeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for NoticeSlug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NoticeSlug {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Admin page identifier taken from the host's page query parameter.
///
/// # Invariants
/// - Opaque UTF-8 string; matched by exact equality against page catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Creates a new page identifier.
    #[must_use]
    pub fn new(page: impl Into<String>) -> Self {
        Self(page.into())
    }

    /// Returns the page identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Admin screen identifier exposed by the host's screen registry.
///
/// # Invariants
/// - Opaque UTF-8 string; matched by substring against the product namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    /// Creates a new screen identifier.
    #[must_use]
    pub fn new(screen: impl Into<String>) -> Self {
        Self(screen.into())
    }

    /// Returns the screen identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the screen belongs to the given product namespace.
    #[must_use]
    pub fn in_namespace(&self, namespace: &str) -> bool {
        !namespace.is_empty() && self.0.contains(namespace)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ScreenId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Content type identifier for host-registered content types.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeId(String);

impl ContentTypeId {
    /// Creates a new content type identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ContentTypeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Edition
// ============================================================================

/// Product edition installed on the host.
///
/// # Invariants
/// - Variants are stable for serialization and activation ledger keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    /// Free edition without the entry storage module.
    #[default]
    Lite,
    /// Paid edition with the entry storage module.
    Full,
}

impl Edition {
    /// Returns true for the paid edition.
    #[must_use]
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Returns a stable label for the edition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lite => "lite",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

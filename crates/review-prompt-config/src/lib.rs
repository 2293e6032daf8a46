// crates/review-prompt-config/src/lib.rs
// ============================================================================
// Module: Review Prompt Configuration
// Description: TOML settings loading and validation for the prompter engine.
// Purpose: Turn host-authored settings files into a validated engine config.
// Dependencies: review-prompt-core, serde, thiserror, time, toml, url
// ============================================================================

//! ## Overview
//! Hosts configure the review prompter through a TOML file: product identity,
//! thresholds and delays, page catalogs, and the link catalog. Every section
//! is optional and falls back to the stock FormWorks values. Validation fails
//! closed: empty identifiers, zero thresholds, and unparsable URLs are
//! rejected before an engine config is produced.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use review_prompt_core::ContentTypeId;
use review_prompt_core::PageId;
use review_prompt_core::PrompterConfig;
use review_prompt_core::PrompterLinks;
use review_prompt_core::PrompterPages;
use serde::Deserialize;
use thiserror::Error;
use time::Duration;
use url::Url;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// Settings file is not valid TOML for the expected schema.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Settings violate a validation rule.
    #[error("config validation error: {0}")]
    Validation(String),
}

// ============================================================================
// SECTION: Settings Model
// ============================================================================

/// Product identity settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductSettings {
    /// Product display name used in copy.
    #[serde(default = "default_product_name")]
    pub name: String,
    /// Namespace substring identifying product admin screens.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Content type registered for forms.
    #[serde(default = "default_form_content_type")]
    pub form_content_type: String,
}

impl Default for ProductSettings {
    fn default() -> Self {
        Self {
            name: default_product_name(),
            namespace: default_namespace(),
            form_content_type: default_form_content_type(),
        }
    }
}

/// Review threshold and delay settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewSettings {
    /// Minimum stored entries before the full edition asks for a review.
    #[serde(default = "default_entry_threshold")]
    pub entry_threshold: u64,
    /// Days between first sighting and the review request.
    #[serde(default = "default_review_delay_days")]
    pub review_delay_days: u32,
    /// Days between lite activation and the review request.
    #[serde(default = "default_activation_delay_days")]
    pub activation_delay_days: u32,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            entry_threshold: default_entry_threshold(),
            review_delay_days: default_review_delay_days(),
            activation_delay_days: default_activation_delay_days(),
        }
    }
}

/// Notice CSS class settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoticeSettings {
    /// CSS class applied to the notice container.
    #[serde(default = "default_notice_class")]
    pub class: String,
    /// CSS class wiring prompt actions to the host dismissal handler.
    #[serde(default = "default_dismiss_class")]
    pub dismiss_class: String,
    /// Extra CSS class applied to the outbound review action.
    #[serde(default = "default_outbound_class")]
    pub outbound_class: String,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            class: default_notice_class(),
            dismiss_class: default_dismiss_class(),
            outbound_class: default_outbound_class(),
        }
    }
}

/// Page catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSettings {
    /// Add-ons listing page identifier.
    #[serde(default = "default_addons_page")]
    pub addons: String,
    /// Entries listing page identifier.
    #[serde(default = "default_entries_page")]
    pub entries: String,
    /// Exact allow-list of pages that show the footer promotion.
    #[serde(default = "default_promoted_pages")]
    pub promoted: Vec<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            addons: default_addons_page(),
            entries: default_entries_page(),
            promoted: default_promoted_pages(),
        }
    }
}

/// Link catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkSettings {
    /// Review submission page on the marketplace.
    #[serde(default = "default_review_url")]
    pub review: String,
    /// Untracked support forum used by the lite edition.
    #[serde(default = "default_lite_support_url")]
    pub lite_support: String,
    /// Marketing base for the full-edition support link.
    #[serde(default = "default_support_base")]
    pub support_base: String,
    /// Marketing base for the docs link.
    #[serde(default = "default_docs_base")]
    pub docs_base: String,
    /// Fixed community group URL.
    #[serde(default = "default_community_url")]
    pub community: String,
    /// Host-relative admin link to the free plugins page.
    #[serde(default = "default_free_plugins_page")]
    pub free_plugins_page: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            review: default_review_url(),
            lite_support: default_lite_support_url(),
            support_base: default_support_base(),
            docs_base: default_docs_base(),
            community: default_community_url(),
            free_plugins_page: default_free_plugins_page(),
        }
    }
}

/// Campaign tracking settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignSettings {
    /// Campaign source label for tracked marketing links.
    #[serde(default = "default_campaign_source")]
    pub source: String,
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            source: default_campaign_source(),
        }
    }
}

/// Top-level prompter settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PrompterSettings {
    /// Product identity.
    #[serde(default)]
    pub product: ProductSettings,
    /// Thresholds and delays.
    #[serde(default)]
    pub review: ReviewSettings,
    /// Notice CSS classes.
    #[serde(default)]
    pub notice: NoticeSettings,
    /// Page catalog.
    #[serde(default)]
    pub pages: PageSettings,
    /// Link catalog.
    #[serde(default)]
    pub links: LinkSettings,
    /// Campaign tracking.
    #[serde(default)]
    pub campaign: CampaignSettings,
}

impl PrompterSettings {
    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document does not match the
    /// settings schema.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        toml::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it does not match the settings schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let document =
            std::fs::read_to_string(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_toml_str(&document)
    }

    /// Validates settings without building an engine config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("product.name", &self.product.name)?;
        require_non_empty("product.namespace", &self.product.namespace)?;
        require_non_empty("product.form_content_type", &self.product.form_content_type)?;
        if self.review.entry_threshold == 0 {
            return Err(ConfigError::Validation(
                "review.entry_threshold must be greater than zero".to_string(),
            ));
        }
        if self.review.review_delay_days == 0 {
            return Err(ConfigError::Validation(
                "review.review_delay_days must be greater than zero".to_string(),
            ));
        }
        if self.review.activation_delay_days == 0 {
            return Err(ConfigError::Validation(
                "review.activation_delay_days must be greater than zero".to_string(),
            ));
        }
        require_non_empty("notice.class", &self.notice.class)?;
        require_non_empty("notice.dismiss_class", &self.notice.dismiss_class)?;
        require_non_empty("notice.outbound_class", &self.notice.outbound_class)?;
        require_non_empty("pages.addons", &self.pages.addons)?;
        require_non_empty("pages.entries", &self.pages.entries)?;
        if self.pages.promoted.is_empty() {
            return Err(ConfigError::Validation("pages.promoted must not be empty".to_string()));
        }
        for page in &self.pages.promoted {
            require_non_empty("pages.promoted entries", page)?;
        }
        parse_link("links.review", &self.links.review)?;
        parse_link("links.lite_support", &self.links.lite_support)?;
        parse_link("links.support_base", &self.links.support_base)?;
        parse_link("links.docs_base", &self.links.docs_base)?;
        parse_link("links.community", &self.links.community)?;
        require_non_empty("links.free_plugins_page", &self.links.free_plugins_page)?;
        require_non_empty("campaign.source", &self.campaign.source)?;
        Ok(())
    }

    /// Validates settings and builds the engine configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a rule is violated.
    pub fn into_config(self) -> Result<PrompterConfig, ConfigError> {
        self.validate()?;
        Ok(PrompterConfig {
            product_name: self.product.name,
            namespace: self.product.namespace,
            form_content_type: ContentTypeId::new(self.product.form_content_type),
            entry_threshold: self.review.entry_threshold,
            review_delay: Duration::days(i64::from(self.review.review_delay_days)),
            activation_delay: Duration::days(i64::from(self.review.activation_delay_days)),
            notice_class: self.notice.class,
            dismiss_class: self.notice.dismiss_class,
            outbound_class: self.notice.outbound_class,
            campaign_source: self.campaign.source,
            pages: PrompterPages {
                addons: PageId::new(self.pages.addons),
                entries: PageId::new(self.pages.entries),
                promoted: self.pages.promoted.into_iter().map(PageId::new).collect(),
            },
            links: PrompterLinks {
                review_url: parse_link("links.review", &self.links.review)?,
                lite_support_url: parse_link("links.lite_support", &self.links.lite_support)?,
                support_base: parse_link("links.support_base", &self.links.support_base)?,
                docs_base: parse_link("links.docs_base", &self.links.docs_base)?,
                community_url: parse_link("links.community", &self.links.community)?,
                free_plugins_page: self.links.free_plugins_page,
            },
        })
    }
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Rejects empty or whitespace-only values.
fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Parses an absolute URL setting.
fn parse_link(field: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|err| ConfigError::Validation(format!("{field}: {err}")))
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default product display name.
fn default_product_name() -> String {
    "FormWorks".to_string()
}

/// Default product namespace.
fn default_namespace() -> String {
    "formworks".to_string()
}

/// Default form content type.
fn default_form_content_type() -> String {
    "formworks_form".to_string()
}

/// Default entry threshold for the full edition.
const fn default_entry_threshold() -> u64 {
    50
}

/// Default review delay in days.
const fn default_review_delay_days() -> u32 {
    1
}

/// Default activation delay in days.
const fn default_activation_delay_days() -> u32 {
    14
}

/// Default notice container class.
fn default_notice_class() -> String {
    "formworks-review-notice".to_string()
}

/// Default dismissal handler class.
fn default_dismiss_class() -> String {
    "formworks-notice-dismiss".to_string()
}

/// Default outbound action class.
fn default_outbound_class() -> String {
    "formworks-review-out".to_string()
}

/// Default add-ons page identifier.
fn default_addons_page() -> String {
    "formworks-addons".to_string()
}

/// Default entries page identifier.
fn default_entries_page() -> String {
    "formworks-entries".to_string()
}

/// Default footer promotion allow-list.
fn default_promoted_pages() -> Vec<String> {
    [
        "formworks-about",
        "formworks-addons",
        "formworks-analytics",
        "formworks-community",
        "formworks-entries",
        "formworks-overview",
        "formworks-payments",
        "formworks-settings",
        "formworks-integrations",
        "formworks-templates",
        "formworks-tools",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// Default review submission URL.
fn default_review_url() -> String {
    "https://marketplace.formworks.app/formworks/reviews/?rating=5".to_string()
}

/// Default lite support forum URL.
fn default_lite_support_url() -> String {
    "https://forum.formworks.app/".to_string()
}

/// Default support marketing base URL.
fn default_support_base() -> String {
    "https://formworks.app/account/support/".to_string()
}

/// Default docs marketing base URL.
fn default_docs_base() -> String {
    "https://formworks.app/docs/".to_string()
}

/// Default community group URL.
fn default_community_url() -> String {
    "https://community.formworks.app/groups/formworks-vip/".to_string()
}

/// Default host-relative free plugins link.
fn default_free_plugins_page() -> String {
    "admin.php?page=formworks-about".to_string()
}

/// Default campaign source label.
fn default_campaign_source() -> String {
    "Plugin Footer".to_string()
}

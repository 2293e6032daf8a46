// crates/review-prompt-core/src/runtime/prompter.rs
// ============================================================================
// Module: Review Prompter Engine
// Description: Eligibility evaluation and footer decoration for review prompts.
// Purpose: Decide per admin page load whether to queue a review-request notice.
// Dependencies: crate::core, crate::interfaces, serde_json, thiserror, time, url
// ============================================================================

//! ## Overview
//! The prompter evaluates guard conditions against the persisted notice and
//! activation ledgers and, when satisfied, queues a review-request notice via
//! the host's notice subsystem. It also decorates the admin footer with a
//! rating line and a promotion block on product pages. All collaborators are
//! injected; the engine owns no ambient state and never reads wall-clock
//! time. The only mutation the engine performs is the one-time first-seen
//! timestamp write, which is idempotent in effect under concurrent loads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use time::Duration;
use url::Url;

use crate::core::content::FooterLink;
use crate::core::content::PromotionBlock;
use crate::core::content::ReviewPrompt;
use crate::core::content::campaign_url;
use crate::core::content::rating_footer_text;
use crate::core::content::render_notice_body;
use crate::core::identifiers::ContentTypeId;
use crate::core::identifiers::Edition;
use crate::core::identifiers::NoticeSlug;
use crate::core::identifiers::PageId;
use crate::core::identifiers::ScreenId;
use crate::core::state::ActivationLedger;
use crate::core::state::NoticeLedger;
use crate::core::state::PromptDecision;
use crate::core::state::REVIEW_LITE_REQUEST_SLUG;
use crate::core::state::REVIEW_REQUEST_SLUG;
use crate::core::state::SETTING_ACTIVATION;
use crate::core::state::SETTING_ADMIN_NOTICES;
use crate::core::state::SETTING_HIDE_ANNOUNCEMENTS;
use crate::core::state::SETTING_INTEGRATION_NOTICE;
use crate::core::state::SuppressReason;
use crate::core::time::Timestamp;
use crate::interfaces::ContentTypeCounter;
use crate::interfaces::CounterError;
use crate::interfaces::DismissScope;
use crate::interfaces::EntryCounter;
use crate::interfaces::EntryFilter;
use crate::interfaces::NoticeError;
use crate::interfaces::NoticeOptions;
use crate::interfaces::NoticeRenderer;
use crate::interfaces::PageIdentity;
use crate::interfaces::PrivilegeCheck;
use crate::interfaces::PromptEvent;
use crate::interfaces::PromptObserver;
use crate::interfaces::SettingsError;
use crate::interfaces::SettingsStore;
use crate::interfaces::TemplateError;
use crate::interfaces::TemplateRenderer;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Template name for the footer promotion block.
pub const PROMOTION_TEMPLATE: &str = "admin/promotion";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Page catalog for guard checks and the footer promotion allow-list.
///
/// # Invariants
/// - `promoted` is matched by exact equality against the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrompterPages {
    /// Add-ons listing page; never carries review prompts.
    pub addons: PageId,
    /// Entries listing page; the lite path never prompts there.
    pub entries: PageId,
    /// Exact allow-list of pages that show the footer promotion.
    pub promoted: Vec<PageId>,
}

/// Link catalog for review, support, and promotion destinations.
///
/// # Invariants
/// - `free_plugins_page` is host-relative and opens in the same tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrompterLinks {
    /// Review submission page on the marketplace.
    pub review_url: Url,
    /// Untracked support forum used by the lite edition.
    pub lite_support_url: Url,
    /// Marketing base for the full-edition support link.
    pub support_base: Url,
    /// Marketing base for the docs link.
    pub docs_base: Url,
    /// Fixed community group URL.
    pub community_url: Url,
    /// Host-relative admin link to the free plugins page.
    pub free_plugins_page: String,
}

/// Review prompter configuration.
///
/// # Invariants
/// - Delays and thresholds are host policy; the engine applies them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrompterConfig {
    /// Product display name used in copy.
    pub product_name: String,
    /// Namespace substring identifying product admin screens.
    pub namespace: String,
    /// Content type registered for forms.
    pub form_content_type: ContentTypeId,
    /// Minimum stored entries before the full edition asks for a review.
    pub entry_threshold: u64,
    /// Grace period between first sighting and the review request.
    pub review_delay: Duration,
    /// Grace period between lite activation and the review request.
    pub activation_delay: Duration,
    /// CSS class applied to the notice container.
    pub notice_class: String,
    /// CSS class wiring prompt actions to the host dismissal handler.
    pub dismiss_class: String,
    /// Extra CSS class applied to the outbound review action.
    pub outbound_class: String,
    /// Campaign source label for tracked marketing links.
    pub campaign_source: String,
    /// Page catalog.
    pub pages: PrompterPages,
    /// Link catalog.
    pub links: PrompterLinks,
}

impl PrompterConfig {
    /// Returns the stock FormWorks catalog.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when a catalog URL fails to parse.
    pub fn formworks() -> Result<Self, url::ParseError> {
        let promoted = [
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
        ];
        Ok(Self {
            product_name: "FormWorks".to_string(),
            namespace: "formworks".to_string(),
            form_content_type: ContentTypeId::new("formworks_form"),
            entry_threshold: 50,
            review_delay: Duration::days(1),
            activation_delay: Duration::days(14),
            notice_class: "formworks-review-notice".to_string(),
            dismiss_class: "formworks-notice-dismiss".to_string(),
            outbound_class: "formworks-review-out".to_string(),
            campaign_source: "Plugin Footer".to_string(),
            pages: PrompterPages {
                addons: PageId::new("formworks-addons"),
                entries: PageId::new("formworks-entries"),
                promoted: promoted.iter().map(|page| PageId::new(*page)).collect(),
            },
            links: PrompterLinks {
                review_url: Url::parse(
                    "https://marketplace.formworks.app/formworks/reviews/?rating=5",
                )?,
                lite_support_url: Url::parse("https://forum.formworks.app/")?,
                support_base: Url::parse("https://formworks.app/account/support/")?,
                docs_base: Url::parse("https://formworks.app/docs/")?,
                community_url: Url::parse("https://community.formworks.app/groups/formworks-vip/")?,
                free_plugins_page: "admin.php?page=formworks-about".to_string(),
            },
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Review prompter errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PrompterError {
    /// Settings store failure.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    /// Notice renderer failure.
    #[error("notice error: {0}")]
    Notice(#[from] NoticeError),
    /// Counter backend failure.
    #[error("counter error: {0}")]
    Counter(#[from] CounterError),
    /// Template renderer failure.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    /// Persisted ledger failed to deserialize.
    #[error("invalid persisted state: {0}")]
    InvalidState(String),
}

// ============================================================================
// SECTION: Collaborators
// ============================================================================

/// Injected collaborators for the review prompter.
///
/// # Invariants
/// - `entries` is `None` on installs without the entry storage module.
#[derive(Clone)]
pub struct PrompterCollaborators {
    /// Shared settings store.
    pub settings: Arc<dyn SettingsStore + Send + Sync>,
    /// Host notice subsystem.
    pub notices: Arc<dyn NoticeRenderer + Send + Sync>,
    /// Host view of the current admin request.
    pub pages: Arc<dyn PageIdentity + Send + Sync>,
    /// Host privilege check.
    pub privileges: Arc<dyn PrivilegeCheck + Send + Sync>,
    /// Published-form counter.
    pub forms: Arc<dyn ContentTypeCounter + Send + Sync>,
    /// Stored-entry counter, when the entry module is installed.
    pub entries: Option<Arc<dyn EntryCounter + Send + Sync>>,
    /// Host templating layer.
    pub templates: Arc<dyn TemplateRenderer + Send + Sync>,
    /// Optional decision observer.
    pub observer: Option<Arc<dyn PromptObserver + Send + Sync>>,
}

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Review prompter engine.
pub struct ReviewPrompter {
    /// Injected collaborators.
    collaborators: PrompterCollaborators,
    /// Product edition installed on the host.
    edition: Edition,
    /// Engine configuration.
    config: PrompterConfig,
}

impl ReviewPrompter {
    /// Creates a new prompter from collaborators, edition, and configuration.
    #[must_use]
    pub const fn new(
        collaborators: PrompterCollaborators,
        edition: Edition,
        config: PrompterConfig,
    ) -> Self {
        Self {
            collaborators,
            edition,
            config,
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &PrompterConfig {
        &self.config
    }

    /// Evaluates review-prompt eligibility for one admin page load.
    ///
    /// Guards short-circuit in order: privilege, the announcements opt-out,
    /// and the add-ons page. The first-ever pass persists a first-seen
    /// timestamp and starts the grace period without showing anything.
    ///
    /// # Errors
    ///
    /// Returns [`PrompterError`] when a collaborator fails; guard failures
    /// are not errors and report as [`PromptDecision::Suppressed`].
    pub fn evaluate(&self, now: Timestamp) -> Result<PromptDecision, PrompterError> {
        let decision = self.evaluate_inner(now)?;
        if let Some(observer) = &self.collaborators.observer {
            observer.record(&PromptEvent {
                decision: decision.clone(),
                evaluated_at: now,
            });
        }
        Ok(decision)
    }

    /// Runs the evaluation pass without observer notification.
    fn evaluate_inner(&self, now: Timestamp) -> Result<PromptDecision, PrompterError> {
        if !self.collaborators.privileges.is_top_level_admin() {
            return Ok(suppressed(SuppressReason::NotAdmin));
        }
        if self.setting_is_truthy(SETTING_HIDE_ANNOUNCEMENTS)? {
            return Ok(suppressed(SuppressReason::AnnouncementsHidden));
        }
        if self.on_page(&self.config.pages.addons) {
            return Ok(suppressed(SuppressReason::BlockedPage));
        }

        let mut notices = self.load_notices()?;
        let slug = NoticeSlug::new(REVIEW_REQUEST_SLUG);
        if notices.begin_grace(slug.clone(), now) {
            self.save_notices(&notices)?;
            return Ok(PromptDecision::GraceStarted { slug });
        }
        let Some(record) = notices.record(&slug) else {
            return Err(PrompterError::InvalidState(format!("missing {slug} record")));
        };
        if record.dismissed {
            return Ok(suppressed(SuppressReason::Dismissed));
        }
        if !record.time.delay_elapsed(self.config.review_delay, now) {
            return Ok(suppressed(SuppressReason::Pending));
        }

        // The logic differs depending on what's at our disposal.
        match (&self.collaborators.entries, self.edition.is_full()) {
            (Some(entries), true) => self.prompt_full(entries.as_ref()),
            _ => self.prompt_lite(now),
        }
    }

    /// Full-edition path: prompt only once the site stores enough entries.
    fn prompt_full(
        &self,
        entries: &(dyn EntryCounter + Send + Sync),
    ) -> Result<PromptDecision, PrompterError> {
        let filter = EntryFilter {
            limit: Some(self.config.entry_threshold),
        };
        let total = entries.count(&filter, true)?;
        if total < self.config.entry_threshold {
            return Ok(suppressed(SuppressReason::LowEngagement));
        }
        self.show_prompt(NoticeSlug::new(REVIEW_REQUEST_SLUG))
    }

    /// Lite-edition path: prompt after the activation grace period, once at
    /// least one form exists and no competing notice is active.
    fn prompt_lite(&self, now: Timestamp) -> Result<PromptDecision, PrompterError> {
        if self.on_page(&self.config.pages.entries) {
            return Ok(suppressed(SuppressReason::BlockedPage));
        }

        let mut activation = self.load_activation()?;
        let Some(installed_at) = activation.installed_at(Edition::Lite) else {
            activation.begin_grace(Edition::Lite, now);
            self.save_activation(&activation)?;
            return Ok(PromptDecision::GraceStarted {
                slug: NoticeSlug::new(REVIEW_LITE_REQUEST_SLUG),
            });
        };
        if !installed_at.delay_elapsed(self.config.activation_delay, now) {
            return Ok(suppressed(SuppressReason::Pending));
        }

        let published = self
            .collaborators
            .forms
            .count_published(&self.config.form_content_type)?;
        if published == 0 {
            return Ok(suppressed(SuppressReason::NoPublishedForms));
        }

        // Hold off while the integration notice competes for attention.
        if self.setting_is_truthy(SETTING_INTEGRATION_NOTICE)? {
            return Ok(suppressed(SuppressReason::CompetingNotice));
        }

        self.show_prompt(NoticeSlug::new(REVIEW_LITE_REQUEST_SLUG))
    }

    /// Queues the review-request notice under the given slug.
    fn show_prompt(&self, slug: NoticeSlug) -> Result<PromptDecision, PrompterError> {
        let prompt = ReviewPrompt::standard(&self.config.product_name, &self.config.links.review_url);
        let body =
            render_notice_body(&prompt, &self.config.dismiss_class, &self.config.outbound_class);
        let options = NoticeOptions {
            dismiss: DismissScope::Global,
            slug: slug.clone(),
            autop: false,
            class: self.config.notice_class.clone(),
        };
        self.collaborators.notices.info(&body, &options)?;
        Ok(PromptDecision::Prompted { slug })
    }

    /// Replaces the admin footer text with the rating line on product screens.
    ///
    /// Non-product screens get `text` back unchanged.
    #[must_use]
    pub fn decorate_footer_text(&self, text: &str, screen: Option<&ScreenId>) -> String {
        let Some(screen) = screen else {
            return text.to_string();
        };
        if !screen.in_namespace(&self.config.namespace) {
            return text.to_string();
        }
        rating_footer_text(&self.config.product_name, &self.config.links.review_url)
    }

    /// Renders the footer promotion block on allow-listed product pages.
    ///
    /// Returns `Ok(None)` without invoking the template renderer when the
    /// current page is not on the allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`PrompterError`] when template rendering fails.
    pub fn render_footer_promotion(&self) -> Result<Option<String>, PrompterError> {
        let Some(page) = self.collaborators.pages.current_page() else {
            return Ok(None);
        };
        if !self.config.pages.promoted.contains(&page) {
            return Ok(None);
        }
        let block = self.promotion_block();
        let markup = self.collaborators.templates.render(PROMOTION_TEMPLATE, &block, true)?;
        Ok(Some(markup))
    }

    /// Builds the four-link footer promotion block.
    fn promotion_block(&self) -> PromotionBlock {
        let links = &self.config.links;
        let source = &self.config.campaign_source;
        let support_url = if self.edition.is_full() {
            campaign_url(&links.support_base, source, "Contact Support").to_string()
        } else {
            links.lite_support_url.to_string()
        };
        PromotionBlock {
            title: format!("Made with \u{2665} by the {} team", self.config.product_name),
            links: vec![
                FooterLink {
                    label: "Support".to_string(),
                    url: support_url,
                    new_tab: true,
                },
                FooterLink {
                    label: "Docs".to_string(),
                    url: campaign_url(&links.docs_base, source, "Plugin Documentation").to_string(),
                    new_tab: true,
                },
                FooterLink {
                    label: "Community".to_string(),
                    url: links.community_url.to_string(),
                    new_tab: true,
                },
                FooterLink {
                    label: "Free Plugins".to_string(),
                    url: links.free_plugins_page.clone(),
                    new_tab: false,
                },
            ],
        }
    }

    /// Returns true when the current page matches `page`.
    fn on_page(&self, page: &PageId) -> bool {
        self.collaborators.pages.current_page().is_some_and(|current| &current == page)
    }

    /// Reads a host-owned settings flag and applies truthiness rules.
    fn setting_is_truthy(&self, key: &str) -> Result<bool, PrompterError> {
        let value = self.collaborators.settings.get(key)?;
        Ok(value.as_ref().is_some_and(value_is_truthy))
    }

    /// Loads the notice ledger; absence means an empty ledger.
    fn load_notices(&self) -> Result<NoticeLedger, PrompterError> {
        match self.collaborators.settings.get(SETTING_ADMIN_NOTICES)? {
            None => Ok(NoticeLedger::new()),
            Some(value) => serde_json::from_value(value)
                .map_err(|err| PrompterError::InvalidState(err.to_string())),
        }
    }

    /// Persists the notice ledger.
    fn save_notices(&self, ledger: &NoticeLedger) -> Result<(), PrompterError> {
        let value = serde_json::to_value(ledger)
            .map_err(|err| PrompterError::InvalidState(err.to_string()))?;
        self.collaborators.settings.set(SETTING_ADMIN_NOTICES, value)?;
        Ok(())
    }

    /// Loads the activation ledger; absence means an empty ledger.
    fn load_activation(&self) -> Result<ActivationLedger, PrompterError> {
        match self.collaborators.settings.get(SETTING_ACTIVATION)? {
            None => Ok(ActivationLedger::new()),
            Some(value) => serde_json::from_value(value)
                .map_err(|err| PrompterError::InvalidState(err.to_string())),
        }
    }

    /// Persists the activation ledger.
    fn save_activation(&self, ledger: &ActivationLedger) -> Result<(), PrompterError> {
        let value = serde_json::to_value(ledger)
            .map_err(|err| PrompterError::InvalidState(err.to_string()))?;
        self.collaborators.settings.set(SETTING_ACTIVATION, value)?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Shorthand for a suppressed decision.
const fn suppressed(reason: SuppressReason) -> PromptDecision {
    PromptDecision::Suppressed { reason }
}

/// Applies host truthiness rules to a settings value.
///
/// Booleans are taken as-is; numbers are truthy when non-zero; strings are
/// truthy unless empty or `"0"`; arrays and objects are truthy unless empty;
/// null is falsy.
fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

// crates/review-prompt-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared fake collaborators for review prompter tests.
// Purpose: Provide reusable, deterministic host fakes for eligibility tests.
// Dependencies: review-prompt-core, serde_json
// ============================================================================

//! ## Overview
//! Shared fixtures: recording fakes for every host collaborator plus a
//! `Host` bundle that wires them into `PrompterCollaborators`.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use review_prompt_core::ContentTypeCounter;
use review_prompt_core::ContentTypeId;
use review_prompt_core::CounterError;
use review_prompt_core::Edition;
use review_prompt_core::EntryCounter;
use review_prompt_core::EntryFilter;
use review_prompt_core::InMemorySettingsStore;
use review_prompt_core::NoticeError;
use review_prompt_core::NoticeOptions;
use review_prompt_core::NoticeRenderer;
use review_prompt_core::PageId;
use review_prompt_core::PageIdentity;
use review_prompt_core::PrivilegeCheck;
use review_prompt_core::PromotionBlock;
use review_prompt_core::PromptEvent;
use review_prompt_core::PromptObserver;
use review_prompt_core::PrompterCollaborators;
use review_prompt_core::PrompterConfig;
use review_prompt_core::ReviewPrompter;
use review_prompt_core::SETTING_ACTIVATION;
use review_prompt_core::SETTING_ADMIN_NOTICES;
use review_prompt_core::ScreenId;
use review_prompt_core::SettingsStore;
use review_prompt_core::TemplateError;
use review_prompt_core::TemplateRenderer;
use serde_json::json;

// ============================================================================
// SECTION: Recording Fakes
// ============================================================================

/// Notice captured by the recording renderer.
#[derive(Debug, Clone)]
pub struct RecordedNotice {
    /// Rendered HTML body.
    pub body: String,
    /// Options the engine passed along.
    pub options: NoticeOptions,
}

/// Notice renderer that records every queued notice.
#[derive(Debug, Default)]
pub struct RecordingNoticeRenderer {
    /// Captured notices in queue order.
    pub shown: Mutex<Vec<RecordedNotice>>,
}

impl NoticeRenderer for RecordingNoticeRenderer {
    fn info(&self, body: &str, options: &NoticeOptions) -> Result<(), NoticeError> {
        let mut guard = self.shown.lock().unwrap();
        guard.push(RecordedNotice {
            body: body.to_string(),
            options: options.clone(),
        });
        Ok(())
    }
}

/// Page identity with scriptable screen and page values.
#[derive(Debug, Default)]
pub struct ScriptedPageIdentity {
    /// Current screen identifier.
    screen: Mutex<Option<ScreenId>>,
    /// Current page query parameter.
    page: Mutex<Option<PageId>>,
}

impl ScriptedPageIdentity {
    /// Sets the current page query parameter.
    pub fn set_page(&self, page: Option<&str>) {
        let mut guard = self.page.lock().unwrap();
        *guard = page.map(PageId::new);
    }

    /// Sets the current screen identifier.
    pub fn set_screen(&self, screen: Option<&str>) {
        let mut guard = self.screen.lock().unwrap();
        *guard = screen.map(ScreenId::new);
    }
}

impl PageIdentity for ScriptedPageIdentity {
    fn screen_id(&self) -> Option<ScreenId> {
        self.screen.lock().unwrap().clone()
    }

    fn current_page(&self) -> Option<PageId> {
        self.page.lock().unwrap().clone()
    }
}

/// Privilege check with a fixed answer.
#[derive(Debug)]
pub struct FixedPrivilege(pub bool);

impl PrivilegeCheck for FixedPrivilege {
    fn is_top_level_admin(&self) -> bool {
        self.0
    }
}

/// Content type counter with a fixed published count.
#[derive(Debug)]
pub struct FixedFormCounter(pub u64);

impl ContentTypeCounter for FixedFormCounter {
    fn count_published(&self, _content_type: &ContentTypeId) -> Result<u64, CounterError> {
        Ok(self.0)
    }
}

/// Entry counter with a fixed total that records every call.
#[derive(Debug, Default)]
pub struct FixedEntryCounter {
    /// Total entry count the backend reports.
    pub total: u64,
    /// Captured `(filter, total_only)` calls.
    pub calls: Mutex<Vec<(EntryFilter, bool)>>,
}

impl EntryCounter for FixedEntryCounter {
    fn count(&self, filter: &EntryFilter, total_only: bool) -> Result<u64, CounterError> {
        let mut guard = self.calls.lock().unwrap();
        guard.push((*filter, total_only));
        Ok(self.total)
    }
}

/// Template renderer that records calls and returns canned markup.
#[derive(Debug, Default)]
pub struct RecordingTemplateRenderer {
    /// Captured `(template, data)` calls.
    pub calls: Mutex<Vec<(String, PromotionBlock)>>,
}

impl TemplateRenderer for RecordingTemplateRenderer {
    fn render(
        &self,
        template: &str,
        data: &PromotionBlock,
        _return_string: bool,
    ) -> Result<String, TemplateError> {
        let mut guard = self.calls.lock().unwrap();
        guard.push((template.to_string(), data.clone()));
        Ok(format!("<div class=\"promotion\">{}</div>", data.title))
    }
}

/// Observer that records every prompt event.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// Captured events in evaluation order.
    pub events: Mutex<Vec<PromptEvent>>,
}

impl PromptObserver for RecordingObserver {
    fn record(&self, event: &PromptEvent) {
        let mut guard = self.events.lock().unwrap();
        guard.push(event.clone());
    }
}

// ============================================================================
// SECTION: Host Bundle
// ============================================================================

/// Bundle of fake collaborators with inspection handles.
pub struct Host {
    /// In-memory settings store.
    pub settings: Arc<InMemorySettingsStore>,
    /// Recording notice renderer.
    pub notices: Arc<RecordingNoticeRenderer>,
    /// Scriptable page identity.
    pub pages: Arc<ScriptedPageIdentity>,
    /// Fixed privilege check.
    pub privileges: Arc<FixedPrivilege>,
    /// Fixed form counter.
    pub forms: Arc<FixedFormCounter>,
    /// Optional fixed entry counter.
    pub entries: Option<Arc<FixedEntryCounter>>,
    /// Recording template renderer.
    pub templates: Arc<RecordingTemplateRenderer>,
    /// Recording observer.
    pub observer: Arc<RecordingObserver>,
}

impl Host {
    /// Creates a host with admin privilege and the given counters.
    pub fn new(published_forms: u64, entries: Option<u64>) -> Self {
        Self {
            settings: Arc::new(InMemorySettingsStore::new()),
            notices: Arc::new(RecordingNoticeRenderer::default()),
            pages: Arc::new(ScriptedPageIdentity::default()),
            privileges: Arc::new(FixedPrivilege(true)),
            forms: Arc::new(FixedFormCounter(published_forms)),
            entries: entries.map(|total| {
                Arc::new(FixedEntryCounter {
                    total,
                    calls: Mutex::new(Vec::new()),
                })
            }),
            templates: Arc::new(RecordingTemplateRenderer::default()),
            observer: Arc::new(RecordingObserver::default()),
        }
    }

    /// Replaces the privilege check answer.
    pub fn with_privilege(mut self, admin: bool) -> Self {
        self.privileges = Arc::new(FixedPrivilege(admin));
        self
    }

    /// Wires the fakes into engine collaborators.
    pub fn collaborators(&self) -> PrompterCollaborators {
        PrompterCollaborators {
            settings: self.settings.clone(),
            notices: self.notices.clone(),
            pages: self.pages.clone(),
            privileges: self.privileges.clone(),
            forms: self.forms.clone(),
            entries: self
                .entries
                .clone()
                .map(|counter| counter as Arc<dyn EntryCounter + Send + Sync>),
            templates: self.templates.clone(),
            observer: Some(self.observer.clone()),
        }
    }

    /// Builds a prompter over this host with the stock catalog.
    pub fn prompter(&self, edition: Edition) -> ReviewPrompter {
        let config = PrompterConfig::formworks().unwrap();
        ReviewPrompter::new(self.collaborators(), edition, config)
    }

    /// Seeds a notice record for `slug`.
    pub fn seed_notice(&self, slug: &str, time: i64, dismissed: bool) {
        self.settings
            .set(
                SETTING_ADMIN_NOTICES,
                json!({ slug: { "time": time, "dismissed": dismissed } }),
            )
            .unwrap();
    }

    /// Seeds the lite activation timestamp.
    pub fn seed_activation(&self, time: i64) {
        self.settings.set(SETTING_ACTIVATION, json!({ "lite": time })).unwrap();
    }
}

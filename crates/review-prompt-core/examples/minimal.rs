// crates/review-prompt-core/examples/minimal.rs
// ============================================================================
// Module: Review Prompt Minimal Example
// Description: Minimal end-to-end evaluation using in-memory adapters.
// Purpose: Demonstrate the grace period and a lite-edition prompt.
// Dependencies: review-prompt-core
// ============================================================================

//! ## Overview
//! Runs three evaluation passes against in-memory collaborators: the first
//! starts the grace period, the second waits out the activation delay, and
//! the third queues the lite review prompt.

use std::sync::Arc;
use std::sync::Mutex;

use review_prompt_core::ContentTypeCounter;
use review_prompt_core::ContentTypeId;
use review_prompt_core::CounterError;
use review_prompt_core::Edition;
use review_prompt_core::InMemorySettingsStore;
use review_prompt_core::NoticeError;
use review_prompt_core::NoticeOptions;
use review_prompt_core::NoticeRenderer;
use review_prompt_core::PageId;
use review_prompt_core::PageIdentity;
use review_prompt_core::PrivilegeCheck;
use review_prompt_core::PromotionBlock;
use review_prompt_core::PromptDecision;
use review_prompt_core::PrompterCollaborators;
use review_prompt_core::PrompterConfig;
use review_prompt_core::ReviewPrompter;
use review_prompt_core::ScreenId;
use review_prompt_core::TemplateError;
use review_prompt_core::TemplateRenderer;
use review_prompt_core::Timestamp;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Notice renderer that collects queued notice slugs.
#[derive(Default)]
struct ExampleNotices {
    /// Queued notice slugs in order.
    queued: Mutex<Vec<String>>,
}

impl NoticeRenderer for ExampleNotices {
    fn info(&self, _body: &str, options: &NoticeOptions) -> Result<(), NoticeError> {
        let mut guard =
            self.queued.lock().map_err(|_| NoticeError::Render("mutex poisoned".to_string()))?;
        guard.push(options.slug.to_string());
        Ok(())
    }
}

/// Page identity pinned to the settings page.
struct ExamplePages;

impl PageIdentity for ExamplePages {
    fn screen_id(&self) -> Option<ScreenId> {
        Some(ScreenId::new("formworks-settings"))
    }

    fn current_page(&self) -> Option<PageId> {
        Some(PageId::new("formworks-settings"))
    }
}

/// Privilege check that always grants admin.
struct ExampleAdmin;

impl PrivilegeCheck for ExampleAdmin {
    fn is_top_level_admin(&self) -> bool {
        true
    }
}

/// Form counter reporting one published form.
struct ExampleForms;

impl ContentTypeCounter for ExampleForms {
    fn count_published(&self, _content_type: &ContentTypeId) -> Result<u64, CounterError> {
        Ok(1)
    }
}

/// Template renderer that emits a plain list.
struct ExampleTemplates;

impl TemplateRenderer for ExampleTemplates {
    fn render(
        &self,
        _template: &str,
        data: &PromotionBlock,
        _return_string: bool,
    ) -> Result<String, TemplateError> {
        let mut markup = format!("<p>{}</p><ul>", data.title);
        for link in &data.links {
            markup.push_str(&format!("<li><a href=\"{}\">{}</a></li>", link.url, link.label));
        }
        markup.push_str("</ul>");
        Ok(markup)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let notices = Arc::new(ExampleNotices::default());
    let collaborators = PrompterCollaborators {
        settings: Arc::new(InMemorySettingsStore::new()),
        notices: notices.clone(),
        pages: Arc::new(ExamplePages),
        privileges: Arc::new(ExampleAdmin),
        forms: Arc::new(ExampleForms),
        entries: None,
        templates: Arc::new(ExampleTemplates),
        observer: None,
    };
    let prompter =
        ReviewPrompter::new(collaborators, Edition::Lite, PrompterConfig::formworks()?);

    let day = 86_400_i64;
    let install = Timestamp::from_unix_seconds(1_700_000_000);

    // First sighting: the notice grace period starts, nothing is shown.
    let first = prompter.evaluate(install)?;
    if !matches!(first, PromptDecision::GraceStarted { .. }) {
        return Err(Box::new(ExampleError("expected the notice grace period to start")));
    }

    // A day later the notice is eligible, but activation grace begins instead.
    let second = prompter.evaluate(Timestamp::from_unix_seconds(install.unix_seconds() + day))?;
    if !matches!(second, PromptDecision::GraceStarted { .. }) {
        return Err(Box::new(ExampleError("expected the activation grace period to start")));
    }

    // Fifteen days after install every guard passes and the prompt is queued.
    let third =
        prompter.evaluate(Timestamp::from_unix_seconds(install.unix_seconds() + 16 * day))?;
    if !matches!(third, PromptDecision::Prompted { .. }) {
        return Err(Box::new(ExampleError("expected the lite review prompt")));
    }

    let queued = notices
        .queued
        .lock()
        .map_err(|_| ExampleError("notice mutex poisoned"))?;
    if queued.len() != 1 || queued[0] != "review_lite_request" {
        return Err(Box::new(ExampleError("expected exactly one queued notice")));
    }

    let footer = prompter.decorate_footer_text("", Some(&ScreenId::new("formworks-settings")));
    let promotion = prompter.render_footer_promotion()?;
    let _ = (footer, promotion);
    Ok(())
}

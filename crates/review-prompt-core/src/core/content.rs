// crates/review-prompt-core/src/core/content.rs
// ============================================================================
// Module: Prompt and Footer Content
// Description: Structured review-prompt copy, footer links, and markup assembly.
// Purpose: Keep notice and footer markup out of the decision engine.
// Dependencies: crate::core::identifiers, serde, url
// ============================================================================

//! ## Overview
//! Content is modeled as data: a review prompt is a message plus a list of
//! actions, and the footer promotion is a title plus a list of links. The
//! helpers in this module flatten those structures into the HTML fragments
//! the host's notice subsystem and templating layer consume. Labels and
//! product names are escaped on render; URLs come from the typed `url` crate
//! and are emitted verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use url::Url;

// ============================================================================
// SECTION: Review Prompt
// ============================================================================

/// Five-star glyph run used in the footer rating line.
const FIVE_STARS: &str = "&#9733;&#9733;&#9733;&#9733;&#9733;";

/// Single action offered by a review prompt.
///
/// # Invariants
/// - Every action triggers the host's dismissal mechanism for the notice slug.
/// - `href` is `None` for dismiss-only actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAction {
    /// Visible action label.
    pub label: String,
    /// Optional navigation target for outbound actions.
    pub href: Option<Url>,
    /// True when the action navigates off-site in addition to dismissing.
    pub outbound: bool,
}

/// Review prompt content shown inside a dismissible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPrompt {
    /// Leading message paragraph.
    pub message: String,
    /// Ordered action list rendered below the message.
    pub actions: Vec<PromptAction>,
}

impl ReviewPrompt {
    /// Builds the standard three-action review request copy.
    #[must_use]
    pub fn standard(product_name: &str, review_url: &Url) -> Self {
        let message = format!(
            "Hey, there! It looks like you enjoy creating forms with {product_name}. Would you \
             do us a favor and take a few seconds to give us a 5-star review? We'd love to hear \
             from you."
        );
        Self {
            message,
            actions: vec![
                PromptAction {
                    label: "Ok, you deserve it".to_string(),
                    href: Some(review_url.clone()),
                    outbound: true,
                },
                PromptAction {
                    label: "Nope, maybe later".to_string(),
                    href: None,
                    outbound: false,
                },
                PromptAction {
                    label: "I already did".to_string(),
                    href: None,
                    outbound: false,
                },
            ],
        }
    }
}

/// Renders a review prompt into the HTML notice body.
///
/// Every action anchor carries `dismiss_class` so the host's dismissal
/// handler fires on click; outbound actions additionally carry
/// `outbound_class` and a real destination.
#[must_use]
pub fn render_notice_body(
    prompt: &ReviewPrompt,
    dismiss_class: &str,
    outbound_class: &str,
) -> String {
    let mut body = format!("<p>{}</p>\n<p>\n", escape_html(&prompt.message));
    for (index, action) in prompt.actions.iter().enumerate() {
        let href = action.href.as_ref().map_or_else(|| "#".to_string(), Url::to_string);
        let class = if action.outbound {
            format!("{dismiss_class} {outbound_class}")
        } else {
            dismiss_class.to_string()
        };
        body.push_str(&format!(
            "<a href=\"{href}\" class=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&class),
            escape_html(&action.label)
        ));
        if index + 1 < prompt.actions.len() {
            body.push_str("<br>");
        }
        body.push('\n');
    }
    body.push_str("</p>");
    body
}

// ============================================================================
// SECTION: Footer Rating Line
// ============================================================================

/// Builds the footer rating line shown on product admin screens.
///
/// Both anchors point at the same review URL: one wraps the five-star run,
/// one wraps the marketplace label.
#[must_use]
pub fn rating_footer_text(product_name: &str, review_url: &Url) -> String {
    format!(
        "Please rate <strong>{}</strong> <a href=\"{url}\" target=\"_blank\" rel=\"noopener \
         noreferrer\">{FIVE_STARS}</a> on <a href=\"{url}\" target=\"_blank\" \
         rel=\"noopener\">the marketplace</a> to help us spread the word.",
        escape_html(product_name),
        url = review_url
    )
}

// ============================================================================
// SECTION: Footer Promotion
// ============================================================================

/// Single link in the footer promotion block.
///
/// # Invariants
/// - `url` may be host-relative for internal admin links; those open in the
///   same tab (`new_tab` false).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    /// Visible link label.
    pub label: String,
    /// Absolute or host-relative destination.
    pub url: String,
    /// True when the link opens in a new tab.
    pub new_tab: bool,
}

/// Footer promotion block handed to the templating collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotionBlock {
    /// Block title rendered above the links.
    pub title: String,
    /// Ordered link list.
    pub links: Vec<FooterLink>,
}

// ============================================================================
// SECTION: Campaign URLs
// ============================================================================

/// Builds a tracked outbound marketing link from a base URL.
///
/// Appends `utm_campaign`, `utm_medium`, and `utm_content` query parameters;
/// existing query parameters on the base are preserved.
#[must_use]
pub fn campaign_url(base: &Url, source: &str, content: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("utm_campaign", "plugin")
        .append_pair("utm_medium", source)
        .append_pair("utm_content", content);
    url
}

// ============================================================================
// SECTION: Escaping
// ============================================================================

/// Escapes text for safe interpolation into HTML element content and
/// double-quoted attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// ============================================================================
// SECTION: Tests
// ============================================================================

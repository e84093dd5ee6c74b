//! The atomic rule battery.
//!
//! One module per concern; each rule is a stateless [`AtomicRuleImpl`]
//! carrying its own descriptor and guard chain. Result codes are stable
//! branch identifiers local to each rule.
//!
//! [`AtomicRuleImpl`]: crate::rule::AtomicRuleImpl

use a11y_aria::accessible_name;
use a11y_model::{Test, Verdict};
use a11y_page::{ElementRef, Page};

pub(crate) mod aria_hidden_focus;
pub(crate) mod audio_captions;
pub(crate) mod audio_transcript;
pub(crate) mod button_name;
pub(crate) mod context_role;
pub(crate) mod form_field_name;
pub(crate) mod heading_name;
pub(crate) mod html_lang;
pub(crate) mod iframe_name;
pub(crate) mod image_button_name;
pub(crate) mod image_name;
pub(crate) mod lang_valid;
pub(crate) mod link_name;
pub(crate) mod meta_refresh;
pub(crate) mod owned_elements;
pub(crate) mod page_title;
pub(crate) mod role_valid;
pub(crate) mod svg_name;
pub(crate) mod video_captions;
pub(crate) mod video_descriptions;

/// The single-test result most rule branches produce.
pub(crate) fn single(
    rule_code: &str,
    verdict: Verdict,
    result_code: &str,
    element: &ElementRef,
) -> Vec<Test> {
    vec![Test::new(rule_code, verdict, result_code).with_pointer(element.selector())]
}

/// Accessible name present and non-empty after trimming.
pub(crate) fn has_accessible_name(element: &ElementRef, page: &dyn Page) -> bool {
    accessible_name(element, page).is_some_and(|name| !name.trim().is_empty())
}

/// Media element with something to play: a `src` attribute or a `source`
/// child carrying one.
pub(crate) fn has_playable_source(element: &ElementRef, page: &dyn Page) -> bool {
    if element.attribute("src").is_some_and(|src| !src.is_empty()) {
        return true;
    }
    page.query_within("source", element)
        .iter()
        .any(|source| source.attribute("src").is_some_and(|src| !src.is_empty()))
}

/// A child `track` of the given kind.
pub(crate) fn has_track_kind(element: &ElementRef, page: &dyn Page, kind: &str) -> bool {
    page.query_within(&format!("track[kind=\"{kind}\"]"), element)
        .first()
        .is_some()
}

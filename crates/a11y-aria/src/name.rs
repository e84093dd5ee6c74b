//! Recursive accessible-name computation.
//!
//! Resolution follows a fixed precedence: `aria-labelledby`, `aria-label`,
//! embedded-control value (inside widget contexts), tag-specific sources
//! (alt, value/default/title, label association, special child labels),
//! name-from-content, and finally `title`. Label association only applies
//! at the outermost call; recursion falls back to `title`/`placeholder`.
//!
//! A visited set of stable selectors is threaded through each top-level
//! call so self-referencing or mutually-referencing `aria-labelledby`/label
//! chains terminate with an empty contribution.

use std::collections::HashSet;

use a11y_page::{ElementRef, Page};
use tracing::debug;

use crate::constants::{FORM_ELEMENTS, TYPES_WITH_LABEL, default_input_name};
use crate::hidden::is_hidden;
use crate::role::{element_role, is_widget};
use crate::roles::role_spec;

/// One element whose text contributes to an accessible name.
#[derive(Debug, Clone)]
pub struct NameContribution {
    pub element: ElementRef,
    pub text: String,
}

/// The element's accessible name.
///
/// `None` when no naming source applies at all; `Some` otherwise, with the
/// concatenated contribution text (possibly empty, e.g. an `aria-labelledby`
/// whose targets have no text). The name counts as present only when the
/// returned string is non-empty after trimming.
pub fn accessible_name(element: &ElementRef, page: &dyn Page) -> Option<String> {
    let mut visited = HashSet::new();
    let contributions = compute(element, page, false, false, &mut visited)?;
    Some(join(&contributions))
}

/// The ordered elements contributing to the accessible name.
pub fn accessible_name_targets(element: &ElementRef, page: &dyn Page) -> Vec<ElementRef> {
    let mut visited = HashSet::new();
    compute(element, page, false, false, &mut visited)
        .map(|contributions| contributions.into_iter().map(|c| c.element).collect())
        .unwrap_or_default()
}

type Contributions = Option<Vec<NameContribution>>;

fn compute(
    element: &ElementRef,
    page: &dyn Page,
    recursion: bool,
    is_widget_context: bool,
    visited: &mut HashSet<String>,
) -> Contributions {
    let selector = element.selector();
    if !visited.insert(selector.clone()) {
        debug!("accessible-name cycle at {selector}, contributing nothing");
        return None;
    }

    let tag = element.tag_name();
    let input_type = element.attribute("type").map(|t| t.to_lowercase());

    let labelledby = element
        .attribute("aria-labelledby")
        .filter(|refs| any_reference_resolves(refs, element, page));

    if let Some(refs) = labelledby {
        return Some(from_labelledby(element, &refs, page, visited));
    }
    if let Some(label) = element.attribute("aria-label").filter(|v| !v.is_empty()) {
        return Some(vec![contribution(element, label)]);
    }
    if is_widget_context && is_control(element) {
        let value = embedded_control_value(element, page)
            .map(|value| vec![contribution(element, value)]);
        return first_defined([value, attr_source(element, "title")]);
    }

    match tag.as_str() {
        "area" | "img" => first_defined([
            attr_source(element, "alt"),
            attr_source(element, "title"),
        ]),
        "input" if input_type.as_deref() == Some("image") => first_defined([
            attr_source(element, "alt"),
            attr_source(element, "title"),
        ]),
        "input"
            if matches!(input_type.as_deref(), Some("button" | "submit" | "reset")) =>
        {
            let default = input_type
                .as_deref()
                .and_then(default_input_name)
                .map(|name| vec![contribution(element, name.to_string())]);
            first_defined([
                attr_source(element, "value"),
                default,
                attr_source(element, "title"),
            ])
        }
        "input"
            if input_type.is_none()
                || input_type
                    .as_deref()
                    .is_some_and(|t| TYPES_WITH_LABEL.contains(&t)) =>
        {
            if recursion {
                first_defined([
                    attr_source(element, "title"),
                    attr_source(element, "placeholder"),
                ])
            } else {
                first_defined([
                    from_labels(element, page, visited),
                    attr_source(element, "title"),
                    attr_source(element, "placeholder"),
                ])
            }
        }
        t if FORM_ELEMENTS.contains(&t) => {
            if recursion {
                first_defined([attr_source(element, "title")])
            } else {
                first_defined([
                    from_labels(element, page, visited),
                    attr_source(element, "title"),
                ])
            }
        }
        "textarea" => {
            if recursion {
                first_defined([
                    subtree_text(element, page, is_widget_context, visited),
                    attr_source(element, "title"),
                    attr_source(element, "placeholder"),
                ])
            } else {
                first_defined([
                    from_labels(element, page, visited),
                    attr_source(element, "title"),
                    attr_source(element, "placeholder"),
                ])
            }
        }
        "figure" => first_defined([
            special_label(element, "figcaption", page, visited),
            attr_source(element, "title"),
        ]),
        "table" => first_defined([
            special_label(element, "caption", page, visited),
            attr_source(element, "title"),
        ]),
        "fieldset" => first_defined([
            special_label(element, "legend", page, visited),
            attr_source(element, "title"),
        ]),
        _ => {
            let role = element_role(element);
            let from_content = role
                .as_deref()
                .and_then(role_spec)
                .is_some_and(|spec| spec.name_from_content);
            if from_content || (role.is_none() && recursion) {
                first_defined([
                    subtree_text(element, page, is_widget_context, visited),
                    attr_source(element, "title"),
                ])
            } else {
                first_defined([attr_source(element, "title")])
            }
        }
    }
}

fn contribution(element: &ElementRef, text: String) -> NameContribution {
    NameContribution {
        element: element.clone(),
        text,
    }
}

fn join(contributions: &[NameContribution]) -> String {
    contributions
        .iter()
        .map(|c| c.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First candidate that is defined; stops at the first one with non-empty
/// text, otherwise keeps the first defined (possibly empty) one.
fn first_defined<const N: usize>(candidates: [Contributions; N]) -> Contributions {
    let mut result: Contributions = None;
    for candidate in candidates {
        if let Some(contributions) = candidate {
            let has_text = contributions.iter().any(|c| !c.text.trim().is_empty());
            if result.is_none() {
                result = Some(contributions.clone());
            }
            if has_text {
                return Some(contributions);
            }
        }
    }
    result
}

/// Attribute treated as a naming source only when present and non-empty.
fn attr_source(element: &ElementRef, name: &str) -> Contributions {
    element
        .attribute(name)
        .filter(|v| !v.is_empty())
        .map(|v| vec![contribution(element, v)])
}

/// An `aria-labelledby` directive with no resolvable id is treated as
/// absent rather than erroring.
fn any_reference_resolves(refs: &str, element: &ElementRef, page: &dyn Page) -> bool {
    let own_id = element.attribute("id");
    let resolves = refs
        .split_whitespace()
        .filter(|id| own_id.as_deref() != Some(*id))
        .any(|id| page.element_by_id(id).is_some());
    if !resolves {
        debug!(
            "aria-labelledby on {} resolves no elements, ignoring",
            element.selector()
        );
    }
    resolves
}

fn from_labelledby(
    element: &ElementRef,
    refs: &str,
    page: &dyn Page,
    visited: &mut HashSet<String>,
) -> Vec<NameContribution> {
    let widget = is_widget(element);
    let own_id = element.attribute("id");
    let mut out = Vec::new();
    for id in refs.split_whitespace() {
        if own_id.as_deref() == Some(id) {
            continue;
        }
        let Some(target) = page.element_by_id(id) else {
            continue;
        };
        if let Some(contributions) = compute(&target, page, true, widget, visited) {
            let text = join(&contributions);
            out.push(contribution(&target, text));
        }
    }
    out
}

/// `label[for]` targets plus an ancestor `<label>`, outermost call only.
fn from_labels(element: &ElementRef, page: &dyn Page, visited: &mut HashSet<String>) -> Contributions {
    let mut labels: Vec<ElementRef> = element
        .attribute("id")
        .map(|id| page.query(&format!("label[for=\"{id}\"]")))
        .unwrap_or_default();
    if let Some(parent) = element.parent()
        && parent.tag_name() == "label"
        && !labels.iter().any(|l| l.selector() == parent.selector())
    {
        labels.push(parent);
    }

    let widget = is_widget(element);
    let mut out = Vec::new();
    for label in labels {
        if let Some(contributions) = compute(&label, page, true, widget, visited) {
            let text = join(&contributions);
            if !text.is_empty() {
                out.push(contribution(&label, text));
            }
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

/// `figcaption` in `figure`, `caption` in `table`, `legend` in `fieldset`.
fn special_label(
    element: &ElementRef,
    label_tag: &str,
    page: &dyn Page,
    visited: &mut HashSet<String>,
) -> Contributions {
    let label = page.query_within(label_tag, element).into_iter().next()?;
    let contributions = compute(&label, page, true, false, visited)?;
    let text = join(&contributions);
    if text.is_empty() {
        None
    } else {
        Some(vec![contribution(&label, text)])
    }
}

/// Rendered visible text of descendants (skipping hidden subtrees), then
/// the element's own text.
fn subtree_text(
    element: &ElementRef,
    page: &dyn Page,
    is_widget_context: bool,
    visited: &mut HashSet<String>,
) -> Contributions {
    let widget = is_widget_context || is_widget(element);
    let mut out = Vec::new();
    for child in element.children() {
        if is_hidden(&child) {
            continue;
        }
        if let Some(contributions) = compute(&child, page, true, widget, visited) {
            let text = join(&contributions);
            if !text.is_empty() {
                out.push(contribution(&child, text));
            }
        }
    }
    let own = element.text();
    if !own.trim().is_empty() {
        out.push(contribution(element, own));
    }
    if out.is_empty() { None } else { Some(out) }
}

fn is_control(element: &ElementRef) -> bool {
    matches!(
        element_role(element).as_deref(),
        Some(
            "textbox"
                | "searchbox"
                | "button"
                | "combobox"
                | "listbox"
                | "slider"
                | "spinbutton"
                | "progressbar"
        )
    )
}

/// Current value of a value-bearing embedded control.
fn embedded_control_value(element: &ElementRef, page: &dyn Page) -> Option<String> {
    match element_role(element).as_deref() {
        Some("textbox" | "searchbox") => element
            .attribute("value")
            .filter(|v| !v.is_empty())
            .or_else(|| Some(element.text()).filter(|t| !t.trim().is_empty())),
        Some("button") => element.attribute("value").filter(|v| !v.is_empty()),
        Some("combobox" | "listbox") => {
            let selected = page
                .query_within("option[selected]", element)
                .into_iter()
                .next()
                .or_else(|| page.query_within("option", element).into_iter().next())?;
            Some(selected.text()).filter(|t| !t.trim().is_empty())
        }
        Some("slider" | "spinbutton" | "progressbar") => element
            .attribute("aria-valuenow")
            .or_else(|| element.attribute("value"))
            .filter(|v| !v.is_empty()),
        _ => None,
    }
}

/// Accessible name for SVG graphics elements: `aria-labelledby`,
/// `aria-label`, then a child `<title>` element.
pub fn accessible_name_svg(element: &ElementRef, page: &dyn Page) -> Option<String> {
    if let Some(refs) = element.attribute("aria-labelledby") {
        let own_id = element.attribute("id");
        let text = refs
            .split_whitespace()
            .filter(|id| own_id.as_deref() != Some(*id))
            .filter_map(|id| page.element_by_id(id))
            .map(|target| target.text().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !text.is_empty() {
            return Some(text);
        }
    }
    if let Some(label) = element.attribute("aria-label").filter(|v| !v.trim().is_empty()) {
        return Some(label);
    }
    page.query_within("title", element)
        .into_iter()
        .next()
        .map(|title| title.text())
        .filter(|t| !t.trim().is_empty())
}

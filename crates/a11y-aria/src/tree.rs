//! Accessibility-tree membership and the containment/ownership checks used
//! by structural role rules.

use a11y_page::{ElementRef, Page};

use crate::constants::GLOBAL_ARIA_ATTRIBUTES;
use crate::focus::is_focusable;
use crate::hidden::is_hidden;
use crate::role::element_role;

fn has_global_aria_attribute(element: &ElementRef) -> bool {
    let attrs = element.attributes();
    GLOBAL_ARIA_ATTRIBUTES
        .iter()
        .any(|name| attrs.contains_key(*name))
}

/// Whether the element is exposed to assistive technology.
///
/// Hidden elements are out. Presentational elements are out unless focus or
/// a global ARIA attribute forces them back in (role conflict resolution).
pub fn in_accessibility_tree(element: &ElementRef) -> bool {
    if is_hidden(element) {
        return false;
    }
    match element_role(element).as_deref() {
        Some("presentation") | Some("none") => {
            is_focusable(element) || has_global_aria_attribute(element)
        }
        _ => true,
    }
}

/// Walks ancestors looking for one whose role is in `roles`, skipping
/// roleless and presentational ancestors.
pub fn is_descendant_of_roles(element: &ElementRef, roles: &[&str]) -> bool {
    let mut current = element.parent();
    while let Some(ancestor) = current {
        match element_role(&ancestor).as_deref() {
            Some("presentation") | Some("none") | None => {}
            Some(role) => return roles.contains(&role),
        }
        current = ancestor.parent();
    }
    false
}

/// The element owning this one through `aria-owns`, if any.
pub fn aria_owner(element: &ElementRef, page: &dyn Page) -> Option<ElementRef> {
    let id = element.attribute("id")?;
    page.query(&format!("[aria-owns~=\"{id}\"]"))
        .into_iter()
        .next()
}

/// Elements owned by this one: accessibility-tree children (descending
/// through presentational wrappers) plus `aria-owns` targets.
pub fn owned_elements(element: &ElementRef, page: &dyn Page) -> Vec<ElementRef> {
    let mut owned = Vec::new();
    collect_tree_children(element, &mut owned);
    if let Some(ids) = element.attribute("aria-owns") {
        for id in ids.split_whitespace() {
            if let Some(target) = page.element_by_id(id) {
                owned.push(target);
            }
        }
    }
    owned
}

fn collect_tree_children(element: &ElementRef, out: &mut Vec<ElementRef>) {
    for child in element.children() {
        if is_hidden(&child) {
            continue;
        }
        match element_role(&child).as_deref() {
            Some("presentation") | Some("none") | None => collect_tree_children(&child, out),
            Some(_) => out.push(child),
        }
    }
}

/// True when some ancestor in the accessibility tree carries `aria-busy`.
pub fn has_aria_busy_ancestor(element: &ElementRef) -> bool {
    let mut current = element.parent();
    while let Some(ancestor) = current {
        if in_accessibility_tree(&ancestor)
            && ancestor
                .attribute("aria-busy")
                .is_some_and(|v| v.trim() == "true")
        {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

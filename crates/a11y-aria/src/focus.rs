use a11y_page::ElementRef;

use crate::hidden::is_hidden_for_rendering;

const INHERENTLY_FOCUSABLE: &[&str] = &["button", "iframe", "select", "summary", "textarea"];

/// Whether the element can receive keyboard focus.
///
/// A negative `tabindex` or a `disabled` control is not focusable; any
/// valid non-negative `tabindex` is; otherwise the inherently focusable
/// tags decide. `aria-hidden` does not remove an element from the focus
/// order, so only rendering-level hiding counts here.
pub fn is_focusable(element: &ElementRef) -> bool {
    if element.attribute("disabled").is_some() || is_hidden_for_rendering(element) {
        return false;
    }
    if let Some(tabindex) = element.attribute("tabindex") {
        return match tabindex.trim().parse::<i32>() {
            Ok(value) => value >= 0,
            Err(_) => false,
        };
    }
    let tag = element.tag_name();
    match tag.as_str() {
        "a" | "area" => element.attribute("href").is_some(),
        "input" => !element.attribute("type").is_some_and(|t| t == "hidden"),
        _ => {
            INHERENTLY_FOCUSABLE.contains(&tag.as_str())
                || element
                    .attribute("contenteditable")
                    .is_some_and(|v| v == "true" || v.is_empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage, Page};

    #[test]
    fn focusability_rules() {
        let page = MemoryPage::with_body([
            ElementSpec::new("a").attr("href", "/"),
            ElementSpec::new("a"),
            ElementSpec::new("button").attr("tabindex", "-1"),
            ElementSpec::new("input").attr("type", "hidden"),
            ElementSpec::new("span").attr("tabindex", "0"),
            ElementSpec::new("button").attr("disabled", ""),
        ]);
        let anchors = page.query("a");
        assert!(is_focusable(&anchors[0]));
        assert!(!is_focusable(&anchors[1]));
        let buttons = page.query("button");
        assert!(!is_focusable(&buttons[0]));
        assert!(!is_focusable(&buttons[1]));
        assert!(!is_focusable(&page.query("input").remove(0)));
        assert!(is_focusable(&page.query("span").remove(0)));
    }
}

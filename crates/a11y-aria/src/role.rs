//! Explicit and implicit semantic role resolution.

use a11y_page::ElementRef;

use crate::roles::{is_valid_role, role_spec};

/// First valid token of the `role` attribute, lowercased.
pub fn valid_explicit_role(element: &ElementRef) -> Option<String> {
    let value = element.attribute("role")?;
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .find(|token| is_valid_role(token))
}

/// Implicit role inferred from the tag (and a few attributes).
pub fn implicit_role(element: &ElementRef) -> Option<&'static str> {
    let tag = element.tag_name();
    let has_href = element.attribute("href").is_some();
    match tag.as_str() {
        "a" | "area" => has_href.then_some("link"),
        "article" => Some("article"),
        "aside" => Some("complementary"),
        "body" | "html" => Some("document"),
        "button" => Some("button"),
        "datalist" => Some("listbox"),
        "dd" => Some("definition"),
        "details" | "fieldset" | "optgroup" => Some("group"),
        "dialog" => Some("dialog"),
        "dt" => Some("term"),
        "figure" => Some("figure"),
        "footer" => Some("contentinfo"),
        "form" => Some("form"),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some("heading"),
        "header" => Some("banner"),
        "hr" => Some("separator"),
        "img" => {
            // An empty alt makes the image decorative.
            if element.attribute("alt").is_some_and(|alt| alt.is_empty()) {
                Some("presentation")
            } else {
                Some("img")
            }
        }
        "input" => {
            let input_type = element
                .attribute("type")
                .map(|t| t.to_lowercase())
                .unwrap_or_else(|| "text".to_string());
            match input_type.as_str() {
                "button" | "image" | "reset" | "submit" => Some("button"),
                "checkbox" => Some("checkbox"),
                "radio" => Some("radio"),
                "range" => Some("slider"),
                "number" => Some("spinbutton"),
                "search" => Some("searchbox"),
                "email" | "password" | "tel" | "text" | "url" => Some("textbox"),
                _ => None,
            }
        }
        "li" => Some("listitem"),
        "main" => Some("main"),
        "math" => Some("math"),
        "menu" | "ol" | "ul" => Some("list"),
        "nav" => Some("navigation"),
        "option" => Some("option"),
        "output" => Some("status"),
        "progress" => Some("progressbar"),
        "section" => Some("region"),
        "select" => {
            let multiple = element.attribute("multiple").is_some();
            let sized = element
                .attribute("size")
                .and_then(|s| s.trim().parse::<u32>().ok())
                .is_some_and(|s| s > 1);
            if multiple || sized {
                Some("listbox")
            } else {
                Some("combobox")
            }
        }
        "summary" => Some("button"),
        "svg" => Some("graphics-document"),
        "table" => Some("table"),
        "tbody" | "tfoot" | "thead" => Some("rowgroup"),
        "td" => Some("cell"),
        "textarea" => Some("textbox"),
        "th" => {
            if element.attribute("scope").is_some_and(|s| s == "row") {
                Some("rowheader")
            } else {
                Some("columnheader")
            }
        }
        "tr" => Some("row"),
        _ => None,
    }
}

/// Resolved semantic role: a valid explicit role wins, otherwise the
/// implicit role.
pub fn element_role(element: &ElementRef) -> Option<String> {
    valid_explicit_role(element).or_else(|| implicit_role(element).map(str::to_string))
}

/// Resolved role is an interactive widget role.
pub fn is_widget(element: &ElementRef) -> bool {
    element_role(element)
        .and_then(|role| role_spec(&role))
        .is_some_and(|spec| spec.widget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage, Page};

    #[test]
    fn explicit_role_beats_implicit() {
        let page = MemoryPage::with_body([
            ElementSpec::new("div").attr("role", "bogus img"),
            ElementSpec::new("a").attr("href", "/"),
            ElementSpec::new("a"),
        ]);
        let div = page.query("div").remove(0);
        assert_eq!(valid_explicit_role(&div).as_deref(), Some("img"));
        assert_eq!(element_role(&div).as_deref(), Some("img"));

        let links = page.query("a");
        assert_eq!(element_role(&links[0]).as_deref(), Some("link"));
        assert_eq!(element_role(&links[1]), None);
    }

    #[test]
    fn empty_alt_image_is_presentational() {
        let page = MemoryPage::with_body([
            ElementSpec::new("img").attr("alt", ""),
            ElementSpec::new("img").attr("alt", "Logo"),
        ]);
        let images = page.query("img");
        assert_eq!(element_role(&images[0]).as_deref(), Some("presentation"));
        assert_eq!(element_role(&images[1]).as_deref(), Some("img"));
    }

    #[test]
    fn widget_detection() {
        let page = MemoryPage::with_body([
            ElementSpec::new("input").attr("type", "text"),
            ElementSpec::new("p"),
        ]);
        assert!(is_widget(&page.query("input").remove(0)));
        assert!(!is_widget(&page.query("p").remove(0)));
    }
}

use a11y_page::ElementRef;

/// Element hidden by its own computed style.
pub fn hidden_by_css(element: &ElementRef) -> bool {
    let display = element.style_property("display");
    if display.trim() == "none" {
        return true;
    }
    matches!(
        element.style_property("visibility").trim(),
        "hidden" | "collapse"
    )
}

fn hidden_here(element: &ElementRef) -> bool {
    if element.attribute("hidden").is_some() {
        return true;
    }
    if element
        .attribute("aria-hidden")
        .is_some_and(|v| v.trim() == "true")
    {
        return true;
    }
    hidden_by_css(element)
}

fn hidden_here_for_rendering(element: &ElementRef) -> bool {
    element.attribute("hidden").is_some() || hidden_by_css(element)
}

/// Element not rendered: `hidden` attribute or hiding CSS on itself or any
/// ancestor. `aria-hidden` is deliberately excluded; it hides from assistive
/// technology without removing the element from rendering or focus order.
pub fn is_hidden_for_rendering(element: &ElementRef) -> bool {
    if hidden_here_for_rendering(element) {
        return true;
    }
    let mut current = element.parent();
    while let Some(ancestor) = current {
        if hidden_here_for_rendering(&ancestor) {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

/// Element hidden by CSS, the `hidden` attribute, or `aria-hidden="true"`,
/// on itself or any ancestor.
pub fn is_hidden(element: &ElementRef) -> bool {
    if hidden_here(element) {
        return true;
    }
    let mut current = element.parent();
    while let Some(ancestor) = current {
        if hidden_here(&ancestor) {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

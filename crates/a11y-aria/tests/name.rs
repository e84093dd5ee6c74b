//! Accessible-name precedence and edge cases.

use a11y_aria::{accessible_name, accessible_name_svg, accessible_name_targets};
use a11y_page::{ElementSpec, MemoryPage, Page};

fn name_of(page: &MemoryPage, selector: &str) -> Option<String> {
    let element = page.query(selector).remove(0);
    accessible_name(&element, page)
}

#[test]
fn aria_labelledby_wins_over_aria_label() {
    let page = MemoryPage::with_body([
        ElementSpec::new("span").attr("id", "lbl").text("From reference"),
        ElementSpec::new("img")
            .attr("aria-labelledby", "lbl")
            .attr("aria-label", "From label")
            .attr("alt", "From alt"),
    ]);
    assert_eq!(name_of(&page, "img").as_deref(), Some("From reference"));
}

#[test]
fn labelledby_concatenates_in_listed_order() {
    let page = MemoryPage::with_body([
        ElementSpec::new("span").attr("id", "b").text("world"),
        ElementSpec::new("span").attr("id", "a").text("Hello"),
        ElementSpec::new("div").attr("role", "img").attr("aria-labelledby", "a b"),
    ]);
    assert_eq!(name_of(&page, "[role=\"img\"]").as_deref(), Some("Hello world"));
}

#[test]
fn unresolvable_labelledby_is_treated_as_absent() {
    let page = MemoryPage::with_body([ElementSpec::new("img")
        .attr("aria-labelledby", "missing")
        .attr("alt", "Fallback")]);
    assert_eq!(name_of(&page, "img").as_deref(), Some("Fallback"));
}

#[test]
fn aria_label_branch() {
    let page = MemoryPage::with_body([ElementSpec::new("div")
        .attr("role", "img")
        .attr("aria-label", "Logo")]);
    assert_eq!(name_of(&page, "div").as_deref(), Some("Logo"));
}

#[test]
fn image_alt_then_title() {
    let page = MemoryPage::with_body([
        ElementSpec::new("img").attr("alt", "A tree"),
        ElementSpec::new("img").attr("title", "Tooltip"),
        ElementSpec::new("img"),
    ]);
    let images = page.query("img");
    assert_eq!(accessible_name(&images[0], &page).as_deref(), Some("A tree"));
    assert_eq!(accessible_name(&images[1], &page).as_deref(), Some("Tooltip"));
    assert_eq!(accessible_name(&images[2], &page), None);
}

#[test]
fn button_inputs_use_value_then_default() {
    let page = MemoryPage::with_body([
        ElementSpec::new("input").attr("type", "submit").attr("value", "Send"),
        ElementSpec::new("input").attr("type", "submit"),
        ElementSpec::new("input").attr("type", "button"),
    ]);
    let inputs = page.query("input");
    assert_eq!(accessible_name(&inputs[0], &page).as_deref(), Some("Send"));
    assert_eq!(accessible_name(&inputs[1], &page).as_deref(), Some("Submit"));
    assert_eq!(accessible_name(&inputs[2], &page), None);
}

#[test]
fn label_for_association_applies_only_at_outer_call() {
    let page = MemoryPage::with_body([
        ElementSpec::new("label").attr("for", "email").text("Email address"),
        ElementSpec::new("input")
            .attr("id", "email")
            .attr("type", "email")
            .attr("placeholder", "you@example.test"),
    ]);
    assert_eq!(name_of(&page, "input").as_deref(), Some("Email address"));
}

#[test]
fn ancestor_label_names_the_control() {
    let page = MemoryPage::with_body([ElementSpec::new("label")
        .text("Subscribe")
        .child(ElementSpec::new("input").attr("type", "checkbox"))]);
    assert_eq!(name_of(&page, "input").as_deref(), Some("Subscribe"));
}

#[test]
fn placeholder_is_the_last_resort_for_text_inputs() {
    let page = MemoryPage::with_body([ElementSpec::new("input")
        .attr("type", "text")
        .attr("placeholder", "Search terms")]);
    assert_eq!(name_of(&page, "input").as_deref(), Some("Search terms"));
}

#[test]
fn figure_takes_its_name_from_figcaption() {
    let page = MemoryPage::with_body([ElementSpec::new("figure")
        .child(ElementSpec::new("img").attr("alt", "chart"))
        .child(ElementSpec::new("figcaption").text("Quarterly results"))]);
    assert_eq!(name_of(&page, "figure").as_deref(), Some("Quarterly results"));
}

#[test]
fn button_name_comes_from_content() {
    let page = MemoryPage::with_body([ElementSpec::new("button")
        .child(ElementSpec::new("span").text("Save"))
        .child(ElementSpec::new("span").text("draft"))]);
    assert_eq!(name_of(&page, "button").as_deref(), Some("Save draft"));
}

#[test]
fn hidden_descendants_do_not_contribute() {
    let page = MemoryPage::with_body([ElementSpec::new("h2")
        .child(ElementSpec::new("span").text("Visible"))
        .child(
            ElementSpec::new("span")
                .style("display", "none")
                .text("Hidden"),
        )]);
    assert_eq!(name_of(&page, "h2").as_deref(), Some("Visible"));
}

#[test]
fn mutually_referencing_labelledby_terminates() {
    let page = MemoryPage::with_body([
        ElementSpec::new("div")
            .attr("id", "first")
            .attr("role", "img")
            .attr("aria-labelledby", "second"),
        ElementSpec::new("div")
            .attr("id", "second")
            .attr("role", "img")
            .attr("aria-labelledby", "first"),
    ]);
    // Both resolve, neither produces text; the recursion must not hang.
    let name = name_of(&page, "[id=\"first\"]");
    assert_eq!(name.as_deref(), Some(""));
}

#[test]
fn self_referencing_labelledby_is_ignored() {
    let page = MemoryPage::with_body([ElementSpec::new("img")
        .attr("id", "me")
        .attr("aria-labelledby", "me")
        .attr("alt", "Still me")]);
    assert_eq!(name_of(&page, "img").as_deref(), Some("Still me"));
}

#[test]
fn label_content_loop_terminates() {
    // A label whose control sits inside it: naming the input walks the
    // label's content, which includes the input again.
    let page = MemoryPage::with_body([ElementSpec::new("label")
        .attr("for", "q")
        .text("Query")
        .child(ElementSpec::new("input").attr("id", "q").attr("type", "text"))]);
    assert_eq!(name_of(&page, "input").as_deref(), Some("Query"));
}

#[test]
fn targets_report_contributing_elements() {
    let page = MemoryPage::with_body([
        ElementSpec::new("span").attr("id", "lbl").text("Caption"),
        ElementSpec::new("img").attr("aria-labelledby", "lbl"),
    ]);
    let img = page.query("img").remove(0);
    let targets = accessible_name_targets(&img, &page);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].attribute("id").as_deref(), Some("lbl"));
}

#[test]
fn embedded_control_value_inside_widget_context() {
    // Naming a widget from its label picks up the values of controls
    // embedded in the label's content.
    let page = MemoryPage::with_body([
        ElementSpec::new("label")
            .attr("for", "q")
            .text("lines to show")
            .child(
                ElementSpec::new("select")
                    .child(ElementSpec::new("option").attr("selected", "").text("20")),
            ),
        ElementSpec::new("input").attr("id", "q").attr("type", "checkbox"),
    ]);
    // Child contributions come before the label's own text.
    assert_eq!(name_of(&page, "input").as_deref(), Some("20 lines to show"));
}

#[test]
fn svg_name_sources() {
    let page = MemoryPage::with_body([
        ElementSpec::new("svg")
            .attr("role", "img")
            .child(ElementSpec::new("title").text("Pie chart")),
        ElementSpec::new("svg").attr("role", "img").attr("aria-label", "Bar chart"),
        ElementSpec::new("svg").attr("role", "img"),
    ]);
    let svgs = page.query("svg");
    assert_eq!(accessible_name_svg(&svgs[0], &page).as_deref(), Some("Pie chart"));
    assert_eq!(accessible_name_svg(&svgs[1], &page).as_deref(), Some("Bar chart"));
    assert_eq!(accessible_name_svg(&svgs[2], &page), None);
}

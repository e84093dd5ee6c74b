//! QW-ACT-R17: images have an accessible name or are marked decorative.

use a11y_aria::{element_role, in_accessibility_tree, is_hidden};
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_accessible_name, single};

pub struct ImageAccessibleName {
    descriptor: RuleDescriptor,
}

impl ImageAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R17",
                "23a2a8",
                "Image has accessible name",
            )
            .with_criterion(SuccessCriterion::new(
                "1.1.1",
                Principle::Perceivable,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#non-text-content",
            )),
        }
    }
}

impl AtomicRuleImpl for ImageAccessibleName {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        if is_hidden(element) {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        let decorative = matches!(
            element_role(element).as_deref(),
            Some("presentation" | "none")
        );
        if decorative {
            // Focus or global ARIA state drags a presentational image back
            // into the accessibility tree, defeating the decorative marking.
            let tests = if in_accessibility_tree(element) {
                single(code, Verdict::Failed, "RC2", element)
            } else {
                single(code, Verdict::Passed, "RC3", element)
            };
            return Ok(tests);
        }
        let tests = if has_accessible_name(element, page) {
            single(code, Verdict::Passed, "RC4", element)
        } else if element.tag_name() == "img" && element.attribute("alt").is_none() {
            single(code, Verdict::Failed, "RC5", element)
        } else {
            single(code, Verdict::Failed, "RC6", element)
        };
        Ok(tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage, Page};

    fn run(page: &MemoryPage, selector: &str) -> Test {
        let element = page.query(selector).remove(0);
        ImageAccessibleName::new()
            .evaluate(&element, page, &ExecutionContext::default())
            .expect("rule body")
            .remove(0)
    }

    #[test]
    fn empty_alt_marks_the_image_decorative() {
        let page = MemoryPage::with_body([ElementSpec::new("img").attr("alt", "")]);
        let test = run(&page, "img");
        assert_eq!(test.verdict, Verdict::Passed);
        assert_eq!(test.result_code, "RC3");
    }

    #[test]
    fn missing_alt_with_no_other_source_fails() {
        let page = MemoryPage::with_body([ElementSpec::new("img")]);
        let test = run(&page, "img");
        assert_eq!(test.verdict, Verdict::Failed);
        assert_eq!(test.result_code, "RC5");
    }

    #[test]
    fn aria_label_names_a_role_img_div() {
        let page = MemoryPage::with_body([ElementSpec::new("div")
            .attr("role", "img")
            .attr("aria-label", "Logo")]);
        let test = run(&page, "div");
        assert_eq!(test.verdict, Verdict::Passed);
        assert_eq!(test.result_code, "RC4");
    }

    #[test]
    fn focusable_decorative_image_fails() {
        let page = MemoryPage::with_body([ElementSpec::new("img")
            .attr("alt", "")
            .attr("tabindex", "0")]);
        assert_eq!(run(&page, "img").result_code, "RC2");
    }

    #[test]
    fn hidden_image_is_inapplicable() {
        let page = MemoryPage::with_body([ElementSpec::new("img")
            .attr("alt", "chart")
            .style("display", "none")]);
        assert_eq!(run(&page, "img").result_code, "RC1");
    }

    #[test]
    fn role_img_without_name_fails_the_generic_branch() {
        let page = MemoryPage::with_body([ElementSpec::new("div").attr("role", "img")]);
        assert_eq!(run(&page, "div").result_code, "RC6");
    }
}

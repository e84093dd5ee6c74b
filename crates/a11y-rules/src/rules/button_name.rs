//! QW-ACT-R11: buttons have an accessible name.

use a11y_aria::element_role;
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_accessible_name, single};

pub struct ButtonAccessibleName {
    descriptor: RuleDescriptor,
}

impl ButtonAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R11",
                "97a4e1",
                "Button has accessible name",
            )
            .with_criterion(SuccessCriterion::new(
                "4.1.2",
                Principle::Robust,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#name-role-value",
            )),
        }
    }
}

impl AtomicRuleImpl for ButtonAccessibleName {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists, Guard::ElementIsInAccessibilityTree]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        // An explicit role can move the element out of scope, e.g.
        // <button role="link">.
        if element_role(element).as_deref() != Some("button") {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        let tests = if has_accessible_name(element, page) {
            single(code, Verdict::Passed, "RC2", element)
        } else {
            single(code, Verdict::Failed, "RC3", element)
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
        ButtonAccessibleName::new()
            .evaluate(&element, page, &ExecutionContext::default())
            .expect("rule body")
            .remove(0)
    }

    #[test]
    fn content_and_aria_label_name_buttons() {
        let page = MemoryPage::with_body([
            ElementSpec::new("button").text("Save"),
            ElementSpec::new("input").attr("type", "submit"),
            ElementSpec::new("span")
                .attr("role", "button")
                .attr("tabindex", "0"),
        ]);
        assert_eq!(run(&page, "button").result_code, "RC2");
        // Submit inputs fall back to their default name.
        assert_eq!(run(&page, "input").result_code, "RC2");
        let failed = run(&page, "span");
        assert_eq!(failed.verdict, Verdict::Failed);
        assert_eq!(failed.result_code, "RC3");
    }

    #[test]
    fn repurposed_button_is_out_of_scope() {
        let page =
            MemoryPage::with_body([ElementSpec::new("button").attr("role", "link").text("Go")]);
        assert_eq!(run(&page, "button").result_code, "RC1");
    }
}

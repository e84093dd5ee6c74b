//! QW-ACT-R6: image buttons have an accessible name.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_accessible_name, single};

pub struct ImageButtonAccessibleName {
    descriptor: RuleDescriptor,
}

impl ImageButtonAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R6",
                "59796f",
                "Image button has accessible name",
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

impl AtomicRuleImpl for ImageButtonAccessibleName {
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
        let tests = if has_accessible_name(element, page) {
            single(code, Verdict::Passed, "RC1", element)
        } else {
            single(code, Verdict::Failed, "RC2", element)
        };
        Ok(tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage, Page};

    #[test]
    fn alt_names_the_image_button() {
        let page = MemoryPage::with_body([
            ElementSpec::new("input").attr("type", "image").attr("alt", "Search"),
            ElementSpec::new("input").attr("type", "image"),
        ]);
        let rule = ImageButtonAccessibleName::new();
        let inputs = page.query("input[type=\"image\"]");
        let ctx = ExecutionContext::default();
        assert_eq!(
            rule.evaluate(&inputs[0], &page, &ctx).expect("rule body")[0].result_code,
            "RC1"
        );
        let failed = rule.evaluate(&inputs[1], &page, &ctx).expect("rule body");
        assert_eq!(failed[0].verdict, Verdict::Failed);
        assert_eq!(failed[0].result_code, "RC2");
    }
}

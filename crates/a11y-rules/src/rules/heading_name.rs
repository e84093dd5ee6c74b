//! QW-ACT-R35: headings have an accessible name.

use a11y_aria::element_role;
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_accessible_name, single};

pub struct HeadingAccessibleName {
    descriptor: RuleDescriptor,
}

impl HeadingAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R35",
                "ffd0e9",
                "Heading has accessible name",
            )
            .with_criterion(SuccessCriterion::new(
                "2.4.6",
                Principle::Operable,
                Level::AA,
                "https://www.w3.org/TR/WCAG21/#headings-and-labels",
            )),
        }
    }
}

impl AtomicRuleImpl for HeadingAccessibleName {
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
        if element_role(element).as_deref() != Some("heading") {
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

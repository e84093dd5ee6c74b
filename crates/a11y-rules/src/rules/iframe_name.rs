//! QW-ACT-R19: iframes have an accessible name.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_accessible_name, single};

pub struct IframeAccessibleName {
    descriptor: RuleDescriptor,
}

impl IframeAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R19",
                "cae760",
                "iframe element has accessible name",
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

impl AtomicRuleImpl for IframeAccessibleName {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists, Guard::ElementIsNotHidden]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        // iframes name themselves through title/aria attributes; their
        // content document is out of reach here.
        let tests = if has_accessible_name(element, page) {
            single(code, Verdict::Passed, "RC1", element)
        } else {
            single(code, Verdict::Failed, "RC2", element)
        };
        Ok(tests)
    }
}

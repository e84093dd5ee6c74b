//! QW-ACT-R20: every token of the `role` attribute is a valid ARIA role.

use a11y_aria::is_valid_role;
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

pub struct RoleAttributeValid {
    descriptor: RuleDescriptor,
}

impl RoleAttributeValid {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R20",
                "674b10",
                "role attribute has valid value",
            )
            .with_criterion(SuccessCriterion::new(
                "1.3.1",
                Principle::Perceivable,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#info-and-relationships",
            )),
        }
    }
}

impl AtomicRuleImpl for RoleAttributeValid {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists, Guard::ElementHasAttribute("role")]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        _page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        let value = element.attribute("role").unwrap_or_default();
        let mut tokens = value.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        let tests = if tokens.all(|token| is_valid_role(&token.to_lowercase())) {
            single(code, Verdict::Passed, "RC2", element)
        } else {
            single(code, Verdict::Failed, "RC3", element)
        };
        Ok(tests)
    }
}

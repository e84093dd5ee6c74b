//! QW-ACT-R38: elements have their required owned elements, unless an
//! `aria-busy` ancestor suppresses the check.

use a11y_aria::{element_role, has_aria_busy_ancestor, owned_elements, role_spec};
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

pub struct RequiredOwnedElements {
    descriptor: RuleDescriptor,
}

impl RequiredOwnedElements {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R38",
                "bc4a75",
                "Element has required owned elements",
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

impl AtomicRuleImpl for RequiredOwnedElements {
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
        let Some(role) = element_role(element) else {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        };
        let required = role_spec(&role).map(|spec| spec.required_owned).unwrap_or(&[]);
        if required.is_empty() {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        if has_aria_busy_ancestor(element) {
            return Ok(single(code, Verdict::Inapplicable, "RC2", element));
        }
        let owned = owned_elements(element, page);
        let satisfied = required
            .iter()
            .any(|chain| chain_satisfied(chain, &owned, page));
        let tests = if satisfied {
            single(code, Verdict::Passed, "RC3", element)
        } else {
            single(code, Verdict::Failed, "RC4", element)
        };
        Ok(tests)
    }
}

/// One ownership alternative: a directly owned element with the first role,
/// which for two-step chains must itself own one with the nested role.
fn chain_satisfied(chain: &[&str], owned: &[ElementRef], page: &dyn Page) -> bool {
    let Some((first, rest)) = chain.split_first() else {
        return false;
    };
    owned
        .iter()
        .filter(|candidate| element_role(candidate).as_deref() == Some(*first))
        .any(|candidate| {
            rest.is_empty() || chain_satisfied(rest, &owned_elements(candidate, page), page)
        })
}

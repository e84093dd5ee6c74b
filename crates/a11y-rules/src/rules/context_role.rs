//! QW-ACT-R33: elements have their required context role, through DOM
//! ancestry or `aria-owns` ownership.

use a11y_aria::{aria_owner, element_role, is_descendant_of_roles, role_spec, valid_explicit_role};
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

pub struct RequiredContextRole {
    descriptor: RuleDescriptor,
}

impl RequiredContextRole {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R33",
                "ff89c9",
                "Element has required context role",
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

impl AtomicRuleImpl for RequiredContextRole {
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
        let Some(role) = valid_explicit_role(element) else {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        };
        let required = role_spec(&role).map(|spec| spec.required_context).unwrap_or(&[]);
        if required.is_empty() {
            return Ok(single(code, Verdict::Inapplicable, "RC2", element));
        }
        if is_descendant_of_roles(element, required) {
            return Ok(single(code, Verdict::Passed, "RC3", element));
        }
        let owned_by_context = aria_owner(element, page)
            .and_then(|owner| element_role(&owner))
            .is_some_and(|owner_role| required.contains(&owner_role.as_str()));
        let tests = if owned_by_context {
            single(code, Verdict::Passed, "RC4", element)
        } else {
            single(code, Verdict::Failed, "RC5", element)
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
        RequiredContextRole::new()
            .evaluate(&element, page, &ExecutionContext::default())
            .expect("rule body")
            .remove(0)
    }

    #[test]
    fn listitem_inside_list_passes() {
        let page = MemoryPage::with_body([ElementSpec::new("div")
            .attr("role", "list")
            .child(ElementSpec::new("div").attr("role", "listitem"))]);
        assert_eq!(run(&page, "[role=\"listitem\"]").result_code, "RC3");
    }

    #[test]
    fn orphan_listitem_fails() {
        let page = MemoryPage::with_body([ElementSpec::new("div").attr("role", "listitem")]);
        let test = run(&page, "[role=\"listitem\"]");
        assert_eq!(test.verdict, Verdict::Failed);
        assert_eq!(test.result_code, "RC5");
    }

    #[test]
    fn aria_owns_satisfies_the_context() {
        let page = MemoryPage::with_body([
            ElementSpec::new("div").attr("role", "list").attr("aria-owns", "item"),
            ElementSpec::new("div").attr("role", "listitem").attr("id", "item"),
        ]);
        assert_eq!(run(&page, "[role=\"listitem\"]").result_code, "RC4");
    }

    #[test]
    fn roles_without_context_requirements_are_out_of_scope() {
        let page = MemoryPage::with_body([ElementSpec::new("div").attr("role", "navigation")]);
        assert_eq!(run(&page, "div").result_code, "RC2");
    }
}

//! QW-ACT-R12: links have an accessible name.

use a11y_aria::element_role;
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_accessible_name, single};

pub struct LinkAccessibleName {
    descriptor: RuleDescriptor,
}

impl LinkAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R12",
                "c487ae",
                "Link has accessible name",
            )
            .with_criterion(SuccessCriterion::new(
                "2.4.4",
                Principle::Operable,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#link-purpose-in-context",
            ))
            .with_criterion(SuccessCriterion::new(
                "4.1.2",
                Principle::Robust,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#name-role-value",
            )),
        }
    }
}

impl AtomicRuleImpl for LinkAccessibleName {
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
        if element_role(element).as_deref() != Some("link") {
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

    #[test]
    fn link_name_branches() {
        let page = MemoryPage::with_body([
            ElementSpec::new("a").attr("href", "/about").text("About us"),
            ElementSpec::new("a").attr("href", "/empty"),
        ]);
        let rule = LinkAccessibleName::new();
        let ctx = ExecutionContext::default();
        let links = page.query("a[href]");
        assert_eq!(
            rule.evaluate(&links[0], &page, &ctx).expect("rule body")[0].result_code,
            "RC2"
        );
        let failed = rule.evaluate(&links[1], &page, &ctx).expect("rule body");
        assert_eq!(failed[0].verdict, Verdict::Failed);
    }
}

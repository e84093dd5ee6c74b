//! QW-ACT-R13: `aria-hidden="true"` elements contain no focusable content.
//!
//! The only sequential-bucket rule: focus probing is order sensitive.

use a11y_aria::is_focusable;
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

pub struct AriaHiddenNoFocusableContent {
    descriptor: RuleDescriptor,
}

impl AriaHiddenNoFocusableContent {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R13",
                "6cfa84",
                "Element with aria-hidden has no focusable content",
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

impl AtomicRuleImpl for AriaHiddenNoFocusableContent {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        _page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        let tests = if is_focusable(element) || subtree_has_focusable(element) {
            single(code, Verdict::Failed, "RC1", element)
        } else {
            single(code, Verdict::Passed, "RC2", element)
        };
        Ok(tests)
    }
}

fn subtree_has_focusable(element: &ElementRef) -> bool {
    element
        .children()
        .iter()
        .any(|child| is_focusable(child) || subtree_has_focusable(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage, Page};

    fn run(page: &MemoryPage) -> Test {
        let element = page.query("[aria-hidden=\"true\"]").remove(0);
        AriaHiddenNoFocusableContent::new()
            .evaluate(&element, page, &ExecutionContext::default())
            .expect("rule body")
            .remove(0)
    }

    #[test]
    fn focusable_descendant_fails() {
        let page = MemoryPage::with_body([ElementSpec::new("div")
            .attr("aria-hidden", "true")
            .child(ElementSpec::new("a").attr("href", "/").text("link"))]);
        let test = run(&page);
        assert_eq!(test.verdict, Verdict::Failed);
        assert_eq!(test.result_code, "RC1");
    }

    #[test]
    fn inert_content_passes() {
        let page = MemoryPage::with_body([ElementSpec::new("div")
            .attr("aria-hidden", "true")
            .child(ElementSpec::new("p").text("decoration"))]);
        assert_eq!(run(&page).result_code, "RC2");
    }

    #[test]
    fn negative_tabindex_neutralizes_focus() {
        let page = MemoryPage::with_body([ElementSpec::new("div")
            .attr("aria-hidden", "true")
            .child(ElementSpec::new("button").attr("tabindex", "-1").text("x"))]);
        assert_eq!(run(&page).verdict, Verdict::Passed);
    }
}

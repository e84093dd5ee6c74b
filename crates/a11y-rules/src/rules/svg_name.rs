//! QW-ACT-R21: SVG elements with an explicit graphics role have an
//! accessible name. Honors the optimization mode: `Performance` stops at the
//! first failing element, `ErrorDetection` records every offender.

use a11y_aria::{accessible_name_svg, valid_explicit_role};
use a11y_model::{
    Level, Optimization, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

const GRAPHICS_ROLES: &[&str] = &[
    "graphics-document",
    "graphics-object",
    "graphics-symbol",
    "img",
];

pub struct SvgAccessibleName {
    descriptor: RuleDescriptor,
}

impl SvgAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R21",
                "7d6734",
                "svg element with explicit role has accessible name",
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

fn has_graphics_role(element: &ElementRef) -> bool {
    valid_explicit_role(element).is_some_and(|role| GRAPHICS_ROLES.contains(&role.as_str()))
}

impl AtomicRuleImpl for SvgAccessibleName {
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
        ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        let mut candidates: Vec<ElementRef> = Vec::new();
        if has_graphics_role(element) {
            candidates.push(element.clone());
        }
        candidates.extend(
            page.query_within("[role]", element)
                .into_iter()
                .filter(has_graphics_role),
        );
        if candidates.is_empty() {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }

        let mut tests = Vec::new();
        for candidate in &candidates {
            let named = accessible_name_svg(candidate, page)
                .is_some_and(|name| !name.trim().is_empty());
            if named {
                tests.push(
                    Test::new(code, Verdict::Passed, "RC2").with_pointer(candidate.selector()),
                );
            } else {
                tests.push(
                    Test::new(code, Verdict::Failed, "RC3").with_pointer(candidate.selector()),
                );
                if ctx.optimization == Optimization::Performance {
                    break;
                }
            }
        }
        Ok(tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage, Page};

    fn page_with_two_unnamed() -> MemoryPage {
        MemoryPage::with_body([ElementSpec::new("svg")
            .attr("role", "img")
            .child(ElementSpec::new("circle").attr("role", "graphics-symbol"))])
    }

    #[test]
    fn named_svg_passes() {
        let page = MemoryPage::with_body([ElementSpec::new("svg")
            .attr("role", "img")
            .child(ElementSpec::new("title").text("Pie chart"))]);
        let svg = page.query("svg").remove(0);
        let tests = SvgAccessibleName::new()
            .evaluate(&svg, &page, &ExecutionContext::default())
            .expect("rule body");
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].result_code, "RC2");
    }

    #[test]
    fn svg_without_graphics_role_is_inapplicable() {
        let page = MemoryPage::with_body([ElementSpec::new("svg")]);
        let svg = page.query("svg").remove(0);
        let tests = SvgAccessibleName::new()
            .evaluate(&svg, &page, &ExecutionContext::default())
            .expect("rule body");
        assert_eq!(tests[0].result_code, "RC1");
    }

    #[test]
    fn performance_mode_stops_at_first_failure() {
        let page = page_with_two_unnamed();
        let svg = page.query("svg").remove(0);
        let rule = SvgAccessibleName::new();

        let fast = rule
            .evaluate(&svg, &page, &ExecutionContext::default())
            .expect("rule body");
        assert_eq!(fast.len(), 1);
        assert_eq!(fast[0].verdict, Verdict::Failed);

        let exhaustive = rule
            .evaluate(
                &svg,
                &page,
                &ExecutionContext {
                    optimization: Optimization::ErrorDetection,
                },
            )
            .expect("rule body");
        assert_eq!(exhaustive.len(), 2);
        assert!(exhaustive.iter().all(|t| t.verdict == Verdict::Failed));
    }
}

//! QW-ACT-R1: the document has a non-empty `<title>`.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};

pub struct PageHasTitle {
    descriptor: RuleDescriptor,
}

impl PageHasTitle {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic("QW-ACT-R1", "2779a5", "HTML Page has a title")
                .with_criterion(SuccessCriterion::new(
                    "2.4.2",
                    Principle::Operable,
                    Level::A,
                    "https://www.w3.org/TR/WCAG21/#page-titled",
                )),
        }
    }
}

impl AtomicRuleImpl for PageHasTitle {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        let Some(title) = page.query_within("title", element).into_iter().next() else {
            return Ok(vec![
                Test::new(code, Verdict::Failed, "RC1").with_pointer(element.selector()),
            ]);
        };
        let test = if title.text().trim().is_empty() {
            Test::new(code, Verdict::Failed, "RC2")
        } else {
            Test::new(code, Verdict::Passed, "RC3")
        };
        Ok(vec![test.with_pointer(title.selector())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage};

    fn run(page: &MemoryPage) -> Test {
        let html = page.document_element();
        PageHasTitle::new()
            .evaluate(&html, page, &ExecutionContext::default())
            .expect("rule body")
            .remove(0)
    }

    #[test]
    fn missing_title_fails() {
        let page = MemoryPage::with_body([ElementSpec::new("p").text("hi")]);
        let test = run(&page);
        assert_eq!(test.verdict, Verdict::Failed);
        assert_eq!(test.result_code, "RC1");
    }

    #[test]
    fn empty_title_fails_and_nonempty_passes() {
        let page = MemoryPage::with_body([ElementSpec::new("title").text("  ")]);
        assert_eq!(run(&page).result_code, "RC2");

        let page = MemoryPage::with_body([ElementSpec::new("title").text("Home")]);
        let test = run(&page);
        assert_eq!(test.verdict, Verdict::Passed);
        assert_eq!(test.result_code, "RC3");
    }
}

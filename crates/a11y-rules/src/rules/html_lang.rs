//! QW-ACT-R2: the `html` element has a `lang` attribute.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

pub struct HtmlHasLang {
    descriptor: RuleDescriptor,
}

impl HtmlHasLang {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic("QW-ACT-R2", "b5c3f8", "HTML has lang attribute")
                .with_criterion(SuccessCriterion::new(
                    "3.1.1",
                    Principle::Understandable,
                    Level::A,
                    "https://www.w3.org/TR/WCAG21/#language-of-page",
                )),
        }
    }
}

impl AtomicRuleImpl for HtmlHasLang {
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
        let tests = match element.attribute("lang") {
            Some(lang) if !lang.trim().is_empty() => {
                single(code, Verdict::Passed, "RC1", element)
            }
            Some(_) => single(code, Verdict::Failed, "RC2", element),
            None => single(code, Verdict::Failed, "RC3", element),
        };
        Ok(tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage};

    fn run(lang: Option<&str>) -> Test {
        let mut root = ElementSpec::new("html");
        if let Some(lang) = lang {
            root = root.attr("lang", lang);
        }
        let page = MemoryPage::new(root.child(ElementSpec::new("body")), "https://example.test/");
        let html = page.document_element();
        HtmlHasLang::new()
            .evaluate(&html, &page, &ExecutionContext::default())
            .expect("rule body")
            .remove(0)
    }

    #[test]
    fn lang_branches() {
        assert_eq!(run(Some("en")).result_code, "RC1");
        assert_eq!(run(Some("  ")).result_code, "RC2");
        let test = run(None);
        assert_eq!(test.verdict, Verdict::Failed);
        assert_eq!(test.result_code, "RC3");
    }
}

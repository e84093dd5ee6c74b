//! QW-ACT-R5: the `lang` attribute has a valid primary language subtag.

use std::sync::LazyLock;

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};
use regex::Regex;

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

/// BCP 47 primary language subtag: two or three ASCII letters, optionally
/// followed by further subtags.
static PRIMARY_SUBTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]+)*$").expect("static pattern")
});

pub struct HtmlLangValid {
    descriptor: RuleDescriptor,
}

impl HtmlLangValid {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R5",
                "bf051a",
                "Validity of HTML lang attribute",
            )
            .with_criterion(SuccessCriterion::new(
                "3.1.1",
                Principle::Understandable,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#language-of-page",
            )),
        }
    }
}

impl AtomicRuleImpl for HtmlLangValid {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists, Guard::ElementHasAttribute("lang")]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        _page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        let lang = element.attribute("lang").unwrap_or_default();
        let lang = lang.trim();
        let tests = if lang.is_empty() {
            single(code, Verdict::Inapplicable, "RC1", element)
        } else if PRIMARY_SUBTAG.is_match(lang) {
            single(code, Verdict::Passed, "RC2", element)
        } else {
            single(code, Verdict::Failed, "RC3", element)
        };
        Ok(tests)
    }
}

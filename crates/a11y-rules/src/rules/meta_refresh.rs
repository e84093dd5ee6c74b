//! QW-ACT-R4: `meta` refresh does not delay or redirect the page within a
//! user-hostile window.
//!
//! Runs over the caller-supplied meta element list instead of a selector.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::single;

/// Delays at or beyond this many seconds (20 hours) leave the user ample
/// time and are conformant.
const AMPLE_DELAY_SECONDS: u64 = 72_000;

pub struct MetaRefreshNoDelay {
    descriptor: RuleDescriptor,
}

impl MetaRefreshNoDelay {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R4",
                "bc659a",
                "Meta-refresh no delay",
            )
            .with_criterion(SuccessCriterion::new(
                "2.2.1",
                Principle::Operable,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#timing-adjustable",
            ))
            .with_criterion(SuccessCriterion::new(
                "3.2.5",
                Principle::Understandable,
                Level::AAA,
                "https://www.w3.org/TR/WCAG21/#change-on-request",
            )),
        }
    }
}

impl AtomicRuleImpl for MetaRefreshNoDelay {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists, Guard::ElementHasAttribute("content")]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        _page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        let refresh = element
            .attribute("http-equiv")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("refresh"));
        if !refresh {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        let content = element.attribute("content").unwrap_or_default();
        let Some(delay) = parse_delay(&content) else {
            return Ok(single(code, Verdict::Inapplicable, "RC2", element));
        };
        let tests = if delay == 0 {
            single(code, Verdict::Passed, "RC3", element)
        } else if delay >= AMPLE_DELAY_SECONDS {
            single(code, Verdict::Passed, "RC4", element)
        } else {
            single(code, Verdict::Failed, "RC5", element)
        };
        Ok(tests)
    }
}

/// Seconds before the refresh fires: the integer prefix of the `content`
/// attribute, up to an optional `;`/`,` separated URL part.
fn parse_delay(content: &str) -> Option<u64> {
    let first = content
        .split([';', ','])
        .next()
        .unwrap_or_default()
        .trim();
    first.parse().ok()
}

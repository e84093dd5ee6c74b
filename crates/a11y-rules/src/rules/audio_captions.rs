//! QW-ACT-R58: audio elements carry a captions track.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_playable_source, has_track_kind, single};

pub struct AudioCaptions {
    descriptor: RuleDescriptor,
}

impl AudioCaptions {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R58",
                "2eb176",
                "audio element content has captions",
            )
            .with_criterion(SuccessCriterion::new(
                "1.2.1",
                Principle::Perceivable,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#audio-only-and-video-only-prerecorded",
            )),
        }
    }
}

impl AtomicRuleImpl for AudioCaptions {
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
        if !has_playable_source(element, page) {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        let tests = if has_track_kind(element, page, "captions") {
            single(code, Verdict::Passed, "RC2", element)
        } else {
            single(code, Verdict::Failed, "RC3", element)
        };
        Ok(tests)
    }
}

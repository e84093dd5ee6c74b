//! QW-ACT-R56: videos carry an audio-description track.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_playable_source, has_track_kind, single};

pub struct VideoAudioDescription {
    descriptor: RuleDescriptor,
}

impl VideoAudioDescription {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R56",
                "ab4d13",
                "Video element auditory content has audio description",
            )
            .with_criterion(SuccessCriterion::new(
                "1.2.5",
                Principle::Perceivable,
                Level::AA,
                "https://www.w3.org/TR/WCAG21/#audio-description-prerecorded",
            )),
        }
    }
}

impl AtomicRuleImpl for VideoAudioDescription {
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
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        if !has_playable_source(element, page) {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        let tests = if has_track_kind(element, page, "descriptions") {
            single(code, Verdict::Passed, "RC2", element)
        } else {
            single(code, Verdict::Failed, "RC3", element)
        };
        Ok(tests)
    }
}

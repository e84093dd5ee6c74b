//! QW-ACT-R55: videos carry a captions track.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_playable_source, has_track_kind, single};

pub struct VideoCaptions {
    descriptor: RuleDescriptor,
}

impl VideoCaptions {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R55",
                "f51b46",
                "Video element visual content has captions",
            )
            .with_criterion(SuccessCriterion::new(
                "1.2.2",
                Principle::Perceivable,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#captions-prerecorded",
            )),
        }
    }
}

impl AtomicRuleImpl for VideoCaptions {
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
        let tests = if has_track_kind(element, page, "captions") {
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

    fn run(page: &MemoryPage) -> Test {
        let video = page.query("video").remove(0);
        VideoCaptions::new()
            .evaluate(&video, page, &ExecutionContext::default())
            .expect("rule body")
            .remove(0)
    }

    #[test]
    fn captions_track_passes() {
        let page = MemoryPage::with_body([ElementSpec::new("video")
            .attr("src", "talk.mp4")
            .child(ElementSpec::new("track").attr("kind", "captions").attr("src", "talk.vtt"))]);
        assert_eq!(run(&page).result_code, "RC2");
    }

    #[test]
    fn sourceless_video_is_inapplicable() {
        let page = MemoryPage::with_body([ElementSpec::new("video")]);
        assert_eq!(run(&page).result_code, "RC1");
    }

    #[test]
    fn source_child_without_captions_fails() {
        let page = MemoryPage::with_body([ElementSpec::new("video")
            .child(ElementSpec::new("source").attr("src", "talk.mp4"))]);
        let test = run(&page);
        assert_eq!(test.verdict, Verdict::Failed);
        assert_eq!(test.result_code, "RC3");
    }
}

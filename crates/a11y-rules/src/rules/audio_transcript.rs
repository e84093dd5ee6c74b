//! QW-ACT-R59: audio elements reference a transcript.
//!
//! A transcript can only be verified structurally: an `aria-describedby`
//! resolving to non-empty text counts as one; anything else needs human
//! review and is recorded as a warning rather than a failure.

use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_playable_source, single};

pub struct AudioTranscript {
    descriptor: RuleDescriptor,
}

impl AudioTranscript {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R59",
                "afb423",
                "audio element content has transcript",
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

impl AtomicRuleImpl for AudioTranscript {
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
        let transcript = element
            .attribute("aria-describedby")
            .map(|ids| {
                ids.split_whitespace()
                    .filter_map(|id| page.element_by_id(id))
                    .any(|target| !target.text().trim().is_empty())
            })
            .unwrap_or(false);
        let tests = if transcript {
            single(code, Verdict::Passed, "RC2", element)
        } else {
            single(code, Verdict::Warning, "RC3", element)
        };
        Ok(tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_page::{ElementSpec, MemoryPage, Page};

    #[test]
    fn described_by_transcript_passes() {
        let page = MemoryPage::with_body([
            ElementSpec::new("audio").attr("src", "show.mp3").attr("aria-describedby", "tx"),
            ElementSpec::new("p").attr("id", "tx").text("Full transcript of the show."),
        ]);
        let audio = page.query("audio").remove(0);
        let tests = AudioTranscript::new()
            .evaluate(&audio, &page, &ExecutionContext::default())
            .expect("rule body");
        assert_eq!(tests[0].result_code, "RC2");
    }

    #[test]
    fn unverifiable_transcript_warns() {
        let page = MemoryPage::with_body([ElementSpec::new("audio").attr("src", "show.mp3")]);
        let audio = page.query("audio").remove(0);
        let tests = AudioTranscript::new()
            .evaluate(&audio, &page, &ExecutionContext::default())
            .expect("rule body");
        assert_eq!(tests[0].verdict, Verdict::Warning);
        assert_eq!(tests[0].result_code, "RC3");
    }
}

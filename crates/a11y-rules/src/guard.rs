//! Applicability guards: ordered pure predicates run before a rule body.

use a11y_aria::{in_accessibility_tree, is_hidden};
use a11y_model::{Test, Verdict};
use a11y_page::ElementRef;

/// One applicability predicate. Guards run in declared order; the first
/// failing guard short-circuits the rule body and records exactly one
/// Inapplicable test carrying the guard's result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    ElementExists,
    ElementIsNotHidden,
    ElementIsInAccessibilityTree,
    ElementHasAttribute(&'static str),
}

impl Guard {
    pub fn result_code(&self) -> &'static str {
        match self {
            Guard::ElementExists => "GC1",
            Guard::ElementIsNotHidden => "GC2",
            Guard::ElementIsInAccessibilityTree => "GC3",
            Guard::ElementHasAttribute(_) => "GC4",
        }
    }

    pub fn admits(&self, element: Option<&ElementRef>) -> bool {
        match self {
            Guard::ElementExists => element.is_some(),
            Guard::ElementIsNotHidden => element.is_some_and(|e| !is_hidden(e)),
            Guard::ElementIsInAccessibilityTree => element.is_some_and(in_accessibility_tree),
            Guard::ElementHasAttribute(name) => {
                element.is_some_and(|e| e.attribute(name).is_some())
            }
        }
    }

    /// The single test recorded when this guard rejects.
    pub fn rejection(&self, rule_code: &str, element: Option<&ElementRef>) -> Test {
        let mut test = Test::new(rule_code, Verdict::Inapplicable, self.result_code());
        if let Some(element) = element {
            test = test.with_pointer(element.selector());
        }
        test
    }
}

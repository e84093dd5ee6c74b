//! Verdict combination for composite rules.

use a11y_model::{Assertion, Combinator, Test, Verdict};

/// Combine the dependency assertions' verdicts for one element of the
/// composite's own scope, matched by stable selector identity.
///
/// A dependency with no test covering the element is excluded from the
/// combination entirely. Conjunction passes iff every considered test
/// passed; disjunction passes iff any considered test passed and fails only
/// when all of them failed. With nothing considered, both are inapplicable.
pub(crate) fn combine(
    combinator: Combinator,
    rule_code: &str,
    selector: &str,
    dependencies: &[Assertion],
) -> Test {
    let considered: Vec<Verdict> = dependencies
        .iter()
        .flat_map(|dep| dep.results.iter())
        .filter(|test| test.covers(selector))
        .map(|test| test.verdict)
        .collect();

    let (verdict, result_code) = if considered.is_empty() {
        (Verdict::Inapplicable, "I1")
    } else {
        match combinator {
            Combinator::Conjunction => {
                if considered.iter().all(|v| *v == Verdict::Passed) {
                    (Verdict::Passed, "P1")
                } else {
                    (Verdict::Failed, "F1")
                }
            }
            Combinator::Disjunction => {
                if considered.iter().any(|v| *v == Verdict::Passed) {
                    (Verdict::Passed, "P1")
                } else if considered.iter().all(|v| *v == Verdict::Failed) {
                    (Verdict::Failed, "F1")
                } else {
                    (Verdict::Inapplicable, "I1")
                }
            }
        }
    };
    Test::new(rule_code, verdict, result_code).with_pointer(selector)
}

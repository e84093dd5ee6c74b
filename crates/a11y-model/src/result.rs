use serde::Serialize;

use crate::test::Test;
use crate::verdict::Verdict;

/// Accumulated state for one rule within one page evaluation.
///
/// Tests are appended during dispatch; the derived [`outcome`] is a pure
/// function of the accumulated tests. The buffer is frozen into the report
/// and then [`reset`] so the same rule can serve the next page.
///
/// [`outcome`]: RuleResult::outcome
/// [`reset`]: RuleResult::reset
#[derive(Debug, Clone, Default, Serialize)]
pub struct RuleResult {
    tests: Vec<Test>,
    passed: u64,
    warning: u64,
    failed: u64,
    inapplicable: u64,
}

impl RuleResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one test, updating the per-verdict counters.
    pub fn add(&mut self, test: Test) {
        match test.verdict {
            Verdict::Passed => self.passed += 1,
            Verdict::Failed => self.failed += 1,
            Verdict::Warning => self.warning += 1,
            Verdict::Inapplicable => self.inapplicable += 1,
        }
        self.tests.push(test);
    }

    /// Append a batch of tests.
    pub fn extend(&mut self, tests: impl IntoIterator<Item = Test>) {
        for test in tests {
            self.add(test);
        }
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn passed_count(&self) -> u64 {
        self.passed
    }

    pub fn warning_count(&self) -> u64 {
        self.warning
    }

    pub fn failed_count(&self) -> u64 {
        self.failed
    }

    pub fn inapplicable_count(&self) -> u64 {
        self.inapplicable
    }

    /// Derived outcome, by strict precedence over the accumulated tests:
    /// any failed test wins, then warning, then passed, else inapplicable.
    pub fn outcome(&self) -> Verdict {
        if self.failed > 0 {
            Verdict::Failed
        } else if self.warning > 0 {
            Verdict::Warning
        } else if self.passed > 0 {
            Verdict::Passed
        } else {
            Verdict::Inapplicable
        }
    }

    /// Description key of the first test whose verdict equals the derived
    /// outcome. `None` only when no test was recorded at all.
    pub fn outcome_description(&self) -> Option<&str> {
        let outcome = self.outcome();
        self.tests
            .iter()
            .find(|t| t.verdict == outcome)
            .map(|t| t.description.as_str())
    }

    /// Clear all tests and counters. Idempotent.
    pub fn reset(&mut self) {
        self.tests.clear();
        self.passed = 0;
        self.warning = 0;
        self.failed = 0;
        self.inapplicable = 0;
    }
}

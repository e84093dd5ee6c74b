//! Aggregated evaluation report: one assertion per rule plus outcome totals.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::descriptor::{RuleDescriptor, SuccessCriterion};
use crate::result::RuleResult;
use crate::test::Test;
use crate::verdict::Verdict;

/// Per-outcome-class totals, counting one outcome per rule (not per test).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub passed: u64,
    pub warning: u64,
    pub failed: u64,
    pub inapplicable: u64,
}

impl ReportTotals {
    pub fn record(&mut self, outcome: Verdict) {
        match outcome {
            Verdict::Passed => self.passed += 1,
            Verdict::Warning => self.warning += 1,
            Verdict::Failed => self.failed += 1,
            Verdict::Inapplicable => self.inapplicable += 1,
        }
    }
}

/// Frozen metadata of one rule's finished result.
#[derive(Debug, Clone, Serialize)]
pub struct AssertionMetadata {
    pub name: String,
    pub mapping: String,
    pub url: String,
    #[serde(rename = "success-criteria")]
    pub success_criteria: Vec<SuccessCriterion>,
    pub passed: u64,
    pub warning: u64,
    pub failed: u64,
    pub inapplicable: u64,
    pub outcome: Verdict,
    /// Description key of the test that produced the outcome.
    pub description: Option<String>,
}

/// One rule's contribution to the report.
#[derive(Debug, Clone, Serialize)]
pub struct Assertion {
    pub metadata: AssertionMetadata,
    pub results: Vec<Test>,
}

/// Report for one page evaluation. Purely additive and order-independent
/// across rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationReport {
    pub metadata: ReportTotals,
    pub assertions: BTreeMap<String, Assertion>,
}

impl EvaluationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze a finished rule result into the report, bumping the totals
    /// bucket of the derived outcome exactly once.
    pub fn record(&mut self, descriptor: &RuleDescriptor, result: &RuleResult) {
        let outcome = result.outcome();
        self.metadata.record(outcome);
        self.assertions.insert(
            descriptor.code.clone(),
            Assertion {
                metadata: AssertionMetadata {
                    name: descriptor.name.clone(),
                    mapping: descriptor.mapping.clone(),
                    url: descriptor.url.clone(),
                    success_criteria: descriptor.success_criteria.clone(),
                    passed: result.passed_count(),
                    warning: result.warning_count(),
                    failed: result.failed_count(),
                    inapplicable: result.inapplicable_count(),
                    outcome,
                    description: result.outcome_description().map(str::to_string),
                },
                results: result.tests().to_vec(),
            },
        );
    }

    pub fn assertion(&self, code: &str) -> Option<&Assertion> {
        self.assertions.get(code)
    }
}

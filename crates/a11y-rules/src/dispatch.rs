//! Staged dispatch: sequential bucket, concurrent bucket, unmapped rules,
//! then composite rules over their finalized dependencies.

use std::collections::BTreeMap;

use a11y_model::{
    EngineError, EvaluationOptions, EvaluationReport, Result, RuleResult, RuleVariant, Test,
    Verdict,
};
use a11y_page::{ElementRef, Page};
use rayon::prelude::*;
use tracing::{debug, error, warn};

use crate::composite::combine;
use crate::guard::Guard;
use crate::mapping::{Bucket, COMPOSITE_MAP, SELECTOR_MAP, UNMAPPED_RULES};
use crate::registry::RuleRegistry;
use crate::rule::{AtomicRuleImpl, ExecutionContext};

/// The evaluation engine: a configured registry plus reusable per-rule
/// result buffers.
///
/// One [`execute`] call produces one [`EvaluationReport`]; buffers are reset
/// after being frozen into the report, so the same engine serves the next
/// page.
///
/// [`execute`]: ActRules::execute
pub struct ActRules {
    registry: RuleRegistry,
    results: BTreeMap<String, RuleResult>,
}

impl ActRules {
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::new(),
            results: BTreeMap::new(),
        }
    }

    pub fn with_options(options: &EvaluationOptions) -> Result<Self> {
        let mut engine = Self::new();
        engine.configure(options)?;
        Ok(engine)
    }

    /// Reconfigure the rule set. Always starts from all-enabled.
    pub fn configure(&mut self, options: &EvaluationOptions) -> Result<()> {
        self.registry.configure(options)
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Evaluate one page: sequential bucket, concurrent bucket, the
    /// unmapped rules over `meta_elements`, then composite rules.
    pub fn execute(
        &mut self,
        meta_elements: &[ElementRef],
        page: &dyn Page,
    ) -> Result<EvaluationReport> {
        let mut report = EvaluationReport::new();
        let ctx = ExecutionContext {
            optimization: self.registry.optimization(),
        };
        self.run_bucket(Bucket::Sequential, page, &ctx, &mut report);
        self.run_bucket(Bucket::Concurrent, page, &ctx, &mut report);
        self.run_unmapped(meta_elements, page, &ctx, &mut report);
        self.run_composites(page, &mut report)?;
        Ok(report)
    }

    fn run_bucket(
        &mut self,
        bucket: Bucket,
        page: &dyn Page,
        ctx: &ExecutionContext,
        report: &mut EvaluationReport,
    ) {
        for mapping in SELECTOR_MAP.iter().filter(|m| m.bucket == bucket) {
            let enabled: Vec<&str> = mapping
                .rules
                .iter()
                .copied()
                .filter(|code| self.registry.is_enabled(code))
                .collect();
            if enabled.is_empty() {
                continue;
            }
            // One query per selector group, shared by all its enabled rules.
            debug!(
                selector = mapping.selector,
                rules = enabled.len(),
                "dispatching selector group"
            );
            let elements = page.query(mapping.selector);
            for code in enabled {
                let Some(rule) = self.registry.atomic(code) else {
                    continue;
                };
                let mut result = self.results.remove(code).unwrap_or_default();
                if elements.is_empty() {
                    result.extend(run_one(rule, None, page, ctx));
                } else if bucket == Bucket::Concurrent {
                    let batches: Vec<Vec<Test>> = elements
                        .par_iter()
                        .map(|element| run_one(rule, Some(element), page, ctx))
                        .collect();
                    for batch in batches {
                        result.extend(batch);
                    }
                } else {
                    for element in &elements {
                        result.extend(run_one(rule, Some(element), page, ctx));
                    }
                }
                report.record(rule.descriptor(), &result);
                result.reset();
                self.results.insert(code.to_string(), result);
            }
        }
    }

    fn run_unmapped(
        &mut self,
        meta_elements: &[ElementRef],
        page: &dyn Page,
        ctx: &ExecutionContext,
        report: &mut EvaluationReport,
    ) {
        for code in UNMAPPED_RULES {
            if !self.registry.is_enabled(code) {
                continue;
            }
            let Some(rule) = self.registry.atomic(code) else {
                continue;
            };
            let mut result = self.results.remove(*code).unwrap_or_default();
            if meta_elements.is_empty() {
                result.extend(run_one(rule, None, page, ctx));
            } else {
                for element in meta_elements {
                    result.extend(run_one(rule, Some(element), page, ctx));
                }
            }
            report.record(rule.descriptor(), &result);
            result.reset();
            self.results.insert((*code).to_string(), result);
        }
    }

    fn run_composites(&mut self, page: &dyn Page, report: &mut EvaluationReport) -> Result<()> {
        for mapping in COMPOSITE_MAP {
            if !self.registry.is_enabled(mapping.code) {
                continue;
            }
            let Some(descriptor) = self.registry.composite_descriptor(mapping.code) else {
                continue;
            };
            let RuleVariant::Composite {
                dependencies,
                combinator,
            } = &descriptor.variant
            else {
                continue;
            };

            let mut assertions = Vec::with_capacity(dependencies.len());
            for dependency in dependencies {
                // A dependency disabled by configuration is excluded from
                // the combination; only an enabled one missing its finalized
                // result is a sequencing bug.
                if !self.registry.is_enabled(dependency) {
                    debug!(
                        rule = mapping.code,
                        dependency = dependency.as_str(),
                        "dependency disabled, excluded from combination"
                    );
                    continue;
                }
                match report.assertion(dependency) {
                    Some(assertion) => assertions.push(assertion.clone()),
                    None => {
                        error!(
                            rule = mapping.code,
                            dependency = dependency.as_str(),
                            "composite rule dispatched before dependency was finalized"
                        );
                        return Err(EngineError::DependencyOrdering {
                            rule: mapping.code.to_string(),
                            dependency: dependency.clone(),
                        });
                    }
                }
            }

            let mut result = self.results.remove(mapping.code).unwrap_or_default();
            let elements = page.query(mapping.selector);
            if elements.is_empty() {
                result.add(Guard::ElementExists.rejection(mapping.code, None));
            } else {
                for element in &elements {
                    result.add(combine(
                        *combinator,
                        mapping.code,
                        &element.selector(),
                        &assertions,
                    ));
                }
            }
            report.record(descriptor, &result);
            result.reset();
            self.results.insert(mapping.code.to_string(), result);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ActRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActRules").finish_non_exhaustive()
    }
}

impl Default for ActRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard chain, then the rule body. A fault inside the body is logged and
/// converted to a "could not evaluate" test instead of aborting the batch.
fn run_one(
    rule: &dyn AtomicRuleImpl,
    element: Option<&ElementRef>,
    page: &dyn Page,
    ctx: &ExecutionContext,
) -> Vec<Test> {
    let code = rule.descriptor().code.clone();
    for guard in rule.applicability() {
        if !guard.admits(element) {
            return vec![guard.rejection(&code, element)];
        }
    }
    let Some(element) = element else {
        // Chains start with ElementExists, so this is never reached with a
        // well-formed rule; reject rather than panic if one misdeclares.
        return vec![Guard::ElementExists.rejection(&code, None)];
    };
    match rule.evaluate(element, page, ctx) {
        Ok(tests) => tests,
        Err(fault) => {
            warn!(
                rule = code.as_str(),
                pointer = %element.selector(),
                "rule body failed: {fault}"
            );
            vec![Test::new(&code, Verdict::Warning, "EX1").with_pointer(element.selector())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_model::{RuleDescriptor, RuleError};
    use a11y_page::{ElementSpec, MemoryPage, Page};

    struct FailingRule {
        descriptor: RuleDescriptor,
    }

    impl FailingRule {
        fn new() -> Self {
            Self {
                descriptor: RuleDescriptor::atomic("QW-ACT-R0", "000000", "always fails"),
            }
        }
    }

    impl AtomicRuleImpl for FailingRule {
        fn descriptor(&self) -> &RuleDescriptor {
            &self.descriptor
        }

        fn applicability(&self) -> &[Guard] {
            &[Guard::ElementExists, Guard::ElementIsNotHidden]
        }

        fn evaluate(
            &self,
            _element: &ElementRef,
            _page: &dyn Page,
            _ctx: &ExecutionContext,
        ) -> std::result::Result<Vec<Test>, RuleError> {
            Err(RuleError::new("style lookup exploded"))
        }
    }

    #[test]
    fn faults_become_warning_tests() {
        let page = MemoryPage::with_body([ElementSpec::new("p").text("x")]);
        let p = page.query("p").remove(0);
        let tests = run_one(
            &FailingRule::new(),
            Some(&p),
            &page,
            &ExecutionContext::default(),
        );
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].verdict, Verdict::Warning);
        assert_eq!(tests[0].result_code, "EX1");
        assert!(tests[0].covers(&p.selector()));
    }

    #[test]
    fn guard_chain_short_circuits_before_the_body() {
        let page = MemoryPage::with_body([ElementSpec::new("p").attr("hidden", "")]);
        let p = page.query("p").remove(0);
        let tests = run_one(
            &FailingRule::new(),
            Some(&p),
            &page,
            &ExecutionContext::default(),
        );
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].verdict, Verdict::Inapplicable);
        assert_eq!(tests[0].result_code, "GC2");
    }

    #[test]
    fn missing_enabled_dependency_is_an_ordering_fault() {
        let page = MemoryPage::with_body([ElementSpec::new("audio").attr("src", "show.mp3")]);
        let mut engine = ActRules::new();
        // Composites dispatched against a report with no finalized
        // dependency results must refuse, not combine nothing.
        let mut report = EvaluationReport::new();
        let err = engine
            .run_composites(&page, &mut report)
            .expect_err("dependencies were never finalized");
        assert!(matches!(err, EngineError::DependencyOrdering { .. }));
    }

    #[test]
    fn absent_element_is_rejected_by_the_exists_guard() {
        let page = MemoryPage::with_body(Vec::<ElementSpec>::new());
        let tests = run_one(&FailingRule::new(), None, &page, &ExecutionContext::default());
        assert_eq!(tests[0].result_code, "GC1");
        assert!(tests[0].pointers.is_empty());
    }
}

//! The atomic rule contract.

use a11y_model::{Optimization, RuleDescriptor, RuleError, Test};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;

/// Per-evaluation execution state handed to rule bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionContext {
    pub optimization: Optimization,
}

/// One atomic rule: an immutable descriptor, an ordered guard chain, and a
/// stateless body producing the tests for one matched element.
///
/// Every guard chain starts with [`Guard::ElementExists`], so `evaluate` is
/// only reached with a concrete element. Result accumulation is owned by the
/// dispatcher; rule instances carry no mutable state, which makes batched
/// per-element invocation safe by construction.
pub trait AtomicRuleImpl: Send + Sync {
    fn descriptor(&self) -> &RuleDescriptor;

    fn applicability(&self) -> &[Guard];

    fn evaluate(
        &self,
        element: &ElementRef,
        page: &dyn Page,
        ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError>;
}

//! Shared data model for the accessibility rule engine.
//!
//! Verdicts, tests, per-rule results, rule descriptors with WCAG metadata,
//! evaluation options, and the aggregated evaluation report.

pub mod descriptor;
pub mod error;
pub mod options;
pub mod report;
pub mod result;
pub mod test;
pub mod verdict;

pub use descriptor::{Combinator, Level, Principle, RuleDescriptor, RuleVariant, SuccessCriterion};
pub use error::{EngineError, Result, RuleError};
pub use options::{EvaluationOptions, Optimization, ResolvedOptions};
pub use report::{Assertion, AssertionMetadata, EvaluationReport, ReportTotals};
pub use result::RuleResult;
pub use test::Test;
pub use verdict::Verdict;

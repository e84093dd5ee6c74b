//! ACT rule battery, registry, and the staged dispatch engine.
//!
//! [`ActRules`] is the entry point: configure it with
//! [`EvaluationOptions`](a11y_model::EvaluationOptions), then call
//! [`execute`](ActRules::execute) with a page and its meta elements to get
//! an [`EvaluationReport`](a11y_model::EvaluationReport).

mod composite;
mod dispatch;
pub mod guard;
pub mod mapping;
pub mod registry;
pub mod rule;
mod rules;

pub use dispatch::ActRules;
pub use guard::Guard;
pub use registry::RuleRegistry;
pub use rule::{AtomicRuleImpl, ExecutionContext};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed filter input, surfaced before evaluation starts.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A composite rule was dispatched before a dependency was finalized.
    /// This is a sequencing bug in the dispatch tables, not an input error.
    #[error("composite rule {rule} dispatched before dependency {dependency} was finalized")]
    DependencyOrdering { rule: String, dependency: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure inside a rule body. Caught at the dispatch boundary per
/// rule-per-element and converted into a "could not evaluate" test; it never
/// aborts the batch.
#[derive(Debug, Clone, Error)]
#[error("rule execution failed: {0}")]
pub struct RuleError(pub String);

impl RuleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

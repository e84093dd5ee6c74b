use serde::{Deserialize, Serialize};

use crate::verdict::Verdict;

/// One verdict instance produced by a rule branch or an applicability guard.
///
/// The `description` is an opaque locale key (`"<rule-code>.<result-code>"`);
/// the external translation layer resolves it to human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub verdict: Verdict,
    /// Stable identifier of the logical branch that produced this test
    /// (e.g. `"RC7"`, guard codes `"GC1"`, execution-fault code `"EX1"`).
    #[serde(rename = "resultCode")]
    pub result_code: String,
    pub description: String,
    /// Stable selectors of the element(s) this test was produced for.
    #[serde(rename = "pointer")]
    pub pointers: Vec<String>,
}

impl Test {
    /// Create a test for a rule branch. The description key is derived from
    /// the rule code and result code.
    pub fn new(rule_code: &str, verdict: Verdict, result_code: &str) -> Self {
        Self {
            verdict,
            result_code: result_code.to_string(),
            description: format!("{rule_code}.{result_code}"),
            pointers: Vec::new(),
        }
    }

    /// Attach an element pointer (stable selector identity).
    pub fn with_pointer(mut self, selector: impl Into<String>) -> Self {
        self.pointers.push(selector.into());
        self
    }

    /// True if this test was produced for the element with the given
    /// stable selector.
    pub fn covers(&self, selector: &str) -> bool {
        self.pointers.iter().any(|p| p == selector)
    }
}

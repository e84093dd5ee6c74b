//! Evaluation options: principle/level/code filters and optimization mode.

use serde::{Deserialize, Serialize};

use crate::descriptor::{Level, Principle};
use crate::error::{EngineError, Result};

/// Execution mode consumed by rule bodies.
///
/// `Performance` allows early exit on the first failing element of a scan;
/// `ErrorDetection` records a test per offending element. The mode never
/// changes the derived outcome, only test completeness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Optimization {
    #[default]
    Performance,
    ErrorDetection,
}

impl Optimization {
    /// Parse an optimization token (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "performance" => Some(Optimization::Performance),
            "error-detection" => Some(Optimization::ErrorDetection),
            _ => None,
        }
    }
}

/// Raw configuration input as supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationOptions {
    pub principles: Option<Vec<String>>,
    pub levels: Option<Vec<String>>,
    pub rules: Option<Vec<String>>,
    pub optimize: Option<String>,
}

/// Parsed and normalized configuration.
#[derive(Debug, Clone, Default)]
pub struct ResolvedOptions {
    pub principles: Option<Vec<Principle>>,
    pub levels: Option<Vec<Level>>,
    /// Normalized rule codes / external test ids. Unknown entries are
    /// ignored at match time, not rejected here.
    pub rules: Option<Vec<String>>,
    pub optimize: Option<Optimization>,
}

impl EvaluationOptions {
    /// Validate and normalize the raw filters.
    ///
    /// Unknown principle, level, or optimize tokens are configuration
    /// faults; unknown rule codes are not (they simply never match).
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let principles = self
            .principles
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .map(|v| {
                        Principle::parse(v).ok_or_else(|| {
                            EngineError::Configuration(format!("unknown principle {v:?}"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let levels = self
            .levels
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .map(|v| {
                        Level::parse(v).ok_or_else(|| {
                            EngineError::Configuration(format!("unknown level {v:?}"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let rules = self.rules.as_ref().map(|values| {
            values.iter().map(|code| normalize_rule_code(code)).collect()
        });

        let optimize = self
            .optimize
            .as_ref()
            .map(|v| {
                Optimization::parse(v).ok_or_else(|| {
                    EngineError::Configuration(format!("unknown optimization mode {v:?}"))
                })
            })
            .transpose()?;

        Ok(ResolvedOptions {
            principles,
            levels,
            rules,
            optimize,
        })
    }
}

/// Engine rule codes are uppercased; external test ids are kept as-is.
fn normalize_rule_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.to_lowercase().starts_with("qw") {
        trimmed.to_uppercase()
    } else {
        trimmed.to_string()
    }
}

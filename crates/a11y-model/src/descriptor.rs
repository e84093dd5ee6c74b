//! Immutable rule descriptors and their WCAG classification metadata.

use serde::{Deserialize, Serialize};

/// WCAG principle axis used for rule-set filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Principle {
    pub const ALL: [Principle; 4] = [
        Principle::Perceivable,
        Principle::Operable,
        Principle::Understandable,
        Principle::Robust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Principle::Perceivable => "Perceivable",
            Principle::Operable => "Operable",
            Principle::Understandable => "Understandable",
            Principle::Robust => "Robust",
        }
    }

    /// Parse a principle from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "perceivable" => Some(Principle::Perceivable),
            "operable" => Some(Principle::Operable),
            "understandable" => Some(Principle::Understandable),
            "robust" => Some(Principle::Robust),
            _ => None,
        }
    }
}

/// WCAG conformance level axis used for rule-set filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A,
    AA,
    AAA,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::A, Level::AA, Level::AAA];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A => "A",
            Level::AA => "AA",
            Level::AAA => "AAA",
        }
    }

    /// Parse a level from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Level::A),
            "AA" => Some(Level::AA),
            "AAA" => Some(Level::AAA),
            _ => None,
        }
    }
}

/// One WCAG success criterion a rule maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessCriterion {
    /// Criterion number, e.g. `"1.1.1"`.
    pub name: String,
    pub principle: Principle,
    pub level: Level,
    pub url: String,
}

impl SuccessCriterion {
    pub fn new(name: &str, principle: Principle, level: Level, url: &str) -> Self {
        Self {
            name: name.to_string(),
            principle,
            level,
            url: url.to_string(),
        }
    }
}

/// How a composite rule combines its dependencies' verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    Conjunction,
    Disjunction,
}

/// Atomic rules evaluate elements directly; composite rules combine the
/// finalized results of their dependency rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleVariant {
    Atomic,
    Composite {
        /// Dependency rule codes, in declaration order.
        dependencies: Vec<String>,
        combinator: Combinator,
    },
}

/// Immutable descriptor for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// Globally unique rule code, e.g. `"QW-ACT-R17"`.
    pub code: String,
    /// Canonical external test id, e.g. `"23a2a8"`.
    pub mapping: String,
    /// Human name key (translated externally).
    pub name: String,
    /// Reference URL of the published rule.
    pub url: String,
    #[serde(rename = "success-criteria")]
    pub success_criteria: Vec<SuccessCriterion>,
    pub variant: RuleVariant,
}

impl RuleDescriptor {
    pub fn atomic(code: &str, mapping: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            mapping: mapping.to_string(),
            name: name.to_string(),
            url: format!("https://act-rules.github.io/rules/{mapping}"),
            success_criteria: Vec::new(),
            variant: RuleVariant::Atomic,
        }
    }

    pub fn composite(
        code: &str,
        mapping: &str,
        name: &str,
        combinator: Combinator,
        dependencies: &[&str],
    ) -> Self {
        Self {
            code: code.to_string(),
            mapping: mapping.to_string(),
            name: name.to_string(),
            url: format!("https://act-rules.github.io/rules/{mapping}"),
            success_criteria: Vec::new(),
            variant: RuleVariant::Composite {
                dependencies: dependencies.iter().map(|d| (*d).to_string()).collect(),
                combinator,
            },
        }
    }

    pub fn with_criterion(mut self, criterion: SuccessCriterion) -> Self {
        self.success_criteria.push(criterion);
        self
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.variant, RuleVariant::Composite { .. })
    }

    /// True if any success criterion falls inside both the given principle
    /// set and the given level set.
    pub fn has_principle_and_levels(&self, principles: &[Principle], levels: &[Level]) -> bool {
        self.success_criteria
            .iter()
            .any(|sc| principles.contains(&sc.principle) && levels.contains(&sc.level))
    }
}

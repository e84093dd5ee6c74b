//! Rule registry: builds the full battery once, then toggles enabled flags
//! per configuration.

use std::collections::BTreeMap;

use a11y_model::{
    Combinator, EvaluationOptions, Level, Optimization, Principle, Result, RuleDescriptor,
    SuccessCriterion,
};
use tracing::debug;

use crate::rule::AtomicRuleImpl;
use crate::rules;

pub struct RuleRegistry {
    atomics: BTreeMap<String, Box<dyn AtomicRuleImpl>>,
    composites: BTreeMap<String, RuleDescriptor>,
    enabled: BTreeMap<String, bool>,
    optimization: Optimization,
}

impl RuleRegistry {
    /// Build every rule, all enabled.
    pub fn new() -> Self {
        let atomics: Vec<Box<dyn AtomicRuleImpl>> = vec![
            Box::new(rules::page_title::PageHasTitle::new()),
            Box::new(rules::html_lang::HtmlHasLang::new()),
            Box::new(rules::meta_refresh::MetaRefreshNoDelay::new()),
            Box::new(rules::lang_valid::HtmlLangValid::new()),
            Box::new(rules::image_button_name::ImageButtonAccessibleName::new()),
            Box::new(rules::button_name::ButtonAccessibleName::new()),
            Box::new(rules::link_name::LinkAccessibleName::new()),
            Box::new(rules::aria_hidden_focus::AriaHiddenNoFocusableContent::new()),
            Box::new(rules::form_field_name::FormFieldAccessibleName::new()),
            Box::new(rules::image_name::ImageAccessibleName::new()),
            Box::new(rules::iframe_name::IframeAccessibleName::new()),
            Box::new(rules::role_valid::RoleAttributeValid::new()),
            Box::new(rules::svg_name::SvgAccessibleName::new()),
            Box::new(rules::context_role::RequiredContextRole::new()),
            Box::new(rules::heading_name::HeadingAccessibleName::new()),
            Box::new(rules::owned_elements::RequiredOwnedElements::new()),
            Box::new(rules::video_captions::VideoCaptions::new()),
            Box::new(rules::video_descriptions::VideoAudioDescription::new()),
            Box::new(rules::audio_captions::AudioCaptions::new()),
            Box::new(rules::audio_transcript::AudioTranscript::new()),
        ];
        let atomics: BTreeMap<String, Box<dyn AtomicRuleImpl>> = atomics
            .into_iter()
            .map(|rule| (rule.descriptor().code.clone(), rule))
            .collect();

        let composites: BTreeMap<String, RuleDescriptor> = composite_descriptors()
            .into_iter()
            .map(|descriptor| (descriptor.code.clone(), descriptor))
            .collect();

        let enabled = atomics
            .keys()
            .chain(composites.keys())
            .map(|code| (code.clone(), true))
            .collect();

        Self {
            atomics,
            composites,
            enabled,
            optimization: Optimization::default(),
        }
    }

    /// Apply principle/level/code filters and the optimization mode.
    ///
    /// Always starts from all-enabled. A principle/level filter disables
    /// non-intersecting rules; an explicit code list on top of it
    /// *additionally* enables the named rules rather than restricting
    /// further. Without a principle/level filter, an explicit code list is
    /// exclusive. Unknown codes never match and are silently ignored.
    pub fn configure(&mut self, options: &EvaluationOptions) -> Result<()> {
        let resolved = options.resolve()?;
        self.reset_configuration();

        let principles = resolved.principles.filter(|p| !p.is_empty());
        let levels = resolved.levels.filter(|l| !l.is_empty());
        let codes = resolved.rules.filter(|r| !r.is_empty());
        let axis_filtered = principles.is_some() || levels.is_some();

        let principles = principles.unwrap_or_else(|| Principle::ALL.to_vec());
        let levels = levels.unwrap_or_else(|| Level::ALL.to_vec());

        for descriptor in self.descriptors() {
            let code = descriptor.code.clone();
            let listed = codes.as_ref().is_some_and(|codes| {
                codes.contains(&descriptor.code) || codes.contains(&descriptor.mapping)
            });
            let enable = if axis_filtered {
                descriptor.has_principle_and_levels(&principles, &levels) || listed
            } else if codes.is_some() {
                listed
            } else {
                true
            };
            self.enabled.insert(code, enable);
        }

        if let Some(optimization) = resolved.optimize {
            self.optimization = optimization;
        }
        debug!(
            enabled = self.enabled.values().filter(|e| **e).count(),
            total = self.enabled.len(),
            "rule set configured"
        );
        Ok(())
    }

    fn reset_configuration(&mut self) {
        for flag in self.enabled.values_mut() {
            *flag = true;
        }
        self.optimization = Optimization::default();
    }

    pub fn is_enabled(&self, code: &str) -> bool {
        self.enabled.get(code).copied().unwrap_or(false)
    }

    pub fn optimization(&self) -> Optimization {
        self.optimization
    }

    pub(crate) fn atomic(&self, code: &str) -> Option<&dyn AtomicRuleImpl> {
        self.atomics.get(code).map(Box::as_ref)
    }

    pub(crate) fn composite_descriptor(&self, code: &str) -> Option<&RuleDescriptor> {
        self.composites.get(code)
    }

    fn descriptors(&self) -> Vec<RuleDescriptor> {
        self.atomics
            .values()
            .map(|rule| rule.descriptor().clone())
            .chain(self.composites.values().cloned())
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn composite_descriptors() -> Vec<RuleDescriptor> {
    vec![
        RuleDescriptor::composite(
            "QW-ACT-R49",
            "e7aa44",
            "audio element content has text alternative",
            Combinator::Disjunction,
            &["QW-ACT-R58", "QW-ACT-R59"],
        )
        .with_criterion(SuccessCriterion::new(
            "1.2.1",
            Principle::Perceivable,
            Level::A,
            "https://www.w3.org/TR/WCAG21/#audio-only-and-video-only-prerecorded",
        )),
        RuleDescriptor::composite(
            "QW-ACT-R50",
            "c5a4ea",
            "video element visual content has accessible alternative",
            Combinator::Conjunction,
            &["QW-ACT-R55", "QW-ACT-R56"],
        )
        .with_criterion(SuccessCriterion::new(
            "1.2.2",
            Principle::Perceivable,
            Level::A,
            "https://www.w3.org/TR/WCAG21/#captions-prerecorded",
        ))
        .with_criterion(SuccessCriterion::new(
            "1.2.5",
            Principle::Perceivable,
            Level::AA,
            "https://www.w3.org/TR/WCAG21/#audio-description-prerecorded",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{COMPOSITE_MAP, SELECTOR_MAP, UNMAPPED_RULES};

    #[test]
    fn every_mapped_code_has_a_rule() {
        let registry = RuleRegistry::new();
        for mapping in SELECTOR_MAP {
            for code in mapping.rules {
                assert!(registry.atomic(code).is_some(), "missing {code}");
            }
        }
        for code in UNMAPPED_RULES {
            assert!(registry.atomic(code).is_some(), "missing {code}");
        }
        for mapping in COMPOSITE_MAP {
            assert!(
                registry.composite_descriptor(mapping.code).is_some(),
                "missing {}",
                mapping.code
            );
        }
    }

    #[test]
    fn level_filter_disables_aa_only_rules() {
        let mut registry = RuleRegistry::new();
        registry
            .configure(&EvaluationOptions {
                levels: Some(vec!["A".to_string()]),
                ..EvaluationOptions::default()
            })
            .expect("valid options");
        // QW-ACT-R35 maps only to a level-AA criterion.
        assert!(!registry.is_enabled("QW-ACT-R35"));
        assert!(registry.is_enabled("QW-ACT-R17"));
    }

    #[test]
    fn explicit_codes_are_exclusive_without_axis_filters() {
        let mut registry = RuleRegistry::new();
        registry
            .configure(&EvaluationOptions {
                rules: Some(vec!["qw-act-r17".to_string(), "cae760".to_string()]),
                ..EvaluationOptions::default()
            })
            .expect("valid options");
        assert!(registry.is_enabled("QW-ACT-R17"));
        // Matched through its external test id.
        assert!(registry.is_enabled("QW-ACT-R19"));
        assert!(!registry.is_enabled("QW-ACT-R1"));
    }

    #[test]
    fn explicit_codes_additionally_enable_on_top_of_axis_filters() {
        let mut registry = RuleRegistry::new();
        registry
            .configure(&EvaluationOptions {
                levels: Some(vec!["A".to_string()]),
                rules: Some(vec!["QW-ACT-R35".to_string()]),
                ..EvaluationOptions::default()
            })
            .expect("valid options");
        // The code list widens the axis result instead of restricting it.
        assert!(registry.is_enabled("QW-ACT-R35"));
        assert!(registry.is_enabled("QW-ACT-R17"));
    }

    #[test]
    fn unknown_codes_are_ignored_and_reconfigure_starts_fresh() {
        let mut registry = RuleRegistry::new();
        registry
            .configure(&EvaluationOptions {
                rules: Some(vec!["NOT-A-RULE".to_string()]),
                ..EvaluationOptions::default()
            })
            .expect("unknown codes are not fatal");
        assert!(!registry.is_enabled("QW-ACT-R1"));

        registry
            .configure(&EvaluationOptions::default())
            .expect("valid options");
        assert!(registry.is_enabled("QW-ACT-R1"));
    }

    #[test]
    fn optimization_mode_is_carried() {
        let mut registry = RuleRegistry::new();
        registry
            .configure(&EvaluationOptions {
                optimize: Some("error-detection".to_string()),
                ..EvaluationOptions::default()
            })
            .expect("valid options");
        assert_eq!(registry.optimization(), Optimization::ErrorDetection);
    }
}

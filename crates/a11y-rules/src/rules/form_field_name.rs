//! QW-ACT-R16: form fields have an accessible name.

use a11y_aria::element_role;
use a11y_model::{
    Level, Principle, RuleDescriptor, RuleError, SuccessCriterion, Test, Verdict,
};
use a11y_page::{ElementRef, Page};

use crate::guard::Guard;
use crate::rule::{AtomicRuleImpl, ExecutionContext};
use crate::rules::{has_accessible_name, single};

/// Roles this rule considers form fields.
const FORM_FIELD_ROLES: &[&str] = &[
    "checkbox",
    "combobox",
    "listbox",
    "menuitemcheckbox",
    "menuitemradio",
    "radio",
    "searchbox",
    "slider",
    "spinbutton",
    "switch",
    "textbox",
];

pub struct FormFieldAccessibleName {
    descriptor: RuleDescriptor,
}

impl FormFieldAccessibleName {
    pub fn new() -> Self {
        Self {
            descriptor: RuleDescriptor::atomic(
                "QW-ACT-R16",
                "e086e5",
                "Form control has accessible name",
            )
            .with_criterion(SuccessCriterion::new(
                "4.1.2",
                Principle::Robust,
                Level::A,
                "https://www.w3.org/TR/WCAG21/#name-role-value",
            )),
        }
    }
}

impl AtomicRuleImpl for FormFieldAccessibleName {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn applicability(&self) -> &[Guard] {
        &[Guard::ElementExists, Guard::ElementIsInAccessibilityTree]
    }

    fn evaluate(
        &self,
        element: &ElementRef,
        page: &dyn Page,
        _ctx: &ExecutionContext,
    ) -> Result<Vec<Test>, RuleError> {
        let code = &self.descriptor.code;
        let is_form_field = element_role(element)
            .is_some_and(|role| FORM_FIELD_ROLES.contains(&role.as_str()));
        if !is_form_field {
            return Ok(single(code, Verdict::Inapplicable, "RC1", element));
        }
        let tests = if has_accessible_name(element, page) {
            single(code, Verdict::Passed, "RC2", element)
        } else {
            single(code, Verdict::Failed, "RC3", element)
        };
        Ok(tests)
    }
}

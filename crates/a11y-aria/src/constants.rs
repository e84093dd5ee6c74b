//! Static vocabularies used by the name computation.

/// Labelable non-`input` form elements that take their name from an
/// associated `<label>` at the outermost call.
pub const FORM_ELEMENTS: &[&str] = &[
    "select", "optgroup", "option", "datalist", "output", "progress", "meter",
];

/// `input` types whose name comes from an associated `<label>`.
pub const TYPES_WITH_LABEL: &[&str] = &[
    "checkbox",
    "color",
    "date",
    "datetime-local",
    "email",
    "file",
    "month",
    "number",
    "password",
    "radio",
    "range",
    "search",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

/// ARIA attributes valid on every element. Their presence keeps an
/// explicitly presentational element in the accessibility tree.
pub const GLOBAL_ARIA_ATTRIBUTES: &[&str] = &[
    "aria-atomic",
    "aria-busy",
    "aria-controls",
    "aria-current",
    "aria-describedby",
    "aria-details",
    "aria-dropeffect",
    "aria-errormessage",
    "aria-flowto",
    "aria-grabbed",
    "aria-haspopup",
    "aria-hidden",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-live",
    "aria-owns",
    "aria-relevant",
    "aria-roledescription",
];

/// User-agent default name for button-like inputs without a `value`.
pub fn default_input_name(input_type: &str) -> Option<&'static str> {
    match input_type {
        "submit" => Some("Submit"),
        "reset" => Some("Reset"),
        _ => None,
    }
}

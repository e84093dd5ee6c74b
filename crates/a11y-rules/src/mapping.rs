//! Static selector-to-rule tables.
//!
//! Hand-maintained, versionable data kept apart from dispatch logic: adding
//! a rule or moving one between buckets never touches the engine. The tables
//! are built once; configuration only flips per-code enabled flags.

/// Concurrency discipline of one selector group. Sequential rules may probe
/// order-sensitive page state (e.g. focus); concurrent rules are read-only
/// and their per-element invocations run as a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Sequential,
    Concurrent,
}

/// One selector group: the rules sharing a target selector. The page is
/// queried once per group and the matched elements are shared across all
/// enabled mapped rules.
#[derive(Debug, Clone, Copy)]
pub struct SelectorMapping {
    pub selector: &'static str,
    pub bucket: Bucket,
    pub rules: &'static [&'static str],
}

pub static SELECTOR_MAP: &[SelectorMapping] = &[
    SelectorMapping {
        selector: "[aria-hidden=\"true\"]",
        bucket: Bucket::Sequential,
        rules: &["QW-ACT-R13"],
    },
    SelectorMapping {
        selector: "html",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R1", "QW-ACT-R2", "QW-ACT-R5"],
    },
    SelectorMapping {
        selector: "input[type=\"image\"]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R6"],
    },
    SelectorMapping {
        selector: "button, input[type=\"submit\"], input[type=\"reset\"], input[type=\"button\"], [role=\"button\"]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R11"],
    },
    SelectorMapping {
        selector: "a[href], area[href], [role=\"link\"]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R12"],
    },
    SelectorMapping {
        selector: "input, select, textarea, [role]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R16"],
    },
    SelectorMapping {
        selector: "img, [role=\"img\"]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R17"],
    },
    SelectorMapping {
        selector: "iframe",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R19"],
    },
    SelectorMapping {
        selector: "[role]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R20", "QW-ACT-R33"],
    },
    SelectorMapping {
        selector: "svg",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R21"],
    },
    SelectorMapping {
        selector: "h1, h2, h3, h4, h5, h6, [role=\"heading\"]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R35"],
    },
    SelectorMapping {
        selector: "[role=\"row\"], [role=\"list\"], [role=\"menu\"], [role=\"menubar\"], [role=\"listbox\"], [role=\"grid\"], [role=\"rowgroup\"], [role=\"table\"], [role=\"treegrid\"], [role=\"tablist\"]",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R38"],
    },
    SelectorMapping {
        selector: "video",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R55", "QW-ACT-R56"],
    },
    SelectorMapping {
        selector: "audio",
        bucket: Bucket::Concurrent,
        rules: &["QW-ACT-R58", "QW-ACT-R59"],
    },
];

/// Rules not keyed by a selector; they run over an externally supplied
/// element list instead.
pub static UNMAPPED_RULES: &[&str] = &["QW-ACT-R4"];

/// One composite rule's own element scope.
#[derive(Debug, Clone, Copy)]
pub struct CompositeMapping {
    pub code: &'static str,
    pub selector: &'static str,
}

pub static COMPOSITE_MAP: &[CompositeMapping] = &[
    CompositeMapping {
        code: "QW-ACT-R49",
        selector: "audio",
    },
    CompositeMapping {
        code: "QW-ACT-R50",
        selector: "video",
    },
];

//! Static ARIA role table: validity, widget/name-from-content properties,
//! required context roles, and required owned elements.
//!
//! Kept as plain versionable data so role vocabulary updates never touch
//! the resolution logic.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Properties of one ARIA role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSpec {
    /// Role allows computing the accessible name from descendant content.
    pub name_from_content: bool,
    /// Role is an interactive widget.
    pub widget: bool,
    /// Roles an element with this role must be contained in (empty: none).
    pub required_context: &'static [&'static str],
    /// Alternatives of owned-element role chains this role requires
    /// (outer slice: alternatives; inner slice: role then nested role).
    pub required_owned: &'static [&'static [&'static str]],
}

const PLAIN: RoleSpec = RoleSpec {
    name_from_content: false,
    widget: false,
    required_context: &[],
    required_owned: &[],
};

const CONTENT: RoleSpec = RoleSpec {
    name_from_content: true,
    ..PLAIN
};

const WIDGET: RoleSpec = RoleSpec {
    name_from_content: true,
    widget: true,
    ..PLAIN
};

static ROLE_TABLE: &[(&str, RoleSpec)] = &[
    ("alert", PLAIN),
    ("alertdialog", PLAIN),
    ("application", PLAIN),
    ("article", PLAIN),
    ("banner", PLAIN),
    ("blockquote", PLAIN),
    ("button", WIDGET),
    ("caption", PLAIN),
    ("cell", RoleSpec { name_from_content: true, required_context: &["row"], ..PLAIN }),
    ("checkbox", WIDGET),
    ("code", PLAIN),
    ("columnheader", RoleSpec { name_from_content: true, required_context: &["row"], ..PLAIN }),
    ("combobox", RoleSpec { widget: true, ..PLAIN }),
    ("complementary", PLAIN),
    ("contentinfo", PLAIN),
    ("definition", PLAIN),
    ("deletion", PLAIN),
    ("dialog", PLAIN),
    ("directory", PLAIN),
    ("document", PLAIN),
    ("emphasis", PLAIN),
    ("feed", RoleSpec { required_owned: &[&["article"]], ..PLAIN }),
    ("figure", PLAIN),
    ("form", PLAIN),
    ("generic", PLAIN),
    ("graphics-document", PLAIN),
    ("graphics-object", PLAIN),
    ("graphics-symbol", PLAIN),
    ("grid", RoleSpec { required_owned: &[&["row"], &["rowgroup", "row"]], ..PLAIN }),
    ("gridcell", RoleSpec { name_from_content: true, widget: true, required_context: &["row"], ..PLAIN }),
    ("group", PLAIN),
    ("heading", CONTENT),
    ("img", PLAIN),
    ("insertion", PLAIN),
    ("link", WIDGET),
    ("list", RoleSpec { required_owned: &[&["listitem"]], ..PLAIN }),
    ("listbox", RoleSpec { widget: true, required_owned: &[&["option"], &["group", "option"]], ..PLAIN }),
    ("listitem", RoleSpec { required_context: &["list", "directory"], ..PLAIN }),
    ("log", PLAIN),
    ("main", PLAIN),
    ("marquee", PLAIN),
    ("math", PLAIN),
    ("menu", RoleSpec {
        required_owned: &[&["menuitem"], &["menuitemcheckbox"], &["menuitemradio"], &["group", "menuitem"]],
        ..PLAIN
    }),
    ("menubar", RoleSpec {
        required_owned: &[&["menuitem"], &["menuitemcheckbox"], &["menuitemradio"], &["group", "menuitem"]],
        ..PLAIN
    }),
    ("menuitem", RoleSpec {
        name_from_content: true,
        widget: true,
        required_context: &["menu", "menubar", "group"],
        ..PLAIN
    }),
    ("menuitemcheckbox", RoleSpec {
        name_from_content: true,
        widget: true,
        required_context: &["menu", "menubar", "group"],
        ..PLAIN
    }),
    ("menuitemradio", RoleSpec {
        name_from_content: true,
        widget: true,
        required_context: &["menu", "menubar", "group"],
        ..PLAIN
    }),
    ("meter", PLAIN),
    ("navigation", PLAIN),
    ("none", PLAIN),
    ("note", PLAIN),
    ("option", RoleSpec {
        name_from_content: true,
        widget: true,
        required_context: &["listbox", "group"],
        ..PLAIN
    }),
    ("paragraph", PLAIN),
    ("presentation", PLAIN),
    ("progressbar", RoleSpec { widget: true, ..PLAIN }),
    ("radio", WIDGET),
    ("radiogroup", RoleSpec { required_owned: &[&["radio"]], ..PLAIN }),
    ("region", PLAIN),
    ("row", RoleSpec {
        name_from_content: true,
        required_context: &["grid", "rowgroup", "table", "treegrid"],
        required_owned: &[&["cell"], &["columnheader"], &["gridcell"], &["rowheader"]],
        ..PLAIN
    }),
    ("rowgroup", RoleSpec {
        required_context: &["grid", "table", "treegrid"],
        required_owned: &[&["row"]],
        ..PLAIN
    }),
    ("rowheader", RoleSpec { name_from_content: true, required_context: &["row"], ..PLAIN }),
    ("scrollbar", RoleSpec { widget: true, ..PLAIN }),
    ("search", PLAIN),
    ("searchbox", RoleSpec { widget: true, ..PLAIN }),
    ("separator", PLAIN),
    ("slider", RoleSpec { widget: true, ..PLAIN }),
    ("spinbutton", RoleSpec { widget: true, ..PLAIN }),
    ("status", PLAIN),
    ("strong", PLAIN),
    ("subscript", PLAIN),
    ("superscript", PLAIN),
    ("switch", WIDGET),
    ("tab", RoleSpec { name_from_content: true, widget: true, required_context: &["tablist"], ..PLAIN }),
    ("table", RoleSpec { required_owned: &[&["row"], &["rowgroup", "row"]], ..PLAIN }),
    ("tablist", RoleSpec { required_owned: &[&["tab"]], ..PLAIN }),
    ("tabpanel", PLAIN),
    ("term", PLAIN),
    ("textbox", RoleSpec { widget: true, ..PLAIN }),
    ("time", PLAIN),
    ("timer", PLAIN),
    ("toolbar", PLAIN),
    ("tooltip", CONTENT),
    ("tree", RoleSpec { required_owned: &[&["treeitem"], &["group", "treeitem"]], ..PLAIN }),
    ("treegrid", RoleSpec { required_owned: &[&["row"], &["rowgroup", "row"]], ..PLAIN }),
    ("treeitem", RoleSpec {
        name_from_content: true,
        widget: true,
        required_context: &["tree", "group"],
        ..PLAIN
    }),
];

static ROLES: LazyLock<BTreeMap<&'static str, &'static RoleSpec>> =
    LazyLock::new(|| ROLE_TABLE.iter().map(|(name, spec)| (*name, spec)).collect());

/// Look up a role's properties.
pub fn role_spec(role: &str) -> Option<&'static RoleSpec> {
    ROLES.get(role).copied()
}

pub fn is_valid_role(role: &str) -> bool {
    ROLES.contains_key(role)
}

//! Accessible-name and semantic-role computation.
//!
//! Recursive accessible-name resolution per the fixed precedence table
//! (aria-labelledby, aria-label, embedded-control value, tag-specific
//! sources, name-from-content, title), plus role resolution against a
//! static role table, accessibility-tree membership, and the containment
//! checks structural role rules depend on.

pub mod constants;
pub mod focus;
pub mod hidden;
pub mod name;
pub mod role;
pub mod roles;
pub mod tree;

pub use focus::is_focusable;
pub use hidden::{hidden_by_css, is_hidden, is_hidden_for_rendering};
pub use name::{NameContribution, accessible_name, accessible_name_svg, accessible_name_targets};
pub use role::{element_role, implicit_role, is_widget, valid_explicit_role};
pub use roles::{RoleSpec, is_valid_role, role_spec};
pub use tree::{
    aria_owner, has_aria_busy_ancestor, in_accessibility_tree, is_descendant_of_roles,
    owned_elements,
};

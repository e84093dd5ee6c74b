use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared handle to a document element.
pub type ElementRef = Arc<dyn Element>;

/// Opaque element handle. The engine only reads; it never mutates the
/// document through this interface.
pub trait Element: Send + Sync + std::fmt::Debug {
    /// Lowercase tag name.
    fn tag_name(&self) -> String;

    /// Attribute value by name. Keys are unique and case-sensitive.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Full attribute map.
    fn attributes(&self) -> BTreeMap<String, String>;

    /// Computed style value for a property, empty string when unset.
    fn style_property(&self, name: &str) -> String;

    /// Directly contained text (not descendants').
    fn text(&self) -> String;

    fn parent(&self) -> Option<ElementRef>;

    fn children(&self) -> Vec<ElementRef>;

    /// Stable selector string. This is the element's identity in reports
    /// and for composite-rule result matching.
    fn selector(&self) -> String;

    /// True when the element is rendered outside the viewport.
    fn is_offscreen(&self) -> bool;
}

/// Opaque page handle: selector queries and document-level lookups.
pub trait Page: Send + Sync {
    /// All elements matching a selector, in document order.
    fn query(&self, selector: &str) -> Vec<ElementRef>;

    /// Matching descendants of `root` (exclusive), in document order.
    fn query_within(&self, selector: &str, root: &ElementRef) -> Vec<ElementRef>;

    /// First element with the given `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<ElementRef>;

    fn url(&self) -> String;
}

//! In-memory document: an arena tree built programmatically, answering the
//! [`Page`]/[`Element`] capability queries. Used by the test suites and by
//! embedders that already hold a parsed tree.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::capability::{Element, ElementRef, Page};
use crate::selector::{self, Complex, SelectorList};

/// Declarative element description consumed by [`MemoryPage`].
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    offscreen: bool,
    children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(property.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn offscreen(mut self) -> Self {
        self.offscreen = true;
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    offscreen: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Precomputed stable selector, e.g. `html > body > img:nth-child(2)`.
    selector: String,
}

#[derive(Debug)]
struct DocumentInner {
    /// Preorder arena; index 0 is the root.
    nodes: Vec<Node>,
    url: String,
}

/// In-memory page. Cheap to clone; elements share the arena.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    inner: Arc<DocumentInner>,
}

impl MemoryPage {
    /// Build a page from a full document root (normally `html`).
    pub fn new(root: ElementSpec, url: &str) -> Self {
        let mut nodes = Vec::new();
        flatten(root, None, &mut nodes);
        compute_selectors(&mut nodes);
        Self {
            inner: Arc::new(DocumentInner {
                nodes,
                url: url.to_string(),
            }),
        }
    }

    /// Convenience: wrap body content in `html > body`.
    pub fn with_body(children: impl IntoIterator<Item = ElementSpec>) -> Self {
        Self::new(
            ElementSpec::new("html").child(ElementSpec::new("body").children(children)),
            "https://example.test/",
        )
    }

    /// The document root element.
    pub fn document_element(&self) -> ElementRef {
        self.element_at(0)
    }

    fn element_at(&self, index: usize) -> ElementRef {
        Arc::new(MemoryElement {
            doc: Arc::clone(&self.inner),
            index,
        })
    }

    fn matches(&self, list: &SelectorList, index: usize) -> bool {
        list.alternatives
            .iter()
            .any(|complex| self.matches_complex(complex, index))
    }

    fn matches_complex(&self, complex: &Complex, index: usize) -> bool {
        let node = &self.inner.nodes[index];
        let Some((target, ancestors)) = complex.compounds.split_last() else {
            return false;
        };
        if !target.matches(&node.tag, &node.attrs) {
            return false;
        }
        // Each preceding compound must match some strict ancestor, in order.
        let mut remaining = ancestors;
        let mut current = node.parent;
        while let (Some(compound), Some(idx)) = (remaining.last(), current) {
            let ancestor = &self.inner.nodes[idx];
            if compound.matches(&ancestor.tag, &ancestor.attrs) {
                remaining = &remaining[..remaining.len() - 1];
            }
            current = ancestor.parent;
        }
        remaining.is_empty()
    }
}

impl Page for MemoryPage {
    fn query(&self, selector: &str) -> Vec<ElementRef> {
        let list = selector::parse(selector);
        (0..self.inner.nodes.len())
            .filter(|&i| self.matches(&list, i))
            .map(|i| self.element_at(i))
            .collect()
    }

    fn query_within(&self, selector: &str, root: &ElementRef) -> Vec<ElementRef> {
        let list = selector::parse(selector);
        let root_selector = root.selector();
        let Some(root_index) = self
            .inner
            .nodes
            .iter()
            .position(|n| n.selector == root_selector)
        else {
            return Vec::new();
        };
        let mut result = Vec::new();
        let mut stack: Vec<usize> = self.inner.nodes[root_index].children.clone();
        stack.reverse();
        let mut ordered = Vec::new();
        while let Some(idx) = stack.pop() {
            ordered.push(idx);
            for child in self.inner.nodes[idx].children.iter().rev() {
                stack.push(*child);
            }
        }
        for idx in ordered {
            if self.matches(&list, idx) {
                result.push(self.element_at(idx));
            }
        }
        result
    }

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.inner
            .nodes
            .iter()
            .position(|n| n.attrs.get("id").is_some_and(|v| v == id))
            .map(|i| self.element_at(i))
    }

    fn url(&self) -> String {
        self.inner.url.clone()
    }
}

#[derive(Debug)]
struct MemoryElement {
    doc: Arc<DocumentInner>,
    index: usize,
}

impl MemoryElement {
    fn node(&self) -> &Node {
        &self.doc.nodes[self.index]
    }
}

impl Element for MemoryElement {
    fn tag_name(&self) -> String {
        self.node().tag.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.node().attrs.get(name).cloned()
    }

    fn attributes(&self) -> BTreeMap<String, String> {
        self.node().attrs.clone()
    }

    fn style_property(&self, name: &str) -> String {
        self.node().styles.get(name).cloned().unwrap_or_default()
    }

    fn text(&self) -> String {
        self.node().text.clone()
    }

    fn parent(&self) -> Option<ElementRef> {
        self.node().parent.map(|idx| {
            Arc::new(MemoryElement {
                doc: Arc::clone(&self.doc),
                index: idx,
            }) as ElementRef
        })
    }

    fn children(&self) -> Vec<ElementRef> {
        self.node()
            .children
            .iter()
            .map(|&idx| {
                Arc::new(MemoryElement {
                    doc: Arc::clone(&self.doc),
                    index: idx,
                }) as ElementRef
            })
            .collect()
    }

    fn selector(&self) -> String {
        self.node().selector.clone()
    }

    fn is_offscreen(&self) -> bool {
        self.node().offscreen
    }
}

fn flatten(spec: ElementSpec, parent: Option<usize>, nodes: &mut Vec<Node>) -> usize {
    let index = nodes.len();
    nodes.push(Node {
        tag: spec.tag,
        attrs: spec.attrs,
        styles: spec.styles,
        text: spec.text,
        offscreen: spec.offscreen,
        parent,
        children: Vec::new(),
        selector: String::new(),
    });
    for child in spec.children {
        let child_index = flatten(child, Some(index), nodes);
        nodes[index].children.push(child_index);
    }
    index
}

fn compute_selectors(nodes: &mut [Node]) {
    for index in 0..nodes.len() {
        let mut segments = Vec::new();
        let mut current = Some(index);
        while let Some(idx) = current {
            let node = &nodes[idx];
            let segment = match node.parent {
                Some(parent_idx) => {
                    let siblings = &nodes[parent_idx].children;
                    if siblings.len() > 1 {
                        let position = siblings.iter().position(|&c| c == idx).unwrap_or(0) + 1;
                        format!("{}:nth-child({position})", node.tag)
                    } else {
                        node.tag.clone()
                    }
                }
                None => node.tag.clone(),
            };
            segments.push(segment);
            current = nodes[idx].parent;
        }
        segments.reverse();
        nodes[index].selector = segments.join(" > ");
    }
}

//! Element/Page capability boundary consumed by the rule engine.
//!
//! The engine never owns the document; it sees opaque handles exposing
//! attribute, style, text, and tree-navigation queries. A real provider
//! (browser automation, a full DOM library) implements these traits
//! elsewhere. This crate also ships an in-memory document ([`memory`]) used
//! by the test suites and by embedders that already hold a parsed tree.

pub mod capability;
pub mod memory;
mod selector;

pub use capability::{Element, ElementRef, Page};
pub use memory::{ElementSpec, MemoryPage};

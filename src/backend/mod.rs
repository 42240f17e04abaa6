//! Rendering targets.
//!
//! Renderers never reach for a global document: they receive a
//! [`RenderTarget`] and only create elements and set string attributes on
//! them.

mod svg;

pub use svg::{Element, SvgDocument};

/// Handle to an element created by a [`RenderTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The element-creation capability geoms and axes render into.
pub trait RenderTarget {
    /// Create an element of the given kind, attached to `parent` when given.
    fn create_element(&mut self, kind: &str, parent: Option<NodeId>) -> NodeId;

    /// Set (or replace) a string attribute.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Set the text content of an element.
    fn set_text(&mut self, node: NodeId, text: &str);
}

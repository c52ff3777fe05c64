//! Radial skill tree diagram
//!
//! Draws a static hierarchy of named nodes as circles joined by edges,
//! positions hand-authored rather than computed. The only mutable state is
//! the transient per-node hover set.

mod layout;
mod node;
mod svg;

pub use layout::{lay_out, DisplayList, Shape};
pub use node::{label_font_size, Gradient, NodePath, SkillNode};
pub use svg::write_svg;

use std::collections::HashSet;

/// A skill tree plus its transient hover state
pub struct TreeDiagram {
    roots: Vec<SkillNode>,
    hovered: HashSet<NodePath>,
}

impl TreeDiagram {
    /// Create a diagram over the given roots
    pub fn new(roots: Vec<SkillNode>) -> Self {
        Self {
            roots,
            hovered: HashSet::new(),
        }
    }

    /// The root nodes
    pub fn roots(&self) -> &[SkillNode] {
        &self.roots
    }

    /// Produce the full display list with current hover state applied
    pub fn render(&self) -> DisplayList {
        lay_out(&self.roots, &self.hovered)
    }

    /// Mark a node as hovered
    pub fn on_hover(&mut self, path: NodePath) {
        log::trace!("hover: {}", path.as_str());
        self.hovered.insert(path);
    }

    /// Clear a node's hover state
    pub fn on_hover_end(&mut self, path: &NodePath) {
        log::trace!("hover end: {}", path.as_str());
        self.hovered.remove(path);
    }

    /// Whether a node is currently hovered
    pub fn is_hovered(&self, path: &NodePath) -> bool {
        self.hovered.contains(path)
    }
}

//! Static skill tree model

use crate::foundation::math::{utils, Point2};

/// One node in the skill tree
///
/// Names are unique among siblings (not globally); positions are percent
/// coordinates in [0, 100] of the drawing region; `size` is the circle
/// diameter proxy; `level` is the nesting depth with the root at 0. Nodes
/// are built once from static content and never mutated.
#[derive(Debug, Clone)]
pub struct SkillNode {
    name: String,
    position: Point2,
    size: f32,
    level: u8,
    children: Vec<SkillNode>,
}

impl SkillNode {
    /// Create a leaf node
    pub fn new(name: &str, x: f32, y: f32, size: f32, level: u8) -> Self {
        Self {
            name: name.to_string(),
            position: Point2::new(x, y),
            size,
            level,
            children: Vec::new(),
        }
    }

    /// Attach children, builder-style
    pub fn with_children(mut self, children: Vec<SkillNode>) -> Self {
        self.children = children;
        self
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in percent coordinates
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Circle diameter proxy
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Nesting level, root = 0
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Child nodes
    pub fn children(&self) -> &[SkillNode] {
        &self.children
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total node count of this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SkillNode::subtree_len).sum::<usize>()
    }
}

/// Gradient identity assigned to a node by nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    /// Level 0: the root
    Core,
    /// Level 1: skill categories
    Category,
    /// Level 2 and deeper: individual skills
    Skill,
}

impl Gradient {
    /// Pick the gradient for a nesting level
    pub fn for_level(level: u8) -> Self {
        match level {
            0 => Gradient::Core,
            1 => Gradient::Category,
            _ => Gradient::Skill,
        }
    }
}

/// Identity of a node as the slash-joined path of sibling-unique names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(String);

impl NodePath {
    /// Path of a root node
    pub fn root(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Path of a child under this node
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}/{}", self.0, name))
    }

    /// The path as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Label font size for a node, clamped to [10, 16]
///
/// Longer labels shrink (floor 0.7x); the adjustment factor is allowed to
/// exceed 1.0 for labels shorter than five characters, and only the final
/// clamp bounds the result.
pub fn label_font_size(node_size: f32, label: &str) -> f32 {
    let base_size = node_size / 6.0;
    let length = label.chars().count() as f32;
    let length_adjustment = (1.0 - (length - 5.0) * 0.05).max(0.7);
    utils::clamp(base_size * length_adjustment, 10.0, 16.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_short_label_hits_floor() {
        // base 45/6 = 7.5, adjustment 1.0, clamped up to the 10.0 floor
        assert_relative_eq!(label_font_size(45.0, "React"), 10.0);
    }

    #[test]
    fn test_long_label_shrinks_then_hits_floor() {
        // base ~9.17, 10 chars -> adjustment 0.75, product 6.875, floor 10.0
        assert_relative_eq!(label_font_size(55.0, "JavaScript"), 10.0);
    }

    #[test]
    fn test_midrange_label_passes_through_unclamped() {
        // base 72/6 = 12.0, 5 chars -> adjustment 1.0
        assert_relative_eq!(label_font_size(72.0, "Rust!"), 12.0);
    }

    #[test]
    fn test_huge_node_hits_ceiling() {
        assert_relative_eq!(label_font_size(120.0, "SWE"), 16.0);
    }

    #[test]
    fn test_empty_label_amplifies_before_clamp() {
        // Empty label: adjustment max(0.7, 1.25) = 1.25, base 12.0 -> 15.0.
        // The amplification is intentional; only the final clamp bounds it.
        assert_relative_eq!(label_font_size(72.0, ""), 15.0);
    }

    #[test]
    fn test_very_long_label_floors_adjustment() {
        // 40 chars: raw adjustment is negative, floored at 0.7
        let label = "a".repeat(40);
        assert_relative_eq!(label_font_size(96.0, &label), 11.2, epsilon = 1e-5);
    }

    #[test]
    fn test_gradient_levels() {
        assert_eq!(Gradient::for_level(0), Gradient::Core);
        assert_eq!(Gradient::for_level(1), Gradient::Category);
        assert_eq!(Gradient::for_level(2), Gradient::Skill);
        assert_eq!(Gradient::for_level(9), Gradient::Skill);
    }

    #[test]
    fn test_node_paths_distinguish_same_leaf_names() {
        let frontend = NodePath::root("SWE").child("Frontend").child("React");
        let mobile = NodePath::root("SWE").child("Mobile").child("React");
        assert_ne!(frontend, mobile);
        assert_eq!(frontend.as_str(), "SWE/Frontend/React");
    }
}

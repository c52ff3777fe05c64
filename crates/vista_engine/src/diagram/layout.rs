//! Depth-first layout of the skill tree into a draw-ordered display list
//!
//! The walk is pre-order with the resolved parent position passed down as
//! an explicit parameter, so every edge is emitted only after its parent's
//! circle has already been placed.

use std::collections::HashSet;

use crate::diagram::node::{label_font_size, Gradient, NodePath, SkillNode};
use crate::foundation::math::Point2;

/// Edge stroke opacity
const EDGE_OPACITY: f32 = 0.3;

/// Draw-in delay per nesting level for edges, seconds
const EDGE_DELAY_PER_LEVEL: f32 = 0.2;

/// Scale-in delay per nesting level for circles, seconds
const NODE_DELAY_PER_LEVEL: f32 = 0.1;

/// One drawable primitive, in draw order
#[derive(Debug, Clone)]
pub enum Shape {
    /// Connective line from a parent circle to a child circle
    Edge {
        /// Parent position, percent coordinates
        from: Point2,
        /// Child position, percent coordinates
        to: Point2,
        /// Stroke opacity
        opacity: f32,
        /// Draw-in animation delay, seconds
        delay_secs: f32,
    },
    /// A node's circle
    Disc {
        /// Center, percent coordinates
        center: Point2,
        /// Radius in drawing units (half the node size)
        radius: f32,
        /// Level-assigned gradient identity
        gradient: Gradient,
        /// Scale-in animation delay, seconds
        delay_secs: f32,
        /// Whether the node is currently hovered
        highlighted: bool,
        /// Node identity
        path: NodePath,
    },
    /// A node's centered text label
    Label {
        /// Center, percent coordinates
        center: Point2,
        /// Label text
        text: String,
        /// Clamped font size
        font_size: f32,
    },
}

/// The diagram as an ordered list of primitives
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    shapes: Vec<Shape>,
}

impl DisplayList {
    /// The primitives in draw order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Lay out the given roots depth-first into a display list
pub fn lay_out(roots: &[SkillNode], hovered: &HashSet<NodePath>) -> DisplayList {
    let mut list = DisplayList::default();
    for root in roots {
        walk(root, NodePath::root(root.name()), 0, None, hovered, &mut list.shapes);
    }
    list
}

fn walk(
    node: &SkillNode,
    path: NodePath,
    depth: u32,
    parent_pos: Option<Point2>,
    hovered: &HashSet<NodePath>,
    out: &mut Vec<Shape>,
) {
    // Edges only exist below the root, and always point at an
    // already-resolved parent position.
    if let Some(from) = parent_pos {
        out.push(Shape::Edge {
            from,
            to: node.position(),
            opacity: EDGE_OPACITY,
            delay_secs: depth as f32 * EDGE_DELAY_PER_LEVEL,
        });
    }

    out.push(Shape::Disc {
        center: node.position(),
        radius: node.size() / 2.0,
        gradient: Gradient::for_level(node.level()),
        delay_secs: depth as f32 * NODE_DELAY_PER_LEVEL,
        highlighted: hovered.contains(&path),
        path: path.clone(),
    });

    out.push(Shape::Label {
        center: node.position(),
        text: node.name().to_string(),
        font_size: label_font_size(node.size(), node.name()),
    });

    for child in node.children() {
        walk(
            child,
            path.child(child.name()),
            depth + 1,
            Some(node.position()),
            hovered,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level_tree() -> SkillNode {
        SkillNode::new("Root", 50.0, 50.0, 120.0, 0).with_children(vec![
            SkillNode::new("Left", 20.0, 20.0, 80.0, 1).with_children(vec![SkillNode::new(
                "Leaf", 8.0, 8.0, 50.0, 2,
            )]),
            SkillNode::new("Right", 80.0, 20.0, 75.0, 1),
        ])
    }

    fn disc_paths(list: &DisplayList) -> Vec<String> {
        list.shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Disc { path, .. } => Some(path.as_str().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_node_visited_once_in_preorder() {
        let tree = two_level_tree();
        let list = lay_out(std::slice::from_ref(&tree), &HashSet::new());

        assert_eq!(
            disc_paths(&list),
            vec!["Root", "Root/Left", "Root/Left/Leaf", "Root/Right"]
        );
        assert_eq!(disc_paths(&list).len(), tree.subtree_len());
    }

    #[test]
    fn test_root_draws_no_edge_and_children_draw_one_each() {
        let tree = two_level_tree();
        let list = lay_out(std::slice::from_ref(&tree), &HashSet::new());

        let edges: Vec<_> = list
            .shapes()
            .iter()
            .filter(|s| matches!(s, Shape::Edge { .. }))
            .collect();
        assert_eq!(edges.len(), tree.subtree_len() - 1);
    }

    #[test]
    fn test_edges_reference_already_resolved_parent_positions() {
        let tree = two_level_tree();
        let list = lay_out(std::slice::from_ref(&tree), &HashSet::new());

        let mut placed: Vec<Point2> = Vec::new();
        for shape in list.shapes() {
            match shape {
                Shape::Edge { from, .. } => {
                    assert!(
                        placed.contains(from),
                        "edge drawn before its parent disc at {from:?}"
                    );
                }
                Shape::Disc { center, .. } => placed.push(*center),
                Shape::Label { .. } => {}
            }
        }
    }

    #[test]
    fn test_delays_grow_with_depth() {
        let tree = two_level_tree();
        let list = lay_out(std::slice::from_ref(&tree), &HashSet::new());

        let leaf_edge_delay = list
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Edge { delay_secs, to, .. } if to.x == 8.0 => Some(*delay_secs),
                _ => None,
            })
            .next()
            .unwrap();
        assert!((leaf_edge_delay - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_leaf_emits_no_outgoing_edge() {
        let leaf = SkillNode::new("Solo", 10.0, 10.0, 40.0, 0);
        let list = lay_out(std::slice::from_ref(&leaf), &HashSet::new());
        assert!(list
            .shapes()
            .iter()
            .all(|s| !matches!(s, Shape::Edge { .. })));
    }

    #[test]
    fn test_hovered_path_highlights_only_that_disc() {
        let tree = two_level_tree();
        let mut hovered = HashSet::new();
        hovered.insert(NodePath::root("Root").child("Left"));

        let list = lay_out(std::slice::from_ref(&tree), &hovered);
        for shape in list.shapes() {
            if let Shape::Disc {
                path, highlighted, ..
            } = shape
            {
                assert_eq!(*highlighted, path.as_str() == "Root/Left");
            }
        }
    }
}

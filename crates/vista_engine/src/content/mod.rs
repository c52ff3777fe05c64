//! Hand-authored static content
//!
//! The skill tree the diagram renders. Positions are percent coordinates
//! tuned by eye for a 600px-tall region; there is no automatic layout.

use crate::diagram::SkillNode;

/// The full skill tree: one root, four categories, the individual skills
pub fn skills_tree() -> SkillNode {
    SkillNode::new("SWE", 50.0, 50.0, 120.0, 0).with_children(vec![
        SkillNode::new("Languages", 20.0, 20.0, 80.0, 1).with_children(vec![
            SkillNode::new("Python", 8.0, 8.0, 50.0, 2),
            SkillNode::new("Java", 32.0, 6.0, 45.0, 2),
            SkillNode::new("C++", 6.0, 28.0, 40.0, 2),
            SkillNode::new("JavaScript", 28.0, 32.0, 55.0, 2),
            SkillNode::new("TypeScript", 12.0, 48.0, 50.0, 2),
            SkillNode::new("SQL", 35.0, 50.0, 35.0, 2),
        ]),
        SkillNode::new("Frontend", 80.0, 20.0, 75.0, 1).with_children(vec![
            SkillNode::new("React", 68.0, 8.0, 45.0, 2),
            SkillNode::new("Next.js", 92.0, 12.0, 42.0, 2),
            SkillNode::new("Three.js", 72.0, 32.0, 45.0, 2),
            SkillNode::new("Tailwind", 95.0, 35.0, 50.0, 2),
            SkillNode::new("Expo", 65.0, 50.0, 35.0, 2),
        ]),
        SkillNode::new("Backend & AI", 20.0, 80.0, 85.0, 1).with_children(vec![
            SkillNode::new("Django", 8.0, 68.0, 42.0, 2),
            SkillNode::new("PyTorch", 32.0, 65.0, 45.0, 2),
            SkillNode::new("TensorFlow", 6.0, 88.0, 44.0, 2),
            SkillNode::new("FastAPI", 28.0, 92.0, 40.0, 2),
            SkillNode::new("OpenCV", 45.0, 75.0, 45.0, 2),
            SkillNode::new("YOLOv8", 42.0, 85.0, 46.0, 2),
        ]),
        SkillNode::new("Tools & DevOps", 80.0, 80.0, 85.0, 1).with_children(vec![
            SkillNode::new("Git", 68.0, 68.0, 40.0, 2),
            SkillNode::new("GitHub", 92.0, 72.0, 45.0, 2),
            SkillNode::new("VSCode", 72.0, 88.0, 45.0, 2),
            SkillNode::new("Node.js", 95.0, 92.0, 45.0, 2),
            SkillNode::new("Vercel", 60.0, 85.0, 45.0, 2),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        let tree = skills_tree();
        assert_eq!(tree.level(), 0);
        assert_eq!(tree.children().len(), 4);
        assert_eq!(tree.subtree_len(), 27);
    }

    #[test]
    fn test_positions_are_percentages() {
        fn check(node: &SkillNode) {
            let p = node.position();
            assert!((0.0..=100.0).contains(&p.x), "{} x out of range", node.name());
            assert!((0.0..=100.0).contains(&p.y), "{} y out of range", node.name());
            node.children().iter().for_each(check);
        }
        check(&skills_tree());
    }

    #[test]
    fn test_levels_match_depth() {
        fn check(node: &SkillNode, depth: u8) {
            assert_eq!(node.level(), depth, "{}", node.name());
            for child in node.children() {
                check(child, depth + 1);
            }
        }
        check(&skills_tree(), 0);
    }
}

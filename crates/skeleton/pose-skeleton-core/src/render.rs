//! Tree materialization and indented text rendering.
//!
//! The forest is an arena: one node per joint, addressed by the joint's local
//! index, linked in a single pass over the parent table. Traversal uses an
//! explicit stack so deep finger chains never recurse.

use crate::config::RenderConfig;
use crate::tree::KinematicTree;

/// One materialized joint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub index: usize,
    pub name: String,
    pub parent: Option<usize>,
    /// Child joint indices, ascending.
    pub children: Vec<usize>,
}

/// Materialized view of a kinematic tree. One tree per root joint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointForest {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
}

impl JointForest {
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order joint indices below and including `root`; siblings in index
    /// order. Empty when `root` is not a node.
    pub fn preorder(&self, root: usize) -> Vec<usize> {
        let mut order = Vec::new();
        if root >= self.nodes.len() {
            return order;
        }
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index].children.iter().rev().copied());
        }
        order
    }

    /// Number of nodes in the subtree rooted at `root`.
    pub fn subtree_size(&self, root: usize) -> usize {
        self.preorder(root).len()
    }
}

/// Build the forest for `tree`.
pub fn materialize(tree: &KinematicTree) -> JointForest {
    let mut nodes: Vec<TreeNode> = tree
        .joint_names()
        .iter()
        .enumerate()
        .map(|(index, name)| TreeNode {
            index,
            name: name.clone(),
            parent: None,
            children: Vec::new(),
        })
        .collect();

    let mut roots = Vec::new();
    for (child, parent) in tree.parents().iter().enumerate() {
        match *parent {
            Some(parent) => {
                nodes[child].parent = Some(parent);
                nodes[parent].children.push(child);
            }
            None => roots.push(child),
        }
    }

    JointForest { nodes, roots }
}

/// Depth-first, pre-order listing of every tree in `forest`, one line per
/// joint. Roots carry no prefix; descendants carry guide glyphs from
/// `config.style`. Output depends only on the forest, so repeated calls
/// produce identical lines.
pub fn render(forest: &JointForest, config: &RenderConfig) -> Vec<String> {
    let style = config.style;
    let mut lines = Vec::with_capacity(forest.len());

    for &root in forest.roots() {
        // (node, inherited prefix, is last sibling, is root)
        let mut stack: Vec<(usize, String, bool, bool)> = vec![(root, String::new(), true, true)];
        while let Some((index, prefix, is_last, is_root)) = stack.pop() {
            let node = &forest.nodes[index];

            let mut line = prefix.clone();
            if !is_root {
                line.push_str(if is_last {
                    style.last_branch()
                } else {
                    style.branch()
                });
            }
            line.push_str(&node.name);
            if config.show_indices {
                line.push_str(&format!(" [{index}]"));
            }
            lines.push(line);

            let child_prefix = if is_root {
                prefix
            } else if is_last {
                prefix + style.blank()
            } else {
                prefix + style.vertical()
            };
            let last_child = node.children.len().saturating_sub(1);
            for (pos, &child) in node.children.iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), pos == last_child, false));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderStyle;

    fn sample() -> KinematicTree {
        let names = ["hips", "spine", "head", "l_leg", "l_foot", "r_leg"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        KinematicTree::new("Sample", names, &[-1, 0, 1, 0, 3, 0]).unwrap()
    }

    #[test]
    fn materialize_links_children_in_index_order() {
        let forest = materialize(&sample());
        assert_eq!(forest.roots(), &[0]);
        assert_eq!(forest.node(0).unwrap().children, vec![1, 3, 5]);
        assert_eq!(forest.node(4).unwrap().parent, Some(3));
        assert_eq!(forest.subtree_size(0), 6);
        assert_eq!(forest.subtree_size(3), 2);
        assert_eq!(forest.preorder(0), vec![0, 1, 2, 3, 4, 5]);
        assert!(forest.preorder(42).is_empty());
    }

    #[test]
    fn renders_unicode_guides() {
        let lines = render(&materialize(&sample()), &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "hips",
                "├── spine",
                "│   └── head",
                "├── l_leg",
                "│   └── l_foot",
                "└── r_leg",
            ]
        );
    }

    #[test]
    fn renders_ascii_guides_with_indices() {
        let config = RenderConfig {
            style: RenderStyle::Ascii,
            show_indices: true,
        };
        let lines = render(&materialize(&sample()), &config);
        assert_eq!(lines[0], "hips [0]");
        assert_eq!(lines[2], "|   `-- head [2]");
        assert_eq!(lines[5], "`-- r_leg [5]");
    }

    #[test]
    fn nested_last_child_uses_blank_continuation() {
        let names = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let tree = KinematicTree::new("Chain", names, &[-1, 0, 1, 1]).unwrap();
        let lines = render(&materialize(&tree), &RenderConfig::default());
        assert_eq!(lines, vec!["a", "└── b", "    ├── c", "    └── d"]);
    }

    #[test]
    fn multiple_roots_render_as_separate_trees() {
        let names = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let tree = KinematicTree::new("Pair", names, &[-1, -1, 0]).unwrap();
        let forest = materialize(&tree);
        assert_eq!(forest.roots(), &[0, 1]);
        let lines = render(&forest, &RenderConfig::default());
        assert_eq!(lines, vec!["a", "└── c", "b"]);
    }
}

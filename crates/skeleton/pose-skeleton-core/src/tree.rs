//! Kinematic tree model: joint names plus a validated parent-pointer forest.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::{SkeletonError, StructuralError};

/// Parent value marking a root joint in raw parent tables.
pub const ROOT_SENTINEL: i64 = -1;

/// A derived parent → child joint pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bone {
    pub parent: usize,
    pub child: usize,
}

impl From<(usize, usize)> for Bone {
    fn from((parent, child): (usize, usize)) -> Self {
        Bone { parent, child }
    }
}

/// Joint hierarchy of one convention.
///
/// Invariants, checked once in [`KinematicTree::new`]: one parent entry per
/// name, every parent in range, no joint is its own ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinematicTree {
    joint_names: Vec<String>,
    parents: Vec<Option<usize>>,
}

impl KinematicTree {
    /// Validate a raw `(names, parents)` table. `definition` is only used to
    /// label errors.
    pub fn new(
        definition: &str,
        joint_names: Vec<String>,
        parents: &[i64],
    ) -> Result<Self, StructuralError> {
        let count = joint_names.len();
        if parents.len() != count {
            return Err(StructuralError::LengthMismatch {
                definition: definition.to_string(),
                names: count,
                parents: parents.len(),
            });
        }
        if let Some(index) = joint_names.iter().position(|n| n.trim().is_empty()) {
            return Err(StructuralError::EmptyJointName {
                definition: definition.to_string(),
                index,
            });
        }

        let mut resolved = Vec::with_capacity(count);
        for (index, &parent) in parents.iter().enumerate() {
            if parent == ROOT_SENTINEL {
                resolved.push(None);
                continue;
            }
            if parent < 0 || parent as u64 >= count as u64 {
                return Err(StructuralError::ParentOutOfRange {
                    definition: definition.to_string(),
                    index,
                    parent,
                    count,
                });
            }
            let parent = parent as usize;
            if parent == index {
                return Err(StructuralError::SelfParent {
                    definition: definition.to_string(),
                    index,
                });
            }
            resolved.push(Some(parent));
        }

        check_acyclic(definition, &resolved)?;

        Ok(KinematicTree {
            joint_names,
            parents: resolved,
        })
    }

    #[inline]
    pub fn joint_count(&self) -> usize {
        self.joint_names.len()
    }

    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Parents in table form, roots encoded as [`ROOT_SENTINEL`].
    pub fn raw_parents(&self) -> Vec<i64> {
        self.parents
            .iter()
            .map(|p| p.map_or(ROOT_SENTINEL, |p| p as i64))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), SkeletonError> {
        if index < self.joint_count() {
            Ok(())
        } else {
            Err(SkeletonError::OutOfRange {
                index,
                count: self.joint_count(),
            })
        }
    }

    pub fn name_of(&self, index: usize) -> Result<&str, SkeletonError> {
        self.check_index(index)?;
        Ok(&self.joint_names[index])
    }

    /// Exact, case-sensitive name lookup.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.joint_names.iter().position(|n| n == name)
    }

    pub fn parent_of(&self, index: usize) -> Result<Option<usize>, SkeletonError> {
        self.check_index(index)?;
        Ok(self.parents[index])
    }

    /// Direct children of `index`, ascending.
    pub fn children_of(&self, index: usize) -> Result<Vec<usize>, SkeletonError> {
        self.check_index(index)?;
        Ok(self
            .parents
            .iter()
            .enumerate()
            .filter(|&(_, p)| *p == Some(index))
            .map(|(child, _)| child)
            .collect())
    }

    pub fn roots(&self) -> Vec<usize> {
        self.parents
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Joint indices from `index` up to and including its root.
    pub fn path_to_root(&self, index: usize) -> Result<Vec<usize>, SkeletonError> {
        self.check_index(index)?;
        let mut path = vec![index];
        let mut cursor = index;
        while let Some(parent) = self.parents[cursor] {
            path.push(parent);
            cursor = parent;
        }
        Ok(path)
    }

    /// Number of hops from `index` to its root; roots have depth 0.
    pub fn depth_of(&self, index: usize) -> Result<usize, SkeletonError> {
        Ok(self.path_to_root(index)?.len() - 1)
    }

    /// Every `(parent, child)` pair, one per non-root joint.
    pub fn bones(&self) -> HashSet<Bone> {
        self.bones_iter().collect()
    }

    /// Same pairs as [`bones`](Self::bones), in child-index order.
    pub fn bones_ordered(&self) -> Vec<Bone> {
        self.bones_iter().collect()
    }

    fn bones_iter(&self) -> impl Iterator<Item = Bone> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, p)| p.map(|parent| Bone { parent, child }))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    OnPath,
    Rooted,
}

// Walks each unseen joint upward until it meets a root or an already rooted
// joint. Meeting a joint on the current walk means a cycle. Every joint is
// settled once, so the whole check is O(J).
fn check_acyclic(definition: &str, parents: &[Option<usize>]) -> Result<(), StructuralError> {
    let mut state = vec![Visit::Unseen; parents.len()];
    let mut walk = Vec::new();

    for start in 0..parents.len() {
        if state[start] != Visit::Unseen {
            continue;
        }
        walk.clear();
        let mut cursor = Some(start);
        while let Some(node) = cursor {
            match state[node] {
                Visit::Rooted => break,
                Visit::OnPath => {
                    return Err(StructuralError::Cycle {
                        definition: definition.to_string(),
                        index: node,
                    })
                }
                Visit::Unseen => {
                    state[node] = Visit::OnPath;
                    walk.push(node);
                    cursor = parents[node];
                }
            }
        }
        for &node in &walk {
            state[node] = Visit::Rooted;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn arm() -> KinematicTree {
        KinematicTree::new(
            "Arm",
            names(&["root", "shoulder", "elbow", "wrist", "spine"]),
            &[-1, 0, 1, 2, 0],
        )
        .unwrap()
    }

    #[test]
    fn builds_and_exposes_basic_queries() {
        let tree = arm();
        assert_eq!(tree.joint_count(), 5);
        assert_eq!(tree.name_of(2).unwrap(), "elbow");
        assert_eq!(tree.index_of("wrist"), Some(3));
        assert_eq!(tree.index_of("Wrist"), None);
        assert_eq!(tree.parent_of(0).unwrap(), None);
        assert_eq!(tree.parent_of(3).unwrap(), Some(2));
        assert_eq!(tree.children_of(0).unwrap(), vec![1, 4]);
        assert_eq!(tree.roots(), vec![0]);
        assert_eq!(tree.path_to_root(3).unwrap(), vec![3, 2, 1, 0]);
        assert_eq!(tree.depth_of(3).unwrap(), 3);
        assert_eq!(tree.depth_of(0).unwrap(), 0);
        assert_eq!(tree.raw_parents(), vec![-1, 0, 1, 2, 0]);
    }

    #[test]
    fn out_of_range_lookups_fail() {
        let tree = arm();
        assert_eq!(
            tree.name_of(5),
            Err(SkeletonError::OutOfRange { index: 5, count: 5 })
        );
        assert!(tree.children_of(99).is_err());
        assert!(tree.path_to_root(5).is_err());
    }

    #[test]
    fn bones_mirror_parent_table() {
        let tree = arm();
        let bones = tree.bones();
        assert_eq!(bones.len(), 4);
        for bone in &bones {
            assert_eq!(tree.parents()[bone.child], Some(bone.parent));
        }
        assert_eq!(
            tree.bones_ordered(),
            vec![
                Bone::from((0, 1)),
                Bone::from((1, 2)),
                Bone::from((2, 3)),
                Bone::from((0, 4)),
            ]
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = KinematicTree::new("Bad", names(&["a", "b"]), &[-1]).unwrap_err();
        assert!(matches!(
            err,
            StructuralError::LengthMismatch {
                names: 2,
                parents: 1,
                ..
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_and_negative_parents() {
        let err = KinematicTree::new("Bad", names(&["a", "b"]), &[-1, 2]).unwrap_err();
        assert!(matches!(
            err,
            StructuralError::ParentOutOfRange { index: 1, parent: 2, .. }
        ));
        let err = KinematicTree::new("Bad", names(&["a", "b"]), &[-1, -3]).unwrap_err();
        assert!(matches!(
            err,
            StructuralError::ParentOutOfRange { index: 1, parent: -3, .. }
        ));
    }

    #[test]
    fn rejects_self_parent() {
        let err = KinematicTree::new("Bad", names(&["a", "b"]), &[-1, 1]).unwrap_err();
        assert_eq!(
            err,
            StructuralError::SelfParent {
                definition: "Bad".into(),
                index: 1
            }
        );
    }

    #[test]
    fn rejects_cycles() {
        let err =
            KinematicTree::new("Loop", names(&["a", "b", "c", "d"]), &[-1, 2, 3, 1]).unwrap_err();
        assert!(matches!(err, StructuralError::Cycle { .. }));

        // No root at all is a cycle too.
        let err = KinematicTree::new("Ring", names(&["a", "b"]), &[1, 0]).unwrap_err();
        assert!(matches!(err, StructuralError::Cycle { .. }));
    }

    #[test]
    fn rejects_empty_names() {
        let err = KinematicTree::new("Bad", names(&["a", " "]), &[-1, 0]).unwrap_err();
        assert!(matches!(err, StructuralError::EmptyJointName { index: 1, .. }));
    }

    #[test]
    fn allows_multiple_roots() {
        let tree = KinematicTree::new("Pair", names(&["a", "b", "c"]), &[-1, -1, 1]).unwrap();
        assert_eq!(tree.roots(), vec![0, 1]);
        assert_eq!(tree.bones().len(), 1);
    }
}

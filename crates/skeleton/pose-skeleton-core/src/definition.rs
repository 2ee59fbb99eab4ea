//! Skeleton definition: one convention's tree plus its canonical role mapping.

use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::{SkeletonError, StructuralError};
use crate::json::StoredSkeleton;
use crate::render::{self, JointForest};
use crate::roles::{Role, RoleMap};
use crate::tree::{Bone, KinematicTree};

/// Immutable description of one skeleton convention.
///
/// Conventions differ only in data, so every convention is an instance of
/// this one type. Definitions are validated on construction and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSkeleton", into = "StoredSkeleton")]
pub struct SkeletonDefinition {
    name: String,
    tree: KinematicTree,
    roles: RoleMap,
}

impl SkeletonDefinition {
    /// Validate and assemble a definition. Parents use `-1` for roots.
    pub fn new(
        name: impl Into<String>,
        joint_names: Vec<String>,
        parents: &[i64],
        roles: RoleMap,
    ) -> Result<Self, StructuralError> {
        let name = name.into();
        let tree = KinematicTree::new(&name, joint_names, parents)?;
        let count = tree.joint_count();
        if let Some((role, index)) = roles.iter().find(|&(_, index)| index >= count) {
            return Err(StructuralError::RoleOutOfRange {
                definition: name,
                role,
                index,
                count,
            });
        }
        Ok(SkeletonDefinition { name, tree, roles })
    }

    /// Convenience for compiled-in tables.
    pub fn from_table(
        name: &str,
        joint_names: &[&str],
        parents: &[i64],
        roles: RoleMap,
    ) -> Result<Self, StructuralError> {
        let joint_names = joint_names.iter().map(|s| s.to_string()).collect();
        Self::new(name, joint_names, parents, roles)
    }

    /// Display name (not necessarily unique).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tree(&self) -> &KinematicTree {
        &self.tree
    }

    pub fn roles(&self) -> &RoleMap {
        &self.roles
    }

    #[inline]
    pub fn joint_count(&self) -> usize {
        self.tree.joint_count()
    }

    pub fn joint_names(&self) -> &[String] {
        self.tree.joint_names()
    }

    pub fn name_of(&self, index: usize) -> Result<&str, SkeletonError> {
        self.tree.name_of(index)
    }

    pub fn bones(&self) -> HashSet<Bone> {
        self.tree.bones()
    }

    pub fn bones_ordered(&self) -> Vec<Bone> {
        self.tree.bones_ordered()
    }

    /// Indices of the assigned canonical roles, in [`Role::CANONICAL_ORDER`].
    ///
    /// Two definitions that both assign a pair of roles emit them in the same
    /// relative order, so outputs can be aligned across conventions.
    pub fn ordered_canonical_indices(&self) -> Vec<usize> {
        self.roles.ordered_indices()
    }

    pub fn role_index(&self, role: Role) -> Option<usize> {
        self.roles.get(role)
    }

    /// Joint name bound to `role`, or `None` when this convention leaves the
    /// role unset.
    pub fn name_of_role(&self, role: Role) -> Option<&str> {
        self.roles
            .get(role)
            .and_then(|index| self.tree.name_of(index).ok())
    }

    /// Roles bound to the joint at `index` (possibly several, possibly none).
    pub fn role_of(&self, index: usize) -> Result<Vec<Role>, SkeletonError> {
        self.tree.name_of(index)?;
        Ok(self.roles.roles_at(index))
    }

    /// Joint names as an unordered set, duplicates collapsed.
    pub fn joint_name_set(&self) -> HashSet<&str> {
        self.tree.joint_names().iter().map(String::as_str).collect()
    }

    pub fn materialize(&self) -> JointForest {
        render::materialize(&self.tree)
    }

    /// Indented tree listing with the default [`RenderConfig`].
    pub fn render(&self) -> Vec<String> {
        self.render_with(&RenderConfig::default())
    }

    pub fn render_with(&self, config: &RenderConfig) -> Vec<String> {
        render::render(&self.materialize(), config)
    }
}

impl fmt::Display for SkeletonDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SkeletonDefinition(name='{}')", self.name)?;
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stick_figure() -> SkeletonDefinition {
        SkeletonDefinition::from_table(
            "Stick",
            &["pelvis", "chest", "head", "l_arm", "r_arm"],
            &[-1, 0, 1, 1, 1],
            RoleMap::new()
                .with(Role::Hips, 0)
                .with(Role::SpineMid, 1)
                .with(Role::Head, 2)
                .with(Role::RShoulder, 4)
                .with(Role::LShoulder, 3),
        )
        .unwrap()
    }

    #[test]
    fn ordered_indices_follow_canonical_order() {
        let def = stick_figure();
        assert_eq!(def.ordered_canonical_indices(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn name_of_role_resolves_or_reports_unset() {
        let def = stick_figure();
        assert_eq!(def.name_of_role(Role::Head), Some("head"));
        assert_eq!(def.name_of_role(Role::LKnee), None);
        assert_eq!(def.role_index(Role::RShoulder), Some(4));
    }

    #[test]
    fn role_of_is_reverse_lookup() {
        let def = stick_figure();
        assert_eq!(def.role_of(1).unwrap(), vec![Role::SpineMid]);
        assert!(def.role_of(9).is_err());
    }

    #[test]
    fn rejects_role_past_joint_count() {
        let err = SkeletonDefinition::from_table(
            "Tiny",
            &["a", "b"],
            &[-1, 0],
            RoleMap::new().with(Role::LWrist, 2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            StructuralError::RoleOutOfRange {
                definition: "Tiny".into(),
                role: Role::LWrist,
                index: 2,
                count: 2,
            }
        );
    }

    #[test]
    fn display_prints_header_and_tree() {
        let text = stick_figure().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("SkeletonDefinition(name='Stick')"));
        assert_eq!(lines.next(), Some("pelvis"));
        assert_eq!(lines.next(), Some("└── chest"));
        assert_eq!(text.lines().count(), 6);
    }
}

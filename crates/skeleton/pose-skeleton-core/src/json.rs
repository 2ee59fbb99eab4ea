//! Stored skeleton JSON.
//!
//! Shape of a stored definition:
//!
//! ```json
//! {
//!   "name": "Tiny",
//!   "joint_names": ["root", "child"],
//!   "parents": [-1, 0],
//!   "roles": { "hips": 0 }
//! }
//! ```
//!
//! Decoding runs the same validation as the compiled-in tables; `roles` may be
//! omitted.

use serde::{Deserialize, Serialize};

use crate::definition::SkeletonDefinition;
use crate::error::{SkeletonError, StructuralError};
use crate::roles::RoleMap;

/// Wire form of a [`SkeletonDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSkeleton {
    pub name: String,
    pub joint_names: Vec<String>,
    pub parents: Vec<i64>,
    #[serde(default)]
    pub roles: RoleMap,
}

impl From<SkeletonDefinition> for StoredSkeleton {
    fn from(def: SkeletonDefinition) -> Self {
        StoredSkeleton {
            name: def.name().to_string(),
            joint_names: def.joint_names().to_vec(),
            parents: def.tree().raw_parents(),
            roles: *def.roles(),
        }
    }
}

impl TryFrom<StoredSkeleton> for SkeletonDefinition {
    type Error = StructuralError;

    fn try_from(stored: StoredSkeleton) -> Result<Self, Self::Error> {
        SkeletonDefinition::new(
            stored.name,
            stored.joint_names,
            &stored.parents,
            stored.roles,
        )
    }
}

/// Decode and validate a stored skeleton definition.
pub fn parse_skeleton_json(s: &str) -> Result<SkeletonDefinition, SkeletonError> {
    let stored: StoredSkeleton = serde_json::from_str(s)?;
    Ok(SkeletonDefinition::try_from(stored)?)
}

impl SkeletonDefinition {
    /// Encode as stored skeleton JSON.
    pub fn to_json(&self) -> Result<String, SkeletonError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

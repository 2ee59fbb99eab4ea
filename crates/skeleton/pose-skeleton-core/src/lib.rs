//! pose-skeleton-core: one canonical joint-role vocabulary over many
//! human-pose skeleton conventions.
//!
//! Motion-capture rigs, pose-estimation outputs and parametric body models
//! each name and index their joints differently (17 to 144 joints). A
//! [`SkeletonDefinition`] pairs a convention's validated kinematic tree with
//! a partial [`RoleMap`], so downstream code can ask for `Role::LElbow` or
//! `Role::Hips` without knowing the layout. The [`registry`] holds the
//! built-in conventions and can detect one from a raw set of joint names.
//!
//! Only topology and naming are modelled; there is no geometry here.

pub mod config;
pub mod conventions;
pub mod definition;
pub mod error;
pub mod json;
pub mod registry;
pub mod render;
pub mod roles;
pub mod tree;

pub use config::{RenderConfig, RenderStyle};
pub use definition::SkeletonDefinition;
pub use error::{SkeletonError, StructuralError};
pub use json::{parse_skeleton_json, StoredSkeleton};
pub use registry::{detect_skeleton, get_definition, registry, SkeletonRegistry};
pub use render::{materialize, render, JointForest, TreeNode};
pub use roles::{Role, RoleMap};
pub use tree::{Bone, KinematicTree, ROOT_SENTINEL};

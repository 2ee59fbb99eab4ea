//! Error types for skeleton construction, lookup and decoding.

use thiserror::Error;

use crate::roles::Role;

/// Malformed skeleton data detected while a definition is being built.
///
/// These are data errors in a convention table, not runtime failures: a
/// definition that produces one is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("skeleton '{definition}': {names} joint names but {parents} parent entries")]
    LengthMismatch {
        definition: String,
        names: usize,
        parents: usize,
    },
    #[error("skeleton '{definition}': joint {index} has parent {parent} outside 0..{count}")]
    ParentOutOfRange {
        definition: String,
        index: usize,
        parent: i64,
        count: usize,
    },
    #[error("skeleton '{definition}': joint {index} is its own parent")]
    SelfParent { definition: String, index: usize },
    #[error("skeleton '{definition}': joint {index} does not reach a root (parent cycle)")]
    Cycle { definition: String, index: usize },
    #[error("skeleton '{definition}': role '{role}' points at joint {index} but only {count} joints exist")]
    RoleOutOfRange {
        definition: String,
        role: Role,
        index: usize,
        count: usize,
    },
    #[error("skeleton '{definition}': joint {index} has an empty name")]
    EmptyJointName { definition: String, index: usize },
}

/// Errors surfaced to callers of the skeleton API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkeletonError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error("joint index {index} out of range (joint count {count})")]
    OutOfRange { index: usize, count: usize },
    #[error("unknown skeleton definition '{name}'. Available: {}", .available.join(", "))]
    NotFound { name: String, available: Vec<String> },
    #[error("skeleton definition '{name}' is already registered")]
    DuplicateName { name: String },
    #[error("skeleton json parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SkeletonError {
    fn from(err: serde_json::Error) -> Self {
        SkeletonError::Parse(err.to_string())
    }
}

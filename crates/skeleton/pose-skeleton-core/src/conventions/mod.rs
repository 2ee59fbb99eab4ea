//! Compiled-in convention tables.
//!
//! Each table is plain data: joint names, parent indices (`-1` for roots) and
//! a role assignment. Tables are validated when the registry is built.

pub mod coco17;
pub mod mediapipe33;
pub mod optitrack;
pub mod smpl;
pub mod stereolabs;
pub mod xsens;

use crate::definition::SkeletonDefinition;
use crate::error::StructuralError;

/// Every built-in convention in registration order, keyed by registry name.
pub fn builtin() -> Vec<(&'static str, Result<SkeletonDefinition, StructuralError>)> {
    vec![
        ("optitrack", optitrack::definition()),
        ("xsens", xsens::definition()),
        ("coco17", coco17::definition()),
        ("mediapipe33", mediapipe33::definition()),
        ("stereolabs_body18", stereolabs::body18()),
        ("stereolabs_body34", stereolabs::body34()),
        ("smpl", smpl::smpl()),
        ("smplh", smpl::smplh()),
        ("smplx", smpl::smplx()),
    ]
}

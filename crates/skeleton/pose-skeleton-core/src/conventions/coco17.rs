//! COCO 17-keypoint layout.
//!
//! COCO has no pelvis, spine or neck keypoint. The nose is the root and stands
//! in for the head; hips hang off the shoulders to close the torso.

use crate::definition::SkeletonDefinition;
use crate::error::StructuralError;
use crate::roles::{Role, RoleMap};

pub const NAME: &str = "Coco17";

pub const JOINT_NAMES: [&str; 17] = [
    "Nose",          // 0
    "LeftEye",       // 1
    "RightEye",      // 2
    "LeftEar",       // 3
    "RightEar",      // 4
    "LeftShoulder",  // 5
    "RightShoulder", // 6
    "LeftElbow",     // 7
    "RightElbow",    // 8
    "LeftWrist",     // 9
    "RightWrist",    // 10
    "LeftHip",       // 11
    "RightHip",      // 12
    "LeftKnee",      // 13
    "RightKnee",     // 14
    "LeftAnkle",     // 15
    "RightAnkle",    // 16
];

pub const PARENTS: [i64; 17] = [
    -1, // Nose (root)
    0,  // LeftEye -> Nose
    0,  // RightEye -> Nose
    1,  // LeftEar -> LeftEye
    2,  // RightEar -> RightEye
    0,  // LeftShoulder -> Nose
    0,  // RightShoulder -> Nose
    5,  // LeftElbow -> LeftShoulder
    6,  // RightElbow -> RightShoulder
    7,  // LeftWrist -> LeftElbow
    8,  // RightWrist -> RightElbow
    5,  // LeftHip -> LeftShoulder
    6,  // RightHip -> RightShoulder
    11, // LeftKnee -> LeftHip
    12, // RightKnee -> RightHip
    13, // LeftAnkle -> LeftKnee
    14, // RightAnkle -> RightKnee
];

pub fn roles() -> RoleMap {
    RoleMap::new()
        .with(Role::Head, 0)
        .with(Role::LShoulder, 5)
        .with(Role::LElbow, 7)
        .with(Role::LWrist, 9)
        .with(Role::RShoulder, 6)
        .with(Role::RElbow, 8)
        .with(Role::RWrist, 10)
        .with(Role::LHip, 11)
        .with(Role::LKnee, 13)
        .with(Role::LAnkle, 15)
        .with(Role::RHip, 12)
        .with(Role::RKnee, 14)
        .with(Role::RAnkle, 16)
}

pub fn definition() -> Result<SkeletonDefinition, StructuralError> {
    SkeletonDefinition::from_table(NAME, &JOINT_NAMES, &PARENTS, roles())
}

//! MediaPipe Pose Landmarker (33 landmarks).

use crate::definition::SkeletonDefinition;
use crate::error::StructuralError;
use crate::roles::{Role, RoleMap};

pub const NAME: &str = "MediaPipe33";

pub const JOINT_NAMES: [&str; 33] = [
    "Nose",           // 0
    "LeftEyeInner",   // 1
    "LeftEye",        // 2
    "LeftEyeOuter",   // 3
    "RightEyeInner",  // 4
    "RightEye",       // 5
    "RightEyeOuter",  // 6
    "LeftEar",        // 7
    "RightEar",       // 8
    "MouthLeft",      // 9
    "MouthRight",     // 10
    "LeftShoulder",   // 11
    "RightShoulder",  // 12
    "LeftElbow",      // 13
    "RightElbow",     // 14
    "LeftWrist",      // 15
    "RightWrist",     // 16
    "LeftPinky",      // 17
    "RightPinky",     // 18
    "LeftIndex",      // 19
    "RightIndex",     // 20
    "LeftThumb",      // 21
    "RightThumb",     // 22
    "LeftHip",        // 23
    "RightHip",       // 24
    "LeftKnee",       // 25
    "RightKnee",      // 26
    "LeftAnkle",      // 27
    "RightAnkle",     // 28
    "LeftHeel",       // 29
    "RightHeel",      // 30
    "LeftFootIndex",  // 31
    "RightFootIndex", // 32
];

// Nose is the root; shoulders attach to it directly (there is no neck landmark).
pub const PARENTS: [i64; 33] = [
    -1, // Nose (root)
    0,  // LeftEyeInner -> Nose
    1,  // LeftEye -> LeftEyeInner
    2,  // LeftEyeOuter -> LeftEye
    0,  // RightEyeInner -> Nose
    4,  // RightEye -> RightEyeInner
    5,  // RightEyeOuter -> RightEye
    3,  // LeftEar -> LeftEyeOuter
    6,  // RightEar -> RightEyeOuter
    0,  // MouthLeft -> Nose
    0,  // MouthRight -> Nose
    0,  // LeftShoulder -> Nose
    0,  // RightShoulder -> Nose
    11, // LeftElbow -> LeftShoulder
    12, // RightElbow -> RightShoulder
    13, // LeftWrist -> LeftElbow
    14, // RightWrist -> RightElbow
    15, // LeftPinky -> LeftWrist
    16, // RightPinky -> RightWrist
    15, // LeftIndex -> LeftWrist
    16, // RightIndex -> RightWrist
    15, // LeftThumb -> LeftWrist
    16, // RightThumb -> RightWrist
    11, // LeftHip -> LeftShoulder
    12, // RightHip -> RightShoulder
    23, // LeftKnee -> LeftHip
    24, // RightKnee -> RightHip
    25, // LeftAnkle -> LeftKnee
    26, // RightAnkle -> RightKnee
    27, // LeftHeel -> LeftAnkle
    28, // RightHeel -> RightAnkle
    29, // LeftFootIndex -> LeftHeel
    30, // RightFootIndex -> RightHeel
];

pub fn roles() -> RoleMap {
    RoleMap::new()
        .with(Role::Head, 0)
        .with(Role::LShoulder, 11)
        .with(Role::LElbow, 13)
        .with(Role::LWrist, 15)
        .with(Role::RShoulder, 12)
        .with(Role::RElbow, 14)
        .with(Role::RWrist, 16)
        .with(Role::LHip, 23)
        .with(Role::LKnee, 25)
        .with(Role::LAnkle, 27)
        .with(Role::LFoot, 31)
        .with(Role::RHip, 24)
        .with(Role::RKnee, 26)
        .with(Role::RAnkle, 28)
        .with(Role::RFoot, 32)
}

pub fn definition() -> Result<SkeletonDefinition, StructuralError> {
    SkeletonDefinition::from_table(NAME, &JOINT_NAMES, &PARENTS, roles())
}

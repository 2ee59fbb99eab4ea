//! Stereolabs ZED SDK body formats: BODY_18 and BODY_34.

use crate::definition::SkeletonDefinition;
use crate::error::StructuralError;
use crate::roles::{Role, RoleMap};

pub const BODY18_NAME: &str = "StereolabsBody18";

pub const BODY18_JOINT_NAMES: [&str; 18] = [
    "NOSE",           // 0
    "NECK",           // 1
    "RIGHT_SHOULDER", // 2
    "RIGHT_ELBOW",    // 3
    "RIGHT_WRIST",    // 4
    "LEFT_SHOULDER",  // 5
    "LEFT_ELBOW",     // 6
    "LEFT_WRIST",     // 7
    "RIGHT_HIP",      // 8
    "RIGHT_KNEE",     // 9
    "RIGHT_ANKLE",    // 10
    "LEFT_HIP",       // 11
    "LEFT_KNEE",      // 12
    "LEFT_ANKLE",     // 13
    "RIGHT_EYE",      // 14
    "LEFT_EYE",       // 15
    "RIGHT_EAR",      // 16
    "LEFT_EAR",       // 17
];

// Rooted at the neck; hips hang off the shoulders.
pub const BODY18_PARENTS: [i64; 18] = [
    1,  // NOSE -> NECK
    -1, // NECK (root)
    1,  // RIGHT_SHOULDER -> NECK
    2,  // RIGHT_ELBOW -> RIGHT_SHOULDER
    3,  // RIGHT_WRIST -> RIGHT_ELBOW
    1,  // LEFT_SHOULDER -> NECK
    5,  // LEFT_ELBOW -> LEFT_SHOULDER
    6,  // LEFT_WRIST -> LEFT_ELBOW
    2,  // RIGHT_HIP -> RIGHT_SHOULDER
    8,  // RIGHT_KNEE -> RIGHT_HIP
    9,  // RIGHT_ANKLE -> RIGHT_KNEE
    5,  // LEFT_HIP -> LEFT_SHOULDER
    11, // LEFT_KNEE -> LEFT_HIP
    12, // LEFT_ANKLE -> LEFT_KNEE
    0,  // RIGHT_EYE -> NOSE
    0,  // LEFT_EYE -> NOSE
    14, // RIGHT_EAR -> RIGHT_EYE
    15, // LEFT_EAR -> LEFT_EYE
];

pub fn body18_roles() -> RoleMap {
    RoleMap::new()
        .with(Role::Neck, 1)
        .with(Role::Head, 0)
        .with(Role::LShoulder, 5)
        .with(Role::LElbow, 6)
        .with(Role::LWrist, 7)
        .with(Role::RShoulder, 2)
        .with(Role::RElbow, 3)
        .with(Role::RWrist, 4)
        .with(Role::LHip, 11)
        .with(Role::LKnee, 12)
        .with(Role::LAnkle, 13)
        .with(Role::RHip, 8)
        .with(Role::RKnee, 9)
        .with(Role::RAnkle, 10)
}

pub fn body18() -> Result<SkeletonDefinition, StructuralError> {
    SkeletonDefinition::from_table(
        BODY18_NAME,
        &BODY18_JOINT_NAMES,
        &BODY18_PARENTS,
        body18_roles(),
    )
}

pub const BODY34_NAME: &str = "StereolabsBody34";

pub const BODY34_JOINT_NAMES: [&str; 34] = [
    "PELVIS",         // 0
    "NAVAL_SPINE",    // 1
    "CHEST_SPINE",    // 2
    "NECK",           // 3
    "LEFT_CLAVICLE",  // 4
    "LEFT_SHOULDER",  // 5
    "LEFT_ELBOW",     // 6
    "LEFT_WRIST",     // 7
    "LEFT_HAND",      // 8
    "LEFT_HANDTIP",   // 9
    "LEFT_THUMB",     // 10
    "RIGHT_CLAVICLE", // 11
    "RIGHT_SHOULDER", // 12
    "RIGHT_ELBOW",    // 13
    "RIGHT_WRIST",    // 14
    "RIGHT_HAND",     // 15
    "RIGHT_HANDTIP",  // 16
    "RIGHT_THUMB",    // 17
    "LEFT_HIP",       // 18
    "LEFT_KNEE",      // 19
    "LEFT_ANKLE",     // 20
    "LEFT_FOOT",      // 21
    "RIGHT_HIP",      // 22
    "RIGHT_KNEE",     // 23
    "RIGHT_ANKLE",    // 24
    "RIGHT_FOOT",     // 25
    "HEAD",           // 26
    "NOSE",           // 27
    "LEFT_EYE",       // 28
    "LEFT_EAR",       // 29
    "RIGHT_EYE",      // 30
    "RIGHT_EAR",      // 31
    "LEFT_HEEL",      // 32
    "RIGHT_HEEL",     // 33
];

pub const BODY34_PARENTS: [i64; 34] = [
    -1, // PELVIS (root)
    0,  // NAVAL_SPINE -> PELVIS
    1,  // CHEST_SPINE -> NAVAL_SPINE
    2,  // NECK -> CHEST_SPINE
    2,  // LEFT_CLAVICLE -> CHEST_SPINE
    4,  // LEFT_SHOULDER -> LEFT_CLAVICLE
    5,  // LEFT_ELBOW -> LEFT_SHOULDER
    6,  // LEFT_WRIST -> LEFT_ELBOW
    7,  // LEFT_HAND -> LEFT_WRIST
    8,  // LEFT_HANDTIP -> LEFT_HAND
    7,  // LEFT_THUMB -> LEFT_WRIST
    2,  // RIGHT_CLAVICLE -> CHEST_SPINE
    11, // RIGHT_SHOULDER -> RIGHT_CLAVICLE
    12, // RIGHT_ELBOW -> RIGHT_SHOULDER
    13, // RIGHT_WRIST -> RIGHT_ELBOW
    14, // RIGHT_HAND -> RIGHT_WRIST
    15, // RIGHT_HANDTIP -> RIGHT_HAND
    14, // RIGHT_THUMB -> RIGHT_WRIST
    0,  // LEFT_HIP -> PELVIS
    18, // LEFT_KNEE -> LEFT_HIP
    19, // LEFT_ANKLE -> LEFT_KNEE
    20, // LEFT_FOOT -> LEFT_ANKLE
    0,  // RIGHT_HIP -> PELVIS
    22, // RIGHT_KNEE -> RIGHT_HIP
    23, // RIGHT_ANKLE -> RIGHT_KNEE
    24, // RIGHT_FOOT -> RIGHT_ANKLE
    3,  // HEAD -> NECK
    26, // NOSE -> HEAD
    26, // LEFT_EYE -> HEAD
    26, // LEFT_EAR -> HEAD
    26, // RIGHT_EYE -> HEAD
    26, // RIGHT_EAR -> HEAD
    20, // LEFT_HEEL -> LEFT_ANKLE
    24, // RIGHT_HEEL -> RIGHT_ANKLE
];

// NECK fills both spine_high and neck.
pub fn body34_roles() -> RoleMap {
    RoleMap::new()
        .with(Role::Hips, 0)
        .with(Role::SpineLow, 1)
        .with(Role::SpineMid, 2)
        .with(Role::SpineHigh, 3)
        .with(Role::Neck, 3)
        .with(Role::Head, 26)
        .with(Role::LClavicle, 4)
        .with(Role::LShoulder, 5)
        .with(Role::LElbow, 6)
        .with(Role::LWrist, 7)
        .with(Role::LHand, 8)
        .with(Role::RClavicle, 11)
        .with(Role::RShoulder, 12)
        .with(Role::RElbow, 13)
        .with(Role::RWrist, 14)
        .with(Role::RHand, 15)
        .with(Role::LHip, 18)
        .with(Role::LKnee, 19)
        .with(Role::LAnkle, 20)
        .with(Role::LFoot, 21)
        .with(Role::RHip, 22)
        .with(Role::RKnee, 23)
        .with(Role::RAnkle, 24)
        .with(Role::RFoot, 25)
}

pub fn body34() -> Result<SkeletonDefinition, StructuralError> {
    SkeletonDefinition::from_table(
        BODY34_NAME,
        &BODY34_JOINT_NAMES,
        &BODY34_PARENTS,
        body34_roles(),
    )
}

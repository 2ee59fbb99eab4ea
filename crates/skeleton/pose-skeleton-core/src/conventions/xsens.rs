//! Xsens MVN segment skeleton (23 segments).

use crate::definition::SkeletonDefinition;
use crate::error::StructuralError;
use crate::roles::{Role, RoleMap};

pub const NAME: &str = "Xsens";

pub const JOINT_NAMES: [&str; 23] = [
    "Pelvis",        // 0
    "L5",            // 1
    "L3",            // 2
    "T12",           // 3
    "T8",            // 4
    "Neck",          // 5
    "Head",          // 6
    "RightShoulder", // 7
    "RightUpperArm", // 8
    "RightForeArm",  // 9
    "RightHand",     // 10
    "LeftShoulder",  // 11
    "LeftUpperArm",  // 12
    "LeftForeArm",   // 13
    "LeftHand",      // 14
    "RightUpperLeg", // 15
    "RightLowerLeg", // 16
    "RightFoot",     // 17
    "RightToe",      // 18
    "LeftUpperLeg",  // 19
    "LeftLowerLeg",  // 20
    "LeftFoot",      // 21
    "LeftToe",       // 22
];

pub const PARENTS: [i64; 23] = [
    -1, // Pelvis (root)
    0,  // L5 -> Pelvis
    1,  // L3 -> L5
    2,  // T12 -> L3
    3,  // T8 -> T12
    4,  // Neck -> T8
    5,  // Head -> Neck
    4,  // RightShoulder -> T8
    7,  // RightUpperArm -> RightShoulder
    8,  // RightForeArm -> RightUpperArm
    9,  // RightHand -> RightForeArm
    4,  // LeftShoulder -> T8
    11, // LeftUpperArm -> LeftShoulder
    12, // LeftForeArm -> LeftUpperArm
    13, // LeftHand -> LeftForeArm
    0,  // RightUpperLeg -> Pelvis
    15, // RightLowerLeg -> RightUpperLeg
    16, // RightFoot -> RightLowerLeg
    17, // RightToe -> RightFoot
    0,  // LeftUpperLeg -> Pelvis
    19, // LeftLowerLeg -> LeftUpperLeg
    20, // LeftFoot -> LeftLowerLeg
    21, // LeftToe -> LeftFoot
];

// L5 is left unmapped: the three spine slots take L3, T12 and T8.
pub fn roles() -> RoleMap {
    RoleMap::new()
        .with(Role::Hips, 0)
        .with(Role::SpineLow, 2)
        .with(Role::SpineMid, 3)
        .with(Role::SpineHigh, 4)
        .with(Role::Neck, 5)
        .with(Role::Head, 6)
        .with(Role::LClavicle, 11)
        .with(Role::LShoulder, 12)
        .with(Role::LElbow, 13)
        .with(Role::LWrist, 14)
        .with(Role::RClavicle, 7)
        .with(Role::RShoulder, 8)
        .with(Role::RElbow, 9)
        .with(Role::RWrist, 10)
        .with(Role::LHip, 19)
        .with(Role::LKnee, 20)
        .with(Role::LAnkle, 21)
        .with(Role::LFoot, 22)
        .with(Role::RHip, 15)
        .with(Role::RKnee, 16)
        .with(Role::RAnkle, 17)
        .with(Role::RFoot, 18)
}

pub fn definition() -> Result<SkeletonDefinition, StructuralError> {
    SkeletonDefinition::from_table(NAME, &JOINT_NAMES, &PARENTS, roles())
}

//! OptiTrack Motive baseline skeleton (21 segments).

use crate::definition::SkeletonDefinition;
use crate::error::StructuralError;
use crate::roles::{Role, RoleMap};

pub const NAME: &str = "OptiTrack";

pub const JOINT_NAMES: [&str; 21] = [
    "Hip",       // 0
    "Ab",        // 1
    "Chest",     // 2
    "Neck",      // 3
    "Head",      // 4
    "LShoulder", // 5
    "LUArm",     // 6
    "LFArm",     // 7
    "LHand",     // 8
    "RShoulder", // 9
    "RUArm",     // 10
    "RFArm",     // 11
    "RHand",     // 12
    "LThigh",    // 13
    "LShin",     // 14
    "LFoot",     // 15
    "LToe",      // 16
    "RThigh",    // 17
    "RShin",     // 18
    "RFoot",     // 19
    "RToe",      // 20
];

pub const PARENTS: [i64; 21] = [
    -1, // Hip (root)
    0,  // Ab -> Hip
    1,  // Chest -> Ab
    2,  // Neck -> Chest
    3,  // Head -> Neck
    2,  // LShoulder -> Chest
    5,  // LUArm -> LShoulder
    6,  // LFArm -> LUArm
    7,  // LHand -> LFArm
    2,  // RShoulder -> Chest
    9,  // RUArm -> RShoulder
    10, // RFArm -> RUArm
    11, // RHand -> RFArm
    0,  // LThigh -> Hip
    13, // LShin -> LThigh
    14, // LFoot -> LShin
    15, // LToe -> LFoot
    0,  // RThigh -> Hip
    17, // RShin -> RThigh
    18, // RFoot -> RShin
    19, // RToe -> RFoot
];

// Motive names segments; a role sits on the segment that starts at that joint
// (the elbow is where the forearm begins).
pub fn roles() -> RoleMap {
    RoleMap::new()
        .with(Role::Hips, 0)
        .with(Role::SpineLow, 1)
        .with(Role::SpineMid, 2)
        .with(Role::Neck, 3)
        .with(Role::Head, 4)
        .with(Role::LClavicle, 5)
        .with(Role::LShoulder, 6)
        .with(Role::LElbow, 7)
        .with(Role::LWrist, 8)
        .with(Role::RClavicle, 9)
        .with(Role::RShoulder, 10)
        .with(Role::RElbow, 11)
        .with(Role::RWrist, 12)
        .with(Role::LHip, 13)
        .with(Role::LKnee, 14)
        .with(Role::LAnkle, 15)
        .with(Role::LFoot, 16)
        .with(Role::RHip, 17)
        .with(Role::RKnee, 18)
        .with(Role::RAnkle, 19)
        .with(Role::RFoot, 20)
}

pub fn definition() -> Result<SkeletonDefinition, StructuralError> {
    SkeletonDefinition::from_table(NAME, &JOINT_NAMES, &PARENTS, roles())
}

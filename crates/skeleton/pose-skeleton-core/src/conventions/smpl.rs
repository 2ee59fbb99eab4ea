//! SMPL body-model family: SMPL (24), SMPL+H (73) and SMPL-X (144).
//!
//! All three share the same 22-joint body prefix and role assignment; they
//! differ in what follows it (hand joints, finger chains, regressed
//! landmarks, face contour).

use crate::definition::SkeletonDefinition;
use crate::error::StructuralError;
use crate::roles::{Role, RoleMap};

pub const SMPL_NAME: &str = "SMPL";
pub const SMPLH_NAME: &str = "SMPLH";
pub const SMPLX_NAME: &str = "SMPLX";

const HEAD: i64 = 15;

pub const BODY_JOINT_NAMES: [&str; 22] = [
    "pelvis",         // 0
    "left_hip",       // 1
    "right_hip",      // 2
    "spine1",         // 3
    "left_knee",      // 4
    "right_knee",     // 5
    "spine2",         // 6
    "left_ankle",     // 7
    "right_ankle",    // 8
    "spine3",         // 9
    "left_foot",      // 10
    "right_foot",     // 11
    "neck",           // 12
    "left_collar",    // 13
    "right_collar",   // 14
    "head",           // 15
    "left_shoulder",  // 16
    "right_shoulder", // 17
    "left_elbow",     // 18
    "right_elbow",    // 19
    "left_wrist",     // 20
    "right_wrist",    // 21
];

pub const BODY_PARENTS: [i64; 22] = [
    -1, // pelvis (root)
    0,  // left_hip -> pelvis
    0,  // right_hip -> pelvis
    0,  // spine1 -> pelvis
    1,  // left_knee -> left_hip
    2,  // right_knee -> right_hip
    3,  // spine2 -> spine1
    4,  // left_ankle -> left_knee
    5,  // right_ankle -> right_knee
    6,  // spine3 -> spine2
    7,  // left_foot -> left_ankle
    8,  // right_foot -> right_ankle
    9,  // neck -> spine3
    9,  // left_collar -> spine3
    9,  // right_collar -> spine3
    12, // head -> neck
    13, // left_shoulder -> left_collar
    14, // right_shoulder -> right_collar
    16, // left_elbow -> left_shoulder
    17, // right_elbow -> right_shoulder
    18, // left_wrist -> left_elbow
    19, // right_wrist -> right_elbow
];

const LEFT_WRIST: i64 = 20;
const RIGHT_WRIST: i64 = 21;

/// Finger chains in model order: index, middle, pinky, ring, thumb; three
/// joints each, rooted at the wrist.
pub const LEFT_FINGER_NAMES: [&str; 15] = [
    "left_index1",
    "left_index2",
    "left_index3",
    "left_middle1",
    "left_middle2",
    "left_middle3",
    "left_pinky1",
    "left_pinky2",
    "left_pinky3",
    "left_ring1",
    "left_ring2",
    "left_ring3",
    "left_thumb1",
    "left_thumb2",
    "left_thumb3",
];

pub const RIGHT_FINGER_NAMES: [&str; 15] = [
    "right_index1",
    "right_index2",
    "right_index3",
    "right_middle1",
    "right_middle2",
    "right_middle3",
    "right_pinky1",
    "right_pinky2",
    "right_pinky3",
    "right_ring1",
    "right_ring2",
    "right_ring3",
    "right_thumb1",
    "right_thumb2",
    "right_thumb3",
];

/// Regressed head and foot landmarks shared by SMPL+H and SMPL-X.
pub const LANDMARK_NAMES: [&str; 11] = [
    "nose",
    "right_eye",
    "left_eye",
    "right_ear",
    "left_ear",
    "left_big_toe",
    "left_small_toe",
    "left_heel",
    "right_big_toe",
    "right_small_toe",
    "right_heel",
];

pub const LANDMARK_PARENTS: [i64; 11] = [
    HEAD, // nose
    HEAD, // right_eye
    HEAD, // left_eye
    HEAD, // right_ear
    HEAD, // left_ear
    10,   // left_big_toe -> left_foot
    10,   // left_small_toe -> left_foot
    7,    // left_heel -> left_ankle
    11,   // right_big_toe -> right_foot
    11,   // right_small_toe -> right_foot
    8,    // right_heel -> right_ankle
];

pub const FINGERTIP_NAMES: [&str; 10] = [
    "left_thumb",
    "left_index",
    "left_middle",
    "left_ring",
    "left_pinky",
    "right_thumb",
    "right_index",
    "right_middle",
    "right_ring",
    "right_pinky",
];

pub const SMPLX_FACE_ARTICULATION_NAMES: [&str; 3] = ["jaw", "left_eye_smplhf", "right_eye_smplhf"];

pub const SMPLX_FACE_LANDMARK_NAMES: [&str; 68] = [
    "right_eye_brow1",
    "right_eye_brow2",
    "right_eye_brow3",
    "right_eye_brow4",
    "right_eye_brow5",
    "left_eye_brow5",
    "left_eye_brow4",
    "left_eye_brow3",
    "left_eye_brow2",
    "left_eye_brow1",
    "nose1",
    "nose2",
    "nose3",
    "nose4",
    "right_nose_2",
    "right_nose_1",
    "nose_middle",
    "left_nose_1",
    "left_nose_2",
    "right_eye1",
    "right_eye2",
    "right_eye3",
    "right_eye4",
    "right_eye5",
    "right_eye6",
    "left_eye4",
    "left_eye3",
    "left_eye2",
    "left_eye1",
    "left_eye6",
    "left_eye5",
    "right_mouth_1",
    "right_mouth_2",
    "right_mouth_3",
    "mouth_top",
    "left_mouth_3",
    "left_mouth_2",
    "left_mouth_1",
    "left_mouth_5",
    "left_mouth_4",
    "mouth_bottom",
    "right_mouth_4",
    "right_mouth_5",
    "right_lip_1",
    "right_lip_2",
    "lip_top",
    "left_lip_2",
    "left_lip_1",
    "left_lip_3",
    "lip_bottom",
    "right_lip_3",
    "right_contour_1",
    "right_contour_2",
    "right_contour_3",
    "right_contour_4",
    "right_contour_5",
    "right_contour_6",
    "right_contour_7",
    "right_contour_8",
    "contour_middle",
    "left_contour_8",
    "left_contour_7",
    "left_contour_6",
    "left_contour_5",
    "left_contour_4",
    "left_contour_3",
    "left_contour_2",
    "left_contour_1",
];

/// Parents for one hand's 15 finger joints whose first joint sits at `first`.
fn finger_parents(wrist: i64, first: i64) -> Vec<i64> {
    (0..5)
        .flat_map(|finger| {
            let base = first + 3 * finger;
            [wrist, base, base + 1]
        })
        .collect()
}

/// Parents for the ten fingertips (thumb, index, middle, ring, pinky per
/// side), each attached to the last joint of its chain.
fn fingertip_parents(left_first: i64, right_first: i64) -> Vec<i64> {
    // Offset of each chain's third joint inside a hand block.
    const TIP_OFFSETS: [i64; 5] = [14, 2, 5, 11, 8];
    TIP_OFFSETS
        .iter()
        .map(|off| left_first + off)
        .chain(TIP_OFFSETS.iter().map(|off| right_first + off))
        .collect()
}

fn body_roles() -> RoleMap {
    RoleMap::new()
        .with(Role::Hips, 0)
        .with(Role::SpineLow, 3)
        .with(Role::SpineMid, 6)
        .with(Role::SpineHigh, 9)
        .with(Role::Neck, 12)
        .with(Role::Head, 15)
        .with(Role::LClavicle, 13)
        .with(Role::LShoulder, 16)
        .with(Role::LElbow, 18)
        .with(Role::LWrist, 20)
        .with(Role::RClavicle, 14)
        .with(Role::RShoulder, 17)
        .with(Role::RElbow, 19)
        .with(Role::RWrist, 21)
        .with(Role::LHip, 1)
        .with(Role::LKnee, 4)
        .with(Role::LAnkle, 7)
        .with(Role::LFoot, 10)
        .with(Role::RHip, 2)
        .with(Role::RKnee, 5)
        .with(Role::RAnkle, 8)
        .with(Role::RFoot, 11)
}

#[derive(Default)]
struct TableBuilder {
    names: Vec<String>,
    parents: Vec<i64>,
}

impl TableBuilder {
    fn push(mut self, names: &[&str], parents: &[i64]) -> Self {
        debug_assert_eq!(names.len(), parents.len());
        self.names.extend(names.iter().map(|s| s.to_string()));
        self.parents.extend_from_slice(parents);
        self
    }

    fn next_index(&self) -> i64 {
        self.names.len() as i64
    }

    fn hands(self) -> Self {
        let left = self.next_index();
        let right = left + LEFT_FINGER_NAMES.len() as i64;
        self.push(&LEFT_FINGER_NAMES, &finger_parents(LEFT_WRIST, left))
            .push(&RIGHT_FINGER_NAMES, &finger_parents(RIGHT_WRIST, right))
    }

    fn build(self, name: &str) -> Result<SkeletonDefinition, StructuralError> {
        SkeletonDefinition::new(name, self.names, &self.parents, body_roles())
    }
}

fn body() -> TableBuilder {
    TableBuilder::default().push(&BODY_JOINT_NAMES, &BODY_PARENTS)
}

/// SMPL: body plus one hand joint per side.
pub fn smpl() -> Result<SkeletonDefinition, StructuralError> {
    body()
        .push(&["left_hand", "right_hand"], &[LEFT_WRIST, RIGHT_WRIST])
        .build(SMPL_NAME)
}

/// SMPL+H: body, articulated fingers, regressed landmarks and fingertips.
pub fn smplh() -> Result<SkeletonDefinition, StructuralError> {
    let table = body().hands();
    let left_first = BODY_JOINT_NAMES.len() as i64;
    let right_first = left_first + LEFT_FINGER_NAMES.len() as i64;
    table
        .push(&LANDMARK_NAMES, &LANDMARK_PARENTS)
        .push(&FINGERTIP_NAMES, &fingertip_parents(left_first, right_first))
        .build(SMPLH_NAME)
}

/// SMPL-X: SMPL+H layout with jaw/eye articulation after the body and 68
/// face landmarks at the end, all hanging off the head.
pub fn smplx() -> Result<SkeletonDefinition, StructuralError> {
    let table = body().push(&SMPLX_FACE_ARTICULATION_NAMES, &[HEAD; 3]);
    let left_first = table.next_index();
    let right_first = left_first + LEFT_FINGER_NAMES.len() as i64;
    table
        .hands()
        .push(&LANDMARK_NAMES, &LANDMARK_PARENTS)
        .push(&FINGERTIP_NAMES, &fingertip_parents(left_first, right_first))
        .push(&SMPLX_FACE_LANDMARK_NAMES, &[HEAD; 68])
        .build(SMPLX_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_counts_match_model_layouts() {
        assert_eq!(smpl().unwrap().joint_count(), 24);
        assert_eq!(smplh().unwrap().joint_count(), 73);
        assert_eq!(smplx().unwrap().joint_count(), 144);
    }

    #[test]
    fn smplh_finger_chains_hang_off_wrists() {
        let def = smplh().unwrap();
        let tree = def.tree();
        assert_eq!(def.name_of(22).unwrap(), "left_index1");
        assert_eq!(tree.parent_of(22).unwrap(), Some(20));
        assert_eq!(tree.parent_of(24).unwrap(), Some(23));
        assert_eq!(tree.parent_of(37).unwrap(), Some(21));
        assert_eq!(def.name_of(52).unwrap(), "nose");
        // Fingertips attach to the third joint of their chain.
        assert_eq!(def.name_of(63).unwrap(), "left_thumb");
        assert_eq!(tree.parent_of(63).unwrap(), Some(36));
        assert_eq!(tree.parent_of(72).unwrap(), Some(45));
    }

    #[test]
    fn smplx_offsets_follow_face_articulation() {
        let def = smplx().unwrap();
        let tree = def.tree();
        assert_eq!(def.name_of(22).unwrap(), "jaw");
        assert_eq!(tree.parent_of(22).unwrap(), Some(15));
        assert_eq!(def.name_of(25).unwrap(), "left_index1");
        assert_eq!(tree.parent_of(25).unwrap(), Some(20));
        assert_eq!(def.name_of(55).unwrap(), "nose");
        assert_eq!(def.name_of(66).unwrap(), "left_thumb");
        assert_eq!(tree.parent_of(66).unwrap(), Some(39));
        assert_eq!(tree.parent_of(75).unwrap(), Some(48));
        assert_eq!(def.name_of(76).unwrap(), "right_eye_brow1");
        assert_eq!(def.name_of(143).unwrap(), "left_contour_1");
        assert_eq!(tree.children_of(15).unwrap().len(), 3 + 5 + 68);
    }
}

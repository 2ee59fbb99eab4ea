use std::thread;

use pose_skeleton_core::{detect_skeleton, get_definition, registry, SkeletonError};
use pose_skeleton_fixtures::joint_sets;

const COCO17: [&str; 17] = [
    "Nose",
    "LeftEye",
    "RightEye",
    "LeftEar",
    "RightEar",
    "LeftShoulder",
    "RightShoulder",
    "LeftElbow",
    "RightElbow",
    "LeftWrist",
    "RightWrist",
    "LeftHip",
    "RightHip",
    "LeftKnee",
    "RightKnee",
    "LeftAnkle",
    "RightAnkle",
];

#[test]
fn lookup_is_case_and_whitespace_insensitive() {
    let a = get_definition("OptiTrack").unwrap();
    let b = get_definition(" optitrack ").unwrap();
    let c = get_definition("optitrack").unwrap();
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(b, c));
    assert_eq!(a.name(), "OptiTrack");
}

#[test]
fn unknown_name_is_not_found_and_lists_registered_names() {
    let err = get_definition("not-a-real-skeleton").unwrap_err();
    match &err {
        SkeletonError::NotFound { name, available } => {
            assert_eq!(name, "not-a-real-skeleton");
            assert_eq!(available.len(), registry().len());
            assert!(available.iter().any(|n| n == "smplx"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("optitrack"));
}

#[test]
fn detects_coco17_and_misses_on_any_missing_joint() {
    assert_eq!(detect_skeleton(COCO17), Some("coco17"));
    for skip in 0..COCO17.len() {
        let partial: Vec<&str> = COCO17
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, n)| *n)
            .collect();
        assert_eq!(detect_skeleton(&partial), None, "without {}", COCO17[skip]);
    }
}

#[test]
fn detection_ignores_order_but_not_spelling() {
    let mut reversed = COCO17.to_vec();
    reversed.reverse();
    assert_eq!(detect_skeleton(&reversed), Some("coco17"));

    let mut renamed = COCO17.to_vec();
    renamed[0] = "nose";
    assert_eq!(detect_skeleton(&renamed), None);

    let mut extra = COCO17.to_vec();
    extra.push("Neck");
    assert_eq!(detect_skeleton(&extra), None);
}

#[test]
fn every_builtin_detects_itself() {
    for (name, def) in registry().iter() {
        assert_eq!(detect_skeleton(def.joint_names()), Some(name));
    }
}

#[test]
fn joint_set_fixtures_detect_as_expected() {
    for key in joint_sets::keys() {
        let fixture = joint_sets::load(&key).expect("load joint-set fixture");
        assert_eq!(
            detect_skeleton(&fixture.joints),
            fixture.expected.as_deref(),
            "fixture {key}"
        );
    }
}

#[test]
fn detect_definition_returns_the_matching_table() {
    let fixture = joint_sets::load("smpl").unwrap();
    let (name, def) = registry().detect_definition(&fixture.joints).unwrap();
    assert_eq!(name, "smpl");
    assert_eq!(def.name(), "SMPL");
    assert_eq!(def.joint_count(), 24);
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let def = get_definition("smplx").unwrap();
                (def as *const _ as usize, detect_skeleton(COCO17))
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (addr, detected) in &results {
        assert_eq!(*addr, results[0].0);
        assert_eq!(*detected, Some("coco17"));
    }
}

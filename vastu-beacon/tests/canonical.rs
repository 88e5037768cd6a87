//! End-to-end registration of the five-scanner reference scene.

mod common;

use common::*;
use vastu_beacon::{
    AssemblyConfig, GlobalAssembler, OverlapDetector, Point3D, RegistrationError, ScannerId,
    Transform3D,
};

#[test]
fn test_reference_scene_assembly() {
    init_logging();

    let assembly = GlobalAssembler::with_defaults()
        .assemble(reference_scanners())
        .expect("reference scene assembles");

    assert_eq!(assembly.len(), 5);
    assert_eq!(assembly.beacon_count(), REFERENCE_BEACON_COUNT);
    assert_eq!(assembly.max_scanner_distance(), REFERENCE_MAX_DISTANCE);

    for id in 0..5 {
        let id = ScannerId(id);
        assert_eq!(assembly.offset(id), Some(reference_offset(id)), "{}", id);
    }
}

#[test]
fn test_reference_scene_resolution_order() {
    init_logging();

    let assembly = GlobalAssembler::with_defaults()
        .assemble(reference_scanners())
        .unwrap();

    // 2 is only reachable through 4
    assert_eq!(
        assembly.resolution_order(),
        &[ScannerId(0), ScannerId(1), ScannerId(3), ScannerId(4), ScannerId(2)]
    );
    assert_eq!(assembly.stats().passes, 1);
}

#[test]
fn test_reference_scene_parallel_agrees() {
    init_logging();

    let sequential = GlobalAssembler::with_defaults()
        .assemble(reference_scanners())
        .unwrap();
    let parallel = GlobalAssembler::new(
        OverlapDetector::with_defaults(),
        AssemblyConfig {
            worker_threads: 4,
            ..Default::default()
        },
    )
    .assemble(reference_scanners())
    .unwrap();

    assert_eq!(parallel.global_beacons(), sequential.global_beacons());
    for id in 0..5 {
        let id = ScannerId(id);
        assert_eq!(parallel.transform(id), sequential.transform(id));
    }
}

#[test]
fn test_reference_pair_overlap() {
    init_logging();

    let detector = OverlapDetector::with_defaults();
    let overlap = detector
        .compute_overlap(&reference_scanner(0), &reference_scanner(1))
        .unwrap()
        .expect("scanners 0 and 1 overlap");

    assert_eq!(overlap.offset(), Point3D::new(68, -1246, -43));
    assert_eq!(overlap.shared_beacons(), 12);
    assert!(overlap.reference_beacons.contains(&Point3D::new(-618, -824, -621)));
    assert!(overlap.candidate_beacons.contains(&Point3D::new(686, 422, 578)));
}

#[test]
fn test_reference_pair_without_overlap() {
    let detector = OverlapDetector::with_defaults();
    let overlap = detector
        .compute_overlap(&reference_scanner(0), &reference_scanner(2))
        .unwrap();
    assert!(overlap.is_none());
}

#[test]
fn test_reference_scene_from_other_root() {
    init_logging();

    let assembler = GlobalAssembler::new(
        OverlapDetector::with_defaults(),
        AssemblyConfig::default().with_root(1),
    );
    let assembly = assembler.assemble(reference_scanners()).unwrap();

    // Same scene in a different frame: counts and distances are invariant
    assert_eq!(assembly.beacon_count(), REFERENCE_BEACON_COUNT);
    assert_eq!(assembly.max_scanner_distance(), REFERENCE_MAX_DISTANCE);
    assert_eq!(assembly.transform(ScannerId(1)), Some(Transform3D::IDENTITY));
}

#[test]
fn test_reference_scene_missing_link_stalls() {
    init_logging();

    // Without 4, scanner 2 has no overlapping neighbour
    let scanners: Vec<_> = reference_scanners()
        .into_iter()
        .filter(|s| s.id != ScannerId(4))
        .collect();

    let err = GlobalAssembler::with_defaults()
        .assemble(scanners)
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::StalledAssembly {
            resolved: vec![ScannerId(0), ScannerId(1), ScannerId(3)],
            unresolved: vec![ScannerId(2)],
        }
    );
    assert_eq!(err.code(), "STALLED_ASSEMBLY");
}

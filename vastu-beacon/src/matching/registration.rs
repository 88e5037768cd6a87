//! Translation recovery and transform application.

use crate::core::{Orientation, Point3D, Transform3D};
use crate::error::{RegistrationError, Result};

/// Translation that moves the rotated candidate beacon onto its reference.
#[inline]
pub fn recover_translation(
    orientation: &Orientation,
    reference_point: Point3D,
    candidate_point: Point3D,
) -> Point3D {
    reference_point - orientation.apply(candidate_point)
}

/// Full candidate-to-reference transform from a rotation and one matched pair.
#[inline]
pub fn recover_transform(
    orientation: Orientation,
    reference_point: Point3D,
    candidate_point: Point3D,
) -> Transform3D {
    let offset = recover_translation(&orientation, reference_point, candidate_point);
    Transform3D::new(orientation, offset)
}

/// Map a scanner's whole beacon list into the reference frame.
pub fn register_beacons(transform: &Transform3D, beacons: &[Point3D]) -> Vec<Point3D> {
    beacons.iter().map(|b| transform.apply(*b)).collect()
}

/// Check that every matched pair lands exactly on its partner.
pub fn verify_alignment(
    transform: &Transform3D,
    reference: &[Point3D],
    candidate: &[Point3D],
) -> Result<()> {
    for (r, c) in reference.iter().zip(candidate) {
        let mapped = transform.apply(*c);
        if mapped != *r {
            return Err(RegistrationError::MisalignedCorrespondence {
                reference: *r,
                candidate: *c,
                mapped,
            });
        }
    }
    Ok(())
}

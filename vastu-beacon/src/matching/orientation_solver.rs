//! Discrete rotation recovery from matched beacon pairs.
//!
//! Differences between consecutive matched beacons cancel the unknown
//! translation. Under an axis-aligned rotation, each reference axis of those
//! differences equals one candidate axis up to sign, so the rotation can be
//! read off column by column without trying all 24 orientations.

use crate::core::{Orientation, Point3D};
use crate::error::{RegistrationError, Result};

/// Consecutive first differences of a point list, as component arrays.
fn first_differences(points: &[Point3D]) -> Vec<[i32; 3]> {
    points.windows(2).map(|w| (w[1] - w[0]).to_array()).collect()
}

/// Recover the rotation `R` with `R · (c[i+1] - c[i]) == r[i+1] - r[i]`.
///
/// A reference axis that never changes (all matched beacons on one plane)
/// takes the one candidate axis left over by the other two, with the sign
/// that makes the rotation proper.
///
/// # Arguments
/// * `reference` - Matched beacons in the reference frame
/// * `candidate` - The same beacons, in the same order, in the candidate frame
///
/// # Errors
/// - [`RegistrationError::InsufficientPairs`] for fewer than two pairs or
///   lists of different length
/// - [`RegistrationError::DegenerateAxis`] when two or more axes never change
/// - [`RegistrationError::AmbiguousOrientationAxis`] when a reference axis
///   matches zero or several candidate axes by magnitude
/// - [`RegistrationError::InconsistentSign`] when the sign flips between samples
/// - [`RegistrationError::ImproperRotation`] when the axis mapping is a
///   reflection or maps two axes onto one
pub fn solve_orientation(reference: &[Point3D], candidate: &[Point3D]) -> Result<Orientation> {
    if reference.len() != candidate.len() || reference.len() < 2 {
        return Err(RegistrationError::InsufficientPairs {
            reference: reference.len(),
            candidate: candidate.len(),
        });
    }

    let reference_diff = first_differences(reference);
    let candidate_diff = first_differences(candidate);
    let samples = || reference_diff.iter().zip(&candidate_diff);

    let flat: Vec<usize> = (0..3)
        .filter(|&axis| reference_diff.iter().all(|r| r[axis] == 0))
        .collect();
    let undetermined = match flat[..] {
        [] => None,
        [axis] => Some(axis),
        [_, axis, ..] => return Err(RegistrationError::DegenerateAxis { axis }),
    };

    let mut rows = [Point3D::ZERO; 3];
    let mut used = [false; 3];
    for (axis, row) in rows.iter_mut().enumerate() {
        if undetermined == Some(axis) {
            continue;
        }

        let matching: Vec<usize> = (0..3)
            .filter(|&source| samples().all(|(r, c)| r[axis].abs() == c[source].abs()))
            .collect();

        let [source] = matching[..] else {
            return Err(RegistrationError::AmbiguousOrientationAxis {
                axis,
                candidates: matching.len(),
            });
        };

        let sign = if samples().all(|(r, c)| r[axis] == c[source]) {
            1
        } else if samples().all(|(r, c)| r[axis] == -c[source]) {
            -1
        } else {
            return Err(RegistrationError::InconsistentSign {
                axis,
                source_axis: source,
            });
        };

        let mut unit = [0; 3];
        unit[source] = sign;
        *row = Point3D::from(unit);
        used[source] = true;
    }

    if let Some(axis) = undetermined {
        let Some(source) = (0..3).find(|&s| !used[s]) else {
            return Err(RegistrationError::ImproperRotation);
        };
        if candidate_diff.iter().any(|c| c[source] != 0) {
            return Err(RegistrationError::AmbiguousOrientationAxis {
                axis,
                candidates: 0,
            });
        }

        let mut unit = [0; 3];
        unit[source] = 1;
        rows[axis] = Point3D::from(unit);
        let [a, b, c] = rows;
        if a.dot(&b.cross(&c)) < 0 {
            rows[axis] = -rows[axis];
        }
    }

    Orientation::from_rows(rows).ok_or(RegistrationError::ImproperRotation)
}

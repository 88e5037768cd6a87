//! Overlap detection result types.

use crate::core::{Orientation, Point3D, Transform3D};

/// Relation between a candidate scanner and a reference scanner.
///
/// `transform` maps candidate-local points into the reference scanner's
/// local frame; its offset is the candidate's position as seen from the
/// reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlapResult {
    /// Candidate-to-reference transform.
    pub transform: Transform3D,
    /// Matched beacons in the reference frame.
    pub reference_beacons: Vec<Point3D>,
    /// The same beacons, in the same order, in the candidate frame.
    pub candidate_beacons: Vec<Point3D>,
    /// Refinement rounds until the correspondence stopped changing.
    pub rounds: usize,
}

impl OverlapResult {
    /// Rotation from the candidate frame to the reference frame.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.transform.orientation
    }

    /// Candidate position in the reference frame.
    #[inline]
    pub fn offset(&self) -> Point3D {
        self.transform.offset
    }

    /// Number of corresponding beacons.
    #[inline]
    pub fn shared_beacons(&self) -> usize {
        self.reference_beacons.len()
    }

    /// Matched (reference, candidate) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (Point3D, Point3D)> + '_ {
        self.reference_beacons
            .iter()
            .copied()
            .zip(self.candidate_beacons.iter().copied())
    }
}

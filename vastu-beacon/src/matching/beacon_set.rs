//! Beacon sets with rotation-invariant distance fingerprints.
//!
//! Manhattan distance between two beacons survives any of the 24 axis
//! rotations and any translation, so a beacon can be recognised in another
//! scanner's frame by the distances it has to its neighbours.

use std::collections::HashMap;

use crate::core::{Orientation, Point3D};
use crate::error::{RegistrationError, Result};

/// Distance → indices of set-mates at that distance.
pub type Fingerprint = HashMap<i32, Vec<usize>>;

/// Immutable point list with a per-beacon distance fingerprint.
///
/// Filtering or rotating produces a new set; a set is never mutated.
#[derive(Clone, Debug)]
pub struct BeaconSet {
    points: Vec<Point3D>,
    fingerprints: Vec<Fingerprint>,
}

impl BeaconSet {
    /// Build a set and its fingerprint table (O(n²) pairs).
    pub fn new(points: Vec<Point3D>) -> Self {
        let mut fingerprints: Vec<Fingerprint> = vec![HashMap::new(); points.len()];

        for left in 0..points.len() {
            for right in (left + 1)..points.len() {
                let distance = points[left].manhattan_distance(&points[right]);
                fingerprints[left].entry(distance).or_default().push(right);
                fingerprints[right].entry(distance).or_default().push(left);
            }
        }

        Self {
            points,
            fingerprints,
        }
    }

    /// Number of beacons.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the set has no beacons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Beacon positions.
    #[inline]
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// Beacon position by index.
    #[inline]
    pub fn point(&self, index: usize) -> Point3D {
        self.points[index]
    }

    /// Fingerprint of one beacon.
    #[inline]
    pub fn fingerprint(&self, index: usize) -> &Fingerprint {
        &self.fingerprints[index]
    }

    /// Set-mates of `index` at exactly `distance`.
    pub fn neighbors_at(&self, index: usize, distance: i32) -> &[usize] {
        self.fingerprints[index]
            .get(&distance)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// New set containing only the given beacons, in the given order.
    pub fn subset(&self, indices: impl IntoIterator<Item = usize>) -> BeaconSet {
        BeaconSet::new(indices.into_iter().map(|i| self.points[i]).collect())
    }

    /// New set with every beacon rotated.
    ///
    /// Distances are rotation-invariant, so fingerprints carry over unchanged.
    pub fn rotated(&self, orientation: &Orientation) -> BeaconSet {
        BeaconSet {
            points: self.points.iter().map(|p| orientation.apply(*p)).collect(),
            fingerprints: self.fingerprints.clone(),
        }
    }

    /// Number of distance co-occurrences between beacon `index` of this set
    /// and beacon `candidate` of `other`.
    ///
    /// For each distinct distance this beacon has to its set-mates, counts how
    /// many of the candidate's set-mates sit at that same distance.
    pub fn shared_distances(&self, index: usize, other: &BeaconSet, candidate: usize) -> usize {
        self.fingerprints[index]
            .keys()
            .map(|distance| other.neighbors_at(candidate, *distance).len())
            .sum()
    }

    /// Find the beacon in `other` that corresponds to beacon `index`.
    ///
    /// A candidate qualifies when it reaches `min_distance_matches` shared
    /// distances. Returns `Ok(None)` when nothing qualifies and
    /// [`RegistrationError::AmbiguousMatch`] when more than one does.
    pub fn get_match(
        &self,
        index: usize,
        other: &BeaconSet,
        min_distance_matches: usize,
    ) -> Result<Option<usize>> {
        let mut qualifying =
            (0..other.len()).filter(|&c| self.shared_distances(index, other, c) >= min_distance_matches);

        let Some(first) = qualifying.next() else {
            return Ok(None);
        };

        let extra = qualifying.count();
        if extra > 0 {
            return Err(RegistrationError::AmbiguousMatch {
                beacon: self.points[index],
                candidates: extra + 1,
            });
        }

        Ok(Some(first))
    }
}

impl From<Vec<Point3D>> for BeaconSet {
    fn from(points: Vec<Point3D>) -> Self {
        Self::new(points)
    }
}

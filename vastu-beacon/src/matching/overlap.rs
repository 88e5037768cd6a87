//! Pairwise overlap detection.
//!
//! Finds the beacons two scanners have in common without knowing the
//! transform between them, then recovers that transform.
//!
//! ## Algorithm
//!
//! 1. Fingerprint both full beacon lists.
//! 2. Match every beacon on each side against the other side and keep only
//!    mutual pairs (A picks B and B picks A).
//! 3. If every beacon on both sides is paired, stop. Otherwise shrink both
//!    sides to the paired beacons and rebuild the fingerprints: dropping the
//!    unshared beacons removes distance noise from the next round.
//! 4. With at least `min_shared_beacons` pairs, solve the rotation from the
//!    aligned lists and the translation from the first pair.

use log::debug;

use crate::core::{Point3D, Scanner};
use crate::error::{RegistrationError, Result};

use super::beacon_set::BeaconSet;
use super::config::OverlapConfig;
use super::orientation_solver::solve_orientation;
use super::registration::{recover_transform, verify_alignment};
use super::traits::OverlapMatcher;
use super::types::OverlapResult;

/// Detects overlapping scanners and relates their frames.
#[derive(Clone, Debug, Default)]
pub struct OverlapDetector {
    config: OverlapConfig,
}

impl OverlapDetector {
    /// Create a new detector.
    pub fn new(config: OverlapConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(OverlapConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &OverlapConfig {
        &self.config
    }

    /// Relate `candidate` to `reference`.
    ///
    /// Returns `Ok(None)` when the scanners share fewer than
    /// `min_shared_beacons` beacons.
    pub fn compute_overlap(
        &self,
        reference: &Scanner,
        candidate: &Scanner,
    ) -> Result<Option<OverlapResult>> {
        let result = self.compute_overlap_points(&reference.beacons, &candidate.beacons)?;
        if let Some(ref overlap) = result {
            debug!(
                "{} overlaps {} with {} beacons, transform {}",
                candidate.id,
                reference.id,
                overlap.shared_beacons(),
                overlap.transform
            );
        }
        Ok(result)
    }

    /// Relate two raw beacon lists.
    pub fn compute_overlap_points(
        &self,
        reference: &[Point3D],
        candidate: &[Point3D],
    ) -> Result<Option<OverlapResult>> {
        let min_shared = self.config.min_shared_beacons;
        if reference.len() < min_shared || candidate.len() < min_shared {
            return Ok(None);
        }

        let mut left = BeaconSet::new(reference.to_vec());
        let mut right = BeaconSet::new(candidate.to_vec());
        let limit = self.config.round_limit(left.len(), right.len());

        for round in 1..=limit {
            let pairs = self.mutual_pairs(&left, &right)?;
            debug!(
                "Overlap round {}: {} mutual pairs ({} x {} beacons)",
                round,
                pairs.len(),
                left.len(),
                right.len()
            );

            if pairs.len() == left.len() && pairs.len() == right.len() {
                return self.finish(&left, &right, &pairs, round);
            }

            // Later rounds only keep a subset of these pairs
            if pairs.len() < min_shared {
                return Ok(None);
            }

            left = left.subset(pairs.iter().map(|&(l, _)| l));
            right = right.subset(pairs.iter().map(|&(_, r)| r));
        }

        Err(RegistrationError::RefinementDiverged { rounds: limit })
    }

    /// Pairs `(l, r)` where `l` matches `r` and `r` matches `l`.
    fn mutual_pairs(&self, left: &BeaconSet, right: &BeaconSet) -> Result<Vec<(usize, usize)>> {
        let threshold = self.config.min_distance_matches;

        let forward = (0..left.len())
            .map(|l| left.get_match(l, right, threshold))
            .collect::<Result<Vec<_>>>()?;
        let backward = (0..right.len())
            .map(|r| right.get_match(r, left, threshold))
            .collect::<Result<Vec<_>>>()?;

        Ok(forward
            .iter()
            .enumerate()
            .filter_map(|(l, matched)| {
                let r = (*matched)?;
                (backward[r] == Some(l)).then_some((l, r))
            })
            .collect())
    }

    /// Recover the transform from a converged correspondence.
    fn finish(
        &self,
        left: &BeaconSet,
        right: &BeaconSet,
        pairs: &[(usize, usize)],
        rounds: usize,
    ) -> Result<Option<OverlapResult>> {
        if pairs.len() < self.config.min_shared_beacons {
            return Ok(None);
        }

        let reference_beacons: Vec<Point3D> = pairs.iter().map(|&(l, _)| left.point(l)).collect();
        let candidate_beacons: Vec<Point3D> = pairs.iter().map(|&(_, r)| right.point(r)).collect();

        let orientation = solve_orientation(&reference_beacons, &candidate_beacons)?;
        let transform = recover_transform(orientation, reference_beacons[0], candidate_beacons[0]);

        if self.config.verify_correspondences {
            verify_alignment(&transform, &reference_beacons, &candidate_beacons)?;
        }

        Ok(Some(OverlapResult {
            transform,
            reference_beacons,
            candidate_beacons,
            rounds,
        }))
    }
}

impl OverlapMatcher for OverlapDetector {
    fn match_pair(
        &self,
        reference: &Scanner,
        candidate: &Scanner,
    ) -> Result<Option<OverlapResult>> {
        self.compute_overlap(reference, candidate)
    }

    fn name(&self) -> &str {
        "distance-fingerprint"
    }
}

/// Relate `candidate` to `reference` with the default configuration.
pub fn compute_overlap(reference: &Scanner, candidate: &Scanner) -> Result<Option<OverlapResult>> {
    OverlapDetector::with_defaults().compute_overlap(reference, candidate)
}

//! Overlap detection configuration.

use serde::{Deserialize, Serialize};

/// Configuration for pairwise overlap detection.
///
/// The defaults encode the puzzle-scale assumption: two scanners overlap when
/// they share at least 12 beacons, and a true correspondence among 12 shared
/// beacons yields 11 shared pairwise distances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapConfig {
    /// Minimum number of corresponding beacons for an overlap.
    #[serde(default = "default_min_shared_beacons")]
    pub min_shared_beacons: usize,

    /// Minimum distance co-occurrences for a beacon to be declared a match.
    /// Usually `min_shared_beacons - 1`.
    #[serde(default = "default_min_distance_matches")]
    pub min_distance_matches: usize,

    /// Upper bound on refinement rounds. 0 = derive from the smaller beacon
    /// count (each non-final round removes at least one beacon).
    #[serde(default)]
    pub max_refinement_rounds: usize,

    /// Check that every matched pair maps exactly under the recovered
    /// transform before accepting an overlap.
    #[serde(default = "default_true")]
    pub verify_correspondences: bool,
}

fn default_min_shared_beacons() -> usize {
    12
}

fn default_min_distance_matches() -> usize {
    11
}

fn default_true() -> bool {
    true
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            min_shared_beacons: default_min_shared_beacons(),
            min_distance_matches: default_min_distance_matches(),
            max_refinement_rounds: 0,
            verify_correspondences: true,
        }
    }
}

impl OverlapConfig {
    /// Configuration for a different overlap threshold.
    ///
    /// Keeps the distance threshold one below the shared-beacon threshold.
    pub fn with_min_shared(min_shared_beacons: usize) -> Self {
        Self {
            min_shared_beacons,
            min_distance_matches: min_shared_beacons.saturating_sub(1),
            ..Default::default()
        }
    }

    /// Skip the per-pair verification of the recovered transform.
    pub fn unverified() -> Self {
        Self {
            verify_correspondences: false,
            ..Default::default()
        }
    }

    /// Round limit for scanners with the given beacon counts.
    pub fn round_limit(&self, reference_len: usize, candidate_len: usize) -> usize {
        if self.max_refinement_rounds > 0 {
            self.max_refinement_rounds
        } else {
            reference_len.min(candidate_len) + 1
        }
    }
}

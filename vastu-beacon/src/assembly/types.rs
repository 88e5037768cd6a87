//! Assembly output types.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{Point3D, ResolvedScanner, ScannerId, ScannerState, Transform3D};

/// Counters collected while assembling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Outer passes over the unresolved set.
    pub passes: usize,
    /// Pairwise overlap computations performed.
    pub pair_attempts: usize,
    /// Pairs skipped because they already failed.
    pub skipped_pairs: usize,
}

/// Every scanner placed in the root scanner's frame.
#[derive(Clone, Debug)]
pub struct Assembly {
    scanners: BTreeMap<ScannerId, ResolvedScanner>,
    order: Vec<ScannerId>,
    stats: AssemblyStats,
}

impl Assembly {
    /// Build from scanners in resolution order (root first).
    pub(crate) fn new(resolved: Vec<ResolvedScanner>, stats: AssemblyStats) -> Self {
        let order = resolved.iter().map(|s| s.id()).collect();
        let scanners = resolved.into_iter().map(|s| (s.id(), s)).collect();
        Self {
            scanners,
            order,
            stats,
        }
    }

    /// Scanner that defines the global frame.
    pub fn root(&self) -> Option<ScannerId> {
        self.order.first().copied()
    }

    /// Number of placed scanners.
    pub fn len(&self) -> usize {
        self.scanners.len()
    }

    /// True when nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.scanners.is_empty()
    }

    /// Placed scanner by id.
    pub fn get(&self, id: ScannerId) -> Option<&ResolvedScanner> {
        self.scanners.get(&id)
    }

    /// Placed scanners in id order.
    pub fn scanners(&self) -> impl Iterator<Item = &ResolvedScanner> {
        self.scanners.values()
    }

    /// Scanner position in the global frame.
    pub fn offset(&self, id: ScannerId) -> Option<Point3D> {
        self.get(id).map(|s| s.offset())
    }

    /// Local-to-global transform of a scanner.
    pub fn transform(&self, id: ScannerId) -> Option<Transform3D> {
        self.get(id).map(|s| *s.transform())
    }

    /// Largest Manhattan distance between any two scanner positions.
    pub fn max_scanner_distance(&self) -> i32 {
        let offsets: Vec<Point3D> = self.scanners.values().map(|s| s.offset()).collect();

        let mut max = 0;
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                max = max.max(a.manhattan_distance(b));
            }
        }
        max
    }

    /// Distinct beacon positions in the global frame.
    pub fn global_beacons(&self) -> BTreeSet<Point3D> {
        self.scanners
            .values()
            .flat_map(|s| s.global_beacons())
            .collect()
    }

    /// Number of distinct beacons.
    pub fn beacon_count(&self) -> usize {
        self.global_beacons().len()
    }

    /// Scanner ids in the order they were resolved.
    pub fn resolution_order(&self) -> &[ScannerId] {
        &self.order
    }

    /// Counters from the run that produced this assembly.
    pub fn stats(&self) -> &AssemblyStats {
        &self.stats
    }

    /// Resolved scanner states in resolution order.
    pub fn into_states(self) -> Vec<ScannerState> {
        let mut scanners = self.scanners;
        self.order
            .iter()
            .filter_map(|id| scanners.remove(id))
            .map(ScannerState::from)
            .collect()
    }
}

//! Global scanner assembly.
//!
//! Grows a resolved set outward from the root scanner. Each pass tries every
//! (resolved, unresolved) pair; a successful overlap fixes the candidate's
//! global transform by chaining through the reference:
//!
//! ```text
//! candidate.global = reference.global ∘ overlap.transform
//! ```

use std::collections::{BTreeMap, HashSet};

use log::{debug, info, warn};

use crate::config::RegistrationConfig;
use crate::core::{ResolvedScanner, Scanner, ScannerId, ScannerState, Transform3D};
use crate::error::{RegistrationError, Result};
use crate::matching::{OverlapDetector, OverlapMatcher};

use super::config::AssemblyConfig;
use super::parallel::{self, PairJob};
use super::types::{Assembly, AssemblyStats};

/// Places every scanner in the root scanner's frame.
///
/// Generic over the pairwise matcher so the resolution loop can be driven by
/// any [`OverlapMatcher`].
#[derive(Clone, Debug)]
pub struct GlobalAssembler<M: OverlapMatcher = OverlapDetector> {
    matcher: M,
    config: AssemblyConfig,
}

impl GlobalAssembler<OverlapDetector> {
    /// Create with default matching and assembly settings.
    pub fn with_defaults() -> Self {
        Self::new(OverlapDetector::with_defaults(), AssemblyConfig::default())
    }

    /// Create from a loaded registration configuration.
    pub fn from_config(config: &RegistrationConfig) -> Self {
        Self::new(
            OverlapDetector::new(config.overlap.clone()),
            config.assembly.clone(),
        )
    }
}

impl<M: OverlapMatcher> GlobalAssembler<M> {
    /// Create a new assembler.
    pub fn new(matcher: M, config: AssemblyConfig) -> Self {
        Self { matcher, config }
    }

    /// Get the pairwise matcher.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Get the configuration.
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Resolve all scanners.
    ///
    /// # Errors
    /// - [`RegistrationError::EmptyInput`], [`RegistrationError::DuplicateScanner`]
    ///   or [`RegistrationError::UnknownRoot`] for malformed input
    /// - [`RegistrationError::StalledAssembly`] when some scanners cannot be
    ///   reached from the root
    /// - any fatal matcher error
    pub fn assemble(&self, scanners: Vec<Scanner>) -> Result<Assembly> {
        self.assemble_states(scanners.into_iter().map(ScannerState::from).collect())
    }

    /// Place additional scanners into an existing assembly.
    ///
    /// Scanners already in `assembly` keep their transforms and act as
    /// references for the new ones.
    pub fn extend(&self, assembly: Assembly, scanners: Vec<Scanner>) -> Result<Assembly> {
        let mut states = assembly.into_states();
        states.extend(scanners.into_iter().map(ScannerState::from));
        self.assemble_states(states)
    }

    /// Resolve a mix of placed and unplaced scanners.
    ///
    /// When nothing is placed yet, the configured root (or the first scanner)
    /// becomes the global frame. Otherwise the placed scanners define it and
    /// a configured root must be one of them.
    pub fn assemble_states(&self, states: Vec<ScannerState>) -> Result<Assembly> {
        let mut progress = Progress::new(states, self.config.root)?;
        let max_passes = progress.total();
        let workers = self.config.effective_workers();

        info!(
            "Assembling {} scanners from {} with {} ({} worker(s))",
            progress.total(),
            progress.resolved[0].id(),
            self.matcher.name(),
            workers
        );

        while !progress.unresolved.is_empty() && progress.stats.passes < max_passes {
            progress.stats.passes += 1;
            let placed = if workers > 1 {
                self.parallel_pass(&mut progress, workers)?
            } else {
                self.sequential_pass(&mut progress)?
            };

            debug!(
                "Pass {}: placed {}, {} unresolved",
                progress.stats.passes,
                placed,
                progress.unresolved.len()
            );

            if placed == 0 {
                break;
            }
        }

        if !progress.unresolved.is_empty() {
            let error = progress.stalled();
            warn!("{}", error);
            return Err(error);
        }

        let assembly = Assembly::new(progress.resolved, progress.stats);
        info!(
            "Assembly complete: {} scanners, {} beacons, {} passes, {} pair attempts",
            assembly.len(),
            assembly.beacon_count(),
            assembly.stats().passes,
            assembly.stats().pair_attempts
        );
        Ok(assembly)
    }

    /// Try candidates against references in resolution order, including
    /// scanners placed earlier in the same pass.
    fn sequential_pass(&self, progress: &mut Progress) -> Result<usize> {
        let mut placed = 0;
        let mut index = 0;

        while index < progress.resolved.len() && !progress.unresolved.is_empty() {
            let candidates: Vec<ScannerId> = progress.unresolved.keys().copied().collect();

            for candidate_id in candidates {
                let reference = &progress.resolved[index];
                let key = (reference.id(), candidate_id);
                if self.config.skip_tried_pairs && progress.tried.contains(&key) {
                    progress.stats.skipped_pairs += 1;
                    continue;
                }
                let Some(candidate) = progress.unresolved.get(&candidate_id) else {
                    continue;
                };

                progress.stats.pair_attempts += 1;
                debug!("Matching {} against {}", candidate_id, key.0);

                match self.matcher.match_pair(reference.scanner(), candidate)? {
                    Some(overlap) => {
                        progress.place(index, candidate_id, &overlap.transform);
                        placed += 1;
                    }
                    None => {
                        progress.tried.insert(key);
                    }
                }
            }

            index += 1;
        }

        Ok(placed)
    }

    /// Match all open pairs concurrently, then place each candidate through
    /// the earliest-resolved reference that overlaps it.
    fn parallel_pass(&self, progress: &mut Progress, workers: usize) -> Result<usize> {
        let mut jobs = Vec::new();
        for (reference_index, reference) in progress.resolved.iter().enumerate() {
            for (candidate_id, candidate) in &progress.unresolved {
                if self.config.skip_tried_pairs
                    && progress.tried.contains(&(reference.id(), *candidate_id))
                {
                    progress.stats.skipped_pairs += 1;
                    continue;
                }
                jobs.push(PairJob {
                    reference_index,
                    reference,
                    candidate,
                });
            }
        }
        progress.stats.pair_attempts += jobs.len();

        let outcomes = parallel::run_pass(&self.matcher, jobs, workers)?;

        let mut placements: BTreeMap<ScannerId, (usize, Transform3D)> = BTreeMap::new();
        let mut failed = Vec::new();
        for outcome in outcomes {
            let job = outcome.job;
            match outcome.overlap {
                Some(overlap) => {
                    let entry = placements
                        .entry(job.candidate.id)
                        .or_insert((job.reference_index, overlap.transform));
                    if job.reference_index < entry.0 {
                        *entry = (job.reference_index, overlap.transform);
                    }
                }
                None => failed.push((job.reference.id(), job.candidate.id)),
            }
        }

        progress.tried.extend(failed);

        let placed = placements.len();
        for (candidate_id, (reference_index, local)) in placements {
            progress.place(reference_index, candidate_id, &local);
        }
        Ok(placed)
    }
}

/// Working state of one assembly run.
///
/// Only the coordinator mutates it: scanners move from `unresolved` to
/// `resolved`, never back.
struct Progress {
    unresolved: BTreeMap<ScannerId, Scanner>,
    resolved: Vec<ResolvedScanner>,
    tried: HashSet<(ScannerId, ScannerId)>,
    stats: AssemblyStats,
}

impl Progress {
    fn new(states: Vec<ScannerState>, root: Option<ScannerId>) -> Result<Self> {
        let Some(first) = states.first().map(ScannerState::id) else {
            return Err(RegistrationError::EmptyInput);
        };

        let mut seen = HashSet::new();
        let mut unresolved = BTreeMap::new();
        let mut resolved = Vec::new();
        for state in states {
            let id = state.id();
            if !seen.insert(id) {
                return Err(RegistrationError::DuplicateScanner(id));
            }
            match state {
                ScannerState::Unresolved(scanner) => {
                    unresolved.insert(id, scanner);
                }
                ScannerState::Resolved(placed) => resolved.push(placed),
            }
        }

        if resolved.is_empty() {
            let root = root.unwrap_or(first);
            let scanner = unresolved
                .remove(&root)
                .ok_or(RegistrationError::UnknownRoot(root))?;
            resolved.push(scanner.resolve(Transform3D::IDENTITY));
        } else if let Some(root) = root
            && !resolved.iter().any(|s| s.id() == root)
        {
            return Err(RegistrationError::UnknownRoot(root));
        }

        Ok(Self {
            unresolved,
            resolved,
            tried: HashSet::new(),
            stats: AssemblyStats::default(),
        })
    }

    fn total(&self) -> usize {
        self.resolved.len() + self.unresolved.len()
    }

    /// Move `candidate_id` to the resolved set through `reference_index`.
    fn place(&mut self, reference_index: usize, candidate_id: ScannerId, local: &Transform3D) {
        let Some(scanner) = self.unresolved.remove(&candidate_id) else {
            return;
        };
        let reference = &self.resolved[reference_index];
        let global = reference.transform().compose(local);
        info!(
            "Resolved {} via {} at {}",
            candidate_id,
            reference.id(),
            global.offset
        );
        self.resolved.push(scanner.resolve(global));
    }

    fn stalled(&self) -> RegistrationError {
        RegistrationError::StalledAssembly {
            resolved: self.resolved.iter().map(|s| s.id()).collect(),
            unresolved: self.unresolved.keys().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Point3D};
    use crate::matching::OverlapResult;
    use std::sync::Mutex;

    /// Matcher driven by a fixed table of (reference, candidate) → transform.
    ///
    /// The table is symmetric: the reverse pair gets the inverse transform.
    struct TableMatcher {
        edges: Vec<(u32, u32, Transform3D)>,
        calls: Mutex<Vec<(u32, u32)>>,
    }

    impl TableMatcher {
        fn new(edges: Vec<(u32, u32, Transform3D)>) -> Self {
            Self {
                edges,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(u32, u32)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl OverlapMatcher for TableMatcher {
        fn match_pair(
            &self,
            reference: &Scanner,
            candidate: &Scanner,
        ) -> Result<Option<OverlapResult>> {
            let (r, c) = (reference.id.value(), candidate.id.value());
            self.calls.lock().unwrap().push((r, c));

            let transform = self.edges.iter().find_map(|&(a, b, t)| {
                if (a, b) == (r, c) {
                    Some(t)
                } else if (a, b) == (c, r) {
                    Some(t.inverse())
                } else {
                    None
                }
            });

            Ok(transform.map(|transform| OverlapResult {
                transform,
                reference_beacons: Vec::new(),
                candidate_beacons: Vec::new(),
                rounds: 1,
            }))
        }

        fn name(&self) -> &str {
            "table"
        }
    }

    fn scanners(ids: &[u32]) -> Vec<Scanner> {
        ids.iter()
            .map(|&id| Scanner::new(id, vec![Point3D::new(id as i32, 0, 0)]))
            .collect()
    }

    /// Chain 0 - 1 - 2 - 3 with a different rotation on every edge.
    fn chain() -> Vec<(u32, u32, Transform3D)> {
        let all = Orientation::all();
        vec![
            (0, 1, Transform3D::new(all[3], Point3D::new(100, 0, 0))),
            (1, 2, Transform3D::new(all[10], Point3D::new(0, 50, 0))),
            (2, 3, Transform3D::new(all[17], Point3D::new(0, 0, -20))),
        ]
    }

    fn expected_chain_transforms() -> Vec<Transform3D> {
        let edges = chain();
        let mut global = vec![Transform3D::IDENTITY];
        for (_, _, local) in &edges {
            let last = *global.last().unwrap();
            global.push(last.compose(local));
        }
        global
    }

    #[test]
    fn test_chained_transforms() {
        let assembler = GlobalAssembler::new(TableMatcher::new(chain()), AssemblyConfig::default());
        let assembly = assembler.assemble(scanners(&[0, 1, 2, 3])).unwrap();

        let expected = expected_chain_transforms();
        for (id, transform) in expected.iter().enumerate() {
            assert_eq!(assembly.transform(ScannerId(id as u32)), Some(*transform));
        }
        assert_eq!(assembly.len(), 4);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = GlobalAssembler::new(TableMatcher::new(chain()), AssemblyConfig::default())
            .assemble(scanners(&[3, 1, 0, 2]))
            .unwrap();
        let parallel = GlobalAssembler::new(
            TableMatcher::new(chain()),
            AssemblyConfig {
                worker_threads: 3,
                ..Default::default()
            },
        )
        .assemble(scanners(&[3, 1, 0, 2]))
        .unwrap();

        for id in 0..4 {
            let id = ScannerId(id);
            assert_eq!(sequential.transform(id), parallel.transform(id));
        }
        assert_eq!(sequential.global_beacons(), parallel.global_beacons());
    }

    #[test]
    fn test_root_defaults_to_first_scanner() {
        let assembler = GlobalAssembler::new(TableMatcher::new(chain()), AssemblyConfig::default());
        let assembly = assembler.assemble(scanners(&[2, 0, 1, 3])).unwrap();

        assert_eq!(assembly.root(), Some(ScannerId(2)));
        assert_eq!(assembly.transform(ScannerId(2)), Some(Transform3D::IDENTITY));

        // Scanner 0 seen from 2 is the inverse of 2 seen from 0
        let expected = expected_chain_transforms();
        assert_eq!(
            assembly.transform(ScannerId(0)),
            Some(expected[2].inverse())
        );
    }

    #[test]
    fn test_configured_root() {
        let assembler = GlobalAssembler::new(
            TableMatcher::new(chain()),
            AssemblyConfig::default().with_root(1),
        );
        let assembly = assembler.assemble(scanners(&[0, 1, 2, 3])).unwrap();
        assert_eq!(assembly.root(), Some(ScannerId(1)));
        assert_eq!(assembly.offset(ScannerId(1)), Some(Point3D::ZERO));
    }

    #[test]
    fn test_disconnected_input_stalls() {
        let edges = vec![(0, 1, Transform3D::from_offset(Point3D::new(1, 2, 3)))];
        let assembler = GlobalAssembler::new(TableMatcher::new(edges), AssemblyConfig::default());

        let err = assembler.assemble(scanners(&[0, 1, 5, 6])).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::StalledAssembly {
                resolved: vec![ScannerId(0), ScannerId(1)],
                unresolved: vec![ScannerId(5), ScannerId(6)],
            }
        );
    }

    #[test]
    fn test_failed_pairs_not_retried() {
        // 3 only overlaps 2, which is only reachable through 1
        let matcher = TableMatcher::new(chain());
        let assembler = GlobalAssembler::new(matcher, AssemblyConfig::default());
        let assembly = assembler.assemble(scanners(&[0, 1, 2, 3])).unwrap();

        let calls = assembler.matcher().calls();
        let mut unique = calls.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(calls.len(), unique.len());
        assert_eq!(assembly.stats().pair_attempts, calls.len());
    }

    #[test]
    fn test_parallel_skips_failed_pairs_across_passes() {
        let assembler = GlobalAssembler::new(
            TableMatcher::new(chain()),
            AssemblyConfig {
                worker_threads: 2,
                ..Default::default()
            },
        );
        let assembly = assembler.assemble(scanners(&[0, 1, 2, 3])).unwrap();

        // One new scanner per pass along the chain
        assert_eq!(assembly.stats().passes, 3);
        assert!(assembly.stats().skipped_pairs > 0);
        assert_eq!(
            assembly.resolution_order(),
            &[ScannerId(0), ScannerId(1), ScannerId(2), ScannerId(3)]
        );
    }

    #[test]
    fn test_input_validation() {
        let assembler = GlobalAssembler::new(TableMatcher::new(chain()), AssemblyConfig::default());
        assert_eq!(
            assembler.assemble(Vec::new()).unwrap_err(),
            RegistrationError::EmptyInput
        );
        assert_eq!(
            assembler.assemble(scanners(&[0, 1, 0])).unwrap_err(),
            RegistrationError::DuplicateScanner(ScannerId(0))
        );

        let rooted = GlobalAssembler::new(
            TableMatcher::new(chain()),
            AssemblyConfig::default().with_root(42),
        );
        assert_eq!(
            rooted.assemble(scanners(&[0, 1])).unwrap_err(),
            RegistrationError::UnknownRoot(ScannerId(42))
        );
    }

    #[test]
    fn test_single_scanner() {
        let assembler = GlobalAssembler::new(TableMatcher::new(Vec::new()), AssemblyConfig::default());
        let assembly = assembler.assemble(scanners(&[7])).unwrap();
        assert_eq!(assembly.len(), 1);
        assert_eq!(assembly.stats().passes, 0);
        assert_eq!(assembly.max_scanner_distance(), 0);
    }

    #[test]
    fn test_extend_existing_assembly() {
        let assembler = GlobalAssembler::new(TableMatcher::new(chain()), AssemblyConfig::default());
        let partial = assembler.assemble(scanners(&[0, 1])).unwrap();
        let full = assembler.extend(partial, scanners(&[2, 3])).unwrap();

        let expected = expected_chain_transforms();
        assert_eq!(full.transform(ScannerId(3)), Some(expected[3]));
        assert_eq!(full.root(), Some(ScannerId(0)));
    }

    #[test]
    fn test_matcher_error_aborts() {
        struct Failing;
        impl OverlapMatcher for Failing {
            fn match_pair(&self, _: &Scanner, _: &Scanner) -> Result<Option<OverlapResult>> {
                Err(RegistrationError::RefinementDiverged { rounds: 3 })
            }
            fn name(&self) -> &str {
                "failing"
            }
        }

        let assembler = GlobalAssembler::new(Failing, AssemblyConfig::default());
        assert_eq!(
            assembler.assemble(scanners(&[0, 1])).unwrap_err(),
            RegistrationError::RefinementDiverged { rounds: 3 }
        );
    }
}

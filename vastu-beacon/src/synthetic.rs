//! Seeded synthetic scenes with known ground truth.
//!
//! Scanners sit along a chain. Neighbouring scanners share a cluster of
//! beacons placed between them, and every scanner also sees a few beacons
//! nobody else does. Each scanner gets a random orientation (scanner 0 is
//! the identity at the origin) and reports its beacons in shuffled order in
//! its own frame.
//!
//! ```text
//!   S0 ──shared── S1 ──shared── S2 ──shared── S3
//!   +private      +private      +private      +private
//! ```
//!
//! Used by integration tests and benches.

use std::collections::BTreeSet;

use rand::prelude::*;

use crate::core::{Orientation, Point3D, Scanner, ScannerId, Transform3D};

/// Scene generation parameters.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Number of scanners in the chain.
    pub scanner_count: usize,
    /// Beacons shared by each pair of neighbouring scanners.
    pub shared_beacons: usize,
    /// Beacons seen only by one scanner.
    pub private_beacons: usize,
    /// Distance between neighbouring scanners along x.
    pub spacing: i32,
    /// Half-width of the cube beacons are scattered in.
    pub spread: i32,
    /// RNG seed.
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scanner_count: 5,
            shared_beacons: 12,
            private_beacons: 8,
            spacing: 1200,
            spread: 500,
            seed: 42,
        }
    }
}

/// A generated scene and its ground truth.
#[derive(Clone, Debug)]
pub struct SyntheticScene {
    /// Local-frame reports; index equals scanner id.
    pub scanners: Vec<Scanner>,
    /// True local-to-global transform of each scanner.
    pub transforms: Vec<Transform3D>,
    /// Every distinct beacon in the global frame.
    pub beacons: BTreeSet<Point3D>,
}

impl SyntheticScene {
    /// Generate a scene.
    pub fn generate(config: &SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let orientations = Orientation::all();
        let jitter = config.spread / 4;

        let mut transforms = Vec::with_capacity(config.scanner_count);
        for i in 0..config.scanner_count {
            if i == 0 {
                transforms.push(Transform3D::IDENTITY);
                continue;
            }
            let offset = Point3D::new(
                i as i32 * config.spacing + rng.random_range(-jitter..=jitter),
                rng.random_range(-jitter..=jitter),
                rng.random_range(-jitter..=jitter),
            );
            let orientation = orientations[rng.random_range(0..orientations.len())];
            transforms.push(Transform3D::new(orientation, offset));
        }

        let mut beacons = BTreeSet::new();
        let mut visible: Vec<Vec<Point3D>> = vec![Vec::new(); config.scanner_count];

        for i in 0..config.scanner_count.saturating_sub(1) {
            let center = midpoint(transforms[i].offset, transforms[i + 1].offset);
            for _ in 0..config.shared_beacons {
                let beacon = scatter(&mut rng, &mut beacons, center, config.spread);
                visible[i].push(beacon);
                visible[i + 1].push(beacon);
            }
        }

        for (i, seen) in visible.iter_mut().enumerate() {
            for _ in 0..config.private_beacons {
                seen.push(scatter(
                    &mut rng,
                    &mut beacons,
                    transforms[i].offset,
                    config.spread,
                ));
            }
        }

        let scanners = visible
            .into_iter()
            .zip(&transforms)
            .enumerate()
            .map(|(id, (mut seen, transform))| {
                seen.shuffle(&mut rng);
                let local = seen.into_iter().map(|b| transform.inverse_apply(b)).collect();
                Scanner::new(id as u32, local)
            })
            .collect();

        Self {
            scanners,
            transforms,
            beacons,
        }
    }

    /// True global position of a scanner.
    pub fn offset(&self, id: ScannerId) -> Option<Point3D> {
        self.transforms.get(id.value() as usize).map(|t| t.offset)
    }

    /// Largest true Manhattan distance between two scanners.
    pub fn max_scanner_distance(&self) -> i32 {
        let mut max = 0;
        for (i, a) in self.transforms.iter().enumerate() {
            for b in &self.transforms[i + 1..] {
                max = max.max(a.offset.manhattan_distance(&b.offset));
            }
        }
        max
    }

    /// All scanners except `id`.
    pub fn without(&self, id: ScannerId) -> Vec<Scanner> {
        self.scanners
            .iter()
            .filter(|s| s.id != id)
            .cloned()
            .collect()
    }
}

fn midpoint(a: Point3D, b: Point3D) -> Point3D {
    Point3D::new((a.x + b.x) / 2, (a.y + b.y) / 2, (a.z + b.z) / 2)
}

/// New beacon near `center` that does not collide with an existing one.
fn scatter(
    rng: &mut StdRng,
    taken: &mut BTreeSet<Point3D>,
    center: Point3D,
    spread: i32,
) -> Point3D {
    loop {
        let beacon = center
            + Point3D::new(
                rng.random_range(-spread..=spread),
                rng.random_range(-spread..=spread),
                rng.random_range(-spread..=spread),
            );
        if taken.insert(beacon) {
            return beacon;
        }
    }
}

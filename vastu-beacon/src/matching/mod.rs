//! Pairwise scanner matching.
//!
//! Decides whether two scanners observe a common set of beacons and, if so,
//! recovers the rigid transform relating their frames.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      OVERLAP DETECTION                            │
//! │                                                                   │
//! │  Reference beacons        Candidate beacons                       │
//! │       │                          │                                │
//! │       ▼                          ▼                                │
//! │  ┌───────────┐             ┌───────────┐                          │
//! │  │ BeaconSet │             │ BeaconSet │   Manhattan fingerprints │
//! │  └───────────┘             └───────────┘                          │
//! │       └──────────┬───────────────┘                                │
//! │                  ▼                                                │
//! │         ┌─────────────────┐                                       │
//! │         │  Mutual pairs   │◀──┐  shrink to paired beacons         │
//! │         └─────────────────┘   │  until nothing changes            │
//! │                  │────────────┘                                   │
//! │                  ▼                                                │
//! │  ┌───────────────────┐    ┌──────────────────────┐                │
//! │  │ solve_orientation │ ──▶│ recover_transform    │                │
//! │  └───────────────────┘    └──────────────────────┘                │
//! │                                     │                             │
//! │                                     ▼                             │
//! │                               OverlapResult                       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`BeaconSet`] | Beacons plus per-beacon distance fingerprints |
//! | [`OverlapDetector`] | Iterative correspondence and transform recovery |
//! | [`solve_orientation`] | Rotation from matched first differences |
//! | [`recover_transform`] | Translation from one matched pair |
//! | [`OverlapMatcher`] | Seam used by the global assembler |
//!
//! ## Why Manhattan distance
//!
//! Axis-aligned rotations permute and negate coordinates, so the L1 distance
//! between two beacons is the same in every scanner frame. Distances are
//! exact integers and can be hashed directly.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vastu_beacon::matching::{OverlapConfig, OverlapDetector};
//!
//! let detector = OverlapDetector::new(OverlapConfig::default());
//! if let Some(overlap) = detector.compute_overlap(&scanner_0, &scanner_1)? {
//!     println!("scanner 1 sits at {} seen from scanner 0", overlap.offset());
//! }
//! ```

mod beacon_set;
mod config;
mod orientation_solver;
mod overlap;
mod registration;
mod traits;
mod types;

pub use beacon_set::{BeaconSet, Fingerprint};
pub use config::OverlapConfig;
pub use orientation_solver::solve_orientation;
pub use overlap::{OverlapDetector, compute_overlap};
pub use registration::{recover_transform, recover_translation, register_beacons, verify_alignment};
pub use traits::OverlapMatcher;
pub use types::OverlapResult;

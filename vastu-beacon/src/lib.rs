//! # VastuBeacon
//!
//! 3D scanner registration from unlabelled beacon observations.
//!
//! ## Overview
//!
//! Each scanner reports the beacons it can see as integer positions in its
//! own frame. Frames differ by an unknown translation and one of the 24
//! axis-aligned rotations. VastuBeacon places every scanner in a single
//! global frame (the root scanner's) and merges their beacon maps.
//!
//! ## Features
//!
//! - **Distance Fingerprints**: Rotation-invariant Manhattan distance tables
//!   per beacon
//! - **Overlap Detection**: Iterative mutual matching down to the shared beacons
//! - **Orientation Recovery**: Rotation read directly from matched differences
//! - **Global Assembly**: Transform chaining outward from the root, optionally
//!   with parallel pairwise matching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_beacon::{GlobalAssembler, Scanner};
//!
//! let scanners = vec![
//!     Scanner::from_coords(0, &scanner_0_coords),
//!     Scanner::from_coords(1, &scanner_1_coords),
//! ];
//!
//! let assembly = GlobalAssembler::with_defaults().assemble(scanners)?;
//! println!("{} beacons", assembly.beacon_count());
//! println!("max scanner distance {}", assembly.max_scanner_distance());
//! ```
//!
//! ## Coordinate System
//!
//! Right-handed integer frames. A transform maps a point `p` in a scanner's
//! local frame to `R·p + t` in the target frame, where `t` is the scanner's
//! position in that frame.

#![warn(missing_docs)]

// Geometry and scanner records
pub mod core;

// Error types
pub mod error;

// Pairwise overlap detection and transform recovery
pub mod matching;

// Global resolution of all scanners
pub mod assembly;

// YAML configuration
pub mod config;

// Seeded scenes with known ground truth
pub mod synthetic;

// Re-export commonly used types
pub use core::{
    Orientation, Point3D, ResolvedScanner, Scanner, ScannerId, ScannerState, Transform3D,
};

pub use error::{RegistrationError, Result};

pub use matching::{BeaconSet, OverlapConfig, OverlapDetector, OverlapMatcher, OverlapResult};

pub use assembly::{Assembly, AssemblyConfig, AssemblyStats, GlobalAssembler};

pub use config::{ConfigLoadError, RegistrationConfig};

//! Core types for the VastuBeacon library.
//!
//! Every scanner reports beacons in its own integer frame. Frames differ by
//! one of 24 axis-aligned rotations and an integer translation, so all
//! geometry here is exact integer arithmetic.
//!
//! ## Type Categories
//!
//! ### Geometry
//! - [`Point3D`]: Integer 3-vector (beacon positions, offsets, differences)
//! - [`Orientation`]: One of the 24 signed-permutation rotations
//! - [`Transform3D`]: Rotation followed by translation, composable
//!
//! ### Scanners
//! - [`Scanner`]: Local-frame beacon report with a [`ScannerId`]
//! - [`ResolvedScanner`]: Scanner with its fixed global transform
//! - [`ScannerState`]: Unresolved / Resolved lifecycle
//!
//! ## Example
//!
//! ```rust
//! use vastu_beacon::core::{Orientation, Point3D, Scanner, Transform3D};
//!
//! let scanner = Scanner::from_coords(1, &[[1, 2, 3], [4, 5, 6]]);
//! let placement = Transform3D::new(Orientation::IDENTITY, Point3D::new(10, 0, 0));
//! let resolved = scanner.resolve(placement);
//!
//! let global: Vec<_> = resolved.global_beacons().collect();
//! assert_eq!(global[0], Point3D::new(11, 2, 3));
//! ```

mod orientation;
mod point;
mod scanner;
mod transform;

pub use orientation::Orientation;
pub use point::Point3D;
pub use scanner::{ResolvedScanner, Scanner, ScannerId, ScannerState};
pub use transform::Transform3D;

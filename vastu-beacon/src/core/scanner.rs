//! Scanner records and their resolution lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::Point3D;
use super::transform::Transform3D;

/// Unique scanner identifier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ScannerId(pub u32);

impl ScannerId {
    /// Create a new scanner ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ScannerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ScannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scanner {}", self.0)
    }
}

/// A scanner report: beacon positions in the scanner's own frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scanner {
    /// Scanner identifier.
    pub id: ScannerId,
    /// Beacons in local coordinates, in report order.
    pub beacons: Vec<Point3D>,
}

impl Scanner {
    /// Create a new scanner record.
    pub fn new(id: impl Into<ScannerId>, beacons: Vec<Point3D>) -> Self {
        Self {
            id: id.into(),
            beacons,
        }
    }

    /// Create from raw coordinate triples.
    pub fn from_coords(id: impl Into<ScannerId>, coords: &[[i32; 3]]) -> Self {
        Self::new(id, coords.iter().copied().map(Point3D::from).collect())
    }

    /// Number of beacons reported.
    #[inline]
    pub fn len(&self) -> usize {
        self.beacons.len()
    }

    /// True if the scanner reported no beacons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beacons.is_empty()
    }

    /// Fix this scanner's placement in the global frame.
    ///
    /// Consumes the unresolved record, so a scanner resolves at most once.
    pub fn resolve(self, transform: Transform3D) -> ResolvedScanner {
        ResolvedScanner {
            scanner: self,
            transform,
        }
    }

    /// Same scanner with every beacon mapped through `transform`.
    pub fn transformed(&self, transform: &Transform3D) -> Scanner {
        Scanner {
            id: self.id,
            beacons: self.beacons.iter().map(|b| transform.apply(*b)).collect(),
        }
    }
}

/// A scanner with a known placement in the global frame.
///
/// The transform is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedScanner {
    scanner: Scanner,
    transform: Transform3D,
}

impl ResolvedScanner {
    /// Scanner ID.
    #[inline]
    pub fn id(&self) -> ScannerId {
        self.scanner.id
    }

    /// Original local-frame report.
    #[inline]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Local-to-global transform.
    #[inline]
    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    /// Scanner position in the global frame.
    #[inline]
    pub fn offset(&self) -> Point3D {
        self.transform.offset
    }

    /// Beacons in global coordinates.
    pub fn global_beacons(&self) -> impl Iterator<Item = Point3D> + '_ {
        self.scanner.beacons.iter().map(|b| self.transform.apply(*b))
    }
}

/// Resolution state of a scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScannerState {
    /// Placement not yet known.
    Unresolved(Scanner),
    /// Placement known; immutable from here on.
    Resolved(ResolvedScanner),
}

impl ScannerState {
    /// Scanner ID.
    pub fn id(&self) -> ScannerId {
        match self {
            ScannerState::Unresolved(scanner) => scanner.id,
            ScannerState::Resolved(resolved) => resolved.id(),
        }
    }

    /// Local-frame report.
    pub fn scanner(&self) -> &Scanner {
        match self {
            ScannerState::Unresolved(scanner) => scanner,
            ScannerState::Resolved(resolved) => resolved.scanner(),
        }
    }

    /// Is the placement known?
    pub fn is_resolved(&self) -> bool {
        matches!(self, ScannerState::Resolved(_))
    }

    /// Global transform, if resolved.
    pub fn transform(&self) -> Option<&Transform3D> {
        match self {
            ScannerState::Unresolved(_) => None,
            ScannerState::Resolved(resolved) => Some(resolved.transform()),
        }
    }

    /// Resolve with a global transform.
    ///
    /// A scanner that is already resolved keeps its original transform and
    /// is returned unchanged in `Err`.
    pub fn resolve(self, transform: Transform3D) -> Result<ResolvedScanner, ScannerState> {
        match self {
            ScannerState::Unresolved(scanner) => Ok(scanner.resolve(transform)),
            resolved @ ScannerState::Resolved(_) => Err(resolved),
        }
    }
}

impl From<Scanner> for ScannerState {
    fn from(scanner: Scanner) -> Self {
        ScannerState::Unresolved(scanner)
    }
}

impl From<ResolvedScanner> for ScannerState {
    fn from(resolved: ResolvedScanner) -> Self {
        ScannerState::Resolved(resolved)
    }
}

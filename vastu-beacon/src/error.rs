//! Error types for VastuBeacon.
//!
//! Failing to find an overlap is not an error: overlap detection returns
//! `Ok(None)` for that. Everything here aborts the registration run.

use crate::core::{Point3D, ScannerId};

/// Result type alias
pub type Result<T> = std::result::Result<T, RegistrationError>;

/// Registration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// More than one beacon in the other set matched the query beacon's
    /// distance fingerprint.
    #[error("Ambiguous match for beacon {beacon}: {candidates} candidates qualify")]
    AmbiguousMatch {
        /// Query beacon position (in its own frame)
        beacon: Point3D,
        /// Number of qualifying candidates
        candidates: usize,
    },

    /// Orientation recovery needs at least two matched pairs in equal-length lists.
    #[error("Orientation needs at least 2 aligned pairs, got {reference} and {candidate}")]
    InsufficientPairs {
        /// Reference list length
        reference: usize,
        /// Candidate list length
        candidate: usize,
    },

    /// A reference axis did not match exactly one candidate axis.
    #[error("Axis {axis} matches {candidates} candidate axes (expected exactly 1)")]
    AmbiguousOrientationAxis {
        /// Reference axis index (0 = x, 1 = y, 2 = z)
        axis: usize,
        /// Number of candidate axes with matching magnitudes
        candidates: usize,
    },

    /// The sign relating two axes flips between samples.
    #[error("Inconsistent sign between reference axis {axis} and candidate axis {source_axis}")]
    InconsistentSign {
        /// Reference axis index
        axis: usize,
        /// Candidate axis index
        source_axis: usize,
    },

    /// Two or more axes have only zero differences (collinear beacons).
    #[error("Axis {axis} is degenerate: matched beacons vary along one axis at most")]
    DegenerateAxis {
        /// Reference axis index
        axis: usize,
    },

    /// The recovered axis mapping is not a proper rotation.
    #[error("Recovered axis mapping is not a proper rotation")]
    ImproperRotation,

    /// A matched pair does not land on its partner under the recovered transform.
    #[error("Matched beacon {candidate} maps to {mapped}, expected {reference}")]
    MisalignedCorrespondence {
        /// Reference-frame beacon
        reference: Point3D,
        /// Candidate-frame beacon
        candidate: Point3D,
        /// Candidate beacon after applying the recovered transform
        mapped: Point3D,
    },

    /// Correspondence refinement did not reach a fixed point.
    #[error("Correspondence refinement did not converge after {rounds} rounds")]
    RefinementDiverged {
        /// Rounds executed
        rounds: usize,
    },

    /// A full pass resolved nothing while scanners remain unresolved.
    #[error("Assembly stalled: {} resolved, unresolved {:?}", .resolved.len(), .unresolved)]
    StalledAssembly {
        /// Scanners resolved so far
        resolved: Vec<ScannerId>,
        /// Scanners that could not be placed
        unresolved: Vec<ScannerId>,
    },

    /// No scanners were supplied.
    #[error("No scanners to assemble")]
    EmptyInput,

    /// Two scanners share an ID.
    #[error("Duplicate {0}")]
    DuplicateScanner(ScannerId),

    /// The configured root scanner is not in the input.
    #[error("Root {0} not found in input")]
    UnknownRoot(ScannerId),

    /// A worker thread panicked during a parallel pass.
    #[error("Worker thread failed: {0}")]
    WorkerFailed(String),
}

impl RegistrationError {
    /// Get a short error code for logging/metrics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AmbiguousMatch { .. } => "AMBIGUOUS_MATCH",
            Self::InsufficientPairs { .. } => "INSUFFICIENT_PAIRS",
            Self::AmbiguousOrientationAxis { .. } => "AMBIGUOUS_ORIENTATION_AXIS",
            Self::InconsistentSign { .. } => "INCONSISTENT_SIGN",
            Self::DegenerateAxis { .. } => "DEGENERATE_AXIS",
            Self::ImproperRotation => "IMPROPER_ROTATION",
            Self::MisalignedCorrespondence { .. } => "MISALIGNED_CORRESPONDENCE",
            Self::RefinementDiverged { .. } => "REFINEMENT_DIVERGED",
            Self::StalledAssembly { .. } => "STALLED_ASSEMBLY",
            Self::EmptyInput => "EMPTY_INPUT",
            Self::DuplicateScanner(_) => "DUPLICATE_SCANNER",
            Self::UnknownRoot(_) => "UNKNOWN_ROOT",
            Self::WorkerFailed(_) => "WORKER_FAILED",
        }
    }

    /// Errors raised while recovering an orientation from matched pairs.
    pub fn is_orientation_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientPairs { .. }
                | Self::AmbiguousOrientationAxis { .. }
                | Self::InconsistentSign { .. }
                | Self::DegenerateAxis { .. }
                | Self::ImproperRotation
        )
    }
}

//! Traits for pairwise scanner registration.

use crate::core::Scanner;
use crate::error::Result;

use super::OverlapResult;

/// Trait for algorithms that relate two scanners' frames.
///
/// The assembler only needs this seam, so alternative matchers (or test
/// doubles) can drive the global resolution loop.
///
/// # Example
///
/// ```ignore
/// use vastu_beacon::matching::{OverlapDetector, OverlapMatcher};
///
/// fn place<M: OverlapMatcher>(matcher: &M, a: &Scanner, b: &Scanner) -> Option<Point3D> {
///     matcher.match_pair(a, b).ok().flatten().map(|r| r.offset())
/// }
/// ```
pub trait OverlapMatcher: Send + Sync {
    /// Relate `candidate` to `reference`.
    ///
    /// # Returns
    /// * `Ok(Some(result))` - the scanners overlap; `result.transform` maps
    ///   candidate-local points into the reference frame
    /// * `Ok(None)` - not enough common beacons
    /// * `Err(_)` - matching assumptions broken; abort the run
    fn match_pair(&self, reference: &Scanner, candidate: &Scanner)
    -> Result<Option<OverlapResult>>;

    /// Get the name of this matcher for logging/debugging
    fn name(&self) -> &str;
}

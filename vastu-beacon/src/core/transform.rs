//! Rigid transform: discrete rotation followed by integer translation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use super::orientation::Orientation;
use super::point::Point3D;

/// Maps points from a scanner's local frame into a parent frame.
///
/// `apply(p) = orientation · p + offset`. The offset is also the position of
/// the scanner itself in the parent frame.
///
/// # Composition
///
/// ```
/// use vastu_beacon::core::{Orientation, Point3D, Transform3D};
///
/// let parent = Transform3D::from_offset(Point3D::new(10, 0, 0));
/// let child = Transform3D::from_offset(Point3D::new(0, 5, 0));
/// let chained = parent.compose(&child); // child first, then parent
/// assert_eq!(chained.offset, Point3D::new(10, 5, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform3D {
    /// Rotation applied to local points.
    pub orientation: Orientation,
    /// Translation added after rotation.
    pub offset: Point3D,
}

impl Transform3D {
    /// Identity transform (the root scanner's placement).
    pub const IDENTITY: Transform3D = Transform3D {
        orientation: Orientation::IDENTITY,
        offset: Point3D::ZERO,
    };

    /// Create a new transform.
    #[inline]
    pub fn new(orientation: Orientation, offset: Point3D) -> Self {
        Self {
            orientation,
            offset,
        }
    }

    /// Pure translation.
    #[inline]
    pub fn from_offset(offset: Point3D) -> Self {
        Self::new(Orientation::IDENTITY, offset)
    }

    /// Pure rotation.
    #[inline]
    pub fn from_orientation(orientation: Orientation) -> Self {
        Self::new(orientation, Point3D::ZERO)
    }

    /// Transform a point from the local frame into the parent frame.
    #[inline]
    pub fn apply(&self, point: Point3D) -> Point3D {
        self.orientation.apply(point) + self.offset
    }

    /// Transform a point from the parent frame back into the local frame.
    #[inline]
    pub fn inverse_apply(&self, point: Point3D) -> Point3D {
        self.orientation.inverse().apply(point - self.offset)
    }

    /// Chain transforms: the result applies `child` first, then `self`.
    ///
    /// If `child` maps scanner C into scanner R's frame and `self` maps R into
    /// the global frame, the result maps C into the global frame.
    #[inline]
    pub fn compose(&self, child: &Transform3D) -> Transform3D {
        Transform3D {
            orientation: self.orientation.compose(&child.orientation),
            offset: self.apply(child.offset),
        }
    }

    /// Inverse transform.
    #[inline]
    pub fn inverse(&self) -> Transform3D {
        let orientation = self.orientation.inverse();
        Transform3D {
            orientation,
            offset: -orientation.apply(self.offset),
        }
    }
}

impl Mul for Transform3D {
    type Output = Self;

    /// Compose two transforms (same as `compose`).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl fmt::Display for Transform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.orientation, self.offset)
    }
}

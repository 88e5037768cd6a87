//! Integer 3D point type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Beacon or scanner position in integer scanner units.
///
/// Ordering is lexicographic on (x, y, z), which keeps sets of global
/// beacons in a stable order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Point3D {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate
    pub z: i32,
}

impl Point3D {
    /// The origin.
    pub const ZERO: Point3D = Point3D { x: 0, y: 0, z: 0 };

    /// Unit vector along X.
    pub const UNIT_X: Point3D = Point3D { x: 1, y: 0, z: 0 };

    /// Unit vector along Y.
    pub const UNIT_Y: Point3D = Point3D { x: 0, y: 1, z: 0 };

    /// Unit vector along Z.
    pub const UNIT_Z: Point3D = Point3D { x: 0, y: 0, z: 1 };

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Components as an array.
    #[inline]
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Point3D) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    #[inline]
    pub fn cross(&self, other: &Point3D) -> Point3D {
        Point3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Manhattan length |x| + |y| + |z|
    #[inline]
    pub fn manhattan_length(&self) -> i32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Manhattan distance to another point
    #[inline]
    pub fn manhattan_distance(&self, other: &Point3D) -> i32 {
        (*self - *other).manhattan_length()
    }
}

impl From<[i32; 3]> for Point3D {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        Point3D::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for Point3D {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Point3D::new(x, y, z)
    }
}

impl Add for Point3D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Point3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point3D::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for Point3D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Point3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

//! Discrete axis-aligned rotations.
//!
//! A scanner may face any of the six axis directions and, for each facing,
//! have any of four "up" directions, giving 24 proper rotations. Each one is a
//! signed permutation matrix with determinant +1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use super::point::Point3D;

/// One of the 24 axis-aligned rotations.
///
/// Stored as three signed unit rows: component `i` of a rotated point is
/// `rows[i] · p`. Row `i` therefore names the source axis (and sign) that
/// output axis `i` reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    rows: [Point3D; 3],
}

impl Orientation {
    /// Identity rotation.
    pub const IDENTITY: Orientation = Orientation {
        rows: [Point3D::UNIT_X, Point3D::UNIT_Y, Point3D::UNIT_Z],
    };

    /// Number of distinct orientations.
    pub const COUNT: usize = 24;

    /// Build an orientation from signed unit rows.
    ///
    /// Returns `None` unless the rows form a signed permutation matrix with
    /// determinant +1 (no reflections).
    pub fn from_rows(rows: [Point3D; 3]) -> Option<Self> {
        let unit = |row: &Point3D| row.manhattan_length() == 1;
        if !rows.iter().all(unit) {
            return None;
        }

        let candidate = Self { rows };
        (candidate.determinant() == 1).then_some(candidate)
    }

    /// Rows of the rotation matrix.
    #[inline]
    pub fn rows(&self) -> [Point3D; 3] {
        self.rows
    }

    /// Columns of the rotation matrix (the images of the unit axes).
    #[inline]
    pub fn columns(&self) -> [Point3D; 3] {
        self.inverse().rows
    }

    /// Determinant of the matrix (+1 for every valid orientation).
    #[inline]
    pub fn determinant(&self) -> i32 {
        self.rows[0].dot(&self.rows[1].cross(&self.rows[2]))
    }

    /// Rotate a point.
    #[inline]
    pub fn apply(&self, point: Point3D) -> Point3D {
        Point3D::new(
            self.rows[0].dot(&point),
            self.rows[1].dot(&point),
            self.rows[2].dot(&point),
        )
    }

    /// Chain rotations: the result applies `other` first, then `self`.
    #[inline]
    pub fn compose(&self, other: &Orientation) -> Orientation {
        let row = |r: Point3D| other.rows[0] * r.x + other.rows[1] * r.y + other.rows[2] * r.z;
        Orientation {
            rows: [row(self.rows[0]), row(self.rows[1]), row(self.rows[2])],
        }
    }

    /// Inverse rotation (the transpose).
    #[inline]
    pub fn inverse(&self) -> Orientation {
        let [a, b, c] = self.rows;
        Orientation {
            rows: [
                Point3D::new(a.x, b.x, c.x),
                Point3D::new(a.y, b.y, c.y),
                Point3D::new(a.z, b.z, c.z),
            ],
        }
    }

    /// Whether this is the identity rotation.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// All 24 orientations, identity first.
    pub fn all() -> Vec<Orientation> {
        const PERMUTATIONS: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let units = [Point3D::UNIT_X, Point3D::UNIT_Y, Point3D::UNIT_Z];

        let mut all = Vec::with_capacity(Self::COUNT);
        for perm in PERMUTATIONS {
            for signs in 0..8u8 {
                let sign = |bit: u8| if signs & (1 << bit) == 0 { 1 } else { -1 };
                let rows = [
                    units[perm[0]] * sign(0),
                    units[perm[1]] * sign(1),
                    units[perm[2]] * sign(2),
                ];
                if let Some(orientation) = Self::from_rows(rows) {
                    all.push(orientation);
                }
            }
        }
        all
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Orientation {
    type Output = Self;

    /// Compose two orientations (same as `compose`).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Point3D> for Orientation {
    type Output = Point3D;

    #[inline]
    fn mul(self, rhs: Point3D) -> Point3D {
        self.apply(rhs)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 3] = ["x", "y", "z"];
        let mut parts = Vec::with_capacity(3);
        for row in self.rows {
            let (axis, value) = row
                .to_array()
                .into_iter()
                .enumerate()
                .find(|(_, v)| *v != 0)
                .unwrap_or((0, 0));
            let sign = if value < 0 { "-" } else { "+" };
            parts.push(format!("{}{}", sign, NAMES[axis]));
        }
        write!(f, "[{}]", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_24_distinct_rotations() {
        let all = Orientation::all();
        assert_eq!(all.len(), Orientation::COUNT);
        assert_eq!(all[0], Orientation::IDENTITY);

        let distinct: HashSet<_> = all.iter().copied().collect();
        assert_eq!(distinct.len(), Orientation::COUNT);
        assert!(all.iter().all(|o| o.determinant() == 1));
    }

    #[test]
    fn test_rejects_reflection() {
        let mirror = [-Point3D::UNIT_X, Point3D::UNIT_Y, Point3D::UNIT_Z];
        assert!(Orientation::from_rows(mirror).is_none());
    }

    #[test]
    fn test_rejects_non_permutation() {
        let rows = [Point3D::UNIT_X, Point3D::UNIT_X, Point3D::UNIT_Z];
        assert!(Orientation::from_rows(rows).is_none());

        let rows = [Point3D::new(1, 1, 0), Point3D::UNIT_Y, Point3D::UNIT_Z];
        assert!(Orientation::from_rows(rows).is_none());
    }

    #[test]
    fn test_apply() {
        // Quarter turn about Z: x -> y, y -> -x
        let rot = Orientation::from_rows([-Point3D::UNIT_Y, Point3D::UNIT_X, Point3D::UNIT_Z])
            .expect("valid rotation");
        assert_eq!(rot.apply(Point3D::new(1, 0, 0)), Point3D::new(0, 1, 0));
        assert_eq!(rot.apply(Point3D::new(0, 1, 0)), Point3D::new(-1, 0, 0));
        assert_eq!(rot * Point3D::new(3, 4, 5), Point3D::new(-4, 3, 5));
    }

    #[test]
    fn test_compose_matches_sequential_application() {
        let p = Point3D::new(3, -7, 11);
        for a in Orientation::all() {
            for b in Orientation::all() {
                assert_eq!(a.compose(&b).apply(p), a.apply(b.apply(p)));
            }
        }
    }

    #[test]
    fn test_inverse() {
        for o in Orientation::all() {
            assert!(o.compose(&o.inverse()).is_identity());
            assert!((o.inverse() * o).is_identity());
        }
    }

    #[test]
    fn test_group_is_closed() {
        let all: HashSet<_> = Orientation::all().into_iter().collect();
        for a in &all {
            for b in &all {
                assert!(all.contains(&(*a * *b)));
            }
        }
    }

    #[test]
    fn test_columns_are_axis_images() {
        for o in Orientation::all() {
            let [cx, cy, cz] = o.columns();
            assert_eq!(cx, o.apply(Point3D::UNIT_X));
            assert_eq!(cy, o.apply(Point3D::UNIT_Y));
            assert_eq!(cz, o.apply(Point3D::UNIT_Z));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Orientation::IDENTITY.to_string(), "[+x +y +z]");
    }
}

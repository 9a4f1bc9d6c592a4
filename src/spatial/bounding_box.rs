use nalgebra::{Point3, Vector3};

use crate::Float;

/// Axis-Aligned Bounding Box
///
/// Similar to [`parry3d::Aabb`], except generic over the Real type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<Real: Float> {
    /// The corner with the smallest coordinates.
    pub mins: Point3<Real>,
    /// The corner with the largest coordinates.
    pub maxs: Point3<Real>,
}

impl<Real: Float> Aabb<Real> {
    /// Construct an [Aabb] from its minimum & maximum corners, which are not checked.
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Construct an [Aabb] from any two opposite corners.
    #[inline]
    pub fn from_corners(a: &Point3<Real>, b: &Point3<Real>) -> Self {
        Self {
            mins: a.inf(b),
            maxs: a.sup(b),
        }
    }

    /// The smallest [Aabb] containing every point in `points`, or `None` if there are no points.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<Real>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(*first, *first), |mut acc, p| {
            acc.expand_to(p);
            acc
        }))
    }

    /// The union of every box in `boxes`, seeded with the first one.
    ///
    /// The union of zero boxes is undefined, so that case yields `None`.
    pub fn union_all(boxes: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut boxes = boxes.into_iter();
        let first = boxes.next()?;
        Some(boxes.fold(first, |acc, b| acc.union(&b)))
    }

    /// The smallest [Aabb] containing both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Grow `self` such that it contains `other`.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Grow `self` such that it contains `p`.
    #[inline]
    pub fn expand_to(&mut self, p: &Point3<Real>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    /// Whether `p` lies within `self`, boundary included.
    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Whether `other` lies entirely within `self`.
    #[inline]
    pub fn contains_aabb(&self, other: &Self) -> bool {
        self.contains(&other.mins) && self.contains(&other.maxs)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<Real> {
        let Self { mins: i, maxs: a } = self;
        nalgebra::point![
            (i.x + a.x) / Real::TWO,
            (i.y + a.y) / Real::TWO,
            (i.z + a.z) / Real::TWO
        ]
    }

    /// The edge lengths of `self` along each axis.
    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    type Triple = (f64, f64, f64);

    fn finite_point((x, y, z): Triple) -> Option<Point3<f64>> {
        (x.is_finite() && y.is_finite() && z.is_finite()).then(|| point![x, y, z])
    }

    fn finite_box(a: Triple, b: Triple) -> Option<Aabb<f64>> {
        Some(Aabb::from_corners(&finite_point(a)?, &finite_point(b)?))
    }

    #[test]
    fn union_of_disjoint_boxes() {
        let a = Aabb::new(point![0.0, 0.0, 0.0], point![1.0, 1.0, 1.0]);
        let b = Aabb::new(point![2.0, 0.0, 0.0], point![3.0, 1.0, 1.0]);
        let u = a.union(&b);
        assert_eq!(u.mins, point![0.0, 0.0, 0.0]);
        assert_eq!(u.maxs, point![3.0, 1.0, 1.0]);
        assert_eq!(u.center(), point![1.5, 0.5, 0.5]);
        assert_eq!(u.extents(), nalgebra::vector![3.0, 1.0, 1.0]);
    }

    #[test]
    fn union_all_requires_a_seed() {
        assert_eq!(Aabb::<f32>::union_all([]), None);
        let only = Aabb::new(point![1.0f32, 2.0, 3.0], point![4.0, 5.0, 6.0]);
        assert_eq!(Aabb::union_all([only]), Some(only));
    }

    #[test]
    fn from_points() {
        let points = [
            point![0.0, 0.0, 0.0],
            point![10.0, 5.0, 3.0],
            point![-2.0, 8.0, 1.0],
        ];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_eq!(aabb.mins, point![-2.0, 0.0, 0.0]);
        assert_eq!(aabb.maxs, point![10.0, 8.0, 3.0]);
        assert!(points.iter().all(|p| aabb.contains(p)));
        assert_eq!(Aabb::<f64>::from_points([]), None);
    }

    #[quickcheck]
    fn union_contains_both(a: Triple, b: Triple, c: Triple, d: Triple) -> TestResult {
        let (Some(x), Some(y)) = (finite_box(a, b), finite_box(c, d)) else {
            return TestResult::discard();
        };
        let u = x.union(&y);
        TestResult::from_bool(u.contains_aabb(&x) && u.contains_aabb(&y))
    }

    #[quickcheck]
    fn union_is_commutative(a: Triple, b: Triple, c: Triple, d: Triple) -> TestResult {
        let (Some(x), Some(y)) = (finite_box(a, b), finite_box(c, d)) else {
            return TestResult::discard();
        };
        TestResult::from_bool(x.union(&y) == y.union(&x))
    }

    #[quickcheck]
    fn center_is_contained(a: Triple, b: Triple) -> TestResult {
        match finite_box(a, b) {
            // the midpoint of huge values may overflow to infinity
            Some(x) if x.center().coords.iter().all(|c| c.is_finite()) => {
                TestResult::from_bool(x.contains(&x.center()))
            }
            _ => TestResult::discard(),
        }
    }
}

use nalgebra::Point3;

use crate::{spatial::Aabb, Float};

/// A triangle with concrete vertex positions, stored in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<Real: Float> {
    points: [Point3<Real>; 3],
}

impl<Real: Float> Triangle<Real> {
    /// A triangle with corners `a`, `b`, `c`, in that order.
    #[inline]
    pub fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        Self { points: [a, b, c] }
    }

    /// All three corners.
    #[inline]
    pub fn points(&self) -> &[Point3<Real>; 3] {
        &self.points
    }

    /// The first corner.
    #[inline]
    pub fn a(&self) -> &Point3<Real> {
        &self.points[0]
    }

    /// The second corner.
    #[inline]
    pub fn b(&self) -> &Point3<Real> {
        &self.points[1]
    }

    /// The third corner.
    #[inline]
    pub fn c(&self) -> &Point3<Real> {
        &self.points[2]
    }

    /// The smallest [Aabb] containing all three corners.
    #[inline]
    pub fn aabb(&self) -> Aabb<Real> {
        let [a, b, c] = &self.points;
        Aabb::new(a.inf(b).inf(c), a.sup(b).sup(c))
    }

    /// The mean of the three corners.
    pub fn centroid(&self) -> Point3<Real> {
        let [a, b, c] = &self.points;
        let three = Real::ONE + Real::TWO;
        nalgebra::point![
            (a.x + b.x + c.x) / three,
            (a.y + b.y + c.y) / three,
            (a.z + b.z + c.z) / three
        ]
    }
}

impl<Real: Float> From<[Point3<Real>; 3]> for Triangle<Real> {
    fn from(points: [Point3<Real>; 3]) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::*;

    #[test]
    fn aabb_spans_corners() {
        let tri = Triangle::new(
            point![1.0, -2.0, 0.5],
            point![-1.0, 3.0, 0.0],
            point![0.0, 0.0, 4.0],
        );
        let aabb = tri.aabb();
        assert_eq!(aabb.mins, point![-1.0, -2.0, 0.0]);
        assert_eq!(aabb.maxs, point![1.0, 3.0, 4.0]);
        assert!(tri.points().iter().all(|p| aabb.contains(p)));
    }

    #[test]
    fn keeps_winding_order() {
        let a = point![0.0f32, 0.0, 0.0];
        let b = point![1.0, 0.0, 0.0];
        let c = point![0.0, 1.0, 0.0];
        let tri = Triangle::new(a, b, c);
        assert_eq!((tri.a(), tri.b(), tri.c()), (&a, &b, &c));
        assert_eq!(Triangle::from([a, b, c]), tri);
    }

    #[test]
    fn centroid() {
        let tri = Triangle::new(
            point![0.0, 0.0, 0.0],
            point![3.0, 0.0, 0.0],
            point![0.0, 3.0, 3.0],
        );
        assert_eq!(tri.centroid(), point![1.0, 1.0, 1.0]);
    }
}

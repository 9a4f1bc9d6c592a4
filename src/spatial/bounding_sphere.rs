use nalgebra::Point3;

use crate::Float;

use super::{distance, Aabb};

/// A sphere used for coarse rejection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere<Real: Float> {
    /// Center point.
    pub center: Point3<Real>,
    /// Distance from the center to the surface.
    pub radius: Real,
}

impl<Real: Float> BoundingSphere<Real> {
    /// Construct a sphere from its center & radius.
    #[inline]
    pub fn new(center: Point3<Real>, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Construct the sphere circumscribing `aabb`: centered on the box, passing through its
    /// corners.
    ///
    /// This bounds anything the box bounds, but is generally looser than the smallest sphere
    /// around the original geometry.
    pub fn from_aabb(aabb: &Aabb<Real>) -> Self {
        let center = aabb.center();
        Self {
            radius: distance(&aabb.maxs, &center),
            center,
        }
    }

    /// Whether `p` lies within `self`, surface included.
    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        distance(&self.center, p) <= self.radius
    }
}

impl<Real: Float> From<Aabb<Real>> for BoundingSphere<Real> {
    fn from(aabb: Aabb<Real>) -> Self {
        Self::from_aabb(&aabb)
    }
}

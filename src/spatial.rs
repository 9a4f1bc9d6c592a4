//! Bounding volumes.

mod bounding_box;
pub use bounding_box::*;
mod bounding_sphere;
pub use bounding_sphere::*;
#[cfg(feature = "spatial")]
mod parry;

use nalgebra::Point3;

use crate::Float;

/// Euclidean distance between two points.
#[inline]
pub fn distance<Real: Float>(a: &Point3<Real>, b: &Point3<Real>) -> Real {
    let d = b - a;
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

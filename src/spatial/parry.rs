//! Conversions into [parry3d]'s bounding volumes, for handing imported meshes to collision code.

use parry3d::{bounding_volume, math::Real};

use super::{Aabb, BoundingSphere};

impl From<bounding_volume::Aabb> for Aabb<Real> {
    fn from(p: bounding_volume::Aabb) -> Self {
        Self {
            mins: p.mins,
            maxs: p.maxs,
        }
    }
}

impl From<Aabb<Real>> for bounding_volume::Aabb {
    fn from(e: Aabb<Real>) -> Self {
        Self::new(e.mins, e.maxs)
    }
}

impl From<bounding_volume::BoundingSphere> for BoundingSphere<Real> {
    fn from(p: bounding_volume::BoundingSphere) -> Self {
        Self::new(*p.center(), p.radius())
    }
}

impl From<BoundingSphere<Real>> for bounding_volume::BoundingSphere {
    fn from(e: BoundingSphere<Real>) -> Self {
        Self::new(e.center, e.radius)
    }
}

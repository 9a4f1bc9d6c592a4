use std::path::Path;

use nalgebra::Point3;

use crate::{
    de::ImportOptions,
    error::{Error, Result},
    format::read_raw,
    spatial::{Aabb, BoundingSphere},
    Float, RawMesh, Triangle,
};

/// An ordered collection of [Triangles](Triangle), with aggregate bounding volumes.
///
/// # Notes
///
/// * Bounding volumes are only updated by [calculate_bounds](Self::calculate_bounds) (which the
///   import functions call for you). After [insert](Self::insert) or [extend](Extend::extend),
///   they describe the previous contents until recalculated.
/// * Importing replaces the whole collection; nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh<Real: Float> {
    triangles: Vec<Triangle<Real>>,
    bounding_box: Option<Aabb<Real>>,
    bounding_sphere: Option<BoundingSphere<Real>>,
}

impl<Real: Float> Default for TriangleMesh<Real> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Real: Float> TriangleMesh<Real> {
    /// Construct an empty mesh.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Construct an empty mesh with room for `capacity` triangles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
            bounding_box: None,
            bounding_sphere: None,
        }
    }

    /// Import the mesh file at `path`, with default [ImportOptions].
    ///
    /// See [import_with](Self::import_with).
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.import_with(path, &ImportOptions::default())
    }

    /// Replace the contents of `self` with the triangles of the mesh file at `path`, then
    /// recalculate bounding volumes.
    ///
    /// The reader is chosen by the file's extension (see [MeshFormat](crate::MeshFormat)).
    ///
    /// # Errors
    ///
    /// * Any error from [read_raw](crate::read_raw) or [assemble](Self::assemble).
    ///
    /// `self` is left untouched on error.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn import_with(&mut self, path: impl AsRef<Path>, options: &ImportOptions) -> Result<()> {
        let raw = read_raw(path, options)?;
        self.assemble(&raw)?;
        self.calculate_bounds();
        tracing::info!(triangles = self.triangle_count(), "imported mesh");
        Ok(())
    }

    /// Construct a new mesh from the mesh file at `path`.
    pub fn load(path: impl AsRef<Path>, options: &ImportOptions) -> Result<Self> {
        let mut res = Self::new();
        res.import_with(path, options)?;
        Ok(res)
    }

    /// Replace the contents of `self` with the triangles described by `raw`.
    ///
    /// Each index triple of `raw` becomes one triangle, in order and keeping its winding. A
    /// trailing partial triple is ignored. Bounding volumes are cleared, not recalculated.
    ///
    /// # Errors
    ///
    /// * [IndexOutOfRange](Error::IndexOutOfRange) if any index doesn't name a complete vertex
    ///   of `raw`; `self` is left untouched in that case.
    pub fn assemble(&mut self, raw: &RawMesh<Real>) -> Result<()> {
        let vertex_count = raw.vertex_count();
        let mut triangles = Vec::with_capacity(raw.triangle_count());
        for (triangle, face) in raw.indices.chunks_exact(3).enumerate() {
            let point = |index: u32| -> Result<Point3<Real>> {
                let i = index as usize;
                if i >= vertex_count {
                    return Err(Error::IndexOutOfRange {
                        triangle,
                        index,
                        vertex_count,
                    });
                }
                let c = &raw.vertices[3 * i..3 * i + 3];
                Ok(Point3::new(c[0], c[1], c[2]))
            };
            triangles.push(Triangle::new(point(face[0])?, point(face[1])?, point(face[2])?));
        }

        self.reset(0);
        self.triangles = triangles;
        Ok(())
    }

    /// Remove every triangle and forget the bounding volumes, keeping room for `capacity`
    /// triangles.
    pub fn reset(&mut self, capacity: usize) {
        self.triangles.clear();
        self.triangles.reserve(capacity);
        self.bounding_box = None;
        self.bounding_sphere = None;
    }

    /// Append a single triangle. Bounding volumes become stale.
    pub fn insert(&mut self, triangle: Triangle<Real>) {
        self.triangles.push(triangle);
    }

    /// Recalculate the bounding box as the union of every triangle's box, and the bounding
    /// sphere as the sphere circumscribing that box.
    ///
    /// Does nothing if `self` is empty; any previous volumes are kept as they were.
    pub fn calculate_bounds(&mut self) {
        let Some(aabb) = Aabb::union_all(self.triangles.iter().map(Triangle::aabb)) else {
            return;
        };
        self.bounding_sphere = Some(BoundingSphere::from_aabb(&aabb));
        self.bounding_box = Some(aabb);
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle<Real>] {
        &self.triangles
    }

    /// The bounding box as of the last [calculate_bounds](Self::calculate_bounds), if any.
    #[inline]
    pub fn bounding_box(&self) -> Option<&Aabb<Real>> {
        self.bounding_box.as_ref()
    }

    /// The bounding sphere as of the last [calculate_bounds](Self::calculate_bounds), if any.
    #[inline]
    pub fn bounding_sphere(&self) -> Option<&BoundingSphere<Real>> {
        self.bounding_sphere.as_ref()
    }
}

impl<Real: Float> Extend<Triangle<Real>> for TriangleMesh<Real> {
    fn extend<I: IntoIterator<Item = Triangle<Real>>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl<Real: Float> FromIterator<Triangle<Real>> for TriangleMesh<Real> {
    fn from_iter<I: IntoIterator<Item = Triangle<Real>>>(iter: I) -> Self {
        let mut res = Self {
            triangles: iter.into_iter().collect(),
            bounding_box: None,
            bounding_sphere: None,
        };
        res.calculate_bounds();
        res
    }
}

impl<Real: Float> TryFrom<&RawMesh<Real>> for TriangleMesh<Real> {
    type Error = Error;
    fn try_from(raw: &RawMesh<Real>) -> Result<Self> {
        let mut res = Self::new();
        res.assemble(raw)?;
        res.calculate_bounds();
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::spatial::distance;

    fn unit_triangle(x: f64) -> Triangle<f64> {
        Triangle::new(
            point![x, 0.0, 0.0],
            point![x + 1.0, 1.0, 0.0],
            point![x, 1.0, 1.0],
        )
    }

    #[test]
    fn assemble_resolves_indices() {
        let raw = RawMesh {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![2, 0, 1, 0, 1, 2],
        };
        let mut mesh = TriangleMesh::new();
        mesh.assemble(&raw).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(
            mesh.triangles()[0].points(),
            &[point![0.0, 1.0, 0.0], point![0.0, 0.0, 0.0], point![1.0, 0.0, 0.0]]
        );
        assert_eq!(mesh.triangles()[1].a(), &point![0.0, 0.0, 0.0]);
        // assembling alone leaves volumes uncomputed
        assert_eq!(mesh.bounding_box(), None);
    }

    #[test]
    fn assemble_drops_partial_triple() {
        let raw = RawMesh {
            vertices: vec![0.0f32; 9],
            indices: vec![0, 1, 2, 0, 1],
        };
        let mesh = TriangleMesh::try_from(&raw).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn assemble_rejects_out_of_range() {
        let raw = RawMesh {
            vertices: vec![0.0f64; 9],
            indices: vec![0, 1, 2, 0, 3, 1],
        };
        let mut mesh: TriangleMesh<f64> = [unit_triangle(5.0)].into_iter().collect();
        let before = mesh.clone();
        match mesh.assemble(&raw) {
            Err(Error::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            }) => assert_eq!((triangle, index, vertex_count), (1, 3, 3)),
            res => panic!("expected IndexOutOfRange, got {res:?}"),
        }
        assert_eq!(mesh, before);
    }

    #[test]
    fn assemble_replaces_contents() {
        let mut mesh: TriangleMesh<f64> = (0..4).map(|i| unit_triangle(f64::from(i))).collect();
        assert!(mesh.bounding_box().is_some());
        mesh.assemble(&RawMesh::new()).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_box(), None);
        assert_eq!(mesh.bounding_sphere(), None);
    }

    #[test]
    fn bounds_of_two_boxes() {
        // the boxes of these triangles are [(0,0,0),(1,1,1)] and [(2,0,0),(3,1,1)]
        let mut mesh = TriangleMesh::new();
        mesh.insert(Triangle::new(
            point![0.0, 0.0, 0.0],
            point![1.0, 1.0, 0.0],
            point![0.0, 0.0, 1.0],
        ));
        mesh.insert(Triangle::new(
            point![2.0, 0.0, 1.0],
            point![3.0, 1.0, 0.0],
            point![2.0, 0.0, 0.0],
        ));
        assert_eq!(mesh.bounding_box(), None);
        mesh.calculate_bounds();

        let aabb = mesh.bounding_box().unwrap();
        assert_eq!(aabb.mins, point![0.0, 0.0, 0.0]);
        assert_eq!(aabb.maxs, point![3.0, 1.0, 1.0]);
        let sphere = mesh.bounding_sphere().unwrap();
        assert_eq!(sphere.center, point![1.5, 0.5, 0.5]);
        assert_eq!(
            sphere.radius,
            distance(&point![3.0, 1.0, 1.0], &point![1.5, 0.5, 0.5])
        );
    }

    #[test]
    fn bounds_are_stale_until_recalculated() {
        let mut mesh: TriangleMesh<f64> = [unit_triangle(0.0)].into_iter().collect();
        let before = *mesh.bounding_box().unwrap();
        mesh.extend([unit_triangle(10.0)]);
        assert_eq!(mesh.bounding_box(), Some(&before));
        mesh.calculate_bounds();
        assert_eq!(mesh.bounding_box().unwrap().maxs.x, 11.0);
    }

    #[test]
    fn empty_bounds_are_a_no_op() {
        let mut mesh = TriangleMesh::<f32>::new();
        mesh.calculate_bounds();
        assert_eq!(mesh.bounding_box(), None);
        assert_eq!(mesh.bounding_sphere(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut mesh: TriangleMesh<f64> = [unit_triangle(0.0)].into_iter().collect();
        mesh.reset(16);
        assert_eq!(mesh, TriangleMesh::new());
    }

    #[quickcheck]
    fn count_matches_complete_triples(indices: Vec<u8>) -> TestResult {
        let raw = RawMesh {
            vertices: vec![0.0f32; 3 * 256],
            indices: indices.into_iter().map(u32::from).collect(),
        };
        let mesh = TriangleMesh::try_from(&raw).unwrap();
        TestResult::from_bool(
            mesh.triangle_count() == raw.indices.len() / 3
                && mesh.triangle_count() == mesh.triangles().len(),
        )
    }

    #[quickcheck]
    fn box_contains_every_corner(coords: Vec<(i16, i16, i16)>) -> TestResult {
        if coords.len() < 3 {
            return TestResult::discard();
        }
        let mut raw = RawMesh::<f64>::new();
        for &(x, y, z) in &coords {
            raw.push_vertex([x.into(), y.into(), z.into()]);
        }
        raw.indices = (0..coords.len() as u32).collect();
        let mesh = TriangleMesh::try_from(&raw).unwrap();
        let aabb = mesh.bounding_box().unwrap();
        let sphere = mesh.bounding_sphere().unwrap();
        TestResult::from_bool(mesh.triangles().iter().flat_map(Triangle::points).all(|p| {
            aabb.contains(p) && distance(&sphere.center, p) <= sphere.radius * (1.0 + 1e-12)
        }))
    }
}

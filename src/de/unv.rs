//! Reading I-DEAS universal files through the [unv] crate.

use std::path::Path;

use crate::{de::MeshReader, error::Result, Float, RawMesh};

/// Reads the triangles of `.unv` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnvReader;

impl<Real: Float> MeshReader<Real> for UnvReader {
    fn read(&self, path: &Path) -> Result<RawMesh<Real>> {
        let file = ::unv::UnvFile::load(path)?;
        Ok(RawMesh::from(file))
    }
}

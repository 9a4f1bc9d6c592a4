use std::path::Path;

use crate::{
    de::{obj::ObjReader, unv::UnvReader, ImportOptions, MeshReader},
    error::{Error, Result},
    Float, RawMesh,
};

/// Mesh file formats understood by [TriangleMesh::import](crate::TriangleMesh::import).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Wavefront OBJ.
    Obj,
    /// I-DEAS universal file.
    Unv,
}

/// Normalized (lowercase, no leading `.`) extensions and the formats they select.
const EXTENSIONS: &[(&str, MeshFormat)] = &[("obj", MeshFormat::Obj), ("unv", MeshFormat::Unv)];

impl MeshFormat {
    /// Look up the format associated with a file extension, ignoring case and any leading `.`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find_map(|&(known, format)| (known == ext).then_some(format))
    }

    /// Detect the format of `path` from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path.as_ref().extension().map(|e| e.to_string_lossy());
        ext.as_deref()
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnknownFormat(ext.map(|e| e.into_owned())))
    }

    /// The canonical extension of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Unv => "unv",
        }
    }

    /// Read `path` with this format's reader.
    pub fn read<Real: Float>(self, path: &Path, options: &ImportOptions) -> Result<RawMesh<Real>> {
        tracing::debug!(path = %path.display(), format = ?self, "reading mesh file");
        match self {
            Self::Obj => ObjReader::new(options.mode).read(path),
            Self::Unv => UnvReader.read(path),
        }
    }
}

/// Read the mesh file at `path` with the reader selected by its extension.
///
/// # Errors
///
/// * [UnknownFormat](Error::UnknownFormat) if the extension is missing or unrecognized; no
///   reader is attempted in that case.
/// * Anything the selected reader reports.
pub fn read_raw<Real: Float>(
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> Result<RawMesh<Real>> {
    let path = path.as_ref();
    MeshFormat::from_path(path)?.read(path, options)
}

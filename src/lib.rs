//! Triangle mesh import.
//!
//! Mesh files are read into a format-agnostic [RawMesh] by a [MeshReader](de::MeshReader)
//! chosen from the file's extension, then assembled into a [TriangleMesh] with an axis-aligned
//! bounding box & bounding sphere.
//!
//! ```no_run
//! use trimesh::TriangleMesh;
//!
//! let mut mesh = TriangleMesh::<f32>::new();
//! mesh.import("bunny.obj")?;
//! println!("{} triangles in {:?}", mesh.triangle_count(), mesh.bounding_box());
//! # Ok::<(), trimesh::Error>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod de;
pub mod error;
mod float;
mod format;
mod mesh;
mod raw;
pub mod spatial;
mod triangle;

pub use de::{ImportOptions, ParseMode};
pub use error::{Error, Result};
pub use float::*;
pub use format::*;
pub use mesh::*;
pub use raw::*;
pub use triangle::*;

pub use nalgebra::Point3;

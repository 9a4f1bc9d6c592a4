use std::{io, path::PathBuf};

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors related to importing [TriangleMeshes](crate::TriangleMesh).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened.
    #[error("could not open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    /// Reading an opened file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The extension is missing or doesn't select a reader.
    #[error("no mesh format is associated with extension {0:?}")]
    UnknownFormat(Option<String>),
    /// A record couldn't be parsed, or named a vertex that can't exist.
    #[error("line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
    /// A triangle refers to a vertex past the end of the vertex list.
    #[error("triangle {triangle} references vertex {index}, but there are only {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
    /// The universal file reader failed.
    #[error(transparent)]
    Legacy(#[from] unv::Error),
}

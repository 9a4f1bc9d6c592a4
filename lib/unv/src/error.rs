use std::{io, path::PathBuf};

/// Errors related to reading [UnvFiles](crate::UnvFile).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: expected {expected}, found {found:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("line {0}: dataset {1} ended in the middle of a record")]
    Truncated(usize, u32),
    #[error("line {line}: element {element} references undeclared node {node}")]
    UnknownNode { line: usize, element: u64, node: u64 },
}

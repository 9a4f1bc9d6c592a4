//! Deserialization of geometry from various storage formats.

pub mod obj;
pub mod unv;

use std::path::Path;

use crate::{error::Result, Float, RawMesh};

/// How a reader treats records it can't make sense of.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Substitute zero for missing or malformed fields and keep going.
    #[default]
    Lenient,
    /// Fail on the first malformed record.
    Strict,
}

/// Settings applied when importing a mesh file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportOptions {
    /// How malformed records are handled.
    pub mode: ParseMode,
}

impl ImportOptions {
    /// Replace [mode](Self::mode).
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Stateless conversion of a mesh file into a [RawMesh].
pub trait MeshReader<Real: Float> {
    /// Read the file at `path`.
    fn read(&self, path: &Path) -> Result<RawMesh<Real>>;
}

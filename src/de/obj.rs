//! Reading triangle geometry from Wavefront OBJ files.
//!
//! # Notes
//!
//! * Only `v` (position) and `f` (face) records are read; every other record is ignored.
//! * Faces are assumed to be triangles. Each face token contributes only its leading position
//!   index, so `f 1/4/7 2/5/8 3/6/9` is read as `f 1 2 3`.
//! * Indices are 1-based in the file and 0-based in the resulting [RawMesh]. Negative indices
//!   count backwards from the most recently declared vertex.
//!
//! # See Also
//!
//! * [Object Files (.obj)](https://paulbourke.net/dataformats/obj/)

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::SplitWhitespace,
};

use crate::{
    de::{MeshReader, ParseMode},
    error::{Error, Result},
    Float, RawMesh,
};

const COMMENT: char = '#';

/// Reads the triangles of `.obj` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjReader {
    mode: ParseMode,
}

impl ObjReader {
    /// A reader which handles malformed records according to `mode`.
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// How this reader handles malformed records.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Read OBJ content from any buffered source.
    pub fn read_from<Real: Float>(&self, reader: impl BufRead) -> Result<RawMesh<Real>> {
        let mut mesh = RawMesh::new();
        for (i, line) in reader.lines().enumerate() {
            let number = i + 1;
            let line = line?;
            let mut tokens = line.split_whitespace();
            let Some(tag) = tokens.next() else {
                continue;
            };
            if tag.starts_with(COMMENT) {
                continue;
            }
            match tag {
                "v" => {
                    let position = self.position(number, &mut tokens)?;
                    mesh.push_vertex(position);
                }
                "f" => {
                    let face = self.face(number, &mut tokens, mesh.vertex_count())?;
                    mesh.push_triangle(face);
                }
                _ => tracing::trace!(line = number, tag, "ignoring record"),
            }
        }
        Ok(mesh)
    }

    fn position<Real: Float>(
        &self,
        line: usize,
        tokens: &mut SplitWhitespace<'_>,
    ) -> Result<[Real; 3]> {
        let mut res = [Real::ZERO; 3];
        for slot in &mut res {
            let token = tokens.next();
            match token.and_then(|t| t.parse::<Real>().ok()) {
                Some(v) if v.is_finite() || self.mode == ParseMode::Lenient => *slot = v,
                _ => self.tolerate(line, || {
                    format!("expected a coordinate, found {:?}", token.unwrap_or_default())
                })?,
            }
        }
        Ok(res)
    }

    fn face(
        &self,
        line: usize,
        tokens: &mut SplitWhitespace<'_>,
        vertex_count: usize,
    ) -> Result<[u32; 3]> {
        let mut res = [0; 3];
        for slot in &mut res {
            let token = tokens.next();
            let index = match token {
                Some(t) => self.vertex_index(line, t, vertex_count)?,
                None => None,
            };
            match index {
                Some(i) => *slot = i,
                None => self.tolerate(line, || {
                    format!("expected a vertex index, found {:?}", token.unwrap_or_default())
                })?,
            }
        }
        if self.mode == ParseMode::Strict && tokens.next().is_some() {
            return Err(Error::MalformedRecord {
                line,
                message: "only triangular faces are supported".to_owned(),
            });
        }
        Ok(res)
    }

    /// Resolve the leading numeric component of a face token to a zero-based index.
    ///
    /// Yields `None` for tokens that aren't a usable index, and fails in either mode for indices
    /// that can't refer to any vertex.
    fn vertex_index(&self, line: usize, token: &str, vertex_count: usize) -> Result<Option<u32>> {
        let end = token
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
            .map_or(token.len(), |(i, _)| i);
        let (number, rest) = token.split_at(end);
        if self.mode == ParseMode::Strict && !(rest.is_empty() || rest.starts_with('/')) {
            return Ok(None);
        }
        if number.trim_start_matches(['-', '+']).is_empty() {
            return Ok(None);
        }
        let resolved = match number.parse::<i64>() {
            Ok(0) => return Ok(None),
            Ok(index @ 1..) => u32::try_from(index - 1).ok(),
            Ok(index) => i64::try_from(vertex_count)
                .ok()
                .and_then(|count| u32::try_from(count + index).ok()),
            Err(_) => None,
        };
        resolved.map(Some).ok_or_else(|| Error::MalformedRecord {
            line,
            message: format!("vertex index {number} is out of range ({vertex_count} vertices)"),
        })
    }

    /// Fail in strict mode; otherwise log and continue with the zeroed field.
    fn tolerate(&self, line: usize, message: impl FnOnce() -> String) -> Result<()> {
        match self.mode {
            ParseMode::Strict => Err(Error::MalformedRecord {
                line,
                message: message(),
            }),
            ParseMode::Lenient => {
                tracing::warn!(line, "{}; substituting zero", message());
                Ok(())
            }
        }
    }
}

impl<Real: Float> MeshReader<Real> for ObjReader {
    fn read(&self, path: &Path) -> Result<RawMesh<Real>> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(BufReader::new(file))
    }
}

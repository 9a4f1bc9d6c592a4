//! Reader for the surface triangles of I-DEAS Universal (`.unv`) files.
//!
//! A universal file is a sequence of datasets, each opened and closed by a line holding only
//! `-1`. Only two datasets are read:
//!
//! * `2411`: nodes, as a record of four integers (label first) followed by a record of three
//!   double-precision coordinates. Fortran `D` exponents are accepted.
//! * `2412`: elements, as a record of six integers (label, FE descriptor, physical property,
//!   material property, color, node count) followed by node labels, eight per line. Beam
//!   elements carry one extra record before their node labels.
//!
//! Linear triangles become one triangle, linear quadrilaterals are split into two, and every
//! other element is skipped. All other datasets are skipped.

mod error;
pub use error::*;

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::FromStr,
};

const DELIMITER: &str = "-1";
const NODES: u32 = 2411;
const ELEMENTS: u32 = 2412;

/// What an element contributes to the triangle list, by FE descriptor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Beam,
    Triangle,
    Quad,
    Other,
}

impl Shape {
    fn of(descriptor: u64) -> Self {
        match descriptor {
            11 | 21 | 22 | 23 | 24 => Self::Beam,
            41 | 51 | 61 | 74 | 81 | 91 => Self::Triangle,
            44 | 54 | 64 | 84 | 94 => Self::Quad,
            _ => Self::Other,
        }
    }
}

/// Triangle geometry read from a universal file, as flat owned buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnvFile {
    /// Number of nodes; `positions.len() == 3 * node_count`.
    pub node_count: usize,
    /// Number of triangles; `triangles.len() == 3 * triangle_count`.
    pub triangle_count: usize,
    /// Node coordinates, `x, y, z` per node, in declaration order.
    pub positions: Box<[f64]>,
    /// Zero-based node indices, three per triangle.
    pub triangles: Box<[u32]>,
}

/// A triangle whose node labels have not yet been resolved to indices.
struct Pending {
    line: usize,
    element: u64,
    nodes: [u64; 3],
}

impl UnvFile {
    /// Read the universal file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_from(BufReader::new(file))
    }

    /// Read universal file content from any buffered source.
    pub fn read_from(reader: impl BufRead) -> Result<Self, Error> {
        let mut lines = Lines {
            inner: reader.lines(),
            number: 0,
        };
        let mut labels = HashMap::new();
        let mut positions = Vec::new();
        let mut pending = Vec::new();

        while let Some((_, line)) = lines.next_line()? {
            if line.trim() != DELIMITER {
                continue;
            }
            let Some((number, header)) = lines.next_line()? else {
                break;
            };
            let id: u32 = parse_field(number, header.split_whitespace().next(), "dataset id")?;
            match id {
                NODES => read_nodes(&mut lines, &mut labels, &mut positions)?,
                ELEMENTS => read_elements(&mut lines, &mut pending)?,
                _ => {
                    tracing::trace!(dataset = id, line = number, "skipping dataset");
                    skip_dataset(&mut lines)?;
                }
            }
        }

        let mut triangles = Vec::with_capacity(pending.len() * 3);
        for tri in &pending {
            for node in tri.nodes {
                let index = labels.get(&node).ok_or(Error::UnknownNode {
                    line: tri.line,
                    element: tri.element,
                    node,
                })?;
                triangles.push(*index);
            }
        }

        let res = Self {
            node_count: positions.len() / 3,
            triangle_count: pending.len(),
            positions: positions.into_boxed_slice(),
            triangles: triangles.into_boxed_slice(),
        };
        tracing::debug!(
            nodes = res.node_count,
            triangles = res.triangle_count,
            "read universal file"
        );
        Ok(res)
    }
}

/// Line iterator which keeps track of the current 1-based line number.
struct Lines<B> {
    inner: io::Lines<B>,
    number: usize,
}

impl<B: BufRead> Lines<B> {
    fn next_line(&mut self) -> Result<Option<(usize, String)>, Error> {
        match self.inner.next() {
            None => Ok(None),
            Some(line) => {
                self.number += 1;
                Ok(Some((self.number, line?)))
            }
        }
    }

    /// Like [next_line](Self::next_line), but running out of input is an error.
    fn expect_line(&mut self, dataset: u32) -> Result<(usize, String), Error> {
        let number = self.number;
        self.next_line()?.ok_or(Error::Truncated(number + 1, dataset))
    }
}

fn skip_dataset<B: BufRead>(lines: &mut Lines<B>) -> Result<(), Error> {
    while let Some((_, line)) = lines.next_line()? {
        if line.trim() == DELIMITER {
            break;
        }
    }
    Ok(())
}

fn read_nodes<B: BufRead>(
    lines: &mut Lines<B>,
    labels: &mut HashMap<u64, u32>,
    positions: &mut Vec<f64>,
) -> Result<(), Error> {
    loop {
        let (number, record) = lines.expect_line(NODES)?;
        if record.trim() == DELIMITER {
            return Ok(());
        }
        let label: u64 = parse_field(number, record.split_whitespace().next(), "node label")?;

        let (number, coords) = lines.expect_line(NODES)?;
        let mut tokens = coords.split_whitespace();
        for _ in 0..3 {
            positions.push(parse_coord(number, tokens.next())?);
        }
        labels.insert(label, (positions.len() / 3 - 1) as u32);
    }
}

fn read_elements<B: BufRead>(
    lines: &mut Lines<B>,
    pending: &mut Vec<Pending>,
) -> Result<(), Error> {
    loop {
        let (number, record) = lines.expect_line(ELEMENTS)?;
        if record.trim() == DELIMITER {
            return Ok(());
        }
        let [element, descriptor, _, _, _, count] =
            parse_fields::<6>(number, &record, "element record")?;
        let shape = Shape::of(descriptor);
        if shape == Shape::Beam {
            // orientation & cross-section record
            lines.expect_line(ELEMENTS)?;
        }

        let mut nodes = Vec::new();
        while (nodes.len() as u64) < count {
            let (number, line) = lines.expect_line(ELEMENTS)?;
            let before = nodes.len();
            for token in line.split_whitespace() {
                nodes.push(parse_field::<u64>(number, Some(token), "node label")?);
            }
            if nodes.len() == before {
                return Err(Error::Malformed {
                    line: number,
                    expected: "node labels",
                    found: line,
                });
            }
        }

        match (shape, nodes.as_slice()) {
            (Shape::Triangle, [a, b, c, ..]) => pending.push(Pending {
                line: number,
                element,
                nodes: [*a, *b, *c],
            }),
            (Shape::Quad, [a, b, c, d, ..]) => {
                pending.push(Pending {
                    line: number,
                    element,
                    nodes: [*a, *b, *c],
                });
                pending.push(Pending {
                    line: number,
                    element,
                    nodes: [*a, *c, *d],
                });
            }
            _ => tracing::trace!(element, descriptor, "skipping non-surface element"),
        }
    }
}

fn parse_field<T: FromStr>(
    line: usize,
    token: Option<&str>,
    expected: &'static str,
) -> Result<T, Error> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::Malformed {
            line,
            expected,
            found: token.unwrap_or_default().to_owned(),
        })
}

fn parse_fields<const N: usize>(
    line: usize,
    record: &str,
    expected: &'static str,
) -> Result<[u64; N], Error> {
    let mut res = [0; N];
    let mut tokens = record.split_whitespace();
    for slot in &mut res {
        *slot = parse_field(line, tokens.next(), expected)?;
    }
    Ok(res)
}

/// Parse a coordinate, accepting Fortran-style `D` exponents.
fn parse_coord(line: usize, token: Option<&str>) -> Result<f64, Error> {
    let normalized = token.map(|t| t.replace(|c: char| c == 'D' || c == 'd', "E"));
    parse_field(line, normalized.as_deref(), "coordinate").map_err(|e| match e {
        Error::Malformed { line, expected, .. } => Error::Malformed {
            line,
            expected,
            found: token.unwrap_or_default().to_owned(),
        },
        e => e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATE: &str = "    -1
  2411
         1         1         1        11
   0.0000000000000000D+00   0.0000000000000000D+00   0.0000000000000000D+00
         2         1         1        11
   1.0000000000000000D+00   0.0000000000000000D+00   0.0000000000000000D+00
         3         1         1        11
   1.0000000000000000D+00   1.0000000000000000D+00   0.0000000000000000D+00
    -1
    -1
  2412
        10        91         1         1         7         3
         3         1         2
    -1
";

    #[test]
    fn reads_nodes_and_triangles() {
        let file = UnvFile::read_from(PLATE.as_bytes()).unwrap();
        assert_eq!(file.node_count, 3);
        assert_eq!(file.triangle_count, 1);
        assert_eq!(
            &*file.positions,
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0]
        );
        assert_eq!(&*file.triangles, &[2, 0, 1]);
    }

    #[test]
    fn fortran_exponents() {
        assert_eq!(parse_coord(1, Some("-2.5D+01")).unwrap(), -25.0);
        assert_eq!(parse_coord(1, Some("1.5E-01")).unwrap(), 0.15);
        assert!(matches!(
            parse_coord(7, Some("x")),
            Err(Error::Malformed { line: 7, .. })
        ));
    }

    #[test]
    fn empty_input() {
        let file = UnvFile::read_from(&b""[..]).unwrap();
        assert_eq!(file, UnvFile::default());
    }

    #[test]
    fn unknown_node() {
        let src = PLATE.replace("         3         1         2", "         3         1         9");
        match UnvFile::read_from(src.as_bytes()) {
            Err(Error::UnknownNode { element, node, .. }) => {
                assert_eq!(element, 10);
                assert_eq!(node, 9);
            }
            res => panic!("expected UnknownNode, got {res:?}"),
        }
    }

    #[test]
    fn truncated_dataset() {
        let src = "    -1\n  2411\n         1         1         1        11\n";
        assert!(matches!(
            UnvFile::read_from(src.as_bytes()),
            Err(Error::Truncated(_, NODES))
        ));
    }
}

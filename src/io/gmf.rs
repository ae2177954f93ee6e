//! GMF (`.mesh`) reader.
//!
//! # Supported format
//! - ASCII `.mesh` files (`MeshVersionFormatted`, `Dimension`, keyword sections, `End`).
//! - Sections read: `Vertices`, `Tetrahedra`, `Triangles`.
//! - Sections skipped: `Edges`, `Quadrilaterals`, `Hexahedra`, `Corners`,
//!   `Ridges`, `RequiredVertices`.
//!
//! # Limitations
//! - Binary `.meshb` files are not supported.
//! - Any other keyword is rejected rather than guessed at.
//!
//! Version and dimension are reported as found; the mesh builder decides
//! whether they are acceptable.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::io::{MeshRecordSource, RecordKind, TetrahedronRecord, TriangleRecord, VertexRecord};
use crate::mesh_error::MeshError;

/// GMF reader for ASCII meshes.
#[derive(Debug, Default, Clone)]
pub struct GmfReader;

#[derive(Clone, Copy, Debug, Default)]
struct SectionSpan {
    /// Token index of the first record.
    start: usize,
    count: usize,
}

#[derive(Clone, Copy, Debug)]
struct Cursor {
    token: usize,
    remaining: usize,
}

/// Parsed GMF file, positioned per record kind.
#[derive(Debug, Clone)]
pub struct GmfSource {
    version: i32,
    dimension: i32,
    tokens: Vec<String>,
    spans: [Option<SectionSpan>; 3],
    cursors: [Option<Cursor>; 3],
}

impl GmfReader {
    /// Opens and parses the file at `path`.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<GmfSource, MeshError> {
        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file))
    }

    /// Parses a GMF mesh from `reader`.
    pub fn read<R: Read>(&self, mut reader: R) -> Result<GmfSource, MeshError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let contents = String::from_utf8(bytes).map_err(|_| {
            MeshError::MeshIoParse("binary .meshb files are not supported".into())
        })?;
        let tokens: Vec<String> = contents
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace)
            .map(str::to_owned)
            .collect();
        GmfSource::index(tokens)
    }

    fn skipped_arity(keyword: &str) -> Option<usize> {
        match keyword {
            "Edges" => Some(3),
            "Quadrilaterals" => Some(5),
            "Hexahedra" => Some(9),
            "Corners" | "Ridges" | "RequiredVertices" => Some(1),
            _ => None,
        }
    }
}

fn slot(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Vertices => 0,
        RecordKind::Tetrahedra => 1,
        RecordKind::Triangles => 2,
    }
}

fn parse_token<T: std::str::FromStr>(token: Option<&str>, what: &str) -> Result<T, MeshError> {
    let raw = token.ok_or_else(|| MeshError::MeshIoParse(format!("missing {what}")))?;
    raw.parse::<T>()
        .map_err(|_| MeshError::MeshIoParse(format!("invalid {what}: {raw}")))
}

impl GmfSource {
    fn index(tokens: Vec<String>) -> Result<Self, MeshError> {
        let mut version = 0;
        let mut dimension = 0;
        let mut spans = [None; 3];
        let mut i = 0usize;

        while i < tokens.len() {
            let keyword = tokens[i].as_str();
            i += 1;
            let kind = match keyword {
                "MeshVersionFormatted" => {
                    version = parse_token(tokens.get(i).map(String::as_str), "mesh version")?;
                    i += 1;
                    continue;
                }
                "Dimension" => {
                    dimension = parse_token(tokens.get(i).map(String::as_str), "dimension")?;
                    i += 1;
                    continue;
                }
                "End" => break,
                "Vertices" => Some(RecordKind::Vertices),
                "Tetrahedra" => Some(RecordKind::Tetrahedra),
                "Triangles" => Some(RecordKind::Triangles),
                other => {
                    if GmfReader::skipped_arity(other).is_none() {
                        return Err(MeshError::MeshIoParse(format!(
                            "unsupported keyword: {other}"
                        )));
                    }
                    None
                }
            };
            let arity = match kind {
                Some(RecordKind::Vertices) => {
                    if dimension <= 0 {
                        return Err(MeshError::MeshIoParse(
                            "Vertices section before Dimension".into(),
                        ));
                    }
                    dimension as usize + 1
                }
                Some(RecordKind::Tetrahedra) => 5,
                Some(RecordKind::Triangles) => 4,
                None => GmfReader::skipped_arity(keyword).unwrap_or(1),
            };
            let count: usize = parse_token(
                tokens.get(i).map(String::as_str),
                &format!("{keyword} count"),
            )?;
            i += 1;
            let end = count
                .checked_mul(arity)
                .and_then(|n| n.checked_add(i))
                .filter(|&end| end <= tokens.len())
                .ok_or_else(|| {
                    MeshError::MeshIoParse(format!(
                        "truncated {keyword} section: expected {count} records"
                    ))
                })?;
            if let Some(kind) = kind {
                if spans[slot(kind)].is_some() {
                    return Err(MeshError::MeshIoParse(format!(
                        "duplicate {keyword} section"
                    )));
                }
                spans[slot(kind)] = Some(SectionSpan { start: i, count });
            }
            i = end;
        }

        log::debug!(
            "GMF mesh: version {version}, dimension {dimension}, sections {:?}",
            spans
        );
        Ok(Self {
            version,
            dimension,
            tokens,
            spans,
            cursors: [None; 3],
        })
    }

    /// Returns the token window of the next record of `kind` and advances.
    fn take(&mut self, kind: RecordKind, arity: usize) -> Result<&[String], MeshError> {
        let cursor = self.cursors[slot(kind)].as_mut().ok_or_else(|| {
            MeshError::MeshIoParse(format!("{} read before goto", kind.keyword()))
        })?;
        if cursor.remaining == 0 {
            return Err(MeshError::MeshIoParse(format!(
                "no more {} records",
                kind.keyword()
            )));
        }
        let start = cursor.token;
        cursor.token += arity;
        cursor.remaining -= 1;
        Ok(&self.tokens[start..start + arity])
    }
}

impl MeshRecordSource for GmfSource {
    fn version(&self) -> i32 {
        self.version
    }

    fn dimension(&self) -> i32 {
        self.dimension
    }

    fn count(&self, kind: RecordKind) -> usize {
        self.spans[slot(kind)].map_or(0, |span| span.count)
    }

    fn goto(&mut self, kind: RecordKind) -> Result<(), MeshError> {
        let span = self.spans[slot(kind)].unwrap_or_default();
        self.cursors[slot(kind)] = Some(Cursor {
            token: span.start,
            remaining: span.count,
        });
        Ok(())
    }

    fn next_vertex(&mut self) -> Result<VertexRecord, MeshError> {
        if self.dimension != 3 {
            return Err(MeshError::IncompatibleMesh {
                version: self.version,
                dimension: self.dimension,
            });
        }
        let record = self.take(RecordKind::Vertices, 4)?;
        let mut fields = record.iter().map(String::as_str);
        let x = parse_token(fields.next(), "x coordinate")?;
        let y = parse_token(fields.next(), "y coordinate")?;
        let z = parse_token(fields.next(), "z coordinate")?;
        let label = parse_token(fields.next(), "vertex reference")?;
        Ok(([x, y, z], label))
    }

    fn next_tetrahedron(&mut self) -> Result<TetrahedronRecord, MeshError> {
        let record = self.take(RecordKind::Tetrahedra, 5)?;
        let mut v = [0i64; 4];
        for (slot, raw) in v.iter_mut().zip(record) {
            *slot = parse_token(Some(raw.as_str()), "tetrahedron vertex")?;
        }
        let label = parse_token(record.get(4).map(String::as_str), "tetrahedron reference")?;
        Ok((v, label))
    }

    fn next_triangle(&mut self) -> Result<TriangleRecord, MeshError> {
        let record = self.take(RecordKind::Triangles, 4)?;
        let mut v = [0i64; 3];
        for (slot, raw) in v.iter_mut().zip(record) {
            *slot = parse_token(Some(raw.as_str()), "triangle vertex")?;
        }
        let label = parse_token(record.get(3).map(String::as_str), "triangle reference")?;
        Ok((v, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TET: &str = "\
MeshVersionFormatted 2
Dimension
3
# four corners
Vertices
4
0 0 0 1
1 0 0 1
0 1 0 1
0 0 1 1
Corners
1
1
Tetrahedra
1
1 2 3 4 7
End
";

    #[test]
    fn reads_header_and_counts() {
        let src = GmfReader.read(TET.as_bytes()).unwrap();
        assert_eq!(src.version(), 2);
        assert_eq!(src.dimension(), 3);
        assert_eq!(src.count(RecordKind::Vertices), 4);
        assert_eq!(src.count(RecordKind::Tetrahedra), 1);
        assert_eq!(src.count(RecordKind::Triangles), 0);
    }

    #[test]
    fn reads_records_after_goto() {
        let mut src = GmfReader.read(TET.as_bytes()).unwrap();
        src.goto(RecordKind::Tetrahedra).unwrap();
        assert_eq!(src.next_tetrahedron().unwrap(), ([1, 2, 3, 4], 7));
        src.goto(RecordKind::Vertices).unwrap();
        src.next_vertex().unwrap();
        assert_eq!(src.next_vertex().unwrap(), ([1.0, 0.0, 0.0], 1));
    }

    #[test]
    fn truncated_section_rejected() {
        let text = "MeshVersionFormatted 2\nDimension 3\nVertices\n2\n0 0 0 1\n";
        let err = GmfReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MeshError::MeshIoParse(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn oversized_count_rejected() {
        for count in ["18446744073709551615", "3689348814741910324"] {
            let text = format!("MeshVersionFormatted 2\nDimension 3\nTetrahedra\n{count}\nEnd\n");
            let err = GmfReader.read(text.as_bytes()).unwrap_err();
            assert!(matches!(err, MeshError::MeshIoParse(_)), "unexpected error: {err:?}");
        }
    }

    #[test]
    fn unknown_keyword_rejected() {
        let text = "MeshVersionFormatted 2\nDimension 3\nPrisms\n0\nEnd\n";
        assert!(matches!(
            GmfReader.read(text.as_bytes()),
            Err(MeshError::MeshIoParse(_))
        ));
    }

    #[test]
    fn binary_input_rejected() {
        let bytes: &[u8] = &[0x01, 0x00, 0x00, 0x00, 0xff, 0xfe];
        assert!(matches!(
            GmfReader.read(bytes),
            Err(MeshError::MeshIoParse(_))
        ));
    }
}

//! Bare triangulation files: `f` records only.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, error};

use crate::error::{MeshError, Result};
use crate::types::Triangle;

/// Load the triangle list of a `.tri` file.
pub fn load_tri(path: &Path) -> Result<Vec<Triangle>> {
    let file = File::open(path)?;
    parse_tri(BufReader::new(file))
}

/// Parse triangulation text.
///
/// Lines not starting with the `f` key are ignored. The first bad vertex
/// reference aborts the parse with the offending line number.
pub fn parse_tri<R: BufRead>(reader: R) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::new();

    for (n, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        let line_no = n + 1;
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("f") {
            continue;
        }

        let refs = tokens
            .map(parse_reference)
            .collect::<std::result::Result<Vec<u32>, String>>()
            .map_err(|message| parse_error(line_no, message))?;

        let corners: [u32; 3] = refs.as_slice().try_into().map_err(|_| {
            parse_error(
                line_no,
                format!("expected 3 vertex references, found {}", refs.len()),
            )
        })?;
        triangles.push(Triangle::from(corners));
    }

    debug!(triangles = triangles.len(), "Parsed triangulation");
    Ok(triangles)
}

fn parse_error(line: usize, message: String) -> MeshError {
    error!(line, %message, "Error reading 'f' record");
    MeshError::Parse { line, message }
}

/// Accept `i`, `i/t` or `i/t/n` (an empty `t` as in `i//n` is tolerated) and
/// return the 0-based vertex index.
fn parse_reference(token: &str) -> std::result::Result<u32, String> {
    let mut parts = token.split('/');
    let vertex = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    if rest.len() > 2 {
        return Err(format!("too many components in vertex reference '{token}'"));
    }
    if rest.iter().any(|c| !c.is_empty() && c.parse::<i64>().is_err()) {
        return Err(format!("invalid vertex reference '{token}'"));
    }

    let idx: i64 = vertex
        .parse()
        .map_err(|_| format!("invalid vertex reference '{token}'"))?;
    if idx < 1 {
        return Err(format!("vertex index {idx} must be positive"));
    }
    u32::try_from(idx - 1).map_err(|_| format!("vertex index {idx} is out of range"))
}

/// Save a triangle list as a `.tri` file (1-based indices).
pub fn save_tri(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_tri(&mut out, triangles)?;
    out.flush()?;
    Ok(())
}

pub fn write_tri<W: Write>(out: &mut W, triangles: &[Triangle]) -> Result<()> {
    writeln!(out, "# triangulation written by mesh-engine")?;
    for tri in triangles {
        writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<Triangle>> {
        parse_tri(Cursor::new(text))
    }

    #[test]
    fn indices_are_zero_based() {
        let tris = parse("f 1 2 3\n").unwrap();
        assert_eq!(tris, vec![Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn all_reference_forms() {
        let tris = parse("f 1 2/5 3/6/9\nf 4//1 5//2 6//3\n").unwrap();
        assert_eq!(tris, vec![Triangle::new(0, 1, 2), Triangle::new(3, 4, 5)]);
    }

    #[test]
    fn other_lines_are_ignored() {
        let tris = parse("# header\nv 1 2 3\n\n  f 2 3 4\nfoo f 1 2 3\n").unwrap();
        assert_eq!(tris, vec![Triangle::new(1, 2, 3)]);
    }

    #[test]
    fn non_utf8_lines_are_tolerated() {
        let text = b"# caf\xe9\nf 1 2 3\r\n".to_vec();
        let tris = parse_tri(Cursor::new(text)).unwrap();
        assert_eq!(tris, vec![Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn non_numeric_reference_is_fatal() {
        let err = parse("f 1 2 3\nf 1 a 3\nf 4 5 6\n").unwrap_err();
        match err {
            MeshError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("'a'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn too_many_components_is_fatal() {
        assert!(parse("f 1/2/3/4 2 3\n").is_err());
    }

    #[test]
    fn zero_index_is_fatal() {
        let err = parse("f 0 1 2\n").unwrap_err();
        assert!(matches!(err, MeshError::Parse { line: 1, .. }));
    }

    #[test]
    fn reference_count_must_be_three() {
        let err = parse("f 1 2\n").unwrap_err();
        assert!(err.to_string().contains("expected 3 vertex references, found 2"));
        assert!(parse("f 1 2 3 4\n").is_err());
    }

    #[test]
    fn write_is_one_based() {
        let mut buf = Vec::new();
        write_tri(&mut buf, &[Triangle::new(0, 1, 2)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1), Some("f 1 2 3"));
        assert_eq!(parse(&text).unwrap(), vec![Triangle::new(0, 1, 2)]);
    }
}

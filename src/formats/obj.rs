//! Wavefront OBJ reader and writer.
//!
//! Only `v`, `vn`, `vt` and `f` records are interpreted; every other key
//! (groups, materials, smoothing, comments) is skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::{GeometryRef, MeshData};
use crate::error::Result;
use crate::types::{BoundingBoxBuilder, Normal, Real, TexCoord, Triangle, Vertex};

/// Load an OBJ file.
pub fn load_obj<T: Real>(path: &Path) -> Result<MeshData<T>> {
    let file = File::open(path)?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ text.
///
/// Malformed records are skipped with a warning. Face indices are converted
/// to 0-based but not range-checked here.
pub fn parse_obj<T: Real, R: BufRead>(reader: R) -> Result<MeshData<T>> {
    let mut data = MeshData::<T>::default();
    let mut bounds = BoundingBoxBuilder::default();
    let mut skipped = 0usize;

    for (n, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        let mut tokens = line.split_whitespace();
        let Some(key) = tokens.next() else {
            continue;
        };

        let ok = match key {
            "v" => match parse_components::<T, 3>(&mut tokens) {
                Some([x, y, z]) => {
                    let v = Vertex::new(x, y, z);
                    bounds.add(v);
                    data.vertices.push(v);
                    true
                }
                None => false,
            },
            "vn" => match parse_components::<T, 3>(&mut tokens) {
                Some([x, y, z]) => {
                    data.normals.push(Normal::new(x, y, z));
                    true
                }
                None => false,
            },
            "vt" => match parse_components::<T, 2>(&mut tokens) {
                Some([u, v]) => {
                    data.texcoords.push(TexCoord::new(u, v));
                    true
                }
                None => false,
            },
            "f" => parse_face(tokens, data.vertices.len(), &mut data.triangles),
            _ => true,
        };

        if !ok {
            skipped += 1;
            warn!(line = n + 1, key, "Skipping malformed OBJ record");
        }
    }

    data.bbox = bounds.finish();

    debug!(
        vertices = data.vertices.len(),
        normals = data.normals.len(),
        texcoords = data.texcoords.len(),
        triangles = data.triangles.len(),
        skipped,
        "Parsed OBJ"
    );

    Ok(data)
}

/// Read exactly `N` numeric components; trailing extras (e.g. `w`) are ignored.
fn parse_components<'a, T: Real, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Option<[T; N]> {
    let mut out = [T::zero(); N];
    for slot in out.iter_mut() {
        *slot = tokens.next()?.parse().ok()?;
    }
    Some(out)
}

/// Parse one `f` record and fan-triangulate it into `triangles`.
fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    vertex_count: usize,
    triangles: &mut Vec<Triangle>,
) -> bool {
    let refs: Option<Vec<u32>> = tokens
        .map(|token| resolve_index(token, vertex_count))
        .collect();

    let Some(refs) = refs else {
        return false;
    };
    if refs.len() < 3 {
        return false;
    }

    for i in 1..refs.len() - 1 {
        triangles.push(Triangle::new(refs[0], refs[i], refs[i + 1]));
    }
    true
}

/// Turn the vertex part of `i`, `i/t`, `i//n` or `i/t/n` into a 0-based index.
///
/// Negative indices count back from the most recently read vertex.
fn resolve_index(token: &str, vertex_count: usize) -> Option<u32> {
    let idx: i64 = token.split('/').next()?.parse().ok()?;
    let resolved = match idx {
        i if i > 0 => i - 1,
        i if i < 0 => vertex_count as i64 + i,
        _ => return None,
    };
    u32::try_from(resolved).ok()
}

/// Save geometry as OBJ.
pub fn save_obj<T: Real>(path: &Path, geometry: &GeometryRef<'_, T>) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_obj(&mut out, geometry)?;
    out.flush()?;
    Ok(())
}

/// Emit `v`, `vn`, `vt` then `f` records; face indices are written 1-based.
pub fn write_obj<T: Real, W: Write>(out: &mut W, geometry: &GeometryRef<'_, T>) -> Result<()> {
    writeln!(out, "# wavefront obj file written by mesh-engine")?;
    for v in geometry.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for n in geometry.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tc in geometry.texcoords {
        writeln!(out, "vt {} {}", tc.x, tc.y)?;
    }
    for tri in geometry.triangles {
        writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }
    Ok(())
}

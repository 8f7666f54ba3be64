pub mod obj;
pub mod ply;
pub mod tri;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::types::{BoundingBox, Normal, Real, TexCoord, Triangle, Vertex};

/// Geometry arrays produced by a format parser.
#[derive(Debug, Clone, Default)]
pub struct MeshData<T> {
    pub vertices: Vec<Vertex<T>>,
    pub normals: Vec<Normal<T>>,
    pub texcoords: Vec<TexCoord<T>>,
    pub triangles: Vec<Triangle>,
    /// Set when the parser already reduced the bounding box while reading.
    pub bbox: Option<BoundingBox<T>>,
}

/// Borrowed geometry handed to the format writers.
#[derive(Debug, Clone, Copy)]
pub struct GeometryRef<'a, T> {
    pub vertices: &'a [Vertex<T>],
    pub normals: &'a [Normal<T>],
    pub texcoords: &'a [TexCoord<T>],
    pub triangles: &'a [Triangle],
}

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Obj,
    Ply,
    /// Bare triangulation: `f` lines only, no vertex data.
    Tri,
}

impl MeshFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "obj" => Ok(MeshFormat::Obj),
            "ply" => Ok(MeshFormat::Ply),
            "tri" => Ok(MeshFormat::Tri),
            _ => Err(MeshError::UnsupportedFormat(format!(".{ext}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeshFormat::Obj => "OBJ",
            MeshFormat::Ply => "PLY",
            MeshFormat::Tri => "TRI",
        }
    }

    /// Whether files of this format carry vertex positions.
    ///
    /// Connectivity is only derived for formats that do.
    pub fn carries_vertices(&self) -> bool {
        !matches!(self, MeshFormat::Tri)
    }

    /// Parse `path` with this format's reader.
    pub fn load<T: Real>(&self, path: &Path) -> Result<MeshData<T>> {
        match self {
            MeshFormat::Obj => obj::load_obj(path),
            MeshFormat::Ply => ply::load_ply(path),
            MeshFormat::Tri => Ok(MeshData {
                triangles: tri::load_tri(path)?,
                ..Default::default()
            }),
        }
    }

    /// Write `geometry` to `path` with this format's writer.
    pub fn save<T: Real>(&self, path: &Path, geometry: &GeometryRef<'_, T>) -> Result<()> {
        match self {
            MeshFormat::Obj => obj::save_obj(path, geometry),
            MeshFormat::Ply => ply::save_ply(path, geometry),
            MeshFormat::Tri => tri::save_tri(path, geometry.triangles),
        }
    }
}

impl std::fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_obj() {
        assert_eq!(
            MeshFormat::from_path(Path::new("model.obj")).unwrap(),
            MeshFormat::Obj
        );
    }

    #[test]
    fn format_detection_tri() {
        assert_eq!(
            MeshFormat::from_path(Path::new("faces.tri")).unwrap(),
            MeshFormat::Tri
        );
    }

    #[test]
    fn format_detection_ply() {
        assert_eq!(
            MeshFormat::from_path(Path::new("cloud.ply")).unwrap(),
            MeshFormat::Ply
        );
    }

    #[test]
    fn format_detection_case_insensitive() {
        assert_eq!(
            MeshFormat::from_path(Path::new("Model.OBJ")).unwrap(),
            MeshFormat::Obj
        );
        assert_eq!(
            MeshFormat::from_path(Path::new("Faces.Tri")).unwrap(),
            MeshFormat::Tri
        );
    }

    #[test]
    fn format_detection_unsupported() {
        let err = MeshFormat::from_path(Path::new("file.fbx")).unwrap_err();
        assert!(matches!(err, MeshError::UnsupportedFormat(_)));
        assert!(MeshFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn only_triangulation_lacks_vertices() {
        assert!(MeshFormat::Obj.carries_vertices());
        assert!(MeshFormat::Ply.carries_vertices());
        assert!(!MeshFormat::Tri.carries_vertices());
    }

    #[test]
    fn display_names() {
        assert_eq!(MeshFormat::Obj.to_string(), "OBJ");
        assert_eq!(MeshFormat::Ply.to_string(), "PLY");
        assert_eq!(MeshFormat::Tri.to_string(), "TRI");
    }
}

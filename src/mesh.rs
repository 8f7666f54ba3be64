use std::path::Path;

use tracing::{debug, error, info};

use crate::error::Result;
use crate::formats::{GeometryRef, MeshData, MeshFormat};
use crate::geometry::{Connectivity, compute_bounding_box, estimate_vertex_normals};
use crate::types::{BoundingBox, Normal, Real, TexCoord, Triangle, Vertex};

/// Load lifecycle of a [`Mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshState {
    #[default]
    Empty,
    Loading,
    Loaded,
    Failed,
}

/// Triangle mesh container.
///
/// Owns every geometry array and the data derived from them. Generic over
/// the float precision `T` (`f32` or `f64`).
#[derive(Debug, Clone, Default)]
pub struct Mesh<T> {
    vertex: Vec<Vertex<T>>,
    normal: Vec<Normal<T>>,
    texcoord: Vec<TexCoord<T>>,
    triangle: Vec<Triangle>,
    connectivity: Connectivity,
    /// `Some` once the bounding box has been computed.
    bbox: Option<BoundingBox<T>>,
    state: MeshState,
}

/// Byte views of a loaded mesh, ready for GPU upload.
#[derive(Debug, Clone, Copy)]
pub struct RenderBuffers<'a> {
    pub vertices: &'a [u8],
    pub normals: &'a [u8],
    pub texcoords: &'a [u8],
    pub indices: &'a [u8],
    pub index_count: usize,
    /// Camera target: centre of the bounding box.
    pub center: glam::Vec3,
    /// Half the bounding box diagonal.
    pub radius: f32,
}

impl<T: Real> Mesh<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh and load `path` into it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut mesh = Self::new();
        mesh.load(path)?;
        Ok(mesh)
    }

    /// Load `.obj` or `.tri` geometry, replacing the current contents.
    ///
    /// On failure the mesh is left empty in the `Failed` state.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.clear();
        self.state = MeshState::Loading;
        info!(path = %path.display(), "Loading mesh");

        match self.load_inner(path) {
            Ok(format) => {
                self.state = MeshState::Loaded;
                info!(
                    format = %format,
                    vertices = self.vertex.len(),
                    triangles = self.triangle.len(),
                    "Mesh loaded"
                );
                Ok(())
            }
            Err(e) => {
                error!(%e, path = %path.display(), "Failed to load mesh");
                self.clear();
                self.state = MeshState::Failed;
                Err(e)
            }
        }
    }

    fn load_inner(&mut self, path: &Path) -> Result<MeshFormat> {
        let format = MeshFormat::from_path(path)?;
        let data: MeshData<T> = format.load(path)?;

        self.vertex = data.vertices;
        self.normal = data.normals;
        self.texcoord = data.texcoords;
        self.triangle = data.triangles;
        self.bbox = data.bbox;

        if format.carries_vertices() && !self.vertex.is_empty() && !self.triangle.is_empty() {
            self.build_connectivity()?;
        }
        if self.bbox.is_none() && !self.vertex.is_empty() {
            self.compute_bounding_box();
        }
        Ok(format)
    }

    /// Write the mesh to `path`; the format follows the extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = MeshFormat::from_path(path)?;
        format.save(path, &self.geometry())?;
        info!(format = %format, path = %path.display(), "Mesh saved");
        Ok(())
    }

    /// Derive the per-vertex incident-face lists from the triangle array.
    ///
    /// Panics if the mesh has no vertices or no triangles.
    pub fn build_connectivity(&mut self) -> Result<()> {
        self.connectivity = Connectivity::build(self.vertex.len(), &self.triangle)?;
        debug!(
            entries = self.connectivity.total_entries(),
            "Built connectivity"
        );
        Ok(())
    }

    /// Replace the normal array with angle-weighted vertex normals.
    ///
    /// Panics if connectivity has not been built.
    pub fn compute_vertex_normal(&mut self) {
        self.normal = estimate_vertex_normals(&self.vertex, &self.connectivity);
        debug!(normals = self.normal.len(), "Computed vertex normals");
    }

    /// Recompute the bounding box from the vertex array.
    ///
    /// Panics if the mesh has no vertices.
    pub fn compute_bounding_box(&mut self) {
        let bbox = compute_bounding_box(&self.vertex);
        debug!(
            min = ?bbox.min.to_array(),
            max = ?bbox.max.to_array(),
            "Computed bounding box"
        );
        self.bbox = Some(bbox);
    }

    fn clear(&mut self) {
        self.vertex.clear();
        self.normal.clear();
        self.texcoord.clear();
        self.triangle.clear();
        self.connectivity = Connectivity::default();
        self.bbox = None;
    }

    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertex
    }

    pub fn normals(&self) -> &[Normal<T>] {
        &self.normal
    }

    pub fn texcoords(&self) -> &[TexCoord<T>] {
        &self.texcoord
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangle
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox<T>> {
        self.bbox.as_ref()
    }

    pub fn is_bbox_computed(&self) -> bool {
        self.bbox.is_some()
    }

    pub fn state(&self) -> MeshState {
        self.state
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.triangle.is_empty()
    }

    pub fn geometry(&self) -> GeometryRef<'_, T> {
        GeometryRef {
            vertices: &self.vertex,
            normals: &self.normal,
            texcoords: &self.texcoord,
            triangles: &self.triangle,
        }
    }

    /// Borrow the arrays as GPU-ready bytes.
    pub fn render_buffers(&self) -> RenderBuffers<'_> {
        let (center, radius) = self
            .bbox
            .map(|bb| (bb.center.to_vec3(), bb.diagonal().as_f32() * 0.5))
            .unwrap_or((glam::Vec3::ZERO, 0.0));

        RenderBuffers {
            vertices: bytemuck::cast_slice(&self.vertex),
            normals: bytemuck::cast_slice(&self.normal),
            texcoords: bytemuck::cast_slice(&self.texcoord),
            indices: bytemuck::cast_slice(&self.triangle),
            index_count: self.triangle.len() * 3,
            center,
            radius,
        }
    }
}

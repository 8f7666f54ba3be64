//! Per-vertex incident-face bookkeeping.
//!
//! Each vertex owns a flat list read in pairs `(B, C)`: the two other
//! corners of one incident triangle, in winding order. Shared edges are not
//! deduplicated, so a vertex gets one pair per incident face.

use crate::error::{MeshError, Result};
use crate::types::Triangle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    neighbors: Vec<Vec<u32>>,
}

impl Connectivity {
    /// Build the connectivity of `triangles` over `vertex_count` vertices.
    ///
    /// Panics if either input is empty. Returns `MeshError::Validation` if a
    /// triangle references a missing vertex or repeats one.
    pub fn build(vertex_count: usize, triangles: &[Triangle]) -> Result<Self> {
        assert!(
            vertex_count != 0 && !triangles.is_empty(),
            "connectivity requires vertices and triangles"
        );

        for (t, tri) in triangles.iter().enumerate() {
            if let Some(&idx) = tri.v.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::Validation(format!(
                    "triangle {t} references vertex {idx} but the mesh has {vertex_count} vertices"
                )));
            }
            if tri.is_degenerate() {
                return Err(MeshError::Validation(format!(
                    "triangle {t} repeats a vertex: {:?}",
                    tri.v
                )));
            }
        }

        let mut neighbors = vec![Vec::new(); vertex_count];
        for tri in triangles {
            for e in 0..3 {
                let (corner, next, after) = tri.rotation(e);
                let list = &mut neighbors[corner as usize];
                list.push(next);
                list.push(after);
            }
        }

        Ok(Self { neighbors })
    }

    /// Number of vertex slots.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Flat neighbor list of vertex `v`.
    pub fn neighbors(&self, v: usize) -> &[u32] {
        &self.neighbors[v]
    }

    /// Incident-face corner pairs of vertex `v`.
    pub fn pairs(&self, v: usize) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.neighbors[v].chunks_exact(2).map(|p| (p[0], p[1]))
    }

    /// Sum of all neighbor-list lengths; `6 * triangle_count`.
    pub fn total_entries(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    pub fn as_slice(&self) -> &[Vec<u32>] {
        &self.neighbors
    }
}

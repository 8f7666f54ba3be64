//! Angle-weighted vertex normals.
//!
//! Every incident face contributes its unit normal scaled by the angle it
//! subtends at the vertex; the sum is normalized once at the end.

use rayon::prelude::*;

use super::Connectivity;
use crate::types::{Edge, Normal, Real, Vertex};

/// Estimate one unit normal per vertex, in parallel over vertices.
///
/// Degenerate corners (zero-length edge or zero-area face) contribute
/// nothing. A vertex left without any contribution gets the zero vector.
///
/// Panics if `connectivity` is empty or does not cover `vertices`.
pub fn estimate_vertex_normals<T: Real>(
    vertices: &[Vertex<T>],
    connectivity: &Connectivity,
) -> Vec<Normal<T>> {
    assert!(
        !connectivity.is_empty(),
        "vertex normals require connectivity"
    );
    assert_eq!(
        connectivity.len(),
        vertices.len(),
        "connectivity is stale for this vertex array"
    );

    connectivity
        .as_slice()
        .par_iter()
        .enumerate()
        .map(|(v, neighbors)| vertex_normal(vertices, v, neighbors))
        .collect()
}

fn vertex_normal<T: Real>(vertices: &[Vertex<T>], v: usize, neighbors: &[u32]) -> Normal<T> {
    let a = vertices[v];
    let mut weighted = Normal::zero();

    for pair in neighbors.chunks_exact(2) {
        let mut ab: Edge<T> = vertices[pair[0] as usize] - a;
        let mut ac: Edge<T> = vertices[pair[1] as usize] - a;
        if !(ab.normalize() && ac.normalize()) {
            continue;
        }

        // |ab ^ ac| is sin(angle) for unit edges, independent of scale.
        let mut n = ab ^ ac;
        if !n.normalize() {
            continue;
        }

        let cos = (ab * ac).max(-T::one()).min(T::one());
        weighted += n * cos.acos();
    }

    if weighted.normalize() {
        weighted
    } else {
        Normal::zero()
    }
}

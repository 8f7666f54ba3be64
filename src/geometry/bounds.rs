use crate::types::{BoundingBox, Real, Vertex};

/// Scan all vertex positions and return the axis-aligned bounding box.
///
/// Panics on an empty slice.
pub fn compute_bounding_box<T: Real>(vertices: &[Vertex<T>]) -> BoundingBox<T> {
    assert!(
        !vertices.is_empty(),
        "bounding box requires at least one vertex"
    );

    let first = vertices[0];
    let (min, max) = vertices
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    BoundingBox::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBoxBuilder;

    #[test]
    fn matches_independent_reduction() {
        let points = [
            Vertex::new(0.5_f64, -3.0, 2.0),
            Vertex::new(-1.25, 4.0, 0.0),
            Vertex::new(2.0, 1.0, -6.5),
            Vertex::new(0.0, 0.0, 0.0),
        ];
        let bb = compute_bounding_box(&points);

        let xs = points.iter().map(|p| p.x);
        let ys = points.iter().map(|p| p.y);
        let zs = points.iter().map(|p| p.z);
        assert_eq!(bb.min.x, xs.clone().fold(f64::INFINITY, f64::min));
        assert_eq!(bb.max.x, xs.fold(f64::NEG_INFINITY, f64::max));
        assert_eq!(bb.min.y, ys.clone().fold(f64::INFINITY, f64::min));
        assert_eq!(bb.max.y, ys.fold(f64::NEG_INFINITY, f64::max));
        assert_eq!(bb.min.z, zs.clone().fold(f64::INFINITY, f64::min));
        assert_eq!(bb.max.z, zs.fold(f64::NEG_INFINITY, f64::max));
        assert_eq!(bb.center, Vertex::new(0.375, 0.5, -2.25));

        for p in &points {
            assert!(bb.contains_point(*p));
        }
    }

    #[test]
    fn single_vertex_has_zero_volume() {
        let v = Vertex::new(1.0_f32, -2.0, 3.5);
        let bb = compute_bounding_box(&[v]);
        assert_eq!(bb.min, v);
        assert_eq!(bb.max, v);
        assert_eq!(bb.center, v);
        assert_eq!(bb.diagonal(), 0.0);
    }

    #[test]
    fn agrees_with_incremental_builder() {
        let points: Vec<Vertex<f32>> = (0..50)
            .map(|i| {
                let t = i as f32 * 0.37;
                Vertex::new(t.sin() * 3.0, t.cos() * 2.0, t - 9.0)
            })
            .collect();

        let mut builder = BoundingBoxBuilder::default();
        for p in &points {
            builder.add(*p);
        }
        assert_eq!(builder.finish(), Some(compute_bounding_box(&points)));
    }

    #[test]
    #[should_panic(expected = "at least one vertex")]
    fn empty_input_panics() {
        compute_bounding_box::<f32>(&[]);
    }
}

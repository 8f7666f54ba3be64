use super::{Real, Vertex};

/// Axis-aligned bounding box in 3-D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T> {
    pub min: Vertex<T>,
    pub max: Vertex<T>,
    pub center: Vertex<T>,
}

impl<T: Real> BoundingBox<T> {
    /// Build a box from its corners; the centre is derived.
    pub fn new(min: Vertex<T>, max: Vertex<T>) -> Self {
        let half = T::one() / (T::one() + T::one());
        Self {
            min,
            max,
            center: (min + max) * half,
        }
    }

    /// Length of the space diagonal.
    pub fn diagonal(&self) -> T {
        (self.max - self.min).norm()
    }

    /// Whether a point lies inside (or on the boundary of) the box.
    pub fn contains_point(&self, p: Vertex<T>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

/// Running min/max reduction, fed one vertex at a time.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBoxBuilder<T> {
    min: Vertex<T>,
    max: Vertex<T>,
    count: usize,
}

impl<T: Real> Default for BoundingBoxBuilder<T> {
    fn default() -> Self {
        Self {
            min: Vertex::splat(T::max_value()),
            max: Vertex::splat(T::min_value()),
            count: 0,
        }
    }
}

impl<T: Real> BoundingBoxBuilder<T> {
    pub fn add(&mut self, v: Vertex<T>) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.count += 1;
    }

    /// Finalize the box; `None` when no vertex was added.
    pub fn finish(&self) -> Option<BoundingBox<T>> {
        (self.count > 0).then(|| BoundingBox::new(self.min, self.max))
    }
}

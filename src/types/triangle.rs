use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

/// Three 0-based vertex indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Triangle {
    pub v: [u32; 3],
}

impl Triangle {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { v: [a, b, c] }
    }

    pub fn corners(&self) -> [u32; 3] {
        self.v
    }

    /// Corner `e` followed by the two other corners in winding order.
    pub fn rotation(&self, e: usize) -> (u32, u32, u32) {
        (self.v[e % 3], self.v[(e + 1) % 3], self.v[(e + 2) % 3])
    }

    /// Whether two corners share the same vertex.
    pub fn is_degenerate(&self) -> bool {
        self.v[0] == self.v[1] || self.v[1] == self.v[2] || self.v[0] == self.v[2]
    }
}

impl From<[u32; 3]> for Triangle {
    fn from(v: [u32; 3]) -> Self {
        Self { v }
    }
}

impl Index<usize> for Triangle {
    type Output = u32;

    fn index(&self, i: usize) -> &u32 {
        &self.v[i]
    }
}

impl IndexMut<usize> for Triangle {
    fn index_mut(&mut self, i: usize) -> &mut u32 {
        &mut self.v[i]
    }
}

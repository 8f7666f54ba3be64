pub mod bbox;
pub mod real;
pub mod triangle;
pub mod vector;

pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use real::Real;
pub use triangle::Triangle;
pub use vector::{Edge, Normal, TexCoord, Vector2, Vector3, Vertex};

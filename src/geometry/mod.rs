pub mod bounds;
pub mod connectivity;
pub mod normals;

pub use bounds::compute_bounding_box;
pub use connectivity::Connectivity;
pub use normals::estimate_vertex_normals;

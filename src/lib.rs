pub mod config;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod mesh;
pub mod pipeline;
pub mod types;

pub use config::{PipelineConfig, Precision};
pub use error::{MeshError, Result};
pub use formats::MeshFormat;
pub use geometry::Connectivity;
pub use mesh::{Mesh, MeshState, RenderBuffers};
pub use pipeline::Pipeline;

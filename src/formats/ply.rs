//! PLY placeholder. Both directions report `Unimplemented` without touching
//! the filesystem.

use std::path::Path;

use tracing::warn;

use super::{GeometryRef, MeshData};
use crate::error::{MeshError, Result};
use crate::types::Real;

pub fn load_ply<T: Real>(path: &Path) -> Result<MeshData<T>> {
    warn!(path = %path.display(), "PLY loading is not implemented");
    Err(MeshError::Unimplemented("PLY loading"))
}

pub fn save_ply<T: Real>(path: &Path, _geometry: &GeometryRef<'_, T>) -> Result<()> {
    warn!(path = %path.display(), "PLY saving is not implemented");
    Err(MeshError::Unimplemented("PLY saving"))
}

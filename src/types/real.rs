use std::fmt::{Debug, Display};
use std::str::FromStr;

use bytemuck::Pod;
use num_traits::Float;

/// Floating-point precision a mesh is stored in.
///
/// Implemented for `f32` and `f64`; every geometry type is generic over it.
pub trait Real:
    Float + FromStr + Display + Debug + Default + Pod + Send + Sync + 'static
{
    fn as_f32(self) -> f32;
    fn as_f64(self) -> f64;
}

impl Real for f32 {
    #[inline]
    fn as_f32(self) -> f32 {
        self
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    #[inline]
    fn as_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

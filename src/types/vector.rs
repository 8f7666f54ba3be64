use std::ops::{Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use super::Real;

/// Three-component vector used for positions, normals and edges.
///
/// `*` between two vectors is the dot product, `^` is the cross product.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vertex<T> = Vector3<T>;
pub type Normal<T> = Vector3<T>;
pub type Edge<T> = Vector3<T>;

// SAFETY: `Real` requires `Pod`, so `T` is `f32` or `f64`; three `#[repr(C)]`
// fields of one such type have no padding and any bit pattern is valid.
unsafe impl<T: Real> Zeroable for Vector3<T> {}
unsafe impl<T: Real> Pod for Vector3<T> {}

impl<T: Real> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    pub fn norm_squared(&self) -> T {
        *self * *self
    }

    /// Euclidean length.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Divide by the Euclidean norm in place.
    ///
    /// Vectors whose norm is not above `T::epsilon()` are left untouched and
    /// `false` is returned.
    pub fn normalize(&mut self) -> bool {
        let n = self.norm();
        if n > T::epsilon() {
            *self /= n;
            true
        } else {
            false
        }
    }

    /// Componentwise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Componentwise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    pub fn to_vec3(self) -> glam::Vec3 {
        glam::Vec3::new(self.x.as_f32(), self.y.as_f32(), self.z.as_f32())
    }

    pub fn to_dvec3(self) -> glam::DVec3 {
        glam::DVec3::new(self.x.as_f64(), self.y.as_f64(), self.z.as_f64())
    }
}

impl<T: Real> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Real> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Real> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Real> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Real> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: Real> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl<T: Real> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

/// Dot product.
impl<T: Real> Mul for Vector3<T> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

/// Cross product.
impl<T: Real> BitXor for Vector3<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

/// Two-component vector, used for texture coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

pub type TexCoord<T> = Vector2<T>;

// SAFETY: same argument as `Vector3`, with two fields of one `Real` type.
unsafe impl<T: Real> Zeroable for Vector2<T> {}
unsafe impl<T: Real> Pod for Vector2<T> {}

impl<T: Real> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Real> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Real> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Real> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(4.0_f32, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn dot_and_cross() {
        let x = Vector3::new(1.0_f64, 0.0, 0.0);
        let y = Vector3::new(0.0_f64, 1.0, 0.0);

        assert_eq!(x * y, 0.0);
        assert_eq!(x * x, 1.0);
        assert_eq!(x ^ y, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y ^ x, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalize_unit_length() {
        let mut v = Vector3::new(3.0_f32, 4.0, 12.0);
        assert!(v.normalize());
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.x, 3.0 / 13.0, epsilon = 1e-6);
    }

    #[test]
    fn normalize_zero_vector_is_guarded() {
        let mut v = Vector3::<f64>::zero();
        assert!(!v.normalize());
        assert_eq!(v, Vector3::zero());
        assert!(!v.x.is_nan());
    }

    #[test]
    fn componentwise_min_max() {
        let a = Vector3::new(1.0_f32, 5.0, -2.0);
        let b = Vector3::new(3.0_f32, -1.0, 0.0);
        assert_eq!(a.min(b), Vector3::new(1.0, -1.0, -2.0));
        assert_eq!(a.max(b), Vector3::new(3.0, 5.0, 0.0));
    }

    #[test]
    fn glam_conversion() {
        let v = Vector3::new(1.5_f64, -2.0, 0.25);
        assert_eq!(v.to_vec3(), glam::Vec3::new(1.5, -2.0, 0.25));
        assert_eq!(v.to_dvec3(), glam::DVec3::new(1.5, -2.0, 0.25));
    }

    #[test]
    fn pod_layout() {
        let verts = [Vector3::new(1.0_f32, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let uvs = [Vector2::new(0.25_f32, 0.75)];
        let bytes: &[u8] = bytemuck::cast_slice(&uvs);
        assert_eq!(bytes.len(), 8);
    }

    #[test]
    fn texcoord_arithmetic() {
        let a = Vector2::new(0.5_f32, 0.25);
        let b = Vector2::new(0.25_f32, 0.25);
        assert_eq!(a + b, Vector2::new(0.75, 0.5));
        assert_eq!(a - b, Vector2::new(0.25, 0.0));
        assert_eq!(a * 2.0, Vector2::new(1.0, 0.5));
    }
}

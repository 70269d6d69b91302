//! Quaternions and quaternion rotation of 3-vectors
//!
//! A quaternion q = w + xi + yj + zk rotates a 3-vector v by embedding it as the
//! pure quaternion p = (0, v) and forming a sandwich product:
//!
//! - active rotation (rotate the vector in a fixed frame): `q * p * q⁻¹`
//! - passive rotation (rotate the frame around a fixed vector): `q⁻¹ * p * q`
//!
//! The rotated vector is read from the (x, y, z) slots of the result. For unit
//! quaternions `q⁻¹ = conj(q)`.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::MathError;

/// A real 3-vector [x, y, z]
pub type Vec3 = [f64; 3];

/// Quaternion with scalar part `w` and imaginary parts `x`, `y`, `z`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar component
    pub w: f64,
    /// i component
    pub x: f64,
    /// j component
    pub y: f64,
    /// k component
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Embed a 3-vector as a pure quaternion (0, x, y, z)
    #[inline]
    pub const fn pure(v: Vec3) -> Self {
        Self::new(0.0, v[0], v[1], v[2])
    }

    /// Create a unit quaternion rotating by `angle` radians about `axis`
    ///
    /// q = cos(θ/2) + sin(θ/2) * (axis / |axis|)
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Result<Self, MathError> {
        let len = vector_length(axis);
        if len == 0.0 {
            return Err(MathError::Domain("rotation axis has zero length"));
        }
        let half = angle * 0.5;
        let s = half.sin() / len;
        Ok(Self::new(half.cos(), axis[0] * s, axis[1] * s, axis[2] * s))
    }

    /// The imaginary part as a 3-vector
    #[inline]
    pub fn vector_part(&self) -> Vec3 {
        [self.x, self.y, self.z]
    }

    /// Four-component dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Negate the imaginary parts
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scale to unit magnitude
    pub fn normalize(&self) -> Result<Self, MathError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(*self * (1.0 / mag))
    }

    /// Multiplicative inverse, conj(q) / |q|²
    pub fn inverse(&self) -> Result<Self, MathError> {
        let mag_sq = self.magnitude_squared();
        if mag_sq == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(self.conjugate() * (1.0 / mag_sq))
    }

    /// Angle between two quaternions viewed as 4-vectors, in radians
    pub fn angle_with(&self, other: &Self) -> Result<f64, MathError> {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return Err(MathError::Domain("angle with a zero-magnitude quaternion"));
        }
        Ok((self.dot(other) / denom).clamp(-1.0, 1.0).acos())
    }

    /// Rotate `v` in a fixed frame: q * (0, v) * q⁻¹
    pub fn active_rotation(&self, v: Vec3) -> Result<Vec3, MathError> {
        let rotated = *self * Self::pure(v) * self.inverse()?;
        Ok(rotated.vector_part())
    }

    /// Rotate the frame around a fixed `v`: q⁻¹ * (0, v) * q
    pub fn passive_rotation(&self, v: Vec3) -> Result<Vec3, MathError> {
        let rotated = self.inverse()? * Self::pure(v) * *self;
        Ok(rotated.vector_part())
    }
}

// Operator overloads

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::AddAssign for Quaternion {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.w += other.w;
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::SubAssign for Quaternion {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.w -= other.w;
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

/// Hamilton product. Not commutative: `a * b != b * a` in general.
impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, o: Self) -> Self {
        Self::new(
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y - self.x * o.z + self.y * o.w + self.z * o.x,
            self.w * o.z + self.x * o.y - self.y * o.x + self.z * o.w,
        )
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.w * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

fn vector_length(v: Vec3) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Euclidean distance between two 3-vectors
pub fn vector_distance(a: Vec3, b: Vec3) -> f64 {
    vector_length([a[0] - b[0], a[1] - b[1], a[2] - b[2]])
}

/// Angle between two 3-vectors, in radians
pub fn vector_angle(a: Vec3, b: Vec3) -> Result<f64, MathError> {
    let denom = vector_length(a) * vector_length(b);
    if denom == 0.0 {
        return Err(MathError::Domain("angle with a zero-length vector"));
    }
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    Ok((dot / denom).clamp(-1.0, 1.0).acos())
}

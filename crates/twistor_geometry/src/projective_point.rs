//! Points of complex projective 3-space
//!
//! A [`ProjectivePoint`] holds homogeneous coordinates (w, x, y, z). Any nonzero
//! multiple of the coordinates names the same point. Points with |w| = 0 lie at
//! infinity and have no affine image.
//!
//! Every operation has a pure form returning a new point (`scaled`,
//! `normalized`, `rotated`, `to_affine`). `scale`, `normalize` and `rotate`
//! update the receiver in place.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use twistor_math::{Complex, MathError, Quaternion};

use crate::mat4::{self, ComplexMat4};
use crate::GeometryError;

/// Homogeneous point (w, x, y, z) with complex coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct ProjectivePoint {
    pub w: Complex,
    pub x: Complex,
    pub y: Complex,
    pub z: Complex,
}

impl ProjectivePoint {
    #[inline]
    pub const fn new(w: Complex, x: Complex, y: Complex, z: Complex) -> Self {
        Self { w, x, y, z }
    }

    /// Point with purely real coordinates
    pub const fn from_real(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self::new(
            Complex::from_real(w),
            Complex::from_real(x),
            Complex::from_real(y),
            Complex::from_real(z),
        )
    }

    /// Coordinates in (w, x, y, z) order
    #[inline]
    pub fn coords(&self) -> [Complex; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// The eight real scalars `[w.re, w.im, x.re, x.im, y.re, y.im, z.re, z.im]`
    #[inline]
    pub fn as_scalars(&self) -> &[f64; 8] {
        bytemuck::cast_ref(self)
    }

    /// True when |w| = 0
    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        self.w.magnitude() == 0.0
    }

    /// True when every coordinate has magnitude below `tolerance`
    pub fn is_zero(&self, tolerance: f64) -> bool {
        self.coords().iter().all(|c| c.magnitude() < tolerance)
    }

    /// Multiply every coordinate by a real factor
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.w * factor, self.x * factor, self.y * factor, self.z * factor)
    }

    /// In-place form of [`scaled`](Self::scaled)
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        *self = self.scaled(factor);
    }

    /// Scale by 1/|w| so that |w| = 1
    ///
    /// Only the magnitude of w becomes 1; its phase is kept. Use
    /// [`to_affine`](Self::to_affine) to make w exactly 1.
    pub fn normalized(&self) -> Result<Self, GeometryError> {
        let mag_w = self.w.magnitude();
        if mag_w == 0.0 {
            return Err(GeometryError::PointAtInfinity);
        }
        Ok(self.scaled(1.0 / mag_w))
    }

    /// In-place form of [`normalized`](Self::normalized). The point is left
    /// untouched on failure.
    pub fn normalize(&mut self) -> Result<(), GeometryError> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Representative with w = 1: (1, x/w, y/w, z/w)
    pub fn to_affine(&self) -> Result<Self, GeometryError> {
        let [x, y, z] = self.to_cartesian()?;
        Ok(Self::new(Complex::ONE, x, y, z))
    }

    /// Affine coordinates (x/w, y/w, z/w)
    pub fn to_cartesian(&self) -> Result<[Complex; 3], GeometryError> {
        if self.is_at_infinity() {
            return Err(GeometryError::PointAtInfinity);
        }
        Ok([
            self.x.divide(self.w)?,
            self.y.divide(self.w)?,
            self.z.divide(self.w)?,
        ])
    }

    /// Euclidean-like distance over the x, y, z coordinates
    ///
    /// sqrt(|x1-x2|² + |y1-y2|² + |z1-z2|²). This is computed on raw homogeneous
    /// coordinates, so it is not invariant under rescaling of either point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = (self.x - other.x).magnitude();
        let dy = (self.y - other.y).magnitude();
        let dz = (self.z - other.z).magnitude();
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Angle between the (x, y, z) parts of two points, in radians
    ///
    /// The numerator uses only the real parts; the norms use the full complex
    /// magnitudes.
    pub fn angle_with(&self, other: &Self) -> Result<f64, GeometryError> {
        let mag_self = self.spatial_magnitude();
        let mag_other = other.spatial_magnitude();
        if mag_self == 0.0 || mag_other == 0.0 {
            return Err(MathError::Domain("angle with a zero-magnitude point").into());
        }
        let dot = self.x.re * other.x.re + self.y.re * other.y.re + self.z.re * other.z.re;
        Ok((dot / (mag_self * mag_other)).clamp(-1.0, 1.0).acos())
    }

    fn spatial_magnitude(&self) -> f64 {
        (self.x.magnitude_squared() + self.y.magnitude_squared() + self.z.magnitude_squared())
            .sqrt()
    }

    /// Rotate the real parts of (x, y, z) by `q * p * q⁻¹`
    ///
    /// Imaginary parts of x, y, z are dropped and w is unchanged.
    pub fn rotated(&self, q: &Quaternion) -> Result<Self, GeometryError> {
        let [x, y, z] = q.active_rotation([self.x.re, self.y.re, self.z.re])?;
        Ok(Self::new(
            self.w,
            Complex::from_real(x),
            Complex::from_real(y),
            Complex::from_real(z),
        ))
    }

    /// In-place form of [`rotated`](Self::rotated)
    pub fn rotate(&mut self, q: &Quaternion) -> Result<(), GeometryError> {
        *self = self.rotated(q)?;
        Ok(())
    }

    /// Image of this point under the linear map `m`
    pub fn apply_transformation(&self, m: &ComplexMat4) -> Self {
        mat4::transform(m, self)
    }

    /// Symmetric matrix of pairwise [`distance_to`](Self::distance_to) values
    ///
    /// Entry `[i][j]` is the distance between `points[i]` and `points[j]`; the
    /// diagonal is zero.
    pub fn compute_distance_matrix(points: &[Self]) -> Vec<Vec<f64>> {
        let n = points.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }
        matrix
    }
}

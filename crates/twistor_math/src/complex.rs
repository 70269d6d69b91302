//! Complex number type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::MathError;

/// Complex number with real part `re` and imaginary part `im`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a new Complex
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex with zero imaginary part
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Squared magnitude, re² + im²
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude (modulus)
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Complex conjugate
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Divide by another complex number: `self * conj(other) / |other|²`
    ///
    /// Fails with [`MathError::DivideByZero`] when `other` has magnitude zero.
    pub fn divide(self, other: Self) -> Result<Self, MathError> {
        let denom = other.magnitude_squared();
        if denom == 0.0 {
            return Err(MathError::DivideByZero);
        }
        let numerator = self * other.conjugate();
        Ok(Self::new(numerator.re / denom, numerator.im / denom))
    }

    /// Divide both parts by a real scalar
    pub fn divide_scalar(self, scalar: f64) -> Result<Self, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(Self::new(self.re / scalar, self.im / scalar))
    }
}

// Operator overloads

impl std::ops::Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

impl std::ops::AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }
}

impl std::ops::SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl std::ops::MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Neg for Complex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

// A real operand only touches the real part for + and -, both parts for *.

impl std::ops::Add<f64> for Complex {
    type Output = Self;
    #[inline]
    fn add(self, scalar: f64) -> Self {
        Self::new(self.re + scalar, self.im)
    }
}

impl std::ops::Sub<f64> for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, scalar: f64) -> Self {
        Self::new(self.re - scalar, self.im)
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.re * scalar, self.im * scalar)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

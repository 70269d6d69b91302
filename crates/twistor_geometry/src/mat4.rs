//! 4x4 complex matrices acting on homogeneous coordinates
//!
//! Matrices are row-major and act on the column vector (w, x, y, z):
//! `p'[i] = Σ_j m[i][j] * p[j]`, where index 0 is w and 3 is z.

use twistor_math::Complex;

use crate::{GeometryError, ProjectivePoint};

/// 4x4 complex matrix (row-major)
pub type ComplexMat4 = [[Complex; 4]; 4];

const Z: Complex = Complex::ZERO;
const U: Complex = Complex::ONE;

/// Identity matrix
pub const IDENTITY: ComplexMat4 = [
    [U, Z, Z, Z],
    [Z, U, Z, Z],
    [Z, Z, U, Z],
    [Z, Z, Z, U],
];

/// Lift a real matrix to a complex one
pub fn from_real(m: [[f64; 4]; 4]) -> ComplexMat4 {
    m.map(|row| row.map(Complex::from_real))
}

/// Build a matrix from dynamically sized rows, rejecting anything but 4x4
pub fn from_rows(rows: &[Vec<Complex>]) -> Result<ComplexMat4, GeometryError> {
    if rows.len() != 4 {
        let cols = rows.first().map_or(0, |r| r.len());
        return Err(GeometryError::InvalidMatrix { rows: rows.len(), cols });
    }
    let mut m = IDENTITY;
    for (i, row) in rows.iter().enumerate() {
        if row.len() != 4 {
            return Err(GeometryError::InvalidMatrix { rows: 4, cols: row.len() });
        }
        m[i].copy_from_slice(row);
    }
    Ok(m)
}

/// Real rotation by `angle` radians in the plane of coordinate axes `p1`, `p2`
/// (0=w, 1=x, 2=y, 3=z), turning axis `p1` towards axis `p2`
///
/// # Panics
///
/// Panics if `p1` or `p2` is not below 4. Equal axes name no plane and trip a
/// debug assertion.
pub fn plane_rotation(angle: f64, p1: usize, p2: usize) -> ComplexMat4 {
    debug_assert!(p1 < 4 && p2 < 4 && p1 != p2, "invalid rotation plane ({}, {})", p1, p2);
    let cs = Complex::from_real(angle.cos());
    let sn = Complex::from_real(angle.sin());

    let mut m = IDENTITY;
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = -sn;
    m[p2][p1] = sn;
    m
}

/// Multiply two matrices: result = a * b (applies b first, then a)
#[allow(clippy::needless_range_loop)]
pub fn mul(a: &ComplexMat4, b: &ComplexMat4) -> ComplexMat4 {
    let mut result = [[Complex::ZERO; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transform a point: result = M * p
pub fn transform(m: &ComplexMat4, p: &ProjectivePoint) -> ProjectivePoint {
    let v = p.coords();
    let row = |i: usize| {
        m[i].iter()
            .zip(v)
            .fold(Complex::ZERO, |acc, (a, b)| acc + *a * b)
    };
    ProjectivePoint::new(row(0), row(1), row(2), row(3))
}

/// Transpose a matrix
pub fn transpose(m: &ComplexMat4) -> ComplexMat4 {
    std::array::from_fn(|i| std::array::from_fn(|j| m[j][i]))
}

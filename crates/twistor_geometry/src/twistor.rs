//! Spacetime to twistor space
//!
//! Two correspondences are provided:
//!
//! - [`spacetime_to_twistor`] places a real event (t, x, y, z) in projective
//!   twistor space, with the event in the omega slots (w, x) and the fixed null
//!   direction (1, i) in the pi slots (y, z).
//! - [`twistor_mapping`] applies the incidence relation μ = M·λ, where M is the
//!   event written as a 2x2 Hermitian matrix ([`ComplexMinkowskiPoint`]).

use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use serde::{Serialize, Deserialize};
use twistor_math::Complex;

use crate::ProjectivePoint;

/// Two-component Weyl spinor
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spinor {
    pub components: [Complex; 2],
}

impl Spinor {
    #[inline]
    pub const fn new(first: Complex, second: Complex) -> Self {
        Self { components: [first, second] }
    }

    #[inline]
    pub fn first(&self) -> Complex {
        self.components[0]
    }

    #[inline]
    pub fn second(&self) -> Complex {
        self.components[1]
    }
}

/// Twistor as the spinor pair (μ, λ)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Twistor {
    pub mu: Spinor,
    pub lambda: Spinor,
}

impl Twistor {
    #[inline]
    pub const fn new(mu: Spinor, lambda: Spinor) -> Self {
        Self { mu, lambda }
    }

    /// Homogeneous coordinates (μ0, μ1, λ0, λ1)
    pub fn to_projective_point(&self) -> ProjectivePoint {
        ProjectivePoint::new(
            self.mu.first(),
            self.mu.second(),
            self.lambda.first(),
            self.lambda.second(),
        )
    }

    /// True when μ = M·λ holds for `point` to within `tolerance` per component
    pub fn is_incident(&self, point: &ComplexMinkowskiPoint, tolerance: f64) -> bool {
        let expected = point.apply(&self.lambda);
        self.mu
            .components
            .iter()
            .zip(expected.components)
            .all(|(a, b)| (*a - b).magnitude() < tolerance)
    }
}

/// Spacetime event encoded as the Hermitian matrix
///
/// ```text
/// M = (1/√2) | t+z     x+iy |
///            | x-iy    t-z  |
/// ```
///
/// Serialized as the event `[t, x, y, z]`, so a deserialized value is always
/// built by [`new`](Self::new) and stays Hermitian.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ComplexMinkowskiPoint {
    matrix: [[Complex; 2]; 2],
}

impl ComplexMinkowskiPoint {
    pub fn new(t: f64, x: f64, y: f64, z: f64) -> Self {
        let s = FRAC_1_SQRT_2;
        Self {
            matrix: [
                [Complex::from_real((t + z) * s), Complex::new(x * s, y * s)],
                [Complex::new(x * s, -y * s), Complex::from_real((t - z) * s)],
            ],
        }
    }

    /// The 2x2 matrix, row-major
    #[inline]
    pub fn matrix(&self) -> &[[Complex; 2]; 2] {
        &self.matrix
    }

    /// Check M equals its conjugate transpose to within `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        let m = &self.matrix;
        (m[0][1] - m[1][0].conjugate()).magnitude() < tolerance
            && m[0][0].im.abs() < tolerance
            && m[1][1].im.abs() < tolerance
    }

    /// det M = (t² - x² - y² - z²) / 2
    pub fn determinant(&self) -> Complex {
        let m = &self.matrix;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// Recover the event (t, x, y, z)
    pub fn to_spacetime(&self) -> [f64; 4] {
        let m = &self.matrix;
        let t_plus_z = m[0][0].re * SQRT_2;
        let t_minus_z = m[1][1].re * SQRT_2;
        [
            0.5 * (t_plus_z + t_minus_z),
            m[0][1].re * SQRT_2,
            m[0][1].im * SQRT_2,
            0.5 * (t_plus_z - t_minus_z),
        ]
    }

    /// Matrix-vector product M·s
    pub fn apply(&self, s: &Spinor) -> Spinor {
        let m = &self.matrix;
        Spinor::new(
            m[0][0] * s.first() + m[0][1] * s.second(),
            m[1][0] * s.first() + m[1][1] * s.second(),
        )
    }
}

impl From<[f64; 4]> for ComplexMinkowskiPoint {
    fn from([t, x, y, z]: [f64; 4]) -> Self {
        Self::new(t, x, y, z)
    }
}

impl From<ComplexMinkowskiPoint> for [f64; 4] {
    fn from(point: ComplexMinkowskiPoint) -> Self {
        point.to_spacetime()
    }
}

/// Map a spacetime event into projective twistor space
///
/// Returns (w, x, y, z) = (x + iy, t + z, 1, i).
pub fn spacetime_to_twistor(t: f64, x: f64, y: f64, z: f64) -> ProjectivePoint {
    let omega_1 = Complex::new(x, y);
    let omega_2 = Complex::from_real(t + z);
    ProjectivePoint::new(omega_1, omega_2, Complex::ONE, Complex::I)
}

/// Same map as [`spacetime_to_twistor`], named for inputs read as null directions
pub fn spacetime_null_direction_to_twistor(t: f64, x: f64, y: f64, z: f64) -> ProjectivePoint {
    spacetime_to_twistor(t, x, y, z)
}

/// Twistor (M·λ, λ) of the event `point` along the spinor `lambda`
pub fn twistor_mapping(point: &ComplexMinkowskiPoint, lambda: Spinor) -> Twistor {
    let mu = point.apply(&lambda);
    log::debug!("Mapped event {:?} to mu = {:?}", point.to_spacetime(), mu);
    Twistor::new(mu, lambda)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn c_approx_eq(a: Complex, b: Complex) -> bool {
        approx_eq(a.re, b.re) && approx_eq(a.im, b.im)
    }

    #[test]
    fn test_spacetime_to_twistor() {
        let p = spacetime_to_twistor(1.0, 2.0, 4.0, 5.0);
        assert_eq!(
            p,
            ProjectivePoint::new(
                Complex::new(2.0, 4.0),
                Complex::new(6.0, 0.0),
                Complex::new(1.0, 0.0),
                Complex::new(0.0, 1.0),
            )
        );
    }

    #[test]
    fn test_null_direction_alias() {
        assert_eq!(
            spacetime_null_direction_to_twistor(3.0, -1.0, 0.5, 2.0),
            spacetime_to_twistor(3.0, -1.0, 0.5, 2.0)
        );
    }

    #[test]
    fn test_minkowski_matrix() {
        let m = ComplexMinkowskiPoint::new(3.0, 1.0, 2.0, 1.0);
        let s = FRAC_1_SQRT_2;
        assert!(c_approx_eq(m.matrix()[0][0], Complex::from_real(4.0 * s)));
        assert!(c_approx_eq(m.matrix()[0][1], Complex::new(s, 2.0 * s)));
        assert!(c_approx_eq(m.matrix()[1][0], Complex::new(s, -2.0 * s)));
        assert!(c_approx_eq(m.matrix()[1][1], Complex::from_real(2.0 * s)));
        assert!(m.is_hermitian(EPSILON));
    }

    #[test]
    fn test_determinant_is_half_interval() {
        let (t, x, y, z) = (3.0, 1.0, 2.0, 0.5);
        let det = ComplexMinkowskiPoint::new(t, x, y, z).determinant();
        assert!(c_approx_eq(det, Complex::from_real((t * t - x * x - y * y - z * z) / 2.0)));

        // Events on the light cone have zero determinant
        let det = ComplexMinkowskiPoint::new(5.0, 3.0, 4.0, 0.0).determinant();
        assert!(det.magnitude() < EPSILON);
    }

    #[test]
    fn test_to_spacetime_round_trip() {
        let event = [1.5, -2.0, 0.25, 7.0];
        let back = ComplexMinkowskiPoint::new(event[0], event[1], event[2], event[3]).to_spacetime();
        for (a, b) in back.iter().zip(event) {
            assert!(approx_eq(*a, b), "{:?} vs {:?}", back, event);
        }
    }

    #[test]
    fn test_twistor_mapping_origin_time_axis() {
        // M = I/√2 at (1, 0, 0, 0)
        let m = ComplexMinkowskiPoint::new(1.0, 0.0, 0.0, 0.0);
        let lambda = Spinor::new(Complex::ONE, Complex::ZERO);
        let twistor = twistor_mapping(&m, lambda);
        assert!(c_approx_eq(twistor.mu.first(), Complex::from_real(FRAC_1_SQRT_2)));
        assert!(c_approx_eq(twistor.mu.second(), Complex::ZERO));
        assert_eq!(twistor.lambda, lambda);
    }

    #[test]
    fn test_twistor_mapping_matrix_product() {
        let m = ComplexMinkowskiPoint::new(2.0, 1.0, -1.0, 0.5);
        let lambda = Spinor::new(Complex::new(0.5, 1.0), Complex::new(-2.0, 0.0));
        let twistor = twistor_mapping(&m, lambda);
        let mm = m.matrix();
        let expected_0 = mm[0][0] * lambda.first() + mm[0][1] * lambda.second();
        let expected_1 = mm[1][0] * lambda.first() + mm[1][1] * lambda.second();
        assert!(c_approx_eq(twistor.mu.first(), expected_0));
        assert!(c_approx_eq(twistor.mu.second(), expected_1));
        assert!(twistor.is_incident(&m, EPSILON));
        assert!(!twistor.is_incident(&ComplexMinkowskiPoint::new(0.0, 0.0, 0.0, 0.0), EPSILON));
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct EventDoc {
        event: ComplexMinkowskiPoint,
    }

    #[test]
    fn test_minkowski_point_serializes_as_event() {
        let doc = EventDoc { event: ComplexMinkowskiPoint::new(1.0, 2.0, 3.0, 4.0) };
        let text = toml::to_string(&doc).unwrap();
        assert!(!text.contains("matrix"), "{}", text);

        let back: EventDoc = toml::from_str(&text).unwrap();
        assert!(back.event.is_hermitian(EPSILON));
        for (a, b) in back.event.to_spacetime().iter().zip([1.0, 2.0, 3.0, 4.0]) {
            assert!(approx_eq(*a, b));
        }
    }

    #[test]
    fn test_minkowski_point_rejects_raw_matrix() {
        let text = "[event]\nmatrix = [[{re=1.0,im=5.0},{re=2.0,im=0.0}],[{re=7.0,im=3.0},{re=0.0,im=-4.0}]]";
        assert!(toml::from_str::<EventDoc>(text).is_err());
    }

    #[test]
    fn test_twistor_to_projective_point() {
        let t = Twistor::new(
            Spinor::new(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)),
            Spinor::new(Complex::ONE, Complex::I),
        );
        let p = t.to_projective_point();
        assert_eq!(p.w, Complex::new(1.0, 2.0));
        assert_eq!(p.x, Complex::new(3.0, 4.0));
        assert_eq!(p.y, Complex::ONE);
        assert_eq!(p.z, Complex::I);
    }
}

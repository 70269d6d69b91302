//! Lines of complex projective 3-space

use serde::{Serialize, Deserialize};
use twistor_math::{Complex, Quaternion};

use crate::mat4::ComplexMat4;
use crate::{GeometryError, ProjectivePoint};

/// Line through two projective points
///
/// The endpoints are owned by value and can be read directly. Deserialization
/// goes through [`new`](Self::new) and rejects the same inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineEndpoints")]
pub struct ProjectiveLine {
    pub point_a: ProjectivePoint,
    pub point_b: ProjectivePoint,
}

#[derive(Deserialize)]
struct LineEndpoints {
    point_a: ProjectivePoint,
    point_b: ProjectivePoint,
}

impl TryFrom<LineEndpoints> for ProjectiveLine {
    type Error = GeometryError;

    fn try_from(e: LineEndpoints) -> Result<Self, Self::Error> {
        Self::new(e.point_a, e.point_b)
    }
}

impl ProjectiveLine {
    /// Magnitude below which an intersection coordinate counts as zero
    pub const INTERSECTION_TOLERANCE: f64 = 1e-10;

    /// Create a line through `point_a` and `point_b`
    ///
    /// Fails if either point has all four coordinates zero, since the zero
    /// vector names no point of projective space.
    pub fn new(point_a: ProjectivePoint, point_b: ProjectivePoint) -> Result<Self, GeometryError> {
        for (name, p) in [("point_a", &point_a), ("point_b", &point_b)] {
            if p.coords().iter().all(|c| *c == Complex::ZERO) {
                return Err(GeometryError::InvalidLine(format!(
                    "{} has all coordinates zero",
                    name
                )));
            }
        }
        Ok(Self { point_a, point_b })
    }

    /// Projective cross product of two points
    ///
    /// ```text
    /// w = ax*by - ay*bx
    /// x = ay*bz - az*by
    /// y = az*bw - aw*bz
    /// z = aw*bx - ax*bw
    /// ```
    ///
    /// Swapping `a` and `b` negates every coordinate of the result.
    pub fn cross_product(a: &ProjectivePoint, b: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::new(
            a.x * b.y - a.y * b.x,
            a.y * b.z - a.z * b.y,
            a.z * b.w - a.w * b.z,
            a.w * b.x - a.x * b.w,
        )
    }

    /// Cross product of this line's own endpoints
    pub fn direction(&self) -> ProjectivePoint {
        Self::cross_product(&self.point_a, &self.point_b)
    }

    /// Intersection with another line
    ///
    /// Computed as the cross product of the first endpoint of each line;
    /// `point_b` of either line does not take part. This matches the
    /// established behavior of the toolkit and is not a general two-line
    /// intersection.
    pub fn intersect(&self, other: &Self) -> ProjectivePoint {
        Self::cross_product(&self.point_a, &other.point_a)
    }

    /// True unless every coordinate of [`intersect`](Self::intersect) is
    /// below [`INTERSECTION_TOLERANCE`](Self::INTERSECTION_TOLERANCE)
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersects_within(other, Self::INTERSECTION_TOLERANCE)
    }

    /// [`intersects`](Self::intersects) with an explicit tolerance
    pub fn intersects_within(&self, other: &Self, tolerance: f64) -> bool {
        !self.intersect(other).is_zero(tolerance)
    }

    /// Normalize both endpoints, skipping any endpoint at infinity
    ///
    /// A skipped endpoint is logged and left unchanged; the other endpoint is
    /// still normalized. Returns the number of endpoints skipped.
    pub fn normalize(&mut self) -> usize {
        let mut skipped = 0;
        for (name, point) in [("A", &mut self.point_a), ("B", &mut self.point_b)] {
            if let Err(e) = point.normalize() {
                log::warn!("Point {} of line not normalized: {}", name, e);
                skipped += 1;
            }
        }
        skipped
    }

    /// Rotate both endpoints by `q` (see [`ProjectivePoint::rotated`])
    pub fn rotated(&self, q: &Quaternion) -> Result<Self, GeometryError> {
        Ok(Self {
            point_a: self.point_a.rotated(q)?,
            point_b: self.point_b.rotated(q)?,
        })
    }

    /// In-place form of [`rotated`](Self::rotated). Neither endpoint changes on failure.
    pub fn rotate(&mut self, q: &Quaternion) -> Result<(), GeometryError> {
        *self = self.rotated(q)?;
        log::debug!("Rotated line by {:?}", q);
        Ok(())
    }

    /// Apply a 4x4 linear map to both endpoints
    ///
    /// Matrices of other shapes are rejected by [`crate::mat4::from_rows`]
    /// before they can reach this point.
    pub fn apply_transformation(&mut self, m: &ComplexMat4) {
        self.point_a = self.point_a.apply_transformation(m);
        self.point_b = self.point_b.apply_transformation(m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn point_approx_eq(a: &ProjectivePoint, b: &ProjectivePoint) -> bool {
        a.coords().iter().zip(b.coords()).all(|(p, q)| {
            (p.re - q.re).abs() < EPSILON && (p.im - q.im).abs() < EPSILON
        })
    }

    fn basis(i: usize) -> ProjectivePoint {
        let mut c = [0.0; 4];
        c[i] = 1.0;
        ProjectivePoint::from_real(c[0], c[1], c[2], c[3])
    }

    #[test]
    fn test_new_rejects_zero_point() {
        let zero = ProjectivePoint::default();
        assert!(matches!(
            ProjectiveLine::new(zero, basis(0)),
            Err(GeometryError::InvalidLine(_))
        ));
        assert!(matches!(
            ProjectiveLine::new(basis(0), zero),
            Err(GeometryError::InvalidLine(msg)) if msg.contains("point_b")
        ));
        assert!(ProjectiveLine::new(basis(0), basis(1)).is_ok());
    }

    #[test]
    fn test_deserialize_validates_endpoints() {
        let line = ProjectiveLine::new(basis(0), basis(2)).unwrap();
        let text = toml::to_string(&line).unwrap();
        let back: ProjectiveLine = toml::from_str(&text).unwrap();
        assert_eq!(back, line);

        let zero = ProjectiveLine { point_a: ProjectivePoint::default(), point_b: basis(1) };
        let text = toml::to_string(&zero).unwrap();
        let err = toml::from_str::<ProjectiveLine>(&text).unwrap_err();
        assert!(err.to_string().contains("point_a has all coordinates zero"), "{}", err);
    }

    #[test]
    fn test_cross_product_basis() {
        // e_w x e_x: only z = aw*bx survives
        let r = ProjectiveLine::cross_product(&basis(0), &basis(1));
        assert_eq!(r, ProjectivePoint::from_real(0.0, 0.0, 0.0, 1.0));

        // e_x x e_y: only w = ax*by survives
        let r = ProjectiveLine::cross_product(&basis(1), &basis(2));
        assert_eq!(r, ProjectivePoint::from_real(1.0, 0.0, 0.0, 0.0));

        // e_y x e_z -> x, e_z x e_w -> y
        let r = ProjectiveLine::cross_product(&basis(2), &basis(3));
        assert_eq!(r, ProjectivePoint::from_real(0.0, 1.0, 0.0, 0.0));
        let r = ProjectiveLine::cross_product(&basis(3), &basis(0));
        assert_eq!(r, ProjectivePoint::from_real(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_cross_product_antisymmetric() {
        let a = ProjectivePoint::new(
            Complex::new(1.0, 2.0),
            Complex::new(-3.0, 0.5),
            Complex::new(0.0, 1.0),
            Complex::new(4.0, -4.0),
        );
        let b = ProjectivePoint::new(
            Complex::new(0.5, 0.0),
            Complex::new(2.0, 2.0),
            Complex::new(-1.0, 3.0),
            Complex::new(0.0, -2.0),
        );
        let ab = ProjectiveLine::cross_product(&a, &b);
        let ba = ProjectiveLine::cross_product(&b, &a);
        for (p, q) in ab.coords().iter().zip(ba.coords()) {
            assert!((p.re + q.re).abs() < EPSILON && (p.im + q.im).abs() < EPSILON);
        }
    }

    #[test]
    fn test_intersect_uses_first_endpoints() {
        let l1 = ProjectiveLine::new(basis(1), basis(3)).unwrap();
        let l2 = ProjectiveLine::new(basis(2), basis(0)).unwrap();
        assert_eq!(l1.intersect(&l2), ProjectiveLine::cross_product(&basis(1), &basis(2)));

        // Changing point_b has no effect
        let l3 = ProjectiveLine::new(basis(2), basis(1)).unwrap();
        assert_eq!(l1.intersect(&l2), l1.intersect(&l3));
    }

    #[test]
    fn test_intersects() {
        let l1 = ProjectiveLine::new(basis(1), basis(3)).unwrap();
        let l2 = ProjectiveLine::new(basis(2), basis(0)).unwrap();
        assert!(l1.intersects(&l2));

        // Same first endpoint: cross product vanishes
        let l3 = ProjectiveLine::new(basis(1).scaled(2.0), basis(0)).unwrap();
        assert!(!l1.intersects(&l3));
    }

    #[test]
    fn test_intersects_within_tolerance() {
        let a = ProjectivePoint::from_real(1.0, 1.0, 1.0, 1.0);
        let b = ProjectivePoint::from_real(1.0, 1.0 + 1e-12, 1.0, 1.0);
        let l1 = ProjectiveLine::new(a, basis(0)).unwrap();
        let l2 = ProjectiveLine::new(b, basis(0)).unwrap();
        assert!(!l1.intersects(&l2));
        assert!(l1.intersects_within(&l2, 1e-14));
    }

    #[test]
    fn test_normalize_skips_point_at_infinity() {
        let finite = ProjectivePoint::from_real(2.0, 4.0, 0.0, 0.0);
        let infinite = ProjectivePoint::from_real(0.0, 1.0, 1.0, 0.0);

        let mut line = ProjectiveLine::new(infinite, finite).unwrap();
        assert_eq!(line.normalize(), 1);
        assert_eq!(line.point_a, infinite);
        assert_eq!(line.point_b, ProjectivePoint::from_real(1.0, 2.0, 0.0, 0.0));

        let mut line = ProjectiveLine::new(finite, finite.scaled(3.0)).unwrap();
        assert_eq!(line.normalize(), 0);
        assert!(point_approx_eq(&line.point_a, &line.point_b));
    }

    #[test]
    fn test_rotate() {
        let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2).unwrap();
        let mut line = ProjectiveLine::new(
            ProjectivePoint::from_real(1.0, 1.0, 0.0, 0.0),
            ProjectivePoint::from_real(1.0, 0.0, 1.0, 0.0),
        )
        .unwrap();
        line.rotate(&q).unwrap();
        assert!(point_approx_eq(&line.point_a, &ProjectivePoint::from_real(1.0, 0.0, 1.0, 0.0)));
        assert!(point_approx_eq(&line.point_b, &ProjectivePoint::from_real(1.0, -1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_failure_leaves_line_unchanged() {
        let original = ProjectiveLine::new(basis(0), basis(1)).unwrap();
        let mut line = original;
        assert!(line.rotate(&Quaternion::new(0.0, 0.0, 0.0, 0.0)).is_err());
        assert_eq!(line, original);
    }

    #[test]
    fn test_apply_transformation() {
        let m = mat4::plane_rotation(FRAC_PI_2, 1, 2);
        let mut line = ProjectiveLine::new(basis(1), basis(0)).unwrap();
        line.apply_transformation(&m);
        assert!(point_approx_eq(&line.point_a, &basis(2)));
        assert!(point_approx_eq(&line.point_b, &basis(0)));
    }
}

//! Projective and twistor geometry
//!
//! This crate builds geometric objects over the number systems in
//! [`twistor_math`].
//!
//! ## Core Types
//!
//! - [`ProjectivePoint`] - Homogeneous point (w, x, y, z) with complex coordinates
//! - [`ProjectiveLine`] - Line through two projective points
//! - [`ComplexMat4`] - 4x4 complex matrix acting on homogeneous coordinates
//!
//! ## Twistor Types
//!
//! - [`Spinor`] - Two-component Weyl spinor
//! - [`ComplexMinkowskiPoint`] - Spacetime event as a 2x2 Hermitian matrix
//! - [`Twistor`] - Spinor pair (μ, λ) related by the incidence relation μ = M·λ

mod error;
mod projective_point;
mod projective_line;
pub mod mat4;
pub mod twistor;

pub use error::GeometryError;
pub use projective_point::ProjectivePoint;
pub use projective_line::ProjectiveLine;
pub use mat4::ComplexMat4;
pub use twistor::{
    spacetime_null_direction_to_twistor, spacetime_to_twistor, twistor_mapping,
    ComplexMinkowskiPoint, Spinor, Twistor,
};

// Re-export the number systems for convenience
pub use twistor_math::{Complex, MathError, Quaternion, Vec3};

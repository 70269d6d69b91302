//! Twistor - projective and twistor geometry toolkit
//!
//! Re-exports the number systems and geometry crates, plus the configuration
//! used by the `twistor` binary.

pub mod config;

pub use twistor_math::{quaternion, vector_angle, vector_distance, Complex, MathError, Quaternion, Vec3};
pub use twistor_geometry::{
    mat4, spacetime_null_direction_to_twistor, spacetime_to_twistor, twistor_mapping,
    ComplexMat4, ComplexMinkowskiPoint, GeometryError, ProjectiveLine, ProjectivePoint, Spinor,
    Twistor,
};

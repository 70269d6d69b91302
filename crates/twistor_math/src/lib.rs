//! Number systems for the twistor toolkit
//!
//! This crate provides the arithmetic primitives the projective and twistor
//! geometry is built on.
//!
//! ## Core Types
//!
//! - [`Complex`] - Complex number with real and imaginary parts
//! - [`Quaternion`] - Hamilton quaternion used as the rotation primitive
//! - [`MathError`] - Failure of a division or of an angle computation

mod complex;
mod error;
pub mod quaternion;

pub use complex::Complex;
pub use error::MathError;
pub use quaternion::{vector_angle, vector_distance, Quaternion, Vec3};

//! Error type for geometric operations

use std::fmt;

use twistor_math::MathError;

/// Failure of a projective or twistor operation
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Underlying arithmetic failed
    Math(MathError),
    /// The point has |w| = 0 and no affine representative
    PointAtInfinity,
    /// A line was built from something that does not name a projective point
    InvalidLine(String),
    /// A transformation matrix did not have shape 4x4
    InvalidMatrix { rows: usize, cols: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Math(err) => write!(f, "Math error: {}", err),
            GeometryError::PointAtInfinity => {
                write!(f, "Point at infinity has no affine coordinates")
            }
            GeometryError::InvalidLine(msg) => write!(f, "Invalid line: {}", msg),
            GeometryError::InvalidMatrix { rows, cols } => {
                write!(f, "Transformation matrix must be 4x4, got {}x{}", rows, cols)
            }
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::Math(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MathError> for GeometryError {
    fn from(err: MathError) -> Self {
        GeometryError::Math(err)
    }
}

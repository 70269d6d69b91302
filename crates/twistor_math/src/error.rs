//! Error type for arithmetic failures

use std::fmt;

/// Failure of an arithmetic operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The divisor had magnitude zero
    DivideByZero,
    /// An operation was called outside its domain (e.g. the angle of a zero-length operand)
    Domain(&'static str),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivideByZero => write!(f, "Division by a value of zero magnitude"),
            MathError::Domain(msg) => write!(f, "Domain error: {}", msg),
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_display() {
        let msg = format!("{}", MathError::DivideByZero);
        assert!(msg.contains("zero magnitude"));
    }

    #[test]
    fn test_domain_display() {
        let msg = format!("{}", MathError::Domain("angle with zero quaternion"));
        assert!(msg.contains("Domain error"));
        assert!(msg.contains("angle with zero quaternion"));
    }
}

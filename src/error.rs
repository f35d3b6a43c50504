//! Error types for circum operations.

use thiserror::Error;

/// Errors that can occur while constructing geometric values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A circle was given a radius that is zero, negative, or NaN.
    #[error("invalid argument: radius must be positive, got {radius}")]
    InvalidArgument {
        /// The rejected radius, widened to `f64`.
        radius: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GeomError::InvalidArgument { radius: -1.5 };
        assert_eq!(
            err.to_string(),
            "invalid argument: radius must be positive, got -1.5"
        );
    }

    #[test]
    fn test_display_nan() {
        let err = GeomError::InvalidArgument { radius: f64::NAN };
        assert_eq!(
            err.to_string(),
            "invalid argument: radius must be positive, got NaN"
        );
    }
}

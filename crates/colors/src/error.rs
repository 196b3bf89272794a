//! Error types for color conversions.
//!
//! Every failure is a property of the input numbers: the same triple fails
//! the same way every time, so nothing here is worth retrying.
//! Two conventions are not errors: hue is reported as 0 when
//! chroma is 0, and HSV saturation is 0 when value is 0.

use colors_core::{CoreError, SpaceId};
use thiserror::Error;
use tracing::debug;

/// Color conversion error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The space name is not one of the supported spaces.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),

    /// A formula divides by zero.
    ///
    /// Raised for `X+Y+Z = 0` (XYZ -> xyY, exact zero only), and for
    /// denominators within `1e-12` of zero: `y` (xyY -> XYZ), `X+15Y+3Z`
    /// (XYZ -> CIELuv) and the CIELuv -> XYZ solve.
    #[error("degenerate {space} input: {reason}")]
    DegenerateInput {
        /// Space of the rejected coordinates.
        space: SpaceId,
        /// Which denominator vanished.
        reason: &'static str,
    },

    /// The requested operation is not defined for these spaces.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl From<CoreError> for ColorError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownSpace(name) => ColorError::UnknownSpace(name),
        }
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Returns `denominator` unless it is within `1e-12` of zero (or not finite).
pub(crate) fn nonzero(denominator: f64, space: SpaceId, reason: &'static str) -> ColorResult<f64> {
    if denominator.is_finite() && denominator.abs() >= colors_math::DEGENERATE_EPSILON {
        Ok(denominator)
    } else {
        Err(degenerate(space, reason))
    }
}

pub(crate) fn degenerate(space: SpaceId, reason: &'static str) -> ColorError {
    debug!(%space, reason, "rejecting degenerate input");
    ColorError::DegenerateInput { space, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core() {
        let err: ColorError = "Lab2000".parse::<SpaceId>().unwrap_err().into();
        assert_eq!(err, ColorError::UnknownSpace("Lab2000".into()));
    }

    #[test]
    fn test_nonzero() {
        assert_eq!(nonzero(0.5, SpaceId::Xyz, "sum").unwrap(), 0.5);
        assert_eq!(nonzero(-2.0, SpaceId::Xyz, "sum").unwrap(), -2.0);
        assert!(nonzero(0.0, SpaceId::Xyz, "sum").is_err());
        assert!(nonzero(1e-13, SpaceId::Xyz, "sum").is_err());
        assert!(nonzero(f64::NAN, SpaceId::Xyz, "sum").is_err());
    }

    #[test]
    fn test_display() {
        let err = ColorError::DegenerateInput { space: SpaceId::XyY, reason: "y is zero" };
        assert_eq!(err.to_string(), "degenerate xyY input: y is zero");
    }
}

//! Error types for colors-core.
//!
//! # Usage
//!
//! ```rust
//! use colors_core::{CoreError, SpaceId};
//!
//! let err = "CMYK".parse::<SpaceId>().unwrap_err();
//! assert!(matches!(err, CoreError::UnknownSpace(_)));
//! assert!(err.to_string().contains("CMYK"));
//! ```

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while identifying color spaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The name does not match any supported color space.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),
}

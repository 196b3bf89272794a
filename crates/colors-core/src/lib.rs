//! # colors-core
//!
//! Core types shared by every `colors` crate.
//!
//! - [`SpaceId`] - The closed set of supported color spaces
//! - [`CoreError`] - Lookup failures (unknown space names)
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other crates build on it:
//!
//! ```text
//! colors-core (this crate)
//!    ^
//!    |
//!    +-- colors-math (vectors, matrices, polar helpers)
//!    +-- colors-transfer (sRGB gamma)
//!    +-- colors-primaries (D65, sRGB matrices)
//!    +-- colors (conversion graph)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`SpaceId`] as its canonical name

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod space;

pub use error::{CoreError, Result};
pub use space::SpaceId;

/// Prelude module for convenient imports.
///
/// ```
/// use colors_core::prelude::*;
///
/// let id: SpaceId = "CIELab".parse().unwrap();
/// assert_eq!(id, SpaceId::CieLab);
/// ```
pub mod prelude {
    pub use crate::error::{CoreError, Result};
    pub use crate::space::SpaceId;
}

//! # colors
//!
//! Conversion between the common device-independent and device color spaces,
//! with CIE XYZ as the hub and D65 as the reference white.
//!
//! - **XYZ / xyY** - tristimulus values and chromaticity
//! - **CIELab / CIELuv** - perceptual spaces relative to D65
//! - **LCh** - polar form of CIELab or CIELuv
//! - **sRGB / HSV** - gamma-encoded display RGB and its hexcone
//!
//! # Architecture
//!
//! ```text
//!                    colors
//!                       |
//!     +-----------------+-----------------+
//!     |                 |                 |
//! colors-transfer  colors-primaries       |
//!     |                 |                 |
//!     +--------+--------+                 |
//!              |                          |
//!         colors-math                     |
//!              |                          |
//!              +--------------------------+
//!                          |
//!                     colors-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use colors::{Color, Lab, Srgb, SpaceId};
//!
//! // Typed values convert edge by edge
//! let lab: Lab = Srgb::new(1.0, 0.0, 0.0).to_xyz().to_lab();
//! assert!((lab.a - 80.0925).abs() < 1e-4);
//!
//! // Tagged values route through the graph
//! let hsv = Color::make("CIELab", [lab.l, lab.a, lab.b])?.to(SpaceId::Hsv)?;
//! assert!(hsv.values()[0] < 1e-6 || hsv.values()[0] > 359.99);
//! # Ok::<(), colors::ColorError>(())
//! ```
//!
//! # Errors
//!
//! Conversions that divide by a quantity of the input fail with
//! [`ColorError::DegenerateInput`] instead of producing NaN or infinity.
//! Unknown space names fail with [`ColorError::UnknownSpace`].
//!
//! # Feature Flags
//!
//! - `serde` - Serialize [`Color`] and [`SpaceId`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
pub mod graph;
pub mod spaces;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use spaces::{Hsv, Lab, Lch, Luv, Space, Srgb, XyY, Xyz};

pub use colors_core::SpaceId;
pub use colors_primaries::D65;

// Re-export sub-crates for convenience
pub use colors_math as math;
pub use colors_primaries as primaries;
pub use colors_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Color, ColorError, ColorResult, Hsv, Lab, Lch, Luv, Space, SpaceId, Srgb, XyY, Xyz,
    };
}
